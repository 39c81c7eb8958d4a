//! Risk scoring, aggregation and table projection for the GRC risk matrix.

pub mod aggregation;
pub mod entities;
pub mod scoring;
pub mod view;

pub use aggregation::{aggregate, AggregateView, Heatmap, HeatmapCell, Summary};
pub use entities::{Assessment, AssessmentError, RiskRecord};
pub use scoring::{classify, mitigation_hint, Classification, Level};
pub use view::{project, DashboardEvent, DashboardState, SortKey, SortState};
