//! Risk scoring, aggregation and dashboard state for the GRC risk tool.

pub use application;
pub use domain;
