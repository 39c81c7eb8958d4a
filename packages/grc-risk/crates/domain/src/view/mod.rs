pub mod state;
pub mod table;

pub use state::{DashboardEvent, DashboardState, DashboardView, RequestToken, Transition, ViewStatus};
pub use table::{project, SortKey, SortState};
