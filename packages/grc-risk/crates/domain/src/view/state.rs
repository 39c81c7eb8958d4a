//! Dashboard view state as an immutable snapshot with reducer transitions.
//!
//! Refreshes are tagged with a [`RequestToken`]; only the response to the most
//! recently issued refresh is applied, older ones come back as
//! [`Transition::Superseded`].

use crate::aggregation::{aggregate, AggregateView};
use crate::entities::RiskRecord;
use crate::scoring::Level;
use crate::view::table::{project, SortKey, SortState};
use std::sync::Arc;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct RequestToken(u64);

impl RequestToken {
    pub fn value(&self) -> u64 {
        self.0
    }
}

#[derive(Debug, Clone)]
pub enum DashboardEvent {
    /// A refresh was issued; the new latest token is `state.latest_request()`.
    RefreshRequested,
    RefreshSucceeded {
        token: RequestToken,
        records: Vec<RiskRecord>,
    },
    RefreshFailed {
        token: RequestToken,
        message: String,
    },
    /// A create/delete call failed. Records are kept as they are.
    MutationFailed { message: String },
    FilterChanged(Option<Level>),
    SortSelected(SortKey),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    Applied,
    Superseded,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewStatus {
    Loading,
    Failed(String),
    Ready,
}

#[derive(Debug, Clone)]
pub struct DashboardState {
    records: Arc<[RiskRecord]>,
    filter: Option<Level>,
    sort: SortState,
    loading: bool,
    error: Option<String>,
    latest_request: RequestToken,
}

impl Default for DashboardState {
    fn default() -> Self {
        Self {
            records: Arc::from(Vec::new()),
            filter: None,
            sort: SortState::default(),
            loading: false,
            error: None,
            latest_request: RequestToken::default(),
        }
    }
}

impl DashboardState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn records(&self) -> &[RiskRecord] {
        &self.records
    }

    pub fn filter(&self) -> Option<Level> {
        self.filter
    }

    pub fn sort(&self) -> &SortState {
        &self.sort
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn latest_request(&self) -> RequestToken {
        self.latest_request
    }

    pub fn reduce(&self, event: DashboardEvent) -> (Self, Transition) {
        let mut next = self.clone();

        match event {
            DashboardEvent::RefreshRequested => {
                next.latest_request = RequestToken(self.latest_request.0 + 1);
                next.loading = true;
                next.error = None;
            }
            DashboardEvent::RefreshSucceeded { token, records } => {
                if token != self.latest_request {
                    return (next, Transition::Superseded);
                }
                next.records = records.into();
                next.loading = false;
            }
            DashboardEvent::RefreshFailed { token, message } => {
                if token != self.latest_request {
                    return (next, Transition::Superseded);
                }
                next.records = Arc::from(Vec::new());
                next.error = Some(message);
                next.loading = false;
            }
            DashboardEvent::MutationFailed { message } => {
                next.error = Some(message);
            }
            DashboardEvent::FilterChanged(filter) => {
                next.filter = filter;
            }
            DashboardEvent::SortSelected(key) => {
                next.sort = self.sort.select(key);
            }
        }

        (next, Transition::Applied)
    }

    pub fn status(&self) -> ViewStatus {
        if let Some(message) = &self.error {
            ViewStatus::Failed(message.clone())
        } else if self.loading {
            ViewStatus::Loading
        } else {
            ViewStatus::Ready
        }
    }

    /// Table rows plus aggregates, derived fresh from the current records.
    pub fn view(&self) -> DashboardView {
        DashboardView {
            status: self.status(),
            rows: project(&self.records, self.filter, &self.sort),
            aggregate: aggregate(&self.records),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardView {
    pub status: ViewStatus,
    pub rows: Vec<RiskRecord>,
    pub aggregate: AggregateView,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn records() -> Vec<RiskRecord> {
        vec![
            RiskRecord::from_ratings(1, "DB", "SQLi", 5, 5),
            RiskRecord::from_ratings(2, "Laptop", "Theft", 2, 3),
        ]
    }

    #[test]
    fn test_refresh_round_trip() {
        let state = DashboardState::new();
        let (state, _) = state.reduce(DashboardEvent::RefreshRequested);
        assert_eq!(state.status(), ViewStatus::Loading);

        let token = state.latest_request();
        let (state, transition) = state.reduce(DashboardEvent::RefreshSucceeded {
            token,
            records: records(),
        });

        assert_eq!(transition, Transition::Applied);
        assert_eq!(state.status(), ViewStatus::Ready);
        assert_eq!(state.records().len(), 2);
        assert_eq!(state.view().aggregate.summary.high_critical, 1);
    }

    #[test]
    fn test_stale_response_is_superseded() {
        let (state, _) = DashboardState::new().reduce(DashboardEvent::RefreshRequested);
        let first = state.latest_request();
        let (state, _) = state.reduce(DashboardEvent::RefreshRequested);
        let second = state.latest_request();
        assert!(second > first);

        let (state, _) = state.reduce(DashboardEvent::RefreshSucceeded {
            token: second,
            records: records(),
        });
        let (state, transition) = state.reduce(DashboardEvent::RefreshSucceeded {
            token: first,
            records: Vec::new(),
        });

        assert_eq!(transition, Transition::Superseded);
        assert_eq!(state.records().len(), 2);
    }

    #[test]
    fn test_refresh_failure_clears_records() {
        let (state, _) = DashboardState::new().reduce(DashboardEvent::RefreshRequested);
        let (state, _) = state.reduce(DashboardEvent::RefreshSucceeded {
            token: state.latest_request(),
            records: records(),
        });
        let (state, _) = state.reduce(DashboardEvent::RefreshRequested);
        let (state, _) = state.reduce(DashboardEvent::RefreshFailed {
            token: state.latest_request(),
            message: "Failed to load risks".to_string(),
        });

        assert!(state.records().is_empty());
        assert_eq!(state.status(), ViewStatus::Failed("Failed to load risks".to_string()));
        assert!(!state.is_loading());
    }

    #[test]
    fn test_mutation_failure_keeps_records() {
        let (state, _) = DashboardState::new().reduce(DashboardEvent::RefreshRequested);
        let (state, _) = state.reduce(DashboardEvent::RefreshSucceeded {
            token: state.latest_request(),
            records: records(),
        });
        let (state, _) = state.reduce(DashboardEvent::MutationFailed {
            message: "Delete failed".to_string(),
        });

        assert_eq!(state.records().len(), 2);
        assert_eq!(state.error(), Some("Delete failed"));

        // the next refresh clears the message
        let (state, _) = state.reduce(DashboardEvent::RefreshRequested);
        assert_eq!(state.error(), None);
    }

    #[test]
    fn test_filter_and_sort_shape_rows_but_not_aggregates() {
        let (state, _) = DashboardState::new().reduce(DashboardEvent::RefreshRequested);
        let (state, _) = state.reduce(DashboardEvent::RefreshSucceeded {
            token: state.latest_request(),
            records: records(),
        });
        let (state, _) = state.reduce(DashboardEvent::FilterChanged(Some(Level::Medium)));
        let (state, _) = state.reduce(DashboardEvent::SortSelected(SortKey::Score));

        let view = state.view();
        assert_eq!(view.rows.len(), 1);
        assert_eq!(view.rows[0].asset, "Laptop");
        assert_eq!(view.aggregate.summary.total, 2);
        assert_eq!(state.sort(), &SortState::new(SortKey::Score, false));
    }

    #[test]
    fn test_reduce_leaves_previous_snapshot_intact() {
        let before = DashboardState::new();
        let (next, _) = before.reduce(DashboardEvent::FilterChanged(Some(Level::High)));
        assert_eq!(before.filter(), None);
        assert_eq!(next.filter(), Some(Level::High));
    }
}
