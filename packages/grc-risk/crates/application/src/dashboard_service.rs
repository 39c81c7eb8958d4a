use crate::error::GatewayError;
use crate::gateway::RiskGateway;
use domain::entities::{Assessment, RiskRecord};
use domain::scoring::Level;
use domain::view::{DashboardEvent, DashboardState, DashboardView, RequestToken, SortKey, Transition};

/// Drives a [`DashboardState`] from gateway calls. Every successful mutation
/// is followed by a full refresh of the collection.
pub struct DashboardService<G> {
    gateway: G,
    state: DashboardState,
}

impl<G: RiskGateway> DashboardService<G> {
    pub fn new(gateway: G) -> Self {
        Self {
            gateway,
            state: DashboardState::new(),
        }
    }

    pub fn state(&self) -> &DashboardState {
        &self.state
    }

    pub fn gateway(&self) -> &G {
        &self.gateway
    }

    pub fn view(&self) -> DashboardView {
        self.state.view()
    }

    fn dispatch(&mut self, event: DashboardEvent) -> Transition {
        let (next, transition) = self.state.reduce(event);
        self.state = next;
        transition
    }

    /// Marks a refresh as in flight and returns the token its response must carry.
    pub fn begin_refresh(&mut self) -> RequestToken {
        self.dispatch(DashboardEvent::RefreshRequested);
        self.state.latest_request()
    }

    pub fn complete_refresh(
        &mut self,
        token: RequestToken,
        result: Result<Vec<RiskRecord>, GatewayError>,
    ) -> Transition {
        let event = match result {
            Ok(records) => DashboardEvent::RefreshSucceeded { token, records },
            Err(err) => {
                tracing::warn!("Refresh failed: {}", err);
                DashboardEvent::RefreshFailed {
                    token,
                    message: err.user_message(),
                }
            }
        };

        let transition = self.dispatch(event);
        if transition == Transition::Superseded {
            tracing::debug!(token = token.value(), "Discarded stale refresh response");
        }
        transition
    }

    /// Fetches the whole collection. Failures end up in the view state.
    pub async fn refresh(&mut self) -> Transition {
        let token = self.begin_refresh();
        let result = self.gateway.list_risks().await;
        self.complete_refresh(token, result)
    }

    /// Records a new risk and refreshes. Invalid input never reaches the service.
    pub async fn assess(&mut self, assessment: &Assessment) -> Result<RiskRecord, GatewayError> {
        let record = self.gateway.assess_risk(assessment).await?;
        self.refresh().await;
        Ok(record)
    }

    pub async fn delete(&mut self, id: i64) -> Result<(), GatewayError> {
        let result = self.gateway.delete_risk(id).await;
        self.after_mutation(result).await
    }

    /// Bulk delete; does nothing unless the caller confirmed it.
    pub async fn clear(&mut self, confirmed: bool) -> Result<bool, GatewayError> {
        if !confirmed {
            return Ok(false);
        }
        let result = self.gateway.delete_all_risks().await;
        self.after_mutation(result).await?;
        Ok(true)
    }

    async fn after_mutation(&mut self, result: Result<(), GatewayError>) -> Result<(), GatewayError> {
        match result {
            Ok(()) => {
                self.refresh().await;
                Ok(())
            }
            Err(err) => {
                self.dispatch(DashboardEvent::MutationFailed {
                    message: err.user_message(),
                });
                Err(err)
            }
        }
    }

    pub fn set_filter(&mut self, level: Option<Level>) {
        self.dispatch(DashboardEvent::FilterChanged(level));
    }

    pub fn select_sort(&mut self, key: SortKey) {
        self.dispatch(DashboardEvent::SortSelected(key));
    }
}
