pub mod assess;
pub mod clear;
pub mod dashboard;
pub mod delete;
pub mod export;
pub mod health;
pub mod heatmap;
pub mod list;

use crate::error::CliError;
use crate::ui::components::Spinner;
use clap::ValueEnum;
use grc_risk::application::{ClientConfig, DashboardService, HttpRiskGateway, RiskGateway};
use grc_risk::domain::view::ViewStatus;
use grc_risk::domain::{SortKey, SortState};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Order {
    Asc,
    Desc,
}

pub fn connect(config: &ClientConfig) -> Result<HttpRiskGateway, CliError> {
    Ok(HttpRiskGateway::new(config.clone())?)
}

/// Sort requested on the command line. Without `--order` the column gets the
/// direction a header click would give it.
pub fn requested_sort(column: Option<&str>, order: Option<Order>) -> SortState {
    let key = column.map(SortKey::parse).unwrap_or(SortKey::Id);
    if let SortKey::Other(name) = &key {
        crate::ui::warn(format!(
            "Unknown sort column '{}', keeping the service order",
            name
        ));
    }

    match order {
        Some(order) => SortState::new(key, order == Order::Asc),
        None if key == SortKey::Id => SortState::default(),
        None => SortState::default().select(key),
    }
}

/// Drives the service's sort state to `target` through header clicks.
pub fn apply_sort<G: RiskGateway>(service: &mut DashboardService<G>, target: &SortState) {
    if service.state().sort().key != target.key {
        service.select_sort(target.key.clone());
    }
    if service.state().sort().ascending != target.ascending {
        service.select_sort(target.key.clone());
    }
}

/// Fetches the register into a fresh dashboard. A failed fetch is left in the
/// dashboard state, so callers render it in place of the register.
pub async fn load_dashboard(
    config: &ClientConfig,
) -> Result<DashboardService<HttpRiskGateway>, CliError> {
    let mut service = DashboardService::new(connect(config)?);
    let spinner = Spinner::new("Loading risks");

    service.refresh().await;
    match service.state().error() {
        Some(message) => spinner.fail(message),
        None => {
            spinner.clear();
            tracing::debug!(count = service.state().records().len(), "Loaded risk register");
        }
    }
    Ok(service)
}

/// Turns a failed load into the command's error.
pub fn ensure_loaded<G: RiskGateway>(service: &DashboardService<G>) -> Result<(), CliError> {
    match service.view().status {
        ViewStatus::Failed(message) => Err(CliError::Unavailable(message)),
        _ => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_requested_sort_defaults() {
        assert_eq!(requested_sort(None, None), SortState::default());
        assert_eq!(
            requested_sort(Some("score"), None),
            SortState::new(SortKey::Score, false)
        );
        assert_eq!(
            requested_sort(Some("level"), Some(Order::Asc)),
            SortState::new(SortKey::Level, true)
        );
        assert_eq!(
            requested_sort(None, Some(Order::Desc)),
            SortState::new(SortKey::Id, false)
        );
    }

    #[test]
    fn test_apply_sort_reaches_any_target() {
        let config = ClientConfig::default();
        for target in [
            SortState::new(SortKey::Id, true),
            SortState::new(SortKey::Id, false),
            SortState::new(SortKey::Score, true),
            SortState::new(SortKey::Level, false),
        ] {
            let mut service = DashboardService::new(connect(&config).unwrap());
            apply_sort(&mut service, &target);
            assert_eq!(service.state().sort(), &target);
        }
    }

    #[tokio::test]
    async fn test_unreachable_service_is_shown_in_the_view() {
        // nothing listens on port 9 locally
        let config = ClientConfig::new("http://127.0.0.1:9").unwrap();
        let service = load_dashboard(&config).await.unwrap();

        let view = service.view();
        assert!(matches!(view.status, ViewStatus::Failed(_)));
        assert!(view.rows.is_empty());
        assert_eq!(view.aggregate.summary.total, 0);
        assert!(matches!(
            ensure_loaded(&service),
            Err(CliError::Unavailable(_))
        ));
    }
}
