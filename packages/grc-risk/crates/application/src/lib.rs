//! Client-side orchestration: talking to the risk service and keeping the
//! dashboard state in step with it.

pub mod config;
pub mod dashboard_service;
pub mod error;
pub mod gateway;

pub use config::ClientConfig;
pub use dashboard_service::DashboardService;
pub use error::GatewayError;
pub use gateway::{HttpRiskGateway, RiskGateway};
