use anyhow::Result;
use clap::Args;
use grc_risk::application::{ClientConfig, RiskGateway};

use crate::commands::connect;
use crate::error::CliError;
use crate::ui::components::Spinner;

#[derive(Args, Debug)]
pub struct HealthCommand {}

impl HealthCommand {
    pub async fn execute(&self, config: &ClientConfig) -> Result<()> {
        let gateway = connect(config)?;
        let spinner = Spinner::new(format!("Checking {}", gateway.base_url()));

        match gateway.health().await {
            Ok(health) => {
                spinner.success(format!("{} is {}", gateway.base_url(), health.status));
                Ok(())
            }
            Err(err) => {
                spinner.fail(err.user_message());
                Err(CliError::from(err).into())
            }
        }
    }
}
