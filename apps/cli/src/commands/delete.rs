use anyhow::Result;
use clap::Args;
use grc_risk::application::{ClientConfig, DashboardService};

use crate::commands::connect;
use crate::error::CliError;
use crate::ui::components::Spinner;
use crate::ui::{self, Theme};

#[derive(Args, Debug)]
pub struct DeleteCommand {
    /// Id of the risk to delete
    pub id: i64,

    /// Skip the confirmation prompt
    #[arg(short, long)]
    pub yes: bool,
}

impl DeleteCommand {
    pub async fn execute(&self, config: &ClientConfig) -> Result<()> {
        if !self.yes {
            let confirmed = cliclack::confirm(format!("Delete risk #{}?", self.id))
                .initial_value(false)
                .interact()
                .map_err(|_| CliError::Cancelled)?;
            if !confirmed {
                cliclack::outro_cancel("Nothing deleted")?;
                return Ok(());
            }
        }

        let mut service = DashboardService::new(connect(config)?);
        let spinner = Spinner::new(format!("Deleting risk #{}", self.id));

        if let Err(err) = service.delete(self.id).await {
            spinner.fail(err.user_message());
            if err.is_not_found() {
                return Err(CliError::NotFound(self.id).into());
            }
            return Err(CliError::from(err).into());
        }

        spinner.success(format!("Deleted risk #{}", self.id));
        match service.state().error() {
            Some(message) => ui::warn(format!("Could not reload the register: {}", message)),
            None => ui::println(Theme::muted(format!(
                "{} risk(s) remain",
                service.state().records().len()
            ))),
        }
        Ok(())
    }
}
