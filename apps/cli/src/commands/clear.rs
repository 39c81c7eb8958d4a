use anyhow::Result;
use clap::Args;
use grc_risk::application::{ClientConfig, DashboardService};

use crate::commands::connect;
use crate::error::CliError;
use crate::ui::components::Spinner;

#[derive(Args, Debug)]
pub struct ClearCommand {
    /// Skip the confirmation prompt
    #[arg(short, long)]
    pub yes: bool,
}

impl ClearCommand {
    pub async fn execute(&self, config: &ClientConfig) -> Result<()> {
        let confirmed = self.yes
            || cliclack::confirm("Delete ALL risks? This cannot be undone.")
                .initial_value(false)
                .interact()
                .map_err(|_| CliError::Cancelled)?;

        let mut service = DashboardService::new(connect(config)?);
        let spinner = Spinner::new("Clearing risk register");

        match service.clear(confirmed).await {
            Ok(true) => {
                spinner.success("All risks deleted");
                Ok(())
            }
            Ok(false) => {
                spinner.clear();
                cliclack::outro_cancel("Nothing deleted")?;
                Ok(())
            }
            Err(err) => {
                spinner.fail(err.user_message());
                Err(CliError::from(err).into())
            }
        }
    }
}
