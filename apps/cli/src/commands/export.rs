use anyhow::{Context, Result};
use clap::Args;
use grc_risk::application::{ClientConfig, RiskGateway};
use std::path::PathBuf;

use crate::commands::connect;
use crate::error::CliError;
use crate::ui::components::Spinner;
use crate::ui::{self, Icon, Theme};

#[derive(Args, Debug)]
pub struct ExportCommand {
    /// Where to write the CSV; `-` prints it to stdout
    #[arg(short, long, default_value = "risks.csv")]
    pub output: PathBuf,
}

impl ExportCommand {
    pub async fn execute(&self, config: &ClientConfig) -> Result<()> {
        let gateway = connect(config)?;
        tracing::debug!(url = %gateway.export_csv_url(), "Downloading CSV export");

        let spinner = Spinner::new("Exporting risks");
        let csv = match gateway.download_csv().await {
            Ok(csv) => csv,
            Err(err) => {
                spinner.fail(err.user_message());
                return Err(CliError::from(err).into());
            }
        };

        if self.output.as_os_str() == "-" {
            spinner.clear();
            print!("{}", csv);
            return Ok(());
        }

        std::fs::write(&self.output, &csv)
            .map_err(CliError::from)
            .with_context(|| format!("Failed to write {}", self.output.display()))?;

        // header line excluded
        let rows = csv.lines().count().saturating_sub(1);
        spinner.success(format!("Exported {} risk(s)", rows));
        ui::info(format!(
            "{} {}",
            Icon::File,
            Theme::primary(self.output.display())
        ));
        Ok(())
    }
}
