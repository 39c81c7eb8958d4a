use anyhow::Result;
use clap::Args;
use grc_risk::application::{ClientConfig, RiskGateway};
use grc_risk::domain::{project, Level};

use crate::commands::{connect, requested_sort, Order};
use crate::error::CliError;
use crate::ui::components::Spinner;
use crate::ui::{self, tables, Theme};

#[derive(Args, Debug)]
pub struct ListCommand {
    /// Only show risks at this level (Low, Medium, High, Critical)
    #[arg(short, long)]
    pub level: Option<Level>,

    /// Column to order by: id, score or level
    #[arg(short, long)]
    pub sort: Option<String>,

    /// Sort direction; defaults to ascending for id and descending otherwise
    #[arg(short, long, value_enum)]
    pub order: Option<Order>,

    /// Print the rows as JSON instead of a table
    #[arg(long)]
    pub json: bool,
}

impl ListCommand {
    pub async fn execute(&self, config: &ClientConfig) -> Result<()> {
        let gateway = connect(config)?;
        let sort = requested_sort(self.sort.as_deref(), self.order);

        let spinner = Spinner::new("Loading risks");
        // the service does the level filtering here, so the rows arrive pre-filtered
        let fetched = match self.level {
            Some(level) => gateway.list_risks_by_level(level).await,
            None => gateway.list_risks().await,
        };
        let records = match fetched {
            Ok(records) => {
                spinner.clear();
                records
            }
            Err(err) => {
                spinner.fail(err.user_message());
                return Err(CliError::from(err).into());
            }
        };

        let rows = project(&records, None, &sort);

        if self.json {
            println!("{}", serde_json::to_string_pretty(&rows)?);
            return Ok(());
        }

        if rows.is_empty() {
            match self.level {
                Some(level) => ui::info(format!("No {} risks recorded", Theme::level(level))),
                None => ui::info("No risks recorded yet. Add one with `grc-risk assess`."),
            }
            return Ok(());
        }

        ui::println(tables::risk_table(&rows, &sort).to_string());
        ui::println(Theme::muted(format!(
            "{} risk(s), sorted by {} {}",
            rows.len(),
            sort.key,
            sort.indicator()
        )));
        Ok(())
    }
}
