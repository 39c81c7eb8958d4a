use anyhow::Result;
use clap::Args;
use cliclack::{intro, outro};
use grc_risk::application::ClientConfig;
use grc_risk::domain::Level;
use grc_risk::domain::view::ViewStatus;

use crate::commands::{apply_sort, load_dashboard, requested_sort, Order};
use crate::error::CliError;
use crate::ui::{self, tables, Icon, Theme};

#[derive(Args, Debug)]
pub struct DashboardCommand {
    /// Narrow the register table to one level; summary and heatmap still cover everything
    #[arg(short, long)]
    pub level: Option<Level>,

    /// Column to order the register by: id, score or level
    #[arg(short, long)]
    pub sort: Option<String>,

    #[arg(short, long, value_enum)]
    pub order: Option<Order>,
}

impl DashboardCommand {
    pub async fn execute(&self, config: &ClientConfig) -> Result<()> {
        intro(console::style(format!("{} GRC Risk Dashboard", Icon::Shield)).bold())?;

        let mut service = load_dashboard(config).await?;
        service.set_filter(self.level);
        apply_sort(&mut service, &requested_sort(self.sort.as_deref(), self.order));

        let view = service.view();

        let summary = &view.aggregate.summary;
        ui::println(Theme::bold("Summary"));
        ui::println(tables::summary_table(summary, service.state().records()).to_string());

        ui::println(Theme::bold(format!("{} Heatmap", Icon::Chart)));
        ui::println(tables::heatmap_table(&view.aggregate.heatmap, false).to_string());

        ui::println(Theme::bold("Risk Register"));
        if let ViewStatus::Failed(message) = &view.status {
            // the failure takes the register's place; summary and heatmap show the empty set
            ui::warn(message);
            cliclack::outro_cancel("Risk register unavailable")?;
            return Err(CliError::Unavailable(message.clone()).into());
        }
        if view.rows.is_empty() {
            match self.level {
                Some(level) if summary.total > 0 => {
                    ui::info(format!("No {} risks recorded", Theme::level(level)))
                }
                _ => ui::info("No risks recorded yet. Add one with `grc-risk assess`."),
            }
        } else {
            let sort = service.state().sort();
            ui::println(tables::risk_table(&view.rows, sort).to_string());
        }

        outro(format!(
            "{} of {} risk(s) shown, {} high or critical",
            view.rows.len(),
            summary.total,
            summary.high_critical
        ))?;
        Ok(())
    }
}
