use anyhow::Result;
use clap::Args;
use grc_risk::application::ClientConfig;

use crate::commands::{ensure_loaded, load_dashboard};
use crate::ui::{self, tables, Theme};

#[derive(Args, Debug)]
pub struct HeatmapCommand {
    /// List the assets behind each populated cell
    #[arg(short, long)]
    pub assets: bool,
}

impl HeatmapCommand {
    pub async fn execute(&self, config: &ClientConfig) -> Result<()> {
        let service = load_dashboard(config).await?;
        ensure_loaded(&service)?;
        let heatmap = service.view().aggregate.heatmap;

        ui::println(Theme::bold("Rows: likelihood 1-5. Columns: impact 1-5. Cell = count of risks."));
        ui::println(tables::heatmap_table(&heatmap, self.assets).to_string());

        let off_grid = service.state().records().len() - heatmap.total();
        if off_grid > 0 {
            ui::warn(format!("{} risk(s) fall outside the 5x5 matrix", off_grid));
        }
        ui::println(Theme::muted(format!(
            "{} risk(s) across {} cell(s)",
            heatmap.total(),
            heatmap.populated_cells()
        )));
        Ok(())
    }
}
