use clap::{Parser, Subcommand};
use grc_risk::application::ClientConfig;
use tracing_subscriber::EnvFilter;

mod commands;
mod error;
pub mod ui;

use commands::{
    assess::AssessCommand, clear::ClearCommand, dashboard::DashboardCommand,
    delete::DeleteCommand, export::ExportCommand, health::HealthCommand,
    heatmap::HeatmapCommand, list::ListCommand,
};
use error::CliError;

#[derive(Parser)]
#[command(name = "grc-risk")]
#[command(about = "Assess and review cybersecurity risks", long_about = None)]
#[command(version)]
struct Cli {
    /// Base URL of the risk service
    #[arg(long, global = true, env = "GRC_API_URL")]
    api_url: Option<String>,

    /// Show debug logs
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Score a new risk and record it
    Assess(AssessCommand),
    /// Print the risk register as a table
    List(ListCommand),
    /// Summary cards, heatmap and register in one view
    Dashboard(DashboardCommand),
    /// Likelihood x impact frequency grid
    Heatmap(HeatmapCommand),
    /// Delete one risk by id
    Delete(DeleteCommand),
    /// Delete every recorded risk
    Clear(ClearCommand),
    /// Download the register as CSV
    Export(ExportCommand),
    /// Check that the risk service is up
    Health(HealthCommand),
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default)),
        )
        .with_writer(std::io::stderr)
        .init();
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let config = ClientConfig::from_env(cli.api_url.as_deref())
        .map_err(|e| CliError::Config(format!("{:#}", e)))?;

    match cli.command {
        Commands::Assess(cmd) => cmd.execute(&config).await,
        Commands::List(cmd) => cmd.execute(&config).await,
        Commands::Dashboard(cmd) => cmd.execute(&config).await,
        Commands::Heatmap(cmd) => cmd.execute(&config).await,
        Commands::Delete(cmd) => cmd.execute(&config).await,
        Commands::Clear(cmd) => cmd.execute(&config).await,
        Commands::Export(cmd) => cmd.execute(&config).await,
        Commands::Health(cmd) => cmd.execute(&config).await,
    }
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(err) = run(cli).await {
        match err.downcast_ref::<CliError>() {
            Some(cli_err) => cli_err.render(),
            None => CliError::Runtime(format!("{:#}", err)).render(),
        }
        std::process::exit(1);
    }
}
