use dotenv::dotenv;
use risk_api::config::ServerConfig;
use risk_api::state::AppState;
use store::RiskRepository;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info,tower_http=debug")),
        )
        .init();

    let config = ServerConfig::from_env()?;
    let app_state = AppState::new(RiskRepository::new());
    let app = risk_api::build_app(app_state, &config)?;

    tracing::info!("Risk API listening on {}", config.addr);
    tracing::info!("Allowed origins: {}", config.cors_origins.join(", "));

    let listener = tokio::net::TcpListener::bind(config.addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
