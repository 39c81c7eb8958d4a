//! HTTP collection service for risk records.

pub mod config;
pub mod handlers;
pub mod router;
pub mod state;

use anyhow::{Context, Result};
use axum::{http, Router};
use config::ServerConfig;
use state::AppState;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;

/// Router with CORS and request tracing applied.
pub fn build_app(state: AppState, config: &ServerConfig) -> Result<Router> {
    let origins = config
        .cors_origins
        .iter()
        .map(|o| {
            o.parse::<http::HeaderValue>()
                .with_context(|| format!("Invalid CORS origin: {}", o))
        })
        .collect::<Result<Vec<_>>>()?;

    let cors = CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([http::Method::GET, http::Method::POST, http::Method::DELETE])
        .allow_headers([http::header::CONTENT_TYPE, http::header::ACCEPT]);

    Ok(router::routes()
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state))
}
