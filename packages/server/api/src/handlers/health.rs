use crate::state::AppState;
use axum::{routing::get, Json, Router};
use shared::dto::HealthResponse;

pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}

async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
    })
}
