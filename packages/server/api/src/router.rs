use crate::handlers;
use crate::state::AppState;
use axum::Router;

pub fn routes() -> Router<AppState> {
    Router::new()
        .merge(handlers::health::router())
        .merge(handlers::risks::router())
        .merge(handlers::export::router())
}
