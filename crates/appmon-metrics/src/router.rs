//! Axum router wiring.

use axum::{routing::get, Router};

use crate::{app_state::AppState, handlers, ops};

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/metrics", get(handlers::get_metrics))
        .route("/metrics/:appname", get(handlers::get_app_metric))
        .route("/healthz", get(ops::healthz))
        .with_state(state)
}
