//! Axum router wiring.

use axum::{routing::get, Router};

use crate::{app_state::AppState, handlers, ops};

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::draw_chart))
        .route("/healthz", get(ops::healthz))
        .with_state(state)
}
