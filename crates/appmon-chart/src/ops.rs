//! Operational HTTP endpoints.
//!
//! - `/healthz` : liveness (does not probe the upstream)

use axum::{http::StatusCode, response::IntoResponse};

pub async fn healthz() -> impl IntoResponse {
    (StatusCode::OK, "ok")
}
