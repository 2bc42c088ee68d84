//! Chart handler: fetch upstream snapshot, render, answer with PNG.
//!
//! The image is encoded fully in memory before anything is written, so a
//! render failure produces a JSON error instead of a truncated PNG.

use axum::{
    extract::State,
    http::header,
    response::{IntoResponse, Response},
};
use bytes::Bytes;

use appmon_core::AppMonError;

use crate::app_state::AppState;
use crate::chart::BarChart;
use crate::error::ApiError;

/// `GET /`
pub async fn draw_chart(State(state): State<AppState>) -> Result<Response, ApiError> {
    let upstream = state.upstream();
    let metric = upstream.fetch_metric().await.map_err(|e| {
        tracing::warn!(url = %upstream.metrics_url(), error = %e, "upstream fetch failed");
        e
    })?;

    let mut chart = BarChart::from_metric(&metric);
    chart.width = state.chart_width();
    let png = tokio::task::spawn_blocking(move || chart.render_png())
        .await
        .map_err(|e| AppMonError::Internal(format!("render task failed: {e}")))?
        .map_err(|e| {
            tracing::error!(error = %e, "error rendering chart");
            e
        })?;

    tracing::debug!(app = %metric.app_name, bytes = png.len(), "chart rendered");
    Ok(([(header::CONTENT_TYPE, "image/png")], Bytes::from(png)).into_response())
}
