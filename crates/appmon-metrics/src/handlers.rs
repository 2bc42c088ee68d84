//! Metric read handlers.
//!
//! Every read regenerates the snapshot first, so two quick requests can return
//! different numbers for the same application.

use axum::{
    extract::{rejection::PathRejection, Path, State},
    Json,
};

use appmon_core::error::AppMonError;
use appmon_core::{Metric, MetricRequest};

use crate::app_state::AppState;
use crate::error::ApiError;
use crate::repo::NOT_FOUND_MSG;

/// `GET /metrics`
pub async fn get_metrics(State(state): State<AppState>) -> Result<Json<Metric>, ApiError> {
    let repo = state.repo();
    repo.new_metric().await?;
    let metric = repo.get_metric().await.map_err(|e| {
        tracing::warn!(error = %e, "metric snapshot unavailable");
        e
    })?;
    tracing::debug!(app = %metric.app_name, "served metric");
    Ok(Json(metric))
}

/// `GET /metrics/:appname`
pub async fn get_app_metric(
    State(state): State<AppState>,
    path: Result<Path<MetricRequest>, PathRejection>,
) -> Result<Json<Metric>, ApiError> {
    let repo = state.repo();
    repo.new_metric().await?;

    // An undecodable segment cannot name the stored app, so it is a miss too.
    let req = match path {
        Ok(Path(req)) if req.is_valid() => req,
        Ok(_) => return Err(AppMonError::NotFound(NOT_FOUND_MSG.into()).into()),
        Err(rejection) => {
            tracing::debug!(error = %rejection, "app name path rejected");
            return Err(AppMonError::NotFound(NOT_FOUND_MSG.into()).into());
        }
    };

    match repo.get_app_metric(&req.app_name).await {
        Ok(metric) => Ok(Json(metric)),
        Err(e) => {
            tracing::warn!(app = %req.app_name, error = %e, "app metric lookup failed");
            Err(e.into())
        }
    }
}
