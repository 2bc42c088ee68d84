//! HTTP mapping for metrics service errors.
//!
//! Failures answer with the error text encoded as a bare JSON string, e.g.
//! `404 "Could not find metric in repository"`.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use appmon_core::AppMonError;

#[derive(Debug)]
pub struct ApiError(pub AppMonError);

impl From<AppMonError> for ApiError {
    fn from(e: AppMonError) -> Self {
        Self(e)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = StatusCode::from_u16(self.0.http_status())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        (status, Json(self.0.to_string())).into_response()
    }
}
