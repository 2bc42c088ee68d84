//! Shared error type across appmon crates.

use thiserror::Error;

/// Client-facing error codes (stable API).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClientCode {
    /// Requested resource does not exist.
    NotFound,
    /// Invalid input.
    BadRequest,
    /// Upstream service could not be reached or answered with a failure status.
    UpstreamUnavailable,
    /// Upstream answered, but the body could not be decoded.
    UpstreamDecode,
    /// Chart could not be rendered or encoded.
    RenderFailed,
    /// Invalid configuration.
    Config,
    /// Internal server error.
    Internal,
}

impl ClientCode {
    /// String representation used in JSON responses.
    pub fn as_str(self) -> &'static str {
        match self {
            ClientCode::NotFound => "NOT_FOUND",
            ClientCode::BadRequest => "BAD_REQUEST",
            ClientCode::UpstreamUnavailable => "UPSTREAM_UNAVAILABLE",
            ClientCode::UpstreamDecode => "UPSTREAM_DECODE",
            ClientCode::RenderFailed => "RENDER_FAILED",
            ClientCode::Config => "CONFIG",
            ClientCode::Internal => "INTERNAL",
        }
    }
}

/// Shared result type.
pub type Result<T> = std::result::Result<T, AppMonError>;

/// Unified error type used by core and both services.
///
/// `NotFound` displays its message verbatim because the metrics service sends
/// that text to clients as the whole response body.
#[derive(Debug, Error)]
pub enum AppMonError {
    #[error("{0}")]
    NotFound(String),
    #[error("bad request: {0}")]
    BadRequest(String),
    #[error("upstream unavailable: {0}")]
    Upstream(String),
    #[error("upstream decode failed: {0}")]
    Decode(String),
    #[error("render failed: {0}")]
    Render(String),
    #[error("invalid config: {0}")]
    Config(String),
    #[error("internal: {0}")]
    Internal(String),
}

impl AppMonError {
    /// Map internal error to a stable client-facing code.
    pub fn client_code(&self) -> ClientCode {
        match self {
            AppMonError::NotFound(_) => ClientCode::NotFound,
            AppMonError::BadRequest(_) => ClientCode::BadRequest,
            AppMonError::Upstream(_) => ClientCode::UpstreamUnavailable,
            AppMonError::Decode(_) => ClientCode::UpstreamDecode,
            AppMonError::Render(_) => ClientCode::RenderFailed,
            AppMonError::Config(_) => ClientCode::Config,
            AppMonError::Internal(_) => ClientCode::Internal,
        }
    }

    /// HTTP status code the services answer with for this error.
    pub fn http_status(&self) -> u16 {
        match self {
            AppMonError::NotFound(_) => 404,
            AppMonError::BadRequest(_) => 400,
            AppMonError::Upstream(_) | AppMonError::Decode(_) => 502,
            AppMonError::Render(_) | AppMonError::Config(_) | AppMonError::Internal(_) => 500,
        }
    }
}
