//! Client for the metrics service.

use appmon_core::error::{AppMonError, Result};
use appmon_core::Metric;

use crate::config::ChartConfig;

#[derive(Debug, Clone)]
pub struct UpstreamClient {
    http: reqwest::Client,
    metrics_url: String,
}

impl UpstreamClient {
    pub fn new(cfg: &ChartConfig) -> Result<Self> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = cfg.upstream_timeout {
            builder = builder.timeout(timeout);
        }
        let http = builder
            .build()
            .map_err(|e| AppMonError::Internal(format!("http client build failed: {e}")))?;

        Ok(Self {
            http,
            metrics_url: cfg.metrics_url(),
        })
    }

    pub fn metrics_url(&self) -> &str {
        &self.metrics_url
    }

    /// One GET, no retry. Transport failures and non-2xx answers are
    /// `Upstream`; an unparseable body is `Decode`.
    pub async fn fetch_metric(&self) -> Result<Metric> {
        let url = &self.metrics_url;
        let resp = self
            .http
            .get(url)
            .send()
            .await
            .map_err(|e| AppMonError::Upstream(format!("GET {url}: {e}")))?;

        let status = resp.status();
        if !status.is_success() {
            return Err(AppMonError::Upstream(format!("GET {url}: status {status}")));
        }

        let body = resp
            .bytes()
            .await
            .map_err(|e| AppMonError::Upstream(format!("GET {url}: reading body: {e}")))?;

        serde_json::from_slice(&body).map_err(|e| AppMonError::Decode(format!("GET {url}: {e}")))
    }
}
