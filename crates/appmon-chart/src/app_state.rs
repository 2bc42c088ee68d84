//! Shared application state for the chart service.

use std::sync::Arc;

use appmon_core::error::Result;

use crate::config::ChartConfig;
use crate::upstream::UpstreamClient;

#[derive(Clone)]
pub struct AppState {
    upstream: Arc<UpstreamClient>,
    chart_width: u32,
}

impl AppState {
    pub fn new(cfg: &ChartConfig) -> Result<Self> {
        Ok(Self {
            upstream: Arc::new(UpstreamClient::new(cfg)?),
            chart_width: cfg.chart_width,
        })
    }

    pub fn upstream(&self) -> Arc<UpstreamClient> {
        Arc::clone(&self.upstream)
    }

    pub fn chart_width(&self) -> u32 {
        self.chart_width
    }
}
