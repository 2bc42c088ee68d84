//! Shared application state for the metrics service.

use std::sync::Arc;

use crate::config::MetricsConfig;
use crate::generator::MetricGenerator;
use crate::repo::{InMemoryMetricRepository, MetricRepository};

#[derive(Clone)]
pub struct AppState {
    repo: Arc<dyn MetricRepository>,
}

impl AppState {
    /// Wire the default in-memory repository for `cfg`.
    pub fn new(cfg: &MetricsConfig) -> Self {
        let generator = MetricGenerator::new(cfg.hostname.clone());
        tracing::info!(app = %generator.app_name(), host = %cfg.hostname, "serving in-memory metrics");
        Self::with_repo(Arc::new(InMemoryMetricRepository::new(generator)))
    }

    pub fn with_repo(repo: Arc<dyn MetricRepository>) -> Self {
        Self { repo }
    }

    pub fn repo(&self) -> Arc<dyn MetricRepository> {
        Arc::clone(&self.repo)
    }
}
