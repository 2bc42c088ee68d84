//! Metric repository.
//!
//! The in-memory store keeps exactly one snapshot. Regeneration builds the new
//! `Metric` outside the lock and then swaps the `Arc`, so a reader sees either
//! the previous snapshot or the next one, never a mix.

use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use appmon_core::error::{AppMonError, Result};
use appmon_core::Metric;

use crate::generator::MetricGenerator;

pub const NOT_FOUND_MSG: &str = "Could not find metric in repository";

#[async_trait]
pub trait MetricRepository: Send + Sync {
    /// Replace the stored snapshot with a freshly generated one.
    async fn new_metric(&self) -> Result<()>;

    /// Current snapshot. Fails only if none has been created yet.
    async fn get_metric(&self) -> Result<Metric>;

    /// Current snapshot if its `app_name` equals `app_name` exactly.
    async fn get_app_metric(&self, app_name: &str) -> Result<Metric>;
}

pub struct InMemoryMetricRepository {
    generator: MetricGenerator,
    snapshot: RwLock<Option<Arc<Metric>>>,
}

impl InMemoryMetricRepository {
    /// Create a repository holding an initial snapshot.
    pub fn new(generator: MetricGenerator) -> Self {
        let first = Arc::new(generator.generate());
        Self {
            generator,
            snapshot: RwLock::new(Some(first)),
        }
    }

    /// Create a repository with no snapshot until `new_metric` runs.
    pub fn empty(generator: MetricGenerator) -> Self {
        Self {
            generator,
            snapshot: RwLock::new(None),
        }
    }

    async fn current(&self) -> Option<Arc<Metric>> {
        self.snapshot.read().await.clone()
    }
}

#[async_trait]
impl MetricRepository for InMemoryMetricRepository {
    async fn new_metric(&self) -> Result<()> {
        let next = Arc::new(self.generator.generate());
        *self.snapshot.write().await = Some(next);
        Ok(())
    }

    async fn get_metric(&self) -> Result<Metric> {
        self.current()
            .await
            .map(|m| Metric::clone(&m))
            .ok_or_else(|| AppMonError::NotFound(NOT_FOUND_MSG.into()))
    }

    async fn get_app_metric(&self, app_name: &str) -> Result<Metric> {
        match self.current().await {
            Some(m) if m.app_name == app_name => Ok(Metric::clone(&m)),
            _ => Err(AppMonError::NotFound(NOT_FOUND_MSG.into())),
        }
    }
}
