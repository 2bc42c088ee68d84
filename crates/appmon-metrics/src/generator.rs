//! Fake metric generation.

use rand::distributions::{Distribution, Uniform};

use appmon_core::{Metric, PerformanceIndex};

pub const DEFAULT_APP_NAME: &str = "test-app";
pub const DEFAULT_DOMAIN: &str = "test-domain";

/// Produces snapshots with a fixed identity and fresh random counters:
/// `failRatio` in `[0, 1)`, every integer counter in `[0, 100)`.
#[derive(Debug, Clone)]
pub struct MetricGenerator {
    host: String,
    app_name: String,
    domain: String,
}

impl MetricGenerator {
    pub fn new(host: impl Into<String>) -> Self {
        Self::with_identity(host, DEFAULT_APP_NAME, DEFAULT_DOMAIN)
    }

    pub fn with_identity(
        host: impl Into<String>,
        app_name: impl Into<String>,
        domain: impl Into<String>,
    ) -> Self {
        Self {
            host: host.into(),
            app_name: app_name.into(),
            domain: domain.into(),
        }
    }

    pub fn app_name(&self) -> &str {
        &self.app_name
    }

    pub fn generate(&self) -> Metric {
        let mut rng = rand::thread_rng();
        let ratio = Uniform::new(0.0_f64, 1.0);
        let counter = Uniform::new(0_i64, 100);

        Metric {
            performance_index: PerformanceIndex {
                fail_ratio: ratio.sample(&mut rng),
                fail_amount: counter.sample(&mut rng),
                access_amount: counter.sample(&mut rng),
                max_concurrent: counter.sample(&mut rng),
                min_latency: counter.sample(&mut rng),
                avg_latency: counter.sample(&mut rng),
            },
            host: self.host.clone(),
            app_name: self.app_name.clone(),
            domain: self.domain.clone(),
        }
    }
}
