//! Metric data model and its JSON contract.
//!
//! Wire shape (field names are stable):
//! ```json
//! {
//!   "performance_index": {
//!     "failRatio": 0.25, "failAmount": 3, "accessAmount": 42,
//!     "maxConcurrent": 7, "minLatency": 1, "avgLatency": 12
//!   },
//!   "host": "node-1", "app_name": "test-app", "domain": "test-domain"
//! }
//! ```
//! Missing fields decode to their zero value. No relation between fields is
//! enforced: negative or inconsistent combinations are accepted as-is.

use serde::{Deserialize, Serialize};

/// The six numeric counters describing one sampling snapshot.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PerformanceIndex {
    #[serde(rename = "failRatio")]
    pub fail_ratio: f64,
    #[serde(rename = "failAmount")]
    pub fail_amount: i64,
    #[serde(rename = "accessAmount")]
    pub access_amount: i64,
    #[serde(rename = "maxConcurrent")]
    pub max_concurrent: i64,
    #[serde(rename = "minLatency")]
    pub min_latency: i64,
    #[serde(rename = "avgLatency")]
    pub avg_latency: i64,
}

/// One snapshot of an application's performance plus its identity.
///
/// `Clone` is a field-for-field copy; handlers clone the stored snapshot into
/// each response rather than sharing it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Metric {
    pub performance_index: PerformanceIndex,
    pub host: String,
    pub app_name: String,
    pub domain: String,
}

impl Metric {
    /// Bar values in display order, with their labels.
    pub fn labeled_values(&self) -> [(&'static str, f64); 6] {
        let p = &self.performance_index;
        [
            ("FailRatio", p.fail_ratio),
            ("FailAmount", p.fail_amount as f64),
            ("AccessAmount", p.access_amount as f64),
            ("MaxConcurrent", p.max_concurrent as f64),
            ("MinLatency", p.min_latency as f64),
            ("AvgLatency", p.avg_latency as f64),
        ]
    }
}

/// Lookup request for a single application's metric.
///
/// Deserializes from the `appname` path segment.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct MetricRequest {
    #[serde(rename = "appname")]
    pub app_name: String,
}

impl MetricRequest {
    pub fn new(app_name: impl Into<String>) -> Self {
        Self { app_name: app_name.into() }
    }

    pub fn is_valid(&self) -> bool {
        !self.app_name.is_empty()
    }
}
