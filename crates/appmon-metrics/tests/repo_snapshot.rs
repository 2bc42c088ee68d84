//! Repository and generator behavior.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use std::sync::Arc;

use appmon_metrics::generator::{MetricGenerator, DEFAULT_APP_NAME, DEFAULT_DOMAIN};
use appmon_metrics::repo::{InMemoryMetricRepository, MetricRepository, NOT_FOUND_MSG};

fn assert_in_bounds(m: &appmon_core::Metric) {
    let p = &m.performance_index;
    assert!((0.0..1.0).contains(&p.fail_ratio), "fail_ratio {}", p.fail_ratio);
    for v in [p.fail_amount, p.access_amount, p.max_concurrent, p.min_latency, p.avg_latency] {
        assert!((0..100).contains(&v), "counter {v}");
    }
}

#[test]
fn generated_values_stay_in_range() {
    let g = MetricGenerator::new("node-1");
    for _ in 0..2000 {
        let m = g.generate();
        assert_in_bounds(&m);
        assert_eq!(m.host, "node-1");
        assert_eq!(m.app_name, DEFAULT_APP_NAME);
        assert_eq!(m.domain, DEFAULT_DOMAIN);
    }
}

#[tokio::test]
async fn new_metric_replaces_snapshot() {
    let repo = InMemoryMetricRepository::new(MetricGenerator::new("h"));
    let mut seen = std::collections::HashSet::new();
    for _ in 0..20 {
        repo.new_metric().await.unwrap();
        let m = repo.get_metric().await.unwrap();
        assert_in_bounds(&m);
        seen.insert(m.performance_index.fail_ratio.to_bits());
    }
    assert!(seen.len() > 1, "snapshots should be regenerated");
}

#[tokio::test]
async fn empty_repository_reports_not_found() {
    let repo = InMemoryMetricRepository::empty(MetricGenerator::new("h"));
    let err = repo.get_metric().await.expect_err("no snapshot yet");
    assert_eq!(err.to_string(), NOT_FOUND_MSG);

    repo.new_metric().await.unwrap();
    assert!(repo.get_metric().await.is_ok());
}

#[tokio::test]
async fn app_lookup_is_exact_and_case_sensitive() {
    let repo = InMemoryMetricRepository::new(MetricGenerator::new("h"));

    let m = repo.get_app_metric("test-app").await.unwrap();
    assert_eq!(m, repo.get_metric().await.unwrap());

    for name in ["Test-App", "test-app ", "test", "", "not-a-real-app"] {
        let err = repo.get_app_metric(name).await.expect_err(name);
        assert_eq!(err.client_code().as_str(), "NOT_FOUND");
    }
}

#[tokio::test]
async fn custom_identity_is_matched() {
    let g = MetricGenerator::with_identity("h", "billing", "payments");
    assert_eq!(g.app_name(), "billing");
    let repo = InMemoryMetricRepository::new(g);
    assert_eq!(repo.get_app_metric("billing").await.unwrap().domain, "payments");
    assert!(repo.get_app_metric("test-app").await.is_err());
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_regenerate_and_read_see_whole_snapshots() {
    let repo = Arc::new(InMemoryMetricRepository::new(MetricGenerator::new("h")));

    let mut tasks = Vec::new();
    for i in 0..16 {
        let repo = Arc::clone(&repo);
        tasks.push(tokio::spawn(async move {
            for _ in 0..200 {
                if i % 2 == 0 {
                    repo.new_metric().await.unwrap();
                } else {
                    let m = repo.get_metric().await.unwrap();
                    assert_in_bounds(&m);
                    assert_eq!(m.app_name, "test-app");
                    assert_eq!(m.host, "h");
                }
            }
        }));
    }
    for t in tasks {
        t.await.unwrap();
    }
}
