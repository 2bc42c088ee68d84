//! Metric wire-format tests.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use appmon_core::{Metric, MetricRequest, PerformanceIndex};

fn sample() -> Metric {
    Metric {
        performance_index: PerformanceIndex {
            fail_ratio: 0.25,
            fail_amount: 3,
            access_amount: 42,
            max_concurrent: 7,
            min_latency: 1,
            avg_latency: 12,
        },
        host: "node-1".into(),
        app_name: "test-app".into(),
        domain: "test-domain".into(),
    }
}

#[test]
fn serializes_with_stable_field_names() {
    let v = serde_json::to_value(sample()).unwrap();
    assert_eq!(v["host"], "node-1");
    assert_eq!(v["app_name"], "test-app");
    assert_eq!(v["domain"], "test-domain");

    let p = &v["performance_index"];
    assert_eq!(p["failRatio"], 0.25);
    assert_eq!(p["failAmount"], 3);
    assert_eq!(p["accessAmount"], 42);
    assert_eq!(p["maxConcurrent"], 7);
    assert_eq!(p["minLatency"], 1);
    assert_eq!(p["avgLatency"], 12);
}

#[test]
fn decodes_upstream_payload() {
    let raw = r#"{
        "performance_index": {
            "failRatio": 0.5, "failAmount": 10, "accessAmount": 99,
            "maxConcurrent": 4, "minLatency": 2, "avgLatency": 30
        },
        "host": "h", "app_name": "a", "domain": "d"
    }"#;
    let m: Metric = serde_json::from_str(raw).unwrap();
    assert_eq!(m.performance_index.access_amount, 99);
    assert_eq!(m.app_name, "a");
}

#[test]
fn missing_fields_decode_as_zero() {
    let m: Metric = serde_json::from_str(r#"{"app_name":"only"}"#).unwrap();
    assert_eq!(m.app_name, "only");
    assert_eq!(m.host, "");
    assert_eq!(m.performance_index, PerformanceIndex::default());
}

#[test]
fn inconsistent_values_are_accepted() {
    let raw = r#"{"performance_index":{"failAmount":500,"accessAmount":-3}}"#;
    let m: Metric = serde_json::from_str(raw).unwrap();
    assert_eq!(m.performance_index.fail_amount, 500);
    assert_eq!(m.performance_index.access_amount, -3);
}

#[test]
fn clone_copies_every_field() {
    let src = sample();
    let copy = src.clone();
    assert_eq!(copy, src);
    assert_eq!(
        serde_json::to_string(&copy).unwrap(),
        serde_json::to_string(&src).unwrap()
    );
}

#[test]
fn labeled_values_keep_display_order() {
    let labels: Vec<_> = sample().labeled_values().iter().map(|(l, _)| *l).collect();
    assert_eq!(
        labels,
        ["FailRatio", "FailAmount", "AccessAmount", "MaxConcurrent", "MinLatency", "AvgLatency"]
    );
    assert_eq!(sample().labeled_values()[2].1, 42.0);
}

#[test]
fn metric_request_validity() {
    assert!(MetricRequest::new("test-app").is_valid());
    assert!(!MetricRequest::new("").is_valid());

    let req: MetricRequest = serde_json::from_str(r#"{"appname":"x"}"#).unwrap();
    assert_eq!(req.app_name, "x");
}
