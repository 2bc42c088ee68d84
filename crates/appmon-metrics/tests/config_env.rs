#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use std::collections::HashMap;

use appmon_metrics::config::MetricsConfig;

fn cfg(pairs: &[(&str, &str)]) -> appmon_core::Result<MetricsConfig> {
    let env: HashMap<String, String> =
        pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
    MetricsConfig::from_lookup(move |k| env.get(k).cloned())
}

#[test]
fn defaults() {
    let c = cfg(&[]).unwrap();
    assert_eq!(c.port, 3000);
    assert_eq!(c.hostname, "");
    assert_eq!(c.listen().to_string(), "0.0.0.0:3000");
}

#[test]
fn env_overrides() {
    let c = cfg(&[("PORT", "4100"), ("HOSTNAME", "pod-7"), ("BIND_ADDR", "127.0.0.1")]).unwrap();
    assert_eq!(c.listen().to_string(), "127.0.0.1:4100");
    assert_eq!(c.hostname, "pod-7");
}

#[test]
fn empty_port_falls_back_to_default() {
    assert_eq!(cfg(&[("PORT", "")]).unwrap().port, 3000);
}

#[test]
fn invalid_values_fail() {
    let err = cfg(&[("PORT", "abc")]).expect_err("must fail");
    assert_eq!(err.client_code().as_str(), "CONFIG");
    assert!(cfg(&[("BIND_ADDR", "not-an-ip")]).is_err());
}
