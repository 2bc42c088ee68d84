//! Environment lookup helpers.
//!
//! Both services resolve their settings through a lookup closure rather than
//! reading `std::env` directly, so tests can feed a fixed map.

use crate::error::{AppMonError, Result};

/// Return the value for `key`, treating an empty string as unset.
pub fn non_empty<F>(lookup: &F, key: &str) -> Option<String>
where
    F: Fn(&str) -> Option<String>,
{
    lookup(key).filter(|v| !v.is_empty())
}

/// Parse a TCP port. Zero is rejected since it would bind an ephemeral port.
pub fn parse_port(key: &str, raw: &str) -> Result<u16> {
    match raw.trim().parse::<u16>() {
        Ok(0) => Err(AppMonError::Config(format!("{key} must not be 0"))),
        Ok(p) => Ok(p),
        Err(e) => Err(AppMonError::Config(format!("{key}={raw:?} is not a valid port: {e}"))),
    }
}

/// Lookup backed by the process environment.
pub fn process_env(key: &str) -> Option<String> {
    std::env::var(key).ok()
}
