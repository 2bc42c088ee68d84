//! Metrics service config, resolved from the environment at startup.
//!
//! | Var         | Default   |
//! |-------------|-----------|
//! | `PORT`      | `3000`    |
//! | `BIND_ADDR` | `0.0.0.0` |
//! | `HOSTNAME`  | empty     |

use std::net::{IpAddr, SocketAddr};

use appmon_core::env::{non_empty, parse_port, process_env};
use appmon_core::error::{AppMonError, Result};

pub const DEFAULT_PORT: u16 = 3000;
const DEFAULT_BIND_ADDR: &str = "0.0.0.0";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetricsConfig {
    pub bind_addr: IpAddr,
    pub port: u16,
    /// Reported as `host` in every generated snapshot.
    pub hostname: String,
}

impl MetricsConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(process_env)
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let port = match non_empty(&lookup, "PORT") {
            Some(raw) => parse_port("PORT", &raw)?,
            None => DEFAULT_PORT,
        };

        let bind_raw = non_empty(&lookup, "BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.into());
        let bind_addr: IpAddr = bind_raw
            .parse()
            .map_err(|e| AppMonError::Config(format!("BIND_ADDR={bind_raw:?}: {e}")))?;

        Ok(Self {
            bind_addr,
            port,
            hostname: lookup("HOSTNAME").unwrap_or_default(),
        })
    }

    pub fn listen(&self) -> SocketAddr {
        SocketAddr::new(self.bind_addr, self.port)
    }
}
