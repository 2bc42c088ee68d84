//! Chart service config, resolved from the environment at startup.
//!
//! | Var                   | Default     |
//! |-----------------------|-------------|
//! | `PORT`                | `8888`      |
//! | `BIND_ADDR`           | `0.0.0.0`   |
//! | `SERVICE_NAME`        | `localhost` |
//! | `APP_PORT`            | `3000`      |
//! | `UPSTREAM_TIMEOUT_MS` | unset       |
//! | `CHART_WIDTH`         | `1024`      |

use std::net::{IpAddr, SocketAddr};
use std::time::Duration;

use appmon_core::env::{non_empty, parse_port, process_env};
use appmon_core::error::{AppMonError, Result};

pub const DEFAULT_PORT: u16 = 8888;
pub const DEFAULT_UPSTREAM_HOST: &str = "localhost";
pub const DEFAULT_UPSTREAM_PORT: u16 = 3000;
pub const DEFAULT_CHART_WIDTH: u32 = 1024;
const MAX_CHART_WIDTH: u32 = 8192;
const DEFAULT_BIND_ADDR: &str = "0.0.0.0";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChartConfig {
    pub bind_addr: IpAddr,
    pub port: u16,
    pub upstream_host: String,
    pub upstream_port: u16,
    /// `None` waits on the upstream indefinitely.
    pub upstream_timeout: Option<Duration>,
    /// Rendered image width in pixels; the height is fixed.
    pub chart_width: u32,
}

impl ChartConfig {
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
        let upstream_port = match non_empty(&lookup, "APP_PORT") {
            Some(raw) => parse_port("APP_PORT", &raw)?,
            None => DEFAULT_UPSTREAM_PORT,
        };
        let upstream_host =
            non_empty(&lookup, "SERVICE_NAME").unwrap_or_else(|| DEFAULT_UPSTREAM_HOST.into());

        let bind_raw = non_empty(&lookup, "BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.into());
        let bind_addr: IpAddr = bind_raw
            .parse()
            .map_err(|e| AppMonError::Config(format!("BIND_ADDR={bind_raw:?}: {e}")))?;

        let upstream_timeout = match non_empty(&lookup, "UPSTREAM_TIMEOUT_MS") {
            Some(raw) => {
                let ms: u64 = raw.trim().parse().map_err(|e| {
                    AppMonError::Config(format!("UPSTREAM_TIMEOUT_MS={raw:?}: {e}"))
                })?;
                if ms == 0 {
                    return Err(AppMonError::Config("UPSTREAM_TIMEOUT_MS must not be 0".into()));
                }
                Some(Duration::from_millis(ms))
            }
            None => None,
        };

        let chart_width = match non_empty(&lookup, "CHART_WIDTH") {
            Some(raw) => {
                let w: u32 = raw
                    .trim()
                    .parse()
                    .map_err(|e| AppMonError::Config(format!("CHART_WIDTH={raw:?}: {e}")))?;
                if w == 0 || w > MAX_CHART_WIDTH {
                    return Err(AppMonError::Config(format!(
                        "CHART_WIDTH must be between 1 and {MAX_CHART_WIDTH}"
                    )));
                }
                w
            }
            None => DEFAULT_CHART_WIDTH,
        };

        Ok(Self {
            bind_addr,
            port,
            upstream_host,
            upstream_port,
            upstream_timeout,
            chart_width,
        })
    }

    pub fn listen(&self) -> SocketAddr {
        SocketAddr::new(self.bind_addr, self.port)
    }

    pub fn metrics_url(&self) -> String {
        format!("http://{}:{}/metrics", self.upstream_host, self.upstream_port)
    }
}
