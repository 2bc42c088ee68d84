//! appmon core: the metric data model, error types, and env helpers shared by
//! the metrics and chart services.
//!
//! This crate defines the JSON contract between the two services and the error
//! surface both of them map onto HTTP. It carries no transport or runtime
//! dependencies so it can be reused by either side and by tests.
//!
//! # Defensive guarantees
//! Panics, `unwrap`, and `expect` are compile-denied here
//! (`#![deny(clippy::panic, clippy::unwrap_used, clippy::expect_used)]`).
//! All fallible paths must surface as `AppMonError`/`Result`.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod env;
pub mod error;
pub mod metric;

/// Shared result type.
pub use error::{AppMonError, Result};
pub use metric::{Metric, MetricRequest, PerformanceIndex};
