//! appmon metrics service library entry.
//!
//! Serves a randomly regenerated `Metric` snapshot over `/metrics` and
//! `/metrics/:appname`. The binary (`main.rs`) and the integration tests both
//! build the router through this crate.

pub mod app_state;
pub mod config;
pub mod error;
pub mod generator;
pub mod handlers;
pub mod ops;
pub mod repo;
pub mod router;
