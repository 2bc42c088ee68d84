//! appmon chart service library entry.
//!
//! Fetches the current snapshot from the metrics service and renders it as a
//! PNG bar chart. The drawing layer (`render`, `font`) has no HTTP
//! dependencies and can be used on its own.

pub mod app_state;
pub mod chart;
pub mod config;
pub mod error;
pub mod font;
pub mod handlers;
pub mod ops;
pub mod render;
pub mod router;
pub mod upstream;
