//! Top-level facade crate for appmon.
//!
//! Re-exports the shared model and both services so users can depend on a single crate.

pub mod core {
    pub use appmon_core::*;
}

pub mod metrics {
    pub use appmon_metrics::*;
}

pub mod chart {
    pub use appmon_chart::*;
}
