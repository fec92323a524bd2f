//! Utility modules
//!
//! - **error**: crate error type and helpers
//! - **logging**: tracing subscriber setup

pub mod error;
pub mod logging;

pub use error::{LoopbackError, PoolRejection, Result};

use std::time::Duration;

/// Format duration as human readable string
pub fn format_duration(duration: Duration) -> String {
    let duration_ms = duration.as_millis();
    if duration_ms < 1000 {
        format!("{}ms", duration_ms)
    } else if duration_ms < 60_000 {
        format!("{:.1}s", duration_ms as f64 / 1000.0)
    } else if duration_ms < 3_600_000 {
        format!("{:.1}m", duration_ms as f64 / 60_000.0)
    } else {
        format!("{:.1}h", duration_ms as f64 / 3_600_000.0)
    }
}
