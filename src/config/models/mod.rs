//! Configuration data models
//!
//! This module defines all configuration structures used by the experiment.

#![allow(missing_docs)]

pub mod controller;
pub mod pool;
pub mod scenario;
pub mod task;

// Re-export all configuration types
pub use controller::*;
pub use pool::*;
pub use scenario::*;
pub use task::*;

/// Synthetic processing time of both task stages, in milliseconds
pub fn default_processing_time_ms() -> u64 {
    150
}

/// Deadline of the nested internal call, in milliseconds
pub fn default_internal_timeout_ms() -> u64 {
    1000
}

/// Offered load at the start of a run, in requests per second
pub fn default_initial_rate() -> u64 {
    30
}

/// Rate step applied after every reporting window
pub fn default_rate_increment() -> u64 {
    10
}

/// Reporting window length, in milliseconds
pub fn default_report_interval_ms() -> u64 {
    1000
}

pub fn default_window_capacity() -> usize {
    10
}
