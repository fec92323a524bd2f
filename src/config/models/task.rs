//! Synthetic task timing configuration

use super::*;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Timings of the chained external/internal task
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskConfig {
    /// Sleep performed by the internal task and, after it, by the external task
    #[serde(default = "default_processing_time_ms")]
    pub processing_time_ms: u64,
    /// How long the external task waits for its internal task
    #[serde(default = "default_internal_timeout_ms")]
    pub internal_timeout_ms: u64,
}

impl Default for TaskConfig {
    fn default() -> Self {
        Self {
            processing_time_ms: default_processing_time_ms(),
            internal_timeout_ms: default_internal_timeout_ms(),
        }
    }
}

impl TaskConfig {
    pub fn processing_time(&self) -> Duration {
        Duration::from_millis(self.processing_time_ms)
    }

    pub fn internal_timeout(&self) -> Duration {
        Duration::from_millis(self.internal_timeout_ms)
    }
}
