//! Stability controller configuration

use super::*;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Offered-load ramp and reporting cadence
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ControllerConfig {
    /// Requests per second offered before the first rate increase
    #[serde(default = "default_initial_rate")]
    pub initial_rate: u64,
    /// Requests per second added after every window; also the stability threshold
    #[serde(default = "default_rate_increment")]
    pub rate_increment: u64,
    /// Length of one reporting window
    #[serde(default = "default_report_interval_ms")]
    pub report_interval_ms: u64,
}

impl Default for ControllerConfig {
    fn default() -> Self {
        Self {
            initial_rate: default_initial_rate(),
            rate_increment: default_rate_increment(),
            report_interval_ms: default_report_interval_ms(),
        }
    }
}

impl ControllerConfig {
    pub fn report_interval(&self) -> Duration {
        Duration::from_millis(self.report_interval_ms)
    }
}
