//! Report types

use std::fmt;

/// Outcome of one reporting window
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowReport {
    /// Offered rate during the window, requests per second
    pub rate: u64,
    pub success: u64,
    pub errors: u64,
    /// Submissions issued during the window
    pub ticks: u64,
}

impl fmt::Display for WindowReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "rate: {}, success: {}, errors: {}",
            self.rate, self.success, self.errors
        )
    }
}

/// Result of a run that reached stability
#[derive(Debug, Clone, PartialEq)]
pub struct StabilityReport {
    /// Rolling mean of the successes per window at convergence
    pub stable_throughput: f64,
    /// Rolling standard deviation at convergence
    pub std_dev: f64,
    /// Offered rate after the last increase
    pub final_rate: u64,
    pub windows: Vec<WindowReport>,
}

impl StabilityReport {
    /// Throughput rounded half-up to whole requests per second
    pub fn rounded_throughput(&self) -> u64 {
        self.stable_throughput.round() as u64
    }
}
