//! Controller state types

use std::time::Instant;

/// Controller lifecycle; `Stable` is terminal
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControllerState {
    Running,
    Stable,
}

/// Offered rate and when it last changed
#[derive(Debug, Clone, Copy)]
pub struct RateState {
    /// Requests per second
    pub current_rate: u64,
    pub last_increase: Instant,
}

impl RateState {
    pub fn new(current_rate: u64) -> Self {
        Self {
            current_rate,
            last_increase: Instant::now(),
        }
    }
}
