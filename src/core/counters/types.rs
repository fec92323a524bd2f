//! Counter types

use std::sync::atomic::{AtomicU64, Ordering};

/// Terminal result of one submitted task
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskOutcome {
    Success,
    Error,
}

/// Live tallies for the current window
#[derive(Debug, Default)]
pub struct Counters {
    success_count: AtomicU64,
    error_count: AtomicU64,
}

impl Counters {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn record(&self, outcome: TaskOutcome) {
        let counter = match outcome {
            TaskOutcome::Success => &self.success_count,
            TaskOutcome::Error => &self.error_count,
        };
        counter.fetch_add(1, Ordering::Relaxed);
    }

    pub fn success_count(&self) -> u64 {
        self.success_count.load(Ordering::Relaxed)
    }

    pub fn error_count(&self) -> u64 {
        self.error_count.load(Ordering::Relaxed)
    }

    /// Freeze into a plain snapshot. Takes `self` so no writer can remain.
    pub fn into_snapshot(self) -> CounterSnapshot {
        CounterSnapshot {
            success_count: self.success_count.into_inner(),
            error_count: self.error_count.into_inner(),
        }
    }
}

/// Immutable tallies of one finished window
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CounterSnapshot {
    pub success_count: u64,
    pub error_count: u64,
}

impl CounterSnapshot {
    pub fn new(success_count: u64, error_count: u64) -> Self {
        Self {
            success_count,
            error_count,
        }
    }

    /// Outcomes of any kind recorded in the window
    pub fn total(&self) -> u64 {
        self.success_count + self.error_count
    }
}
