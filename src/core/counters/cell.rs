//! Swappable holder for the live counters

use super::types::{CounterSnapshot, Counters, TaskOutcome};
use arc_swap::ArcSwap;
use std::sync::Arc;

/// Atomic reference to the current window's [`Counters`].
///
/// Writers take a full reference for the duration of one increment, so after
/// [`snapshot_and_reset`](Self::snapshot_and_reset) swaps in a fresh instance
/// the retired one is read only once every in-flight increment has landed.
/// An outcome is therefore counted in exactly one window.
#[derive(Debug)]
pub struct CounterCell {
    current: ArcSwap<Counters>,
}

impl Default for CounterCell {
    fn default() -> Self {
        Self::new()
    }
}

impl CounterCell {
    pub fn new() -> Self {
        Self {
            current: ArcSwap::from_pointee(Counters::new()),
        }
    }

    pub fn record(&self, outcome: TaskOutcome) {
        self.current.load_full().record(outcome);
    }

    pub fn record_success(&self) {
        self.record(TaskOutcome::Success);
    }

    pub fn record_error(&self) {
        self.record(TaskOutcome::Error);
    }

    /// Current tallies without resetting them
    pub fn peek(&self) -> CounterSnapshot {
        let counters = self.current.load();
        CounterSnapshot::new(counters.success_count(), counters.error_count())
    }

    /// Exchange the live counters for a zeroed instance and return the old tallies
    pub fn snapshot_and_reset(&self) -> CounterSnapshot {
        let mut retired = self.current.swap(Arc::new(Counters::new()));
        loop {
            match Arc::try_unwrap(retired) {
                Ok(counters) => return counters.into_snapshot(),
                Err(shared) => {
                    // A writer loaded the old instance just before the swap.
                    retired = shared;
                    std::thread::yield_now();
                }
            }
        }
    }
}
