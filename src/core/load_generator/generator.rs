//! Load generator

use super::workload::Workload;
use std::sync::Arc;
use tracing::{trace, warn};

/// Issues one submission per tick, independent of completions
pub struct LoadGenerator {
    workload: Arc<dyn Workload>,
    ticks: u64,
    rejected: u64,
}

impl LoadGenerator {
    pub fn new(workload: Arc<dyn Workload>) -> Self {
        Self {
            workload,
            ticks: 0,
            rejected: 0,
        }
    }

    /// Submit exactly once. Returns whether the submission was admitted.
    pub fn tick(&mut self) -> bool {
        self.ticks += 1;
        match self.workload.submit() {
            Ok(()) => true,
            Err(e) => {
                self.rejected += 1;
                if e.is_task_failure() {
                    trace!(error = %e, "Submission rejected");
                } else {
                    warn!(kind = e.kind(), error = %e, "Submission failed");
                }
                false
            }
        }
    }

    pub fn workload(&self) -> &Arc<dyn Workload> {
        &self.workload
    }

    /// Total ticks since creation
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Ticks whose submission was refused at admission
    pub fn rejected(&self) -> u64 {
        self.rejected
    }
}
