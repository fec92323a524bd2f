//! Worker pool types

use super::context::WorkerContext;
use std::sync::atomic::{AtomicU64, AtomicUsize, Ordering};

/// Unit of work executed by a pool worker
pub type Job = Box<dyn FnOnce(&WorkerContext) + Send + 'static>;

/// Point-in-time view of a pool
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PoolStats {
    pub name: String,
    pub workers: usize,
    pub queue_capacity: usize,
    /// Jobs admitted but not yet picked up by a worker
    pub queued: usize,
    /// Workers currently running a job
    pub active: usize,
    pub completed: u64,
    pub rejected: u64,
    /// Jobs dropped unexecuted because the pool shut down
    pub abandoned: u64,
    pub shut_down: bool,
}

/// Shared counters updated by workers and submitters
#[derive(Debug, Default)]
pub(super) struct PoolCounters {
    pub(super) active: AtomicUsize,
    pub(super) completed: AtomicU64,
    pub(super) rejected: AtomicU64,
    pub(super) abandoned: AtomicU64,
}

impl PoolCounters {
    pub(super) fn job_started(&self) {
        self.active.fetch_add(1, Ordering::Relaxed);
    }

    pub(super) fn job_finished(&self) {
        self.active.fetch_sub(1, Ordering::Relaxed);
        self.completed.fetch_add(1, Ordering::Relaxed);
    }

    pub(super) fn job_rejected(&self) {
        self.rejected.fetch_add(1, Ordering::Relaxed);
    }

    pub(super) fn jobs_abandoned(&self, count: u64) {
        self.abandoned.fetch_add(count, Ordering::Relaxed);
    }
}
