//! Task scheduler bound to an external and an internal pool

use super::task::external_task;
use crate::config::TaskConfig;
use crate::core::counters::{CounterCell, CounterSnapshot};
use crate::core::load_generator::Workload;
use crate::core::pool::{WorkerContext, WorkerPool};
use crate::utils::error::{LoopbackError, Result};
use std::sync::Arc;
use tracing::debug;

/// Submits chained tasks and tallies their outcomes.
///
/// The external and internal roles may point at the same pool.
#[derive(Clone)]
pub struct TaskScheduler {
    inner: Arc<SchedulerInner>,
}

struct SchedulerInner {
    external: Arc<WorkerPool>,
    internal: Arc<WorkerPool>,
    counters: CounterCell,
    timings: TaskConfig,
}

impl TaskScheduler {
    pub fn new(external: Arc<WorkerPool>, internal: Arc<WorkerPool>, timings: TaskConfig) -> Self {
        Self {
            inner: Arc::new(SchedulerInner {
                external,
                internal,
                counters: CounterCell::new(),
                timings,
            }),
        }
    }

    /// Both roles on one pool
    pub fn shared(pool: Arc<WorkerPool>, timings: TaskConfig) -> Self {
        Self::new(pool.clone(), pool, timings)
    }

    /// Enqueue one external task without blocking.
    ///
    /// A rejection is recorded as an error before it is returned; every
    /// admitted task records exactly one outcome when it finishes.
    pub fn submit(&self) -> Result<()> {
        let inner = self.inner.clone();
        let admitted = self
            .inner
            .external
            .try_execute(move |ctx| inner.run_external(ctx));

        admitted.map_err(|reason| {
            self.inner.counters.record_error();
            LoopbackError::admission_rejected(self.inner.external.name(), reason)
        })
    }

    pub fn counters(&self) -> &CounterCell {
        &self.inner.counters
    }

    pub fn snapshot_and_reset(&self) -> CounterSnapshot {
        self.inner.counters.snapshot_and_reset()
    }

    pub fn external_pool(&self) -> &Arc<WorkerPool> {
        &self.inner.external
    }

    pub fn internal_pool(&self) -> &Arc<WorkerPool> {
        &self.inner.internal
    }

    pub fn timings(&self) -> &TaskConfig {
        &self.inner.timings
    }
}

impl SchedulerInner {
    /// Task boundary: every failure becomes an error count here.
    fn run_external(&self, ctx: &WorkerContext) {
        match external_task(ctx, &self.internal, &self.timings) {
            Ok(()) => self.counters.record_success(),
            Err(e) => {
                debug!(
                    pool = ctx.pool_name(),
                    worker = ctx.worker_id(),
                    kind = e.kind(),
                    error = %e,
                    "External task failed"
                );
                self.counters.record_error();
            }
        }
    }
}

impl Workload for TaskScheduler {
    fn submit(&self) -> Result<()> {
        TaskScheduler::submit(self)
    }

    fn take_counters(&self) -> CounterSnapshot {
        self.snapshot_and_reset()
    }
}
