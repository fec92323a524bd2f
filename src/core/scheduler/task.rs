//! Bodies of the two task stages

use crate::config::TaskConfig;
use crate::core::pool::{Awaited, WorkerContext, WorkerPool};
use crate::utils::error::{LoopbackError, Result};
use crossbeam::channel;
use std::time::Duration;

/// Outer stage: loopback call with a deadline, then post-processing.
///
/// Nothing is retried. An internal task still running when the deadline
/// passes is left to finish on its worker.
pub(super) fn external_task(
    ctx: &WorkerContext,
    internal: &WorkerPool,
    timings: &TaskConfig,
) -> Result<()> {
    let processing_time = timings.processing_time();
    let (done_tx, done_rx) = channel::bounded::<Result<()>>(1);

    internal
        .try_execute(move |ctx| {
            // The caller may have given up already.
            let _ = done_tx.send(internal_task(ctx, processing_time));
        })
        .map_err(|reason| LoopbackError::internal_rejected(internal.name(), reason))?;

    let timeout = timings.internal_timeout();
    match ctx.await_with_deadline(&done_rx, timeout) {
        Awaited::Ready(result) => result?,
        Awaited::TimedOut => return Err(LoopbackError::InternalTimeout(timeout)),
        Awaited::Interrupted => {
            return Err(LoopbackError::interrupted(format!(
                "pool '{}' shut down while waiting for internal task",
                ctx.pool_name()
            )));
        }
        Awaited::Abandoned => {
            return Err(LoopbackError::interrupted(format!(
                "internal task dropped by pool '{}' before it ran",
                internal.name()
            )));
        }
    }

    ctx.sleep(processing_time)
}

/// Inner stage: fixed synthetic work
pub(super) fn internal_task(ctx: &WorkerContext, processing_time: Duration) -> Result<()> {
    ctx.sleep(processing_time)
}
