//! Per-worker execution context

use crate::utils::error::{LoopbackError, Result};
use crossbeam::channel::{Receiver, RecvTimeoutError, TryRecvError, select};
use std::sync::Arc;
use std::time::Duration;

/// Result of a bounded wait on another job
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Awaited<T> {
    /// The value arrived before the deadline
    Ready(T),
    /// The deadline passed first
    TimedOut,
    /// The waiting worker's pool shut down
    Interrupted,
    /// The producer was dropped without sending, e.g. abandoned in a queue
    Abandoned,
}

/// Handle given to every job: identifies the worker and exposes
/// waits that end early when the pool shuts down.
#[derive(Debug, Clone)]
pub struct WorkerContext {
    pool: Arc<str>,
    worker_id: usize,
    shutdown: Receiver<()>,
}

impl WorkerContext {
    pub(super) fn new(pool: Arc<str>, worker_id: usize, shutdown: Receiver<()>) -> Self {
        Self {
            pool,
            worker_id,
            shutdown,
        }
    }

    pub(super) fn shutdown_signal(&self) -> &Receiver<()> {
        &self.shutdown
    }

    pub fn pool_name(&self) -> &str {
        &self.pool
    }

    pub fn worker_id(&self) -> usize {
        self.worker_id
    }

    /// Whether the owning pool has begun shutting down
    pub fn is_shutting_down(&self) -> bool {
        matches!(self.shutdown.try_recv(), Err(TryRecvError::Disconnected))
    }

    /// Sleep for `duration`, failing with `Interrupted` on pool shutdown
    pub fn sleep(&self, duration: Duration) -> Result<()> {
        match self.shutdown.recv_timeout(duration) {
            Err(RecvTimeoutError::Timeout) => Ok(()),
            _ => Err(LoopbackError::interrupted(format!(
                "pool '{}' shut down while worker {} was sleeping",
                self.pool, self.worker_id
            ))),
        }
    }

    /// Block this worker until `rx` yields, `timeout` elapses or the pool shuts down.
    ///
    /// The worker stays occupied for the whole wait.
    pub fn await_with_deadline<T>(&self, rx: &Receiver<T>, timeout: Duration) -> Awaited<T> {
        select! {
            recv(rx) -> value => match value {
                Ok(value) => Awaited::Ready(value),
                Err(_) => Awaited::Abandoned,
            },
            recv(self.shutdown) -> _ => Awaited::Interrupted,
            default(timeout) => Awaited::TimedOut,
        }
    }
}
