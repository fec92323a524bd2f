//! Worker pool implementation

use super::context::WorkerContext;
use super::types::{Job, PoolCounters, PoolStats};
use crate::config::{PoolConfig, Validate};
use crate::utils::error::{PoolRejection, Result};
use crossbeam::channel::{self, Receiver, Sender, TrySendError, select};
use parking_lot::{Mutex, RwLock};
use std::panic::{AssertUnwindSafe, catch_unwind};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::thread::{self, JoinHandle};
use tracing::{debug, info, warn};

/// Fixed set of worker threads draining a bounded FIFO queue.
///
/// [`try_execute`](Self::try_execute) never blocks: a full queue is reported
/// as [`PoolRejection::QueueFull`]. Shutdown is immediate; queued jobs are
/// dropped without running and in-progress waits are interrupted.
pub struct WorkerPool {
    config: PoolConfig,
    name: Arc<str>,
    /// `None` once shut down
    sender: RwLock<Option<Sender<Job>>>,
    /// Kept for queue depth and for draining on shutdown
    queue: Receiver<Job>,
    /// Dropping the sender wakes every worker blocked on shutdown
    shutdown_tx: Mutex<Option<Sender<()>>>,
    workers: Mutex<Vec<JoinHandle<()>>>,
    counters: Arc<PoolCounters>,
    shut_down: AtomicBool,
}

impl std::fmt::Debug for WorkerPool {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WorkerPool")
            .field("name", &self.name)
            .field("workers", &self.config.workers)
            .field("queue_capacity", &self.config.queue_capacity)
            .field("shut_down", &self.is_shut_down())
            .finish()
    }
}

impl WorkerPool {
    /// Create a pool and start its workers
    pub fn new(config: PoolConfig) -> Result<Arc<Self>> {
        config.validate()?;

        let (sender, queue) = channel::bounded::<Job>(config.queue_capacity);
        let (shutdown_tx, shutdown_rx) = channel::bounded::<()>(0);
        let name: Arc<str> = Arc::from(config.name.as_str());

        let pool = Arc::new(Self {
            name: name.clone(),
            sender: RwLock::new(Some(sender)),
            queue: queue.clone(),
            shutdown_tx: Mutex::new(Some(shutdown_tx)),
            workers: Mutex::new(Vec::with_capacity(config.workers)),
            counters: Arc::new(PoolCounters::default()),
            shut_down: AtomicBool::new(false),
            config,
        });

        for worker_id in 0..pool.config.workers {
            let context = WorkerContext::new(name.clone(), worker_id, shutdown_rx.clone());
            let jobs = queue.clone();
            let counters = pool.counters.clone();

            let spawned = thread::Builder::new()
                .name(format!("{}-worker-{}", name, worker_id))
                .spawn(move || worker_loop(jobs, context, counters));

            match spawned {
                Ok(handle) => pool.workers.lock().push(handle),
                Err(e) => {
                    pool.shutdown();
                    return Err(e.into());
                }
            }
        }

        info!(
            pool = %pool.name,
            workers = pool.config.workers,
            queue_capacity = pool.config.queue_capacity,
            "Worker pool started"
        );
        Ok(pool)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn config(&self) -> &PoolConfig {
        &self.config
    }

    /// Admit a job if the queue has room
    pub fn try_execute<F>(&self, job: F) -> std::result::Result<(), PoolRejection>
    where
        F: FnOnce(&WorkerContext) + Send + 'static,
    {
        let job: Job = Box::new(job);

        // The write lock taken by shutdown orders every admission before the drain.
        let outcome = {
            let sender = self.sender.read();
            match sender.as_ref() {
                Some(sender) => sender.try_send(job),
                None => Err(TrySendError::Disconnected(job)),
            }
        };

        // A rejected job is dropped here, outside the lock.
        match outcome {
            Ok(()) => Ok(()),
            Err(TrySendError::Full(_)) => {
                self.counters.job_rejected();
                Err(PoolRejection::QueueFull)
            }
            Err(TrySendError::Disconnected(_)) => {
                self.counters.job_rejected();
                Err(PoolRejection::ShutDown)
            }
        }
    }

    pub fn stats(&self) -> PoolStats {
        PoolStats {
            name: self.name.to_string(),
            workers: self.config.workers,
            queue_capacity: self.config.queue_capacity,
            queued: self.queue.len(),
            active: self.counters.active.load(Ordering::Relaxed),
            completed: self.counters.completed.load(Ordering::Relaxed),
            rejected: self.counters.rejected.load(Ordering::Relaxed),
            abandoned: self.counters.abandoned.load(Ordering::Relaxed),
            shut_down: self.is_shut_down(),
        }
    }

    pub fn is_shut_down(&self) -> bool {
        self.shut_down.load(Ordering::Acquire)
    }

    /// Stop accepting work, drop queued jobs, interrupt running waits and
    /// join the workers. Returns the number of queued jobs dropped.
    ///
    /// Calling it again is a no-op.
    pub fn shutdown(&self) -> usize {
        if self.shut_down.swap(true, Ordering::AcqRel) {
            return 0;
        }

        let sender = self.sender.write().take();
        drop(sender);
        let signal = self.shutdown_tx.lock().take();
        drop(signal);

        let abandoned = self.queue.try_iter().count();
        self.counters.jobs_abandoned(abandoned as u64);

        let workers = std::mem::take(&mut *self.workers.lock());
        let current = thread::current().id();
        for handle in workers {
            if handle.thread().id() == current {
                continue;
            }
            if handle.join().is_err() {
                warn!(pool = %self.name, "Worker thread panicked");
            }
        }

        info!(pool = %self.name, abandoned, "Worker pool shut down");
        abandoned
    }
}

impl Drop for WorkerPool {
    fn drop(&mut self) {
        self.shutdown();
    }
}

fn worker_loop(jobs: Receiver<Job>, context: WorkerContext, counters: Arc<PoolCounters>) {
    debug!(
        pool = context.pool_name(),
        worker = context.worker_id(),
        "Worker started"
    );

    loop {
        select! {
            recv(jobs) -> job => {
                let Ok(job) = job else { break };
                if context.is_shutting_down() {
                    counters.jobs_abandoned(1);
                    break;
                }

                counters.job_started();
                if catch_unwind(AssertUnwindSafe(|| job(&context))).is_err() {
                    warn!(
                        pool = context.pool_name(),
                        worker = context.worker_id(),
                        "Job panicked"
                    );
                }
                counters.job_finished();
            },
            recv(context.shutdown_signal()) -> _ => break,
        }
    }

    debug!(
        pool = context.pool_name(),
        worker = context.worker_id(),
        "Worker stopped"
    );
}
