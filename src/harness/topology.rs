//! Scoped ownership of a scenario's pools

use crate::config::{TaskConfig, TopologyConfig};
use crate::core::pool::{PoolStats, WorkerPool};
use crate::core::scheduler::TaskScheduler;
use crate::utils::error::{LoopbackError, Result};
use std::sync::Arc;

/// The pools of one topology. Dropping the guard shuts them down.
#[derive(Debug)]
pub struct PoolTopology {
    external: Arc<WorkerPool>,
    internal: Arc<WorkerPool>,
}

impl PoolTopology {
    pub fn build(config: &TopologyConfig) -> Result<Self> {
        match config {
            TopologyConfig::Shared { pool } => {
                let pool = WorkerPool::new(pool.clone())?;
                Ok(Self {
                    external: pool.clone(),
                    internal: pool,
                })
            }
            TopologyConfig::Isolated { external, internal } => {
                // If the second pool fails, dropping the first shuts it down.
                let external = WorkerPool::new(external.clone())?;
                let internal = WorkerPool::new(internal.clone())?;
                Ok(Self { external, internal })
            }
        }
    }

    pub fn is_shared(&self) -> bool {
        Arc::ptr_eq(&self.external, &self.internal)
    }

    pub fn external(&self) -> &Arc<WorkerPool> {
        &self.external
    }

    pub fn internal(&self) -> &Arc<WorkerPool> {
        &self.internal
    }

    /// Scheduler bound to this topology's pools
    pub fn scheduler(&self, timings: TaskConfig) -> TaskScheduler {
        TaskScheduler::new(self.external.clone(), self.internal.clone(), timings)
    }

    /// Stats of every distinct pool, external first
    pub fn stats(&self) -> Vec<PoolStats> {
        if self.is_shared() {
            vec![self.external.stats()]
        } else {
            vec![self.external.stats(), self.internal.stats()]
        }
    }

    /// Shut the pools down on the blocking pool and return their final stats.
    ///
    /// Joining worker threads can take as long as the slowest running job,
    /// so it stays off the runtime's own threads.
    pub async fn close(self) -> Result<Vec<PoolStats>> {
        tokio::task::spawn_blocking(move || {
            self.shutdown();
            self.stats()
        })
        .await
        .map_err(|e| LoopbackError::internal(format!("pool shutdown task failed: {}", e)))
    }

    /// Immediate shutdown of every pool, internal first. Idempotent.
    pub fn shutdown(&self) {
        self.internal.shutdown();
        if !self.is_shared() {
            self.external.shutdown();
        }
    }
}

impl Drop for PoolTopology {
    fn drop(&mut self) {
        self.shutdown();
    }
}
