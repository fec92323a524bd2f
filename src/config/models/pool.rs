//! Worker pool and topology configuration

use serde::{Deserialize, Serialize};

/// A fixed-size worker set behind a bounded FIFO admission queue
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PoolConfig {
    /// Name used in thread names and log fields
    pub name: String,
    /// Number of worker threads
    pub workers: usize,
    /// Maximum number of jobs waiting for a free worker
    pub queue_capacity: usize,
}

impl PoolConfig {
    pub fn new<S: Into<String>>(name: S, workers: usize, queue_capacity: usize) -> Self {
        Self {
            name: name.into(),
            workers,
            queue_capacity,
        }
    }
}

/// How the external and internal task roles map onto pools
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TopologyConfig {
    /// Both roles share one pool
    Shared { pool: PoolConfig },
    /// Each role has its own pool
    Isolated {
        external: PoolConfig,
        internal: PoolConfig,
    },
}

impl TopologyConfig {
    /// Every pool this topology creates, external first
    pub fn pools(&self) -> Vec<&PoolConfig> {
        match self {
            Self::Shared { pool } => vec![pool],
            Self::Isolated { external, internal } => vec![external, internal],
        }
    }

    pub fn is_shared(&self) -> bool {
        matches!(self, Self::Shared { .. })
    }
}
