//! Error types for the loopback experiment

use std::fmt;
use std::time::Duration;
use thiserror::Error;

/// Result type alias for the experiment
pub type Result<T> = std::result::Result<T, LoopbackError>;

/// Why a worker pool refused a job
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PoolRejection {
    /// The bounded admission queue had no free slot
    QueueFull,
    /// The pool has been shut down
    ShutDown,
}

impl fmt::Display for PoolRejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::QueueFull => f.write_str("queue full"),
            Self::ShutDown => f.write_str("pool shut down"),
        }
    }
}

/// Main error type for the experiment
#[derive(Error, Debug)]
pub enum LoopbackError {
    /// The external pool refused the task at submit time
    #[error("External task rejected by pool '{pool}': {reason}")]
    AdmissionRejected { pool: String, reason: PoolRejection },

    /// The internal pool refused the nested task
    #[error("Internal task rejected by pool '{pool}': {reason}")]
    InternalRejected { pool: String, reason: PoolRejection },

    /// The nested task did not complete before its deadline
    #[error("Internal task timed out after {0:?}")]
    InternalTimeout(Duration),

    /// A sleep or wait was cut short by shutdown
    #[error("Interrupted: {0}")]
    Interrupted(String),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// YAML parsing errors
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Internal errors
    #[error("Internal error: {0}")]
    Internal(String),
}
