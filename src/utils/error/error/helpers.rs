//! Helper functions for creating and classifying errors

use super::types::{LoopbackError, PoolRejection};

impl LoopbackError {
    pub fn admission_rejected<S: Into<String>>(pool: S, reason: PoolRejection) -> Self {
        Self::AdmissionRejected {
            pool: pool.into(),
            reason,
        }
    }

    pub fn internal_rejected<S: Into<String>>(pool: S, reason: PoolRejection) -> Self {
        Self::InternalRejected {
            pool: pool.into(),
            reason,
        }
    }

    pub fn interrupted<S: Into<String>>(message: S) -> Self {
        Self::Interrupted(message.into())
    }

    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config(message.into())
    }

    pub fn internal<S: Into<String>>(message: S) -> Self {
        Self::Internal(message.into())
    }

    /// Whether this error ends a single task rather than the run.
    ///
    /// Task failures are folded into the error counter; anything else is an
    /// infrastructure fault.
    pub fn is_task_failure(&self) -> bool {
        matches!(
            self,
            Self::AdmissionRejected { .. }
                | Self::InternalRejected { .. }
                | Self::InternalTimeout(_)
                | Self::Interrupted(_)
        )
    }

    /// Short label used in structured log fields
    pub fn kind(&self) -> &'static str {
        match self {
            Self::AdmissionRejected { .. } => "admission_rejected",
            Self::InternalRejected { .. } => "internal_rejected",
            Self::InternalTimeout(_) => "internal_timeout",
            Self::Interrupted(_) => "interrupted",
            Self::Config(_) => "config",
            Self::Yaml(_) => "yaml",
            Self::Io(_) => "io",
            Self::Internal(_) => "internal",
        }
    }
}
