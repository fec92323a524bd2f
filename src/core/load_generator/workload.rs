//! The seam between load generation and task execution

use crate::core::counters::CounterSnapshot;
use crate::utils::error::Result;

/// Something that accepts submissions and tallies their outcomes
#[cfg_attr(test, mockall::automock)]
pub trait Workload: Send + Sync {
    /// Submit one unit of work without waiting for it.
    ///
    /// `Err` means the work was refused at admission.
    fn submit(&self) -> Result<()>;

    /// Return the tallies since the previous call and start a new window
    fn take_counters(&self) -> CounterSnapshot;
}
