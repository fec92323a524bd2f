//! Run reports and the line-oriented console output

mod reporter;
mod types;

pub use reporter::{MemoryReporter, Reporter, StdoutReporter};
pub use types::{StabilityReport, WindowReport};
