//! Fixed-size worker pools with bounded FIFO admission queues
//!
//! A full queue rejects immediately instead of blocking the submitter, and
//! shutdown abandons whatever is still queued.

mod context;
mod pool;
mod types;


pub use context::{Awaited, WorkerContext};
pub use pool::WorkerPool;
pub use types::{Job, PoolStats};
