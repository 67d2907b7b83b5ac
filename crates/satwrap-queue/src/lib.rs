//! Job queue inspection for satwrap.
//!
//! Solver jobs are distributed through three lists in a Redis store:
//! - `<qname>`: jobs waiting to be picked up
//! - `<qname>_PROCESSING`: jobs currently claimed by a worker
//! - `<qname>_TIMEOUTS`: jobs that ran out of time
//!
//! [`QueueStats::collect`] reads the three lengths through a [`QueueBackend`]
//! without modifying anything.

pub mod backend;
pub mod error;
pub mod stats;

pub use backend::{QueueBackend, RedisBackend};
pub use error::{QueueError, QueueResult};
pub use stats::{QueueStats, list_keys};
