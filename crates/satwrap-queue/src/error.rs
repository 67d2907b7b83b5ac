//! Error types for queue inspection.

use thiserror::Error;

/// Errors from talking to the job queue store.
#[derive(Error, Debug)]
pub enum QueueError {
    /// The store could not be reached.
    #[error("Failed to connect to queue store at {address}: {source}")]
    Connect {
        /// `host:port` that was dialed.
        address: String,
        #[source]
        source: redis::RedisError,
    },

    /// A length query failed.
    #[error("Failed to read length of list '{key}': {source}")]
    Command {
        /// The list that was queried.
        key: String,
        #[source]
        source: redis::RedisError,
    },
}

/// Result type for queue operations.
pub type QueueResult<T> = std::result::Result<T, QueueError>;
