//! List-length backends.

use redis::Commands;
use tracing::debug;

use crate::error::{QueueError, QueueResult};

/// A store holding named lists.
pub trait QueueBackend {
    /// Length of the list at `key`. A missing key has length zero.
    fn list_len(&mut self, key: &str) -> QueueResult<u64>;
}

/// [`QueueBackend`] over a blocking Redis connection.
pub struct RedisBackend {
    connection: redis::Connection,
}

impl RedisBackend {
    /// Open a connection to the store at `host:port`.
    ///
    /// # Errors
    ///
    /// Returns [`QueueError::Connect`] if the store cannot be reached.
    pub fn connect(host: &str, port: u16) -> QueueResult<Self> {
        let address = format!("{host}:{port}");
        let connect_err = |source| QueueError::Connect {
            address: address.clone(),
            source,
        };

        let client = redis::Client::open((host, port)).map_err(connect_err)?;
        let connection = client.get_connection().map_err(connect_err)?;

        debug!(%address, "Connected to queue store");
        Ok(Self { connection })
    }
}

impl QueueBackend for RedisBackend {
    fn list_len(&mut self, key: &str) -> QueueResult<u64> {
        self.connection
            .llen(key)
            .map_err(|source| QueueError::Command {
                key: key.to_string(),
                source,
            })
    }
}

impl std::fmt::Debug for RedisBackend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RedisBackend").finish_non_exhaustive()
    }
}
