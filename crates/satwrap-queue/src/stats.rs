//! Queue length report.

use std::fmt;

use tracing::{debug, instrument};

use crate::backend::QueueBackend;
use crate::error::QueueResult;

const PROCESSING_SUFFIX: &str = "_PROCESSING";
const TIMEOUTS_SUFFIX: &str = "_TIMEOUTS";

/// Keys of the pending, processing, and timed-out lists for `qname`.
pub fn list_keys(qname: &str) -> [String; 3] {
    [
        qname.to_string(),
        format!("{qname}{PROCESSING_SUFFIX}"),
        format!("{qname}{TIMEOUTS_SUFFIX}"),
    ]
}

/// Lengths of the three lists of one job queue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QueueStats {
    pub pending: u64,
    pub processing: u64,
    pub timeouts: u64,
}

impl QueueStats {
    /// Read the three list lengths, one query per list.
    #[instrument(skip(backend))]
    pub fn collect<B: QueueBackend + ?Sized>(backend: &mut B, qname: &str) -> QueueResult<Self> {
        let [pending_key, processing_key, timeouts_key] = list_keys(qname);

        let stats = Self {
            pending: backend.list_len(&pending_key)?,
            processing: backend.list_len(&processing_key)?,
            timeouts: backend.list_len(&timeouts_key)?,
        };

        debug!(?stats, "Queue lengths read");
        Ok(stats)
    }
}

impl fmt::Display for QueueStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "There are {} jobs in the queue", self.pending)?;
        writeln!(f, "There are {} jobs in the processing queue", self.processing)?;
        write!(f, "There are {} timeouts", self.timeouts)
    }
}
