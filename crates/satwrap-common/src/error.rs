//! Error types for satwrap.
//!
//! This module defines the error taxonomy using `thiserror`:
//! - [`HarnessError`]: Failures of a single solver invocation, from argument
//!   handling through path resolution to spawning the supervisor

use std::io;

use thiserror::Error;

/// Errors that can end a solver invocation.
///
/// Every variant is terminal for the invocation: nothing is retried. The
/// resolution and spawn failures happen before a result line is printed, so
/// the wrapper must exit without reporting a fabricated outcome.
#[derive(Error, Debug)]
pub enum HarnessError {
    /// The host (or configured) architecture width is neither 32 nor 64 bits.
    #[error("Unsupported architecture: {bits}-bit")]
    UnsupportedArchitecture {
        /// The detected pointer width in bits.
        bits: u32,
    },

    /// The requested solver is not one of the known solvers.
    #[error("Unknown solver: '{name}'")]
    UnknownSolver {
        /// The solver name after quote and space stripping.
        name: String,
    },

    /// The supervisor process could not be started.
    #[error("Failed to spawn '{program}': {source}")]
    SubprocessSpawnFailure {
        /// The executable that was being spawned.
        program: String,
        #[source]
        source: io::Error,
    },

    /// The supervisor output lacked a line that the outcome requires.
    ///
    /// This is never returned from classification; it is logged and the
    /// runtime field is reported empty.
    #[error("Output parse anomaly: {reason}")]
    OutputParseAnomaly {
        /// Description of what was missing or malformed.
        reason: String,
    },

    /// A command-line argument could not be interpreted.
    #[error("Invalid request: {reason}")]
    InvalidRequest {
        /// Description of the invalid argument.
        reason: String,
    },
}

impl HarnessError {
    /// Create a new `UnknownSolver` error.
    pub fn unknown_solver(name: impl Into<String>) -> Self {
        Self::UnknownSolver { name: name.into() }
    }

    /// Create a new `SubprocessSpawnFailure` error.
    pub fn spawn_failure(program: impl Into<String>, source: io::Error) -> Self {
        Self::SubprocessSpawnFailure {
            program: program.into(),
            source,
        }
    }

    /// Create a new `OutputParseAnomaly` error.
    pub fn output_parse_anomaly(reason: impl Into<String>) -> Self {
        Self::OutputParseAnomaly {
            reason: reason.into(),
        }
    }

    /// Create a new `InvalidRequest` error.
    pub fn invalid_request(reason: impl Into<String>) -> Self {
        Self::InvalidRequest {
            reason: reason.into(),
        }
    }

    /// Returns `true` if the failure happened while resolving executable paths.
    pub fn is_resolution_failure(&self) -> bool {
        matches!(
            self,
            Self::UnsupportedArchitecture { .. } | Self::UnknownSolver { .. }
        )
    }

    /// Returns `true` if the supervisor could not be started.
    pub fn is_spawn_failure(&self) -> bool {
        matches!(self, Self::SubprocessSpawnFailure { .. })
    }
}
