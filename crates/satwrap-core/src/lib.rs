//! Solver invocation and reporting for satwrap.
//!
//! This crate runs one SAT solver under the `runsolver` supervisor and turns
//! its output into a ParamILS result line:
//! - [`InvocationRequest`]: Positional arguments from the configurator
//! - [`resolve_paths`]: Supervisor and solver executables for the host width
//! - [`SystemRunner`]: Spawns the supervisor and captures its output
//! - [`classify`]: Maps supervisor output to an [`Outcome`] and runtime
//! - [`InvocationReporter`]: The whole pipeline, with injectable runner and clock
//!
//! # Flow
//!
//! ```text
//! args ──► InvocationRequest ──► ResolvedPaths ──► SupervisorCommand
//!                                                        │
//!                                                        ▼
//!          InvocationResult ◄── Classification ◄── CapturedOutput
//! ```

pub mod classify;
pub mod report;
pub mod reporter;
pub mod request;
pub mod resolve;
pub mod runner;

pub use classify::{Classification, Outcome, Runtime, classify};
pub use report::InvocationResult;
pub use reporter::{InvocationReporter, Report};
pub use request::{CutoffTime, InvocationRequest, Seed};
pub use resolve::{ResolvedPaths, resolve_paths};
pub use runner::{
    CapturedOutput, Clock, ProcessRunner, SupervisorCommand, SystemClock, SystemRunner,
};
