//! The end-to-end solver invocation.
//!
//! [`InvocationReporter`] ties the pieces together:
//!
//! 1. Resolve supervisor and solver paths for the host width
//! 2. Build the supervisor command line
//! 3. Run it to completion, timing from just before the spawn
//! 4. Classify stdout into a [`InvocationResult`]

use satwrap_common::{HarnessError, WrapperConfig};
use tracing::{info, instrument};

use crate::classify::{Outcome, classify};
use crate::report::InvocationResult;
use crate::request::InvocationRequest;
use crate::resolve::resolve_paths;
use crate::runner::{
    CapturedOutput, Clock, ProcessRunner, SupervisorCommand, SystemClock, SystemRunner,
};

/// A finished invocation: the result line plus the raw supervisor output.
#[derive(Debug, Clone)]
pub struct Report {
    pub result: InvocationResult,
    pub output: CapturedOutput,
}

impl Report {
    /// Returns `true` if the supervisor output matched no known outcome.
    pub fn is_crashed(&self) -> bool {
        self.result.outcome == Outcome::Crashed
    }
}

/// Runs one solver under the supervisor and classifies the result.
///
/// The process runner and clock are injectable so the reporter can be
/// exercised without real solver binaries.
#[derive(Debug)]
pub struct InvocationReporter<R = SystemRunner, C = SystemClock> {
    config: WrapperConfig,
    runner: R,
    clock: C,
}

impl InvocationReporter {
    /// Create a reporter that spawns real processes.
    pub fn new(config: WrapperConfig) -> Self {
        Self::with_parts(config, SystemRunner, SystemClock)
    }
}

impl<R: ProcessRunner, C: Clock> InvocationReporter<R, C> {
    /// Create a reporter with a custom runner and clock.
    pub fn with_parts(config: WrapperConfig, runner: R, clock: C) -> Self {
        Self {
            config,
            runner,
            clock,
        }
    }

    /// Run the request.
    ///
    /// # Errors
    ///
    /// Resolution failures are returned before anything is spawned. A
    /// supervisor that cannot be started is a
    /// [`HarnessError::SubprocessSpawnFailure`], never a `CRASHED` result.
    #[instrument(skip_all, fields(instance = %request.instance, solver = %request.solver_name))]
    pub fn run(&self, request: &InvocationRequest) -> Result<Report, HarnessError> {
        let paths = resolve_paths(&self.config, &request.solver_name)?;
        let command = SupervisorCommand::new(&paths, self.config.memory_limit_mb, request);

        info!(
            width = %paths.width,
            cutoff_secs = request.cutoff_time.seconds(),
            command = %command,
            "Starting supervisor"
        );

        let start = self.clock.now();
        let output = self.runner.run(&command)?;
        let elapsed = self.clock.now().saturating_duration_since(start);

        let classification = classify(&output.stdout, &request.cutoff_time, elapsed);
        let result = InvocationResult::new(classification, request.seed.clone());

        info!(
            outcome = %result.outcome,
            runtime = %result.runtime,
            elapsed_ms = u64::try_from(elapsed.as_millis()).unwrap_or(u64::MAX),
            "Invocation finished"
        );

        Ok(Report { result, output })
    }
}
