//! Supervisor command construction and execution.
//!
//! The supervisor is started as
//! `<runsolver> -M <memory_mb> -C <cutoff> <solver> <instance>`. The argument
//! vector is passed to the OS directly, without a shell in between, and both
//! output streams are read to EOF before returning.

use std::ffi::OsString;
use std::fmt;
use std::path::PathBuf;
use std::process::{Command, Stdio};
use std::time::Instant;

use satwrap_common::HarnessError;
use tracing::{debug, instrument};

use crate::request::InvocationRequest;
use crate::resolve::ResolvedPaths;

/// A fully built supervisor command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SupervisorCommand {
    pub program: PathBuf,
    pub args: Vec<OsString>,
}

impl SupervisorCommand {
    /// Wrap the resolved solver in the supervisor with the given limits.
    pub fn new(paths: &ResolvedPaths, memory_limit_mb: u32, request: &InvocationRequest) -> Self {
        let args: Vec<OsString> = vec![
            "-M".into(),
            memory_limit_mb.to_string().into(),
            "-C".into(),
            request.cutoff_time.as_str().into(),
            paths.solver_path.clone().into_os_string(),
            request.instance.clone().into(),
        ];

        Self {
            program: paths.supervisor_path.clone(),
            args,
        }
    }

    /// Convert into a [`Command`] with both output streams piped.
    pub fn to_command(&self) -> Command {
        let mut command = Command::new(&self.program);
        command
            .args(&self.args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped());
        command
    }
}

impl fmt::Display for SupervisorCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.program.display())?;
        for arg in &self.args {
            write!(f, " {}", arg.to_string_lossy())?;
        }
        Ok(())
    }
}

/// Text captured from a finished supervisor process.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CapturedOutput {
    pub stdout: String,
    pub stderr: String,
    /// Exit code, `None` if the process was killed by a signal.
    pub exit_code: Option<i32>,
}

/// Runs a supervisor command to completion.
pub trait ProcessRunner {
    /// Spawn `command` and block until both output streams are closed.
    ///
    /// # Errors
    ///
    /// Returns [`HarnessError::SubprocessSpawnFailure`] if the process cannot
    /// be started or its output cannot be collected.
    fn run(&self, command: &SupervisorCommand) -> Result<CapturedOutput, HarnessError>;
}

/// [`ProcessRunner`] backed by [`std::process::Command`].
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemRunner;

impl ProcessRunner for SystemRunner {
    #[instrument(skip_all, fields(program = %command.program.display()))]
    fn run(&self, command: &SupervisorCommand) -> Result<CapturedOutput, HarnessError> {
        let program = command.program.display().to_string();
        let output = command
            .to_command()
            .output()
            .map_err(|e| HarnessError::spawn_failure(&program, e))?;

        let captured = CapturedOutput {
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
            exit_code: output.status.code(),
        };

        debug!(
            exit_code = ?captured.exit_code,
            stdout_bytes = output.stdout.len(),
            stderr_bytes = output.stderr.len(),
            "Supervisor finished"
        );

        Ok(captured)
    }
}

/// Source of wall-clock instants.
pub trait Clock {
    fn now(&self) -> Instant;
}

/// [`Clock`] reading [`Instant::now`].
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }
}
