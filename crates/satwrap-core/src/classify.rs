//! Outcome classification of supervisor output.
//!
//! Rules are checked in order against stdout and the first match wins:
//!
//! | stdout contains             | outcome   | runtime                       |
//! |-----------------------------|-----------|-------------------------------|
//! | `Maximum CPU time exceeded` | `TIMEOUT` | requested cutoff, verbatim    |
//! | `UNSATISFIABLE`             | `UNSAT`   | `CPU time (s):` line          |
//! | `SATISFIABLE`               | `SAT`     | `CPU time (s):` line          |
//! | anything else               | `CRASHED` | measured wall-clock seconds   |
//!
//! `UNSATISFIABLE` contains `SATISFIABLE`, so the order matters.

use std::fmt;
use std::time::Duration;

use satwrap_common::HarnessError;
use tracing::warn;

use crate::request::CutoffTime;

const TIMEOUT_MARKER: &str = "Maximum CPU time exceeded";
const UNSAT_MARKER: &str = "UNSATISFIABLE";
const SAT_MARKER: &str = "SATISFIABLE";
const CPU_TIME_MARKER: &str = "CPU time (s):";

/// Result category reported to the configurator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Sat,
    Unsat,
    Timeout,
    Crashed,
}

impl Outcome {
    /// Protocol tag.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Sat => "SAT",
            Self::Unsat => "UNSAT",
            Self::Timeout => "TIMEOUT",
            Self::Crashed => "CRASHED",
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Runtime field of the result line.
#[derive(Debug, Clone, PartialEq)]
pub enum Runtime {
    /// The requested cutoff, echoed as given.
    Cutoff(String),
    /// CPU seconds reported by the supervisor.
    Reported(f64),
    /// Wall-clock time measured by the wrapper.
    Measured(Duration),
    /// The expected `CPU time (s):` line was absent or malformed.
    Missing,
}

impl fmt::Display for Runtime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Cutoff(raw) => f.write_str(raw),
            Self::Reported(seconds) => f.write_str(&format_seconds(*seconds)),
            Self::Measured(elapsed) => f.write_str(&format_seconds(elapsed.as_secs_f64())),
            Self::Missing => Ok(()),
        }
    }
}

/// Outcome and runtime of one invocation.
#[derive(Debug, Clone, PartialEq)]
pub struct Classification {
    pub outcome: Outcome,
    pub runtime: Runtime,
}

/// Classify supervisor stdout.
///
/// `elapsed` is only used for `CRASHED`. A missing CPU time line is logged
/// as an output parse anomaly and yields [`Runtime::Missing`].
pub fn classify(stdout: &str, cutoff: &CutoffTime, elapsed: Duration) -> Classification {
    let (outcome, runtime) = if stdout.contains(TIMEOUT_MARKER) {
        (Outcome::Timeout, Runtime::Cutoff(cutoff.as_str().to_string()))
    } else if stdout.contains(UNSAT_MARKER) {
        (Outcome::Unsat, reported_runtime(stdout))
    } else if stdout.contains(SAT_MARKER) {
        (Outcome::Sat, reported_runtime(stdout))
    } else {
        (Outcome::Crashed, Runtime::Measured(elapsed))
    };

    Classification { outcome, runtime }
}

fn reported_runtime(stdout: &str) -> Runtime {
    match parse_cpu_time(stdout) {
        Ok(seconds) => Runtime::Reported(seconds),
        Err(anomaly) => {
            warn!(error = %anomaly, "Reporting empty runtime");
            Runtime::Missing
        }
    }
}

/// Extract the seconds from the first `CPU time (s):` line.
///
/// The line is split on `:` and the second piece, with spaces removed, is
/// parsed as a float.
pub fn parse_cpu_time(stdout: &str) -> Result<f64, HarnessError> {
    let line = stdout
        .lines()
        .find(|line| line.contains(CPU_TIME_MARKER))
        .ok_or_else(|| {
            HarnessError::output_parse_anomaly(format!("no '{CPU_TIME_MARKER}' line in output"))
        })?;

    let value: String = line
        .split(':')
        .nth(1)
        .unwrap_or_default()
        .chars()
        .filter(|c| *c != ' ')
        .collect();

    value.trim().parse::<f64>().map_err(|_| {
        HarnessError::output_parse_anomaly(format!("unparsable CPU time in line '{line}'"))
    })
}

/// Render seconds as the shortest text that reads back to the same value.
///
/// Integral values keep a `.0` suffix (`3.0`). Magnitudes below `1e-4` or
/// from `1e16` up switch to exponent form with no zero padding, so one
/// microsecond prints as `1e-6` where older wrappers printed `1e-06`.
pub fn format_seconds(seconds: f64) -> String {
    format!("{seconds:?}")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cutoff(raw: &str) -> CutoffTime {
        raw.parse().unwrap()
    }

    fn run(stdout: &str) -> Classification {
        classify(stdout, &cutoff("60"), Duration::from_millis(1500))
    }

    #[test]
    fn test_timeout_uses_cutoff_verbatim() {
        let result = classify(
            "solving...\nMaximum CPU time exceeded: sending SIGTERM\nCPU time (s): 60.01\n",
            &cutoff("60.0"),
            Duration::from_secs(61),
        );

        assert_eq!(result.outcome, Outcome::Timeout);
        assert_eq!(result.runtime.to_string(), "60.0");
    }

    #[test]
    fn test_timeout_wins_over_sat_markers() {
        let result = run("s SATISFIABLE\nMaximum CPU time exceeded\n");
        assert_eq!(result.outcome, Outcome::Timeout);
    }

    #[test]
    fn test_unsat() {
        let result = run("UNSATISFIABLE\nCPU time (s): 12.5\n");

        assert_eq!(result.outcome, Outcome::Unsat);
        assert_eq!(result.runtime, Runtime::Reported(12.5));
        assert_eq!(result.runtime.to_string(), "12.5");
    }

    #[test]
    fn test_sat() {
        let result = run("SATISFIABLE\nCPU time (s): 3.0\n");

        assert_eq!(result.outcome, Outcome::Sat);
        assert_eq!(result.runtime.to_string(), "3.0");
    }

    #[test]
    fn test_first_cpu_time_line_wins() {
        let result = run("s SATISFIABLE\nCPU time (s): 1.25\nCPU time (s): 9.0\n");
        assert_eq!(result.runtime, Runtime::Reported(1.25));
    }

    #[test]
    fn test_missing_cpu_time_line() {
        let result = run("s UNSATISFIABLE\n");

        assert_eq!(result.outcome, Outcome::Unsat);
        assert_eq!(result.runtime, Runtime::Missing);
        assert_eq!(result.runtime.to_string(), "");
    }

    #[test]
    fn test_unparsable_cpu_time_line() {
        let result = run("SATISFIABLE\nCPU time (s): n/a\n");
        assert_eq!(result.runtime, Runtime::Missing);
    }

    #[test]
    fn test_empty_output_is_crashed() {
        let result = run("");

        assert_eq!(result.outcome, Outcome::Crashed);
        assert_eq!(result.runtime, Runtime::Measured(Duration::from_millis(1500)));
        assert_eq!(result.runtime.to_string(), "1.5");
    }

    #[test]
    fn test_unrecognized_output_is_crashed() {
        let result = run("Segmentation fault\nCPU time (s): 0.2\n");
        assert_eq!(result.outcome, Outcome::Crashed);
    }

    #[test]
    fn test_parse_cpu_time_tolerates_spacing() {
        assert_eq!(parse_cpu_time("CPU time (s):    7.75\r\n").unwrap(), 7.75);
        assert!(parse_cpu_time("nothing here").is_err());
    }

    #[test]
    fn test_format_seconds() {
        assert_eq!(format_seconds(3.0), "3.0");
        assert_eq!(format_seconds(12.5), "12.5");
        assert_eq!(format_seconds(0.1), "0.1");
    }

    #[test]
    fn test_format_seconds_exponent_form() {
        assert_eq!(format_seconds(0.0001), "0.0001");
        assert_eq!(format_seconds(0.000_001), "1e-6");
        assert_eq!(format_seconds(1e16), "1e16");
    }
}
