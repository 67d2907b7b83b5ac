//! Invocation requests built from the configurator's positional arguments.
//!
//! The calling convention is fixed by ParamILS-style configurators:
//!
//! ```text
//! <instance> <instance_info> <cutoff_time> <cutoff_length> <seed> <reserved> <solver> [extra...]
//! ```
//!
//! The reserved slot is read but never used. Anything after the solver name
//! is ignored.

use std::fmt;
use std::str::FromStr;

use satwrap_common::HarnessError;

/// Number of positional arguments in the calling convention.
pub const POSITIONAL_ARGS: usize = 7;

/// Cutoff time as given on the command line.
///
/// The raw text is kept because a `TIMEOUT` reports it back verbatim.
#[derive(Debug, Clone, PartialEq)]
pub struct CutoffTime {
    raw: String,
    seconds: f64,
}

impl CutoffTime {
    /// The argument exactly as supplied.
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// The cutoff in seconds.
    pub fn seconds(&self) -> f64 {
        self.seconds
    }
}

impl FromStr for CutoffTime {
    type Err = HarnessError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let seconds = s.trim().parse::<f64>().map_err(|_| {
            HarnessError::invalid_request(format!("cutoff time '{s}' is not a number"))
        })?;
        Ok(Self {
            raw: s.to_string(),
            seconds,
        })
    }
}

impl fmt::Display for CutoffTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

/// Random seed as given on the command line.
///
/// Only checked to be an integer literal of any size; the text is echoed
/// back unchanged in the result line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Seed(String);

impl Seed {
    /// The argument exactly as supplied.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for Seed {
    type Err = HarnessError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let digits = trimmed
            .strip_prefix(['-', '+'])
            .unwrap_or(trimmed);

        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(HarnessError::invalid_request(format!(
                "seed '{s}' is not an integer"
            )));
        }
        Ok(Self(s.to_string()))
    }
}

impl fmt::Display for Seed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A single solver invocation requested by the configurator.
#[derive(Debug, Clone, PartialEq)]
pub struct InvocationRequest {
    /// Path of the CNF instance handed to the solver.
    pub instance: String,
    /// Opaque per-instance metadata.
    pub instance_info: String,
    pub cutoff_time: CutoffTime,
    /// Run length cutoff. Carried through, never interpreted.
    pub cutoff_length: f64,
    pub seed: Seed,
    /// Solver name with quotes and spaces removed.
    pub solver_name: String,
}

impl InvocationRequest {
    /// Build a request from the positional arguments (program name excluded).
    ///
    /// # Errors
    ///
    /// Returns [`HarnessError::InvalidRequest`] if fewer than
    /// [`POSITIONAL_ARGS`] arguments are given or a numeric argument does
    /// not parse.
    pub fn from_args<I, S>(args: I) -> Result<Self, HarnessError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let args: Vec<String> = args.into_iter().map(Into::into).collect();
        if args.len() < POSITIONAL_ARGS {
            return Err(HarnessError::invalid_request(format!(
                "expected {POSITIONAL_ARGS} positional arguments, got {}",
                args.len()
            )));
        }

        let cutoff_length = args[3].trim().parse::<f64>().map_err(|_| {
            HarnessError::invalid_request(format!("cutoff length '{}' is not a number", args[3]))
        })?;

        // args[5] is the reserved slot.
        Ok(Self {
            instance: args[0].clone(),
            instance_info: args[1].clone(),
            cutoff_time: args[2].parse()?,
            cutoff_length,
            seed: args[4].parse()?,
            solver_name: strip_solver_name(&args[6]),
        })
    }
}

/// Remove the quote and space characters configurators wrap values in.
pub fn strip_solver_name(raw: &str) -> String {
    raw.chars()
        .filter(|c| !matches!(c, ' ' | '\'' | '"'))
        .collect()
}
