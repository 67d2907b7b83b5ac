//! The ParamILS result line.
//!
//! ```text
//! Result for ParamILS: <outcome>, <runtime>, <runlength>, <quality>, <seed>
//! ```
//!
//! Configurators parse this line positionally, so the prefix and field order
//! are fixed.

use std::fmt;

use crate::classify::{Classification, Outcome, Runtime};
use crate::request::Seed;

/// Fixed prefix of the result line.
pub const RESULT_PREFIX: &str = "Result for ParamILS: ";

/// Value reported for the fields the wrapper does not compute.
pub const UNSET: i64 = -1;

/// Outcome of one invocation, ready to print.
#[derive(Debug, Clone, PartialEq)]
pub struct InvocationResult {
    pub outcome: Outcome,
    pub runtime: Runtime,
    pub seed: Seed,
}

impl InvocationResult {
    pub fn new(classification: Classification, seed: Seed) -> Self {
        Self {
            outcome: classification.outcome,
            runtime: classification.runtime,
            seed,
        }
    }
}

impl fmt::Display for InvocationResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{RESULT_PREFIX}{}, {}, {UNSET}, {UNSET}, {}",
            self.outcome, self.runtime, self.seed
        )
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;

    fn fields(line: &str) -> Vec<String> {
        line.strip_prefix(RESULT_PREFIX)
            .expect("missing prefix")
            .split(", ")
            .map(String::from)
            .collect()
    }

    #[test]
    fn test_sat_line() {
        let result = InvocationResult {
            outcome: Outcome::Sat,
            runtime: Runtime::Reported(3.0),
            seed: "1234".parse().unwrap(),
        };

        assert_eq!(
            result.to_string(),
            "Result for ParamILS: SAT, 3.0, -1, -1, 1234"
        );
    }

    #[test]
    fn test_every_branch_has_five_fields() {
        let runtimes = [
            (Outcome::Timeout, Runtime::Cutoff("10".into())),
            (Outcome::Unsat, Runtime::Reported(12.5)),
            (Outcome::Sat, Runtime::Missing),
            (Outcome::Crashed, Runtime::Measured(Duration::from_millis(250))),
        ];

        for (outcome, runtime) in runtimes {
            let line = InvocationResult {
                outcome,
                runtime,
                seed: "-7".parse().unwrap(),
            }
            .to_string();

            let fields = fields(&line);
            assert_eq!(fields.len(), 5, "line: {line}");
            assert_eq!(fields[0], outcome.as_str());
            assert_eq!(fields[2], "-1");
            assert_eq!(fields[3], "-1");
            assert_eq!(fields[4], "-7");
        }
    }

    #[test]
    fn test_seed_is_echoed_verbatim() {
        let result = InvocationResult {
            outcome: Outcome::Sat,
            runtime: Runtime::Reported(0.25),
            seed: "007".parse().unwrap(),
        };

        assert_eq!(
            result.to_string(),
            "Result for ParamILS: SAT, 0.25, -1, -1, 007"
        );
    }

    #[test]
    fn test_missing_runtime_is_empty_field() {
        let result = InvocationResult {
            outcome: Outcome::Unsat,
            runtime: Runtime::Missing,
            seed: "3".parse().unwrap(),
        };

        assert_eq!(result.to_string(), "Result for ParamILS: UNSAT, , -1, -1, 3");
    }
}
