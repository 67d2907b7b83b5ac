//! Tool identifiers and architecture widths.
//!
//! Executables are looked up by ([`Tool`], [`ArchWidth`]). The set of solvers
//! is closed: a name outside [`Solver::ALL`] is an
//! [`HarnessError::UnknownSolver`].

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::HarnessError;

/// Pointer width of the platform the solvers are built for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(try_from = "u32", into = "u32")]
pub enum ArchWidth {
    /// 32-bit binaries.
    X32,
    /// 64-bit binaries.
    X64,
}

impl ArchWidth {
    /// Width of the running binary.
    pub fn detect() -> Result<Self, HarnessError> {
        Self::from_bits(usize::BITS)
    }

    /// Map a width in bits to an [`ArchWidth`].
    pub fn from_bits(bits: u32) -> Result<Self, HarnessError> {
        match bits {
            32 => Ok(Self::X32),
            64 => Ok(Self::X64),
            _ => Err(HarnessError::UnsupportedArchitecture { bits }),
        }
    }

    /// Width in bits.
    pub const fn bits(self) -> u32 {
        match self {
            Self::X32 => 32,
            Self::X64 => 64,
        }
    }
}

impl TryFrom<u32> for ArchWidth {
    type Error = HarnessError;

    fn try_from(bits: u32) -> Result<Self, Self::Error> {
        Self::from_bits(bits)
    }
}

impl From<ArchWidth> for u32 {
    fn from(width: ArchWidth) -> Self {
        width.bits()
    }
}

impl fmt::Display for ArchWidth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-bit", self.bits())
    }
}

/// A SAT solver that can be run under the supervisor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Solver {
    Glucose,
    Clasp,
    Plingeling,
    Picosat,
}

impl Solver {
    /// All known solvers.
    pub const ALL: [Self; 4] = [Self::Glucose, Self::Clasp, Self::Plingeling, Self::Picosat];

    /// Name used on the command line.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Glucose => "glucose",
            Self::Clasp => "clasp",
            Self::Plingeling => "plingeling",
            Self::Picosat => "picosat",
        }
    }
}

impl FromStr for Solver {
    type Err = HarnessError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|solver| solver.name() == s)
            .ok_or_else(|| HarnessError::unknown_solver(s))
    }
}

impl fmt::Display for Solver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Any executable in the path table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tool {
    /// One of the SAT solvers.
    Solver(Solver),
    /// The `runsolver` resource-limiting supervisor.
    Supervisor,
}

impl Tool {
    /// Name of the tool, as used for config keys.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Solver(solver) => solver.name(),
            Self::Supervisor => "runsolver",
        }
    }
}

impl From<Solver> for Tool {
    fn from(solver: Solver) -> Self {
        Self::Solver(solver)
    }
}

impl fmt::Display for Tool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
