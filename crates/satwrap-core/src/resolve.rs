//! Executable path resolution.

use std::path::PathBuf;

use satwrap_common::{ArchWidth, HarnessError, Solver, Tool, WrapperConfig};
use tracing::debug;

/// Executables selected for one invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedPaths {
    pub width: ArchWidth,
    pub solver: Solver,
    pub supervisor_path: PathBuf,
    pub solver_path: PathBuf,
}

/// Pick the supervisor and solver executables for `solver_name`.
///
/// The width is determined first, then the supervisor, then the solver, so
/// an unsupported host fails before the solver name is looked at.
///
/// # Errors
///
/// - [`HarnessError::UnsupportedArchitecture`] if the width is neither 32 nor 64
/// - [`HarnessError::UnknownSolver`] if `solver_name` is not a known solver
pub fn resolve_paths(
    config: &WrapperConfig,
    solver_name: &str,
) -> Result<ResolvedPaths, HarnessError> {
    let width = config.width()?;
    let supervisor_path = config.resolve(Tool::Supervisor, width);
    let solver: Solver = solver_name.parse()?;
    let solver_path = config.resolve(solver.into(), width);

    debug!(
        %width,
        %solver,
        supervisor = %supervisor_path.display(),
        solver_path = %solver_path.display(),
        "Resolved executables"
    );

    Ok(ResolvedPaths {
        width,
        solver,
        supervisor_path,
        solver_path,
    })
}
