//! Configuration structures for satwrap.
//!
//! This module defines configuration options for the solver wrapper:
//! - [`WrapperConfig`]: Top-level configuration (solver directory, limits, paths)
//! - [`PathTable`]: Executable path for every (tool, architecture width) pair
//! - [`ToolPaths`]: The 32-bit and 64-bit variants of one tool

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::{ArchWidth, HarnessError, Solver, Tool};

/// Top-level wrapper configuration.
///
/// The defaults reproduce the historical on-disk layout of the solver
/// bundle, so the wrapper works without any configuration file when it is
/// run from the bundle directory.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct WrapperConfig {
    /// Directory that relative entries of the path table are resolved against.
    #[serde(default = "defaults::solver_dir")]
    pub solver_dir: PathBuf,

    /// Memory ceiling handed to the supervisor (`-M`), in megabytes.
    #[serde(default = "defaults::memory_limit_mb")]
    pub memory_limit_mb: u32,

    /// Architecture override.
    ///
    /// When unset, the pointer width of the running binary is used.
    #[serde(default)]
    pub architecture: Option<ArchWidth>,

    /// Executable paths per tool and width.
    #[serde(default)]
    pub paths: PathTable,
}

impl Default for WrapperConfig {
    fn default() -> Self {
        Self {
            solver_dir: defaults::solver_dir(),
            memory_limit_mb: defaults::memory_limit_mb(),
            architecture: None,
            paths: PathTable::default(),
        }
    }
}

impl WrapperConfig {
    /// Architecture width to resolve executables for.
    pub fn width(&self) -> Result<ArchWidth, HarnessError> {
        self.architecture.map_or_else(ArchWidth::detect, Ok)
    }

    /// Full path of `tool` for `width`.
    ///
    /// Absolute table entries are returned unchanged; relative ones are
    /// joined onto [`solver_dir`](Self::solver_dir).
    pub fn resolve(&self, tool: Tool, width: ArchWidth) -> PathBuf {
        self.solver_dir.join(self.paths.lookup(tool, width))
    }
}

/// Executable paths for one tool.
///
/// Both variants are required, so a table entry can never define only one
/// width.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct ToolPaths {
    /// 32-bit executable.
    pub x32: PathBuf,
    /// 64-bit executable.
    pub x64: PathBuf,
}

impl ToolPaths {
    fn new(x32: &str, x64: &str) -> Self {
        Self {
            x32: x32.into(),
            x64: x64.into(),
        }
    }

    /// Path for the given width.
    pub fn for_width(&self, width: ArchWidth) -> &Path {
        match width {
            ArchWidth::X32 => &self.x32,
            ArchWidth::X64 => &self.x64,
        }
    }
}

/// Mapping from (tool, architecture width) to an executable path.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct PathTable {
    #[serde(default = "defaults::glucose")]
    pub glucose: ToolPaths,

    #[serde(default = "defaults::clasp")]
    pub clasp: ToolPaths,

    #[serde(default = "defaults::plingeling")]
    pub plingeling: ToolPaths,

    #[serde(default = "defaults::picosat")]
    pub picosat: ToolPaths,

    /// The resource-limiting supervisor.
    #[serde(default = "defaults::runsolver")]
    pub runsolver: ToolPaths,
}

impl Default for PathTable {
    fn default() -> Self {
        Self {
            glucose: defaults::glucose(),
            clasp: defaults::clasp(),
            plingeling: defaults::plingeling(),
            picosat: defaults::picosat(),
            runsolver: defaults::runsolver(),
        }
    }
}

impl PathTable {
    /// Both variants of `tool`.
    pub fn tool(&self, tool: Tool) -> &ToolPaths {
        match tool {
            Tool::Solver(Solver::Glucose) => &self.glucose,
            Tool::Solver(Solver::Clasp) => &self.clasp,
            Tool::Solver(Solver::Plingeling) => &self.plingeling,
            Tool::Solver(Solver::Picosat) => &self.picosat,
            Tool::Supervisor => &self.runsolver,
        }
    }

    /// Path of `tool` for `width`.
    pub fn lookup(&self, tool: Tool, width: ArchWidth) -> &Path {
        self.tool(tool).for_width(width)
    }
}

/// Default value functions for serde.
mod defaults {
    use std::path::PathBuf;

    use super::ToolPaths;

    pub fn solver_dir() -> PathBuf {
        PathBuf::from("./")
    }

    pub const fn memory_limit_mb() -> u32 {
        1000
    }

    pub fn glucose() -> ToolPaths {
        ToolPaths::new(
            "glucose/glucosex32/glucose.sh",
            "glucose/glucosex64/full_glucose.sh",
        )
    }

    pub fn clasp() -> ToolPaths {
        ToolPaths::new(
            "clasp/claspx32/build/release/bin/clasp",
            "clasp/claspx64/build/release/bin/clasp",
        )
    }

    pub fn plingeling() -> ToolPaths {
        ToolPaths::new(
            "lingeling/lingelingx32/plingeling",
            "lingeling/lingelingx64/plingeling",
        )
    }

    pub fn picosat() -> ToolPaths {
        ToolPaths::new("picosat/picosatx32/picosat", "picosat/picosatx64/picosat")
    }

    pub fn runsolver() -> ToolPaths {
        ToolPaths::new(
            "runsolver/runsolverx32/runsolver",
            "runsolver/runsolverx64/runsolver",
        )
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn test_default_config() {
        let config = WrapperConfig::default();

        assert_eq!(config.solver_dir, PathBuf::from("./"));
        assert_eq!(config.memory_limit_mb, 1000);
        assert!(config.architecture.is_none());
        assert_eq!(config.paths, PathTable::default());
    }

    #[test]
    fn test_every_solver_and_width_has_distinct_path() {
        let table = PathTable::default();
        let mut seen = HashSet::new();

        for solver in Solver::ALL {
            for width in [ArchWidth::X32, ArchWidth::X64] {
                let path = table.lookup(solver.into(), width);
                assert!(!path.as_os_str().is_empty());
                assert!(seen.insert(path.to_path_buf()), "duplicate path {path:?}");
            }
        }
        assert_eq!(seen.len(), 8);
    }

    #[test]
    fn test_resolve_joins_solver_dir() {
        let config = WrapperConfig {
            solver_dir: PathBuf::from("/opt/solvers"),
            ..Default::default()
        };

        assert_eq!(
            config.resolve(Tool::Solver(Solver::Clasp), ArchWidth::X64),
            PathBuf::from("/opt/solvers/clasp/claspx64/build/release/bin/clasp")
        );
    }

    #[test]
    fn test_resolve_keeps_absolute_entries() {
        let mut config = WrapperConfig::default();
        config.paths.runsolver = ToolPaths::new("/usr/bin/runsolver", "/usr/bin/runsolver");

        assert_eq!(
            config.resolve(Tool::Supervisor, ArchWidth::X32),
            PathBuf::from("/usr/bin/runsolver")
        );
    }

    #[test]
    fn test_width_override() {
        let config = WrapperConfig {
            architecture: Some(ArchWidth::X32),
            ..Default::default()
        };

        assert_eq!(config.width().unwrap(), ArchWidth::X32);
    }

    #[test]
    fn test_partial_deserialization() {
        let json = r#"{"paths": {"glucose": {"x32": "g32", "x64": "g64"}}}"#;
        let config: WrapperConfig = serde_json::from_str(json).unwrap();

        // Explicitly set value
        assert_eq!(config.paths.glucose.x64, PathBuf::from("g64"));
        // Default values for unspecified fields
        assert_eq!(config.paths.clasp, defaults::clasp());
        assert_eq!(config.memory_limit_mb, 1000);
    }

    #[test]
    fn test_single_width_entry_is_rejected() {
        let json = r#"{"paths": {"picosat": {"x64": "p64"}}}"#;
        let result: Result<WrapperConfig, _> = serde_json::from_str(json);
        assert!(result.is_err());
    }

    #[test]
    fn test_architecture_deserialization() {
        let config: WrapperConfig = serde_json::from_str(r#"{"architecture": 64}"#).unwrap();
        assert_eq!(config.architecture, Some(ArchWidth::X64));

        let result: Result<WrapperConfig, _> = serde_json::from_str(r#"{"architecture": 16}"#);
        assert!(result.is_err());
    }
}
