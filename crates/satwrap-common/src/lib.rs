//! Common types, errors, and configuration for satwrap.
//!
//! This crate provides shared functionality used across the satwrap workspace:
//! - Error types using `thiserror` for type-safe error handling
//! - Tool identifiers and host architecture widths
//! - The path table and wrapper configuration, loadable from TOML

pub mod config;
pub mod config_file;
pub mod error;
pub mod tool;

pub use config::{PathTable, ToolPaths, WrapperConfig};
pub use config_file::{ConfigFile, ConfigFileError};
pub use error::HarnessError;
pub use tool::{ArchWidth, Solver, Tool};
