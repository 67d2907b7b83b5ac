//! Configuration file structures for satwrap.
//!
//! This module defines structures for TOML configuration files:
//! - [`ConfigFile`]: Top-level configuration file structure
//! - [`QueueConfigFile`]: Default connection settings for `queue-stats`

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::WrapperConfig;

/// Top-level configuration file structure.
///
/// Every section is optional; omitted values fall back to the built-in
/// defaults.
///
/// # Example
///
/// ```toml
/// [wrapper]
/// solver_dir = "/opt/satsolvers"
/// memory_limit_mb = 2000
/// architecture = 64
///
/// [wrapper.paths.glucose]
/// x32 = "glucose/glucosex32/glucose.sh"
/// x64 = "glucose/glucosex64/full_glucose.sh"
///
/// [queue]
/// host = "redis.internal"
/// port = 6380
/// ```
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ConfigFile {
    /// Solver wrapper configuration.
    #[serde(default)]
    pub wrapper: WrapperConfig,

    /// Queue store connection defaults.
    #[serde(default)]
    pub queue: QueueConfigFile,
}

impl ConfigFile {
    /// Load configuration from a TOML file.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the TOML configuration file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigFileError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| ConfigFileError::Io {
            path: path.display().to_string(),
            source: e,
        })?;

        let config = Self::from_toml(&content)?;
        debug!(path = %path.display(), "Configuration file loaded");
        Ok(config)
    }

    /// Parse configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the string cannot be parsed as TOML.
    pub fn from_toml(content: &str) -> Result<Self, ConfigFileError> {
        toml::from_str(content).map_err(|e| ConfigFileError::Parse {
            message: e.to_string(),
        })
    }
}

/// Queue store connection settings from config file.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct QueueConfigFile {
    /// Store host name.
    #[serde(default = "defaults::queue_host")]
    pub host: String,

    /// Store port.
    #[serde(default = "defaults::queue_port")]
    pub port: u16,
}

impl Default for QueueConfigFile {
    fn default() -> Self {
        Self {
            host: defaults::queue_host(),
            port: defaults::queue_port(),
        }
    }
}

/// Configuration file errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigFileError {
    /// Failed to read configuration file.
    #[error("Failed to read config file '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Failed to parse configuration file.
    #[error("Failed to parse config file: {message}")]
    Parse { message: String },
}

/// Default value functions for serde.
mod defaults {
    pub fn queue_host() -> String {
        "localhost".to_string()
    }

    pub const fn queue_port() -> u16 {
        6379
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;
    use crate::ArchWidth;

    #[test]
    fn test_default_config_file() {
        let config = ConfigFile::default();

        assert_eq!(config.wrapper.memory_limit_mb, 1000);
        assert_eq!(config.wrapper.solver_dir, PathBuf::from("./"));
        assert_eq!(config.queue.host, "localhost");
        assert_eq!(config.queue.port, 6379);
    }

    #[test]
    fn test_parse_minimal_config() {
        let toml = r#"
            [wrapper]
            memory_limit_mb = 2000
        "#;

        let config = ConfigFile::from_toml(toml).unwrap();

        assert_eq!(config.wrapper.memory_limit_mb, 2000);
        // Defaults applied
        assert_eq!(
            config.wrapper.paths.runsolver.x64,
            PathBuf::from("runsolver/runsolverx64/runsolver")
        );
        assert_eq!(config.queue.port, 6379);
    }

    #[test]
    fn test_parse_full_config() {
        let toml = r#"
            [wrapper]
            solver_dir = "/opt/satsolvers"
            memory_limit_mb = 512
            architecture = 32

            [wrapper.paths.glucose]
            x32 = "bin/glucose32"
            x64 = "bin/glucose64"

            [wrapper.paths.runsolver]
            x32 = "/usr/local/bin/runsolver"
            x64 = "/usr/local/bin/runsolver"

            [queue]
            host = "redis.internal"
            port = 6380
        "#;

        let config = ConfigFile::from_toml(toml).unwrap();

        assert_eq!(config.wrapper.solver_dir, PathBuf::from("/opt/satsolvers"));
        assert_eq!(config.wrapper.memory_limit_mb, 512);
        assert_eq!(config.wrapper.architecture, Some(ArchWidth::X32));
        assert_eq!(config.wrapper.paths.glucose.x32, PathBuf::from("bin/glucose32"));
        assert_eq!(
            config.wrapper.paths.clasp.x64,
            PathBuf::from("clasp/claspx64/build/release/bin/clasp")
        );
        assert_eq!(config.queue.host, "redis.internal");
        assert_eq!(config.queue.port, 6380);
    }

    #[test]
    fn test_parse_unknown_tool() {
        let toml = r#"
            [wrapper.paths.minisat]
            x32 = "a"
            x64 = "b"
        "#;

        assert!(matches!(
            ConfigFile::from_toml(toml),
            Err(ConfigFileError::Parse { .. })
        ));
    }

    #[test]
    fn test_parse_invalid_toml() {
        let invalid = "this is not valid toml [";
        let result = ConfigFile::from_toml(invalid);
        assert!(result.is_err());
    }

    #[test]
    fn test_missing_file() {
        let result = ConfigFile::from_file("/nonexistent/satwrap.toml");
        assert!(matches!(result, Err(ConfigFileError::Io { .. })));
    }
}
