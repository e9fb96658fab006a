//! Configuration for edgewalk
//!
//! Stored as TOML. Every field is optional; an empty file is a valid config.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::bail_invalid;
use crate::error::{EdgeWalkError, Result};
use crate::graph::Orientation;

/// Current configuration format version
pub const CONFIG_FORMAT_VERSION: u32 = 1;

/// Traversal defaults and logging settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WalkConfig {
    /// Config format version for compatibility checking
    #[serde(default = "default_version")]
    pub version: u32,

    /// Orientation used when a request does not name one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_orientation: Option<String>,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Logging configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default)]
    pub verbose: bool,

    /// Level or full filter directive, e.g. `debug` or `edgewalk_core=trace`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub level: Option<String>,

    /// Emit JSON lines instead of compact text
    #[serde(default)]
    pub json: bool,
}

fn default_version() -> u32 {
    CONFIG_FORMAT_VERSION
}

impl Default for WalkConfig {
    fn default() -> Self {
        WalkConfig {
            version: CONFIG_FORMAT_VERSION,
            default_orientation: None,
            logging: LoggingConfig::default(),
        }
    }
}

impl WalkConfig {
    /// Parse configuration from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: WalkConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Save configuration to a file
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| EdgeWalkError::Other(format!("failed to serialize config: {}", e)))?;
        fs::write(path, content)?;
        Ok(())
    }

    /// The configured default orientation, [`Orientation::None`] if unset
    pub fn orientation(&self) -> Result<Orientation> {
        Orientation::from_option(self.default_orientation.as_deref())
    }

    /// Install the tracing subscriber described by `[logging]`
    pub fn init_logging(&self) -> std::result::Result<(), Box<dyn std::error::Error>> {
        crate::logging::init_tracing(
            self.logging.verbose,
            self.logging.level.as_deref(),
            self.logging.json,
        )
    }

    fn validate(&self) -> Result<()> {
        if self.version == 0 || self.version > CONFIG_FORMAT_VERSION {
            bail_invalid!("config version", self.version);
        }
        self.orientation()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_default_config() {
        let config = WalkConfig::default();
        assert_eq!(config.version, CONFIG_FORMAT_VERSION);
        assert!(config.default_orientation.is_none());
        assert!(!config.logging.verbose);
        assert!(!config.logging.json);
        assert_eq!(config.orientation().unwrap(), Orientation::None);
    }

    #[test]
    fn test_empty_file_is_default() {
        let config = WalkConfig::from_toml_str("").unwrap();
        assert_eq!(config, WalkConfig::default());
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("edgewalk.toml");

        let config = WalkConfig {
            default_orientation: Some("ignore".to_string()),
            logging: LoggingConfig {
                verbose: true,
                level: Some("trace".to_string()),
                json: true,
            },
            ..Default::default()
        };
        config.save(&path).unwrap();

        let loaded = WalkConfig::load(&path).unwrap();
        assert_eq!(loaded, config);
        assert_eq!(loaded.orientation().unwrap(), Orientation::Ignore);
    }

    #[test]
    fn test_invalid_orientation_rejected_on_load() {
        let err = WalkConfig::from_toml_str("default_orientation = \"sideways\"").unwrap_err();
        assert!(matches!(err, EdgeWalkError::InvalidOrientation { .. }));
    }

    #[test]
    fn test_future_version_rejected() {
        let err = WalkConfig::from_toml_str("version = 2").unwrap_err();
        assert_eq!(err.to_string(), "invalid config version: 2");
    }

    #[test]
    fn test_malformed_toml() {
        let err = WalkConfig::from_toml_str("logging = 3").unwrap_err();
        assert!(matches!(err, EdgeWalkError::Toml(_)));
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempdir().unwrap();
        let err = WalkConfig::load(&dir.path().join("absent.toml")).unwrap_err();
        assert!(matches!(err, EdgeWalkError::Io(_)));
    }
}
