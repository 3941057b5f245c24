//! Config loading, validation, and the bundled default.

use super::model::Config;
use crate::error::{CiftifyError, Result};
use std::path::Path;

/// Settings shipped with the binary, used when no config file is given.
pub const DEFAULT_CONFIG_YAML: &str = include_str!("../../data/ciftify_workflow_settings.yaml");

impl Config {
    /// Load config from a YAML file.
    ///
    /// # Returns
    ///
    /// * `Ok(Config)` - Successfully loaded and validated config
    /// * `Err(CiftifyError::ConfigError)` - Read error, parse error, or validation failure
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        let content = std::fs::read_to_string(path).map_err(|e| {
            CiftifyError::ConfigError(format!(
                "failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        Self::from_yaml(&content).map_err(|e| match e {
            CiftifyError::ConfigError(msg) => {
                CiftifyError::ConfigError(format!("{} ({})", msg, path.display()))
            }
            other => other,
        })
    }

    /// The configuration compiled into the binary.
    pub fn bundled() -> Result<Self> {
        Self::from_yaml(DEFAULT_CONFIG_YAML)
    }

    /// Parse config from a YAML string.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let config: Config = serde_yaml::from_str(yaml)
            .map_err(|e| CiftifyError::ConfigError(format!("failed to parse config YAML: {}", e)))?;

        config.validate()?;
        Ok(config)
    }

    /// Serialize config to YAML string.
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self).map_err(|e| {
            CiftifyError::ConfigError(format!("failed to serialize config to YAML: {}", e))
        })
    }

    /// Validate config values.
    ///
    /// - `high_res` and every `low_res` entry must be a whole number
    /// - `low_res` and `grayord_res` must be non-empty
    /// - `grayord_res` entries must be greater than 0
    pub fn validate(&self) -> Result<()> {
        if !self.high_res.is_numeric() {
            return Err(CiftifyError::ConfigError(format!(
                "high_res must be a whole number (found '{}')",
                self.high_res
            )));
        }

        if self.low_res.is_empty() {
            return Err(CiftifyError::ConfigError(
                "low_res must list at least one resolution".to_string(),
            ));
        }
        if let Some(bad) = self.low_res.iter().find(|r| !r.is_numeric()) {
            return Err(CiftifyError::ConfigError(format!(
                "low_res entries must be whole numbers (found '{}')",
                bad
            )));
        }

        if self.grayord_res.is_empty() {
            return Err(CiftifyError::ConfigError(
                "grayord_res must list at least one resolution".to_string(),
            ));
        }
        if self.grayord_res.contains(&0) {
            return Err(CiftifyError::ConfigError(
                "grayord_res entries must be greater than 0".to_string(),
            ));
        }

        Ok(())
    }

    /// `low_res` as plain strings.
    pub fn low_res_values(&self) -> Vec<&str> {
        self.low_res.iter().map(|r| r.as_str()).collect()
    }
}
