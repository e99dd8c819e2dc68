//! Config loading, discovery and validation.

use super::model::{Config, SETTINGS_FILE};
use crate::compose::validate_identifier;
use crate::error::{DeitygenError, Result};
use std::path::Path;
use tracing::debug;

impl Config {
    /// Load config from a YAML file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        let content = std::fs::read_to_string(path).map_err(|e| {
            DeitygenError::UserError(format!(
                "failed to read settings file '{}': {}",
                path.display(),
                e
            ))
        })?;

        Self::from_yaml(&content)
    }

    /// Parse config from a YAML string.
    ///
    /// An empty document yields the defaults.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let config: Config = if yaml.trim().is_empty() {
            Config::default()
        } else {
            serde_yaml::from_str(yaml).map_err(|e| {
                DeitygenError::UserError(format!("failed to parse settings YAML: {}", e))
            })?
        };

        config.validate()?;
        Ok(config)
    }

    /// Resolve the settings in effect.
    ///
    /// An explicit path must exist. Without one, `deitygen.yaml` in the
    /// working directory is used when present, otherwise the defaults.
    pub fn discover(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            debug!(path = %path.display(), "loading settings");
            return Self::load(path);
        }

        let local = Path::new(SETTINGS_FILE);
        if local.is_file() {
            debug!(path = %local.display(), "loading settings from working directory");
            Self::load(local)
        } else {
            debug!("no settings file, using defaults");
            Ok(Self::default())
        }
    }

    /// Validate config values.
    ///
    /// - `output_dir` must be non-empty
    /// - `batch_themes` must be non-empty, each entry a safe identifier
    pub fn validate(&self) -> Result<()> {
        if self.output_dir.as_os_str().is_empty() {
            return Err(DeitygenError::UserError(
                "settings validation failed: output_dir must not be empty".to_string(),
            ));
        }

        if self.batch_themes.is_empty() {
            return Err(DeitygenError::UserError(
                "settings validation failed: batch_themes must list at least one theme"
                    .to_string(),
            ));
        }

        for theme in &self.batch_themes {
            validate_identifier("batch theme", theme).map_err(|e| {
                DeitygenError::UserError(format!("settings validation failed: {}", e))
            })?;
        }

        Ok(())
    }
}
