//! Config struct definition and default implementation.

use crate::presets::ELEMENTAL_THEMES;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// File name looked up in the working directory when no `--settings` is given.
pub const SETTINGS_FILE: &str = "deitygen.yaml";

/// Where the mod expects deity configurations.
pub const DEFAULT_OUTPUT_DIR: &str = "src/main/resources/data/eidolonunchained/ai_deities";

/// Generator settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Directory generated files are written to.
    pub output_dir: PathBuf,

    /// Template document to read instead of the embedded template.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub template: Option<PathBuf>,

    /// Themes generated by `batch`, in order.
    pub batch_themes: Vec<String>,

    /// Continue a batch past a failing theme.
    pub keep_going: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            template: None,
            batch_themes: ELEMENTAL_THEMES.iter().map(|t| t.to_string()).collect(),
            keep_going: false,
        }
    }
}
