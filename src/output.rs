//! Output writer: persists rendered deities, one file per theme.

use crate::compose::ComposeRequest;
use crate::error::{DeitygenError, Result};
use crate::fs::atomic_write_file;
use crate::generator::{GeneratedDeity, Generator};
use crate::presets::named_preset;
use std::path::{Path, PathBuf};
use tracing::{error, info};

/// `<dir>/<theme>_deity.json`.
pub fn default_output_path(dir: &Path, theme: &str) -> PathBuf {
    dir.join(format!("{}_deity.json", theme))
}

/// Write rendered text to `path`, creating missing parent directories.
///
/// Returns the path written.
pub fn write_output(path: &Path, text: &str) -> Result<PathBuf> {
    atomic_write_file(path, text)?;
    info!(path = %path.display(), bytes = text.len(), "wrote deity configuration");
    Ok(path.to_path_buf())
}

/// Write a generated deity to `path`.
pub fn write_deity(path: &Path, deity: &GeneratedDeity) -> Result<PathBuf> {
    write_output(path, &deity.text)
}

/// Outcome of a batch run.
#[derive(Debug, Default)]
pub struct BatchReport {
    /// Files written, in theme order.
    pub written: Vec<PathBuf>,
    /// Themes that failed and why (only populated with `keep_going`).
    pub failed: Vec<(String, DeitygenError)>,
}

impl BatchReport {
    pub fn is_success(&self) -> bool {
        self.failed.is_empty()
    }
}

/// Generate and write one file per theme into `dir`.
///
/// Each theme is generated from its basic named preset. Without `keep_going`
/// the first failure aborts the batch; files already written stay. With
/// `keep_going` failures are logged and collected in the report.
pub fn generate_batch(
    generator: &Generator,
    themes: &[String],
    dir: &Path,
    keep_going: bool,
) -> Result<BatchReport> {
    let mut report = BatchReport::default();

    for theme in themes {
        match generate_one(generator, theme, dir) {
            Ok(path) => report.written.push(path),
            Err(e) if keep_going => {
                error!(theme = %theme, error = %e, "theme failed, continuing batch");
                report.failed.push((theme.clone(), e));
            }
            Err(e) => return Err(e),
        }
    }

    Ok(report)
}

fn generate_one(generator: &Generator, theme: &str, dir: &Path) -> Result<PathBuf> {
    let preset = named_preset(theme)?;
    let deity = generator.generate(&ComposeRequest::from_preset(preset))?;
    write_deity(&default_output_path(dir, &deity.theme), &deity)
}
