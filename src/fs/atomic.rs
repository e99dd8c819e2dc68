//! Atomic file writes for generated configurations.
//!
//! Output is written to a hidden sibling file (`.{filename}.tmp`), synced, and
//! renamed over the target. A deity file on disk is therefore either the
//! previous complete version or the new complete version, never a prefix.
//!
//! The temp file lives in the target's directory so the rename stays on one
//! filesystem.

use crate::error::{DeitygenError, Result};
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

/// Atomically write bytes to `path`, creating missing parent directories.
pub fn atomic_write<P: AsRef<Path>>(path: P, content: &[u8]) -> Result<()> {
    let path = path.as_ref();

    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
        && !parent.exists()
    {
        fs::create_dir_all(parent).map_err(|e| {
            DeitygenError::Io(format!(
                "failed to create directory '{}': {}",
                parent.display(),
                e
            ))
        })?;
    }

    let temp_path = temp_path_for(path)?;
    write_and_sync(&temp_path, content)?;
    replace(&temp_path, path)
}

/// Atomically write a string to `path`.
pub fn atomic_write_file<P: AsRef<Path>>(path: P, content: &str) -> Result<()> {
    atomic_write(path, content.as_bytes())
}

fn temp_path_for(target: &Path) -> Result<PathBuf> {
    let parent = target.parent().unwrap_or(Path::new("."));
    let filename = target
        .file_name()
        .and_then(|n| n.to_str())
        .ok_or_else(|| {
            DeitygenError::Io(format!("invalid output path '{}'", target.display()))
        })?;

    Ok(parent.join(format!(".{}.tmp", filename)))
}

fn write_and_sync(path: &Path, content: &[u8]) -> Result<()> {
    let mut file = File::create(path).map_err(|e| {
        DeitygenError::Io(format!(
            "failed to create temporary file '{}': {}",
            path.display(),
            e
        ))
    })?;

    let written = file.write_all(content).and_then(|()| file.sync_all());
    if let Err(e) = written {
        let _ = fs::remove_file(path);
        return Err(DeitygenError::Io(format!(
            "failed to write temporary file '{}': {}",
            path.display(),
            e
        )));
    }

    Ok(())
}

fn replace(source: &Path, target: &Path) -> Result<()> {
    fs::rename(source, target).map_err(|e| {
        let _ = fs::remove_file(source);
        DeitygenError::Io(format!("failed to replace '{}': {}", target.display(), e))
    })?;

    #[cfg(unix)]
    if let Some(parent) = target.parent()
        && let Ok(dir) = File::open(parent)
    {
        let _ = dir.sync_all();
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_atomic_write_new_file() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("fire_deity.json");

        atomic_write_file(&file_path, "{\"deity\": 1}").unwrap();

        assert_eq!(fs::read_to_string(&file_path).unwrap(), "{\"deity\": 1}");
    }

    #[test]
    fn test_atomic_write_replaces_existing() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("water_deity.json");
        fs::write(&file_path, "stale").unwrap();

        atomic_write(&file_path, b"fresh").unwrap();

        assert_eq!(fs::read_to_string(&file_path).unwrap(), "fresh");
    }

    #[test]
    fn test_atomic_write_creates_parent_dirs() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir
            .path()
            .join("data")
            .join("ai_deities")
            .join("earth_deity.json");

        atomic_write_file(&file_path, "nested").unwrap();

        assert_eq!(fs::read_to_string(&file_path).unwrap(), "nested");
    }

    #[test]
    fn test_temp_file_does_not_linger() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("air_deity.json");

        atomic_write(&file_path, b"content").unwrap();

        assert!(!temp_dir.path().join(".air_deity.json.tmp").exists());
        let entries: Vec<_> = fs::read_dir(temp_dir.path()).unwrap().collect();
        assert_eq!(entries.len(), 1);
    }

    #[test]
    fn test_temp_path_is_hidden_sibling() {
        let temp = temp_path_for(Path::new("/out/fire_deity.json")).unwrap();
        assert_eq!(temp, Path::new("/out/.fire_deity.json.tmp"));
    }

    #[test]
    fn test_write_into_a_file_parent_fails_with_io_error() {
        let temp_dir = TempDir::new().unwrap();
        let blocker = temp_dir.path().join("blocker");
        fs::write(&blocker, "not a directory").unwrap();

        let err = atomic_write_file(blocker.join("fire_deity.json"), "x").unwrap_err();
        assert!(matches!(err, DeitygenError::Io(_)));
    }
}
