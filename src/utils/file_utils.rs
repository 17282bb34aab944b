use std::path::Path;
use std::fs;
use anyhow::{Result, Context};
use log::debug;

/// Create a directory if it doesn't exist
pub fn ensure_dir_exists(dir: impl AsRef<Path>) -> Result<()> {
    let dir = dir.as_ref();
    if !dir.exists() {
        debug!("Creating directory: {}", dir.display());
        fs::create_dir_all(dir)
            .with_context(|| format!("Failed to create directory {}", dir.display()))?;
    }
    Ok(())
}

/// Read a file to string with better error handling
pub fn read_file_to_string(path: impl AsRef<Path>) -> Result<String> {
    let path = path.as_ref();
    fs::read_to_string(path)
        .with_context(|| format!("Failed to read file {}", path.display()))
}

/// Write a string to a file, creating its parent directory first
pub fn write_string_to_file(path: impl AsRef<Path>, content: &str) -> Result<()> {
    let path = path.as_ref();

    if let Some(parent) = path.parent() {
        ensure_dir_exists(parent)?;
    }

    fs::write(path, content)
        .with_context(|| format!("Failed to write file {}", path.display()))
}
