use std::path::Path;
use anyhow::Result;
use sha2::{Sha256, Digest};
use log::trace;

use super::file_utils;

/// Calculate SHA-256 hash of a string
pub fn hash_string(content: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(content.as_bytes());
    format!("{:x}", hasher.finalize())
}

/// Calculate SHA-256 hash of a file
pub fn hash_file(path: impl AsRef<Path>) -> Result<String> {
    let path = path.as_ref();
    trace!("Calculating hash for file: {}", path.display());

    let content = file_utils::read_file_to_string(path)?;
    Ok(hash_string(&content))
}

/// Whether an existing file already holds exactly `content`
pub fn file_matches(path: impl AsRef<Path>, content: &str) -> bool {
    let path = path.as_ref();
    if !path.is_file() {
        return false;
    }

    match hash_file(path) {
        Ok(existing) => existing == hash_string(content),
        Err(_) => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn hash_is_stable_hex() {
        let hash = hash_string("abc");
        assert_eq!(hash, "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad");
    }

    #[test]
    fn detects_matching_content() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("out.h");
        assert!(!file_matches(&path, "x"));

        fs::write(&path, "x").unwrap();
        assert!(file_matches(&path, "x"));
        assert!(!file_matches(&path, "y"));
    }
}
