use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use log::{debug, info};

use crate::utils::{file_utils, hash_utils};
use super::coordinator::RenderedArtifact;

/// Counts from writing a set of artifacts
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct WriteStats {
    /// Files created or rewritten
    pub written: usize,

    /// Files left alone because their content was already current
    pub unchanged: usize,

    /// Paths of the files that were written
    pub written_paths: Vec<PathBuf>,
}

impl WriteStats {
    /// Total number of artifacts handled
    pub fn total(&self) -> usize {
        self.written + self.unchanged
    }
}

/// Writes rendered artifacts into the output directory
#[derive(Debug)]
pub struct ArtifactWriter {
    /// Directory receiving the artifacts
    output_dir: PathBuf,

    /// Skip files whose content did not change
    write_if_changed: bool,
}

impl ArtifactWriter {
    /// Create a writer for the given output directory
    pub fn new(output_dir: impl AsRef<Path>, write_if_changed: bool) -> Self {
        Self {
            output_dir: output_dir.as_ref().to_path_buf(),
            write_if_changed,
        }
    }

    /// Write every artifact
    pub fn write_all(&self, artifacts: &[RenderedArtifact]) -> Result<WriteStats> {
        file_utils::ensure_dir_exists(&self.output_dir)
            .context("Failed to create output directory")?;

        let mut stats = WriteStats::default();

        for artifact in artifacts {
            let path = self.output_dir.join(&artifact.name);

            if self.write_if_changed && hash_utils::file_matches(&path, &artifact.content) {
                debug!("Unchanged: {}", path.display());
                stats.unchanged += 1;
                continue;
            }

            file_utils::write_string_to_file(&path, &artifact.content)
                .with_context(|| format!("Failed to write artifact {}", artifact.name))?;
            debug!("Wrote {} ({} bytes)", path.display(), artifact.content.len());

            stats.written += 1;
            stats.written_paths.push(path);
        }

        info!(
            "Wrote {} artifacts to {} ({} unchanged)",
            stats.written,
            self.output_dir.display(),
            stats.unchanged
        );
        Ok(stats)
    }
}
