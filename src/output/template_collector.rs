use std::path::{Path, PathBuf};

use log::{debug, trace};
use walkdir::WalkDir;

use crate::error::{GeneratorError, Result};

/// Finds template files under a directory
#[derive(Debug)]
pub struct TemplateCollector {
    /// Extensions that mark a template file
    valid_extensions: Vec<String>,
}

impl Default for TemplateCollector {
    fn default() -> Self {
        Self::new()
    }
}

impl TemplateCollector {
    /// Collect `*.tmpl` files
    pub fn new() -> Self {
        Self {
            valid_extensions: vec!["tmpl".to_string()],
        }
    }

    /// Collect template files sorted by path. The template name is the file name.
    pub fn collect_templates(&self, template_dir: impl AsRef<Path>) -> Result<Vec<(String, PathBuf)>> {
        let template_dir = template_dir.as_ref();
        debug!("Collecting templates from directory: {}", template_dir.display());

        if !template_dir.is_dir() {
            return Err(GeneratorError::render(
                template_dir.display().to_string(),
                "template directory does not exist",
            ));
        }

        let mut templates = Vec::new();

        for entry in WalkDir::new(template_dir)
            .follow_links(true)
            .sort_by_file_name()
            .into_iter()
            .filter_map(|e| e.ok())
            .filter(|e| e.file_type().is_file())
        {
            let path = entry.path();
            let matches = path
                .extension()
                .and_then(|ext| ext.to_str())
                .is_some_and(|ext| self.valid_extensions.iter().any(|valid| ext.eq_ignore_ascii_case(valid)));

            if matches {
                let name = entry.file_name().to_string_lossy().to_string();
                trace!("Found template {}: {}", name, path.display());
                templates.push((name, path.to_path_buf()));
            }
        }

        debug!("Collected {} templates", templates.len());
        Ok(templates)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn collects_only_template_files() {
        let dir = tempdir().unwrap();
        fs::create_dir_all(dir.path().join("nested")).unwrap();
        fs::write(dir.path().join("b.h.tmpl"), "").unwrap();
        fs::write(dir.path().join("nested").join("a.cpp.tmpl"), "").unwrap();
        fs::write(dir.path().join("README.md"), "").unwrap();

        let templates = TemplateCollector::new().collect_templates(dir.path()).unwrap();
        let mut names: Vec<&str> = templates.iter().map(|(name, _)| name.as_str()).collect();
        names.sort_unstable();

        assert_eq!(names, vec!["a.cpp.tmpl", "b.h.tmpl"]);
    }

    #[test]
    fn missing_directory_is_an_error() {
        let dir = tempdir().unwrap();
        assert!(TemplateCollector::new().collect_templates(dir.path().join("absent")).is_err());
    }
}
