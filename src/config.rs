use std::path::{Path, PathBuf};

use log::debug;
use serde::Deserialize;

use crate::error::{GeneratorError, Result};
use crate::property::DEFAULT_CLASS_PREFIX;

/// Configuration options for a generation run
#[derive(Debug, Clone)]
pub struct GeneratorOptions {
    /// Prefix for auto-derived API class names
    pub class_prefix: String,

    /// Directory with `*.tmpl` files overriding the built-in templates
    pub template_dir: Option<PathBuf>,

    /// Artifacts to produce; empty means all of them
    pub only: Vec<String>,

    /// Leave files whose content is unchanged untouched
    pub write_if_changed: bool,
}

impl Default for GeneratorOptions {
    fn default() -> Self {
        Self {
            class_prefix: DEFAULT_CLASS_PREFIX.to_string(),
            template_dir: None,
            only: Vec::new(),
            write_if_changed: true,
        }
    }
}

impl GeneratorOptions {
    /// Apply the values set in a config file on top of these options
    pub fn merge(mut self, config: GeneratorConfig) -> Self {
        if let Some(prefix) = config.class_prefix {
            self.class_prefix = prefix;
        }
        if config.template_dir.is_some() {
            self.template_dir = config.template_dir;
        }
        if let Some(only) = config.only {
            self.only = only;
        }
        if let Some(write_if_changed) = config.write_if_changed {
            self.write_if_changed = write_if_changed;
        }
        self
    }
}

/// Generator settings read from a TOML file. Unset keys keep their defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GeneratorConfig {
    pub class_prefix: Option<String>,
    pub template_dir: Option<PathBuf>,
    pub only: Option<Vec<String>>,
    pub write_if_changed: Option<bool>,
}

impl GeneratorConfig {
    /// Read a config file. Relative template directories resolve against the file's directory.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        debug!("Loading generator config from {}", path.display());

        let content = std::fs::read_to_string(path).map_err(|e| GeneratorError::Config {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

        let mut config: Self = toml::from_str(&content).map_err(|e| GeneratorError::Config {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

        if let Some(base) = path.parent() {
            config.template_dir = config
                .template_dir
                .take()
                .map(|dir| if dir.is_relative() { base.join(dir) } else { dir });
        }

        Ok(config)
    }
}
