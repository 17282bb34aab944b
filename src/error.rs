use std::path::PathBuf;

use thiserror::Error;

/// Result alias used by the schema, grouping and rendering layers
pub type Result<T> = std::result::Result<T, GeneratorError>;

/// Every way a generation run can fail. All of them are fatal to the run.
#[derive(Debug, Error)]
pub enum GeneratorError {
    /// `api_class` holds something other than nothing, `true` or a string,
    /// or resolves to a class name that cannot be a C++ identifier
    #[error("api_class value {value} for property '{property}' should be {expected}")]
    Configuration {
        property: String,
        value: String,
        expected: &'static str,
    },

    /// The schema file could not be read or does not describe a property table
    #[error("failed to load schema {}: {message}", path.display())]
    SchemaLoad { path: PathBuf, message: String },

    /// The generator config file could not be read or parsed
    #[error("failed to load config {}: {message}", path.display())]
    Config { path: PathBuf, message: String },

    /// A template could not be registered or rendered with the given data
    #[error("failed to render {artifact}: {message}")]
    Render { artifact: String, message: String },

    /// An artifact was requested that the schema does not produce
    #[error("unknown output artifact '{0}'")]
    UnknownArtifact(String),

    /// The pipeline was driven in a way its own stages never do
    #[error("internal error while processing property '{property}': {message}")]
    Internal { property: String, message: String },
}

impl GeneratorError {
    pub fn schema_load(path: impl Into<PathBuf>, message: impl ToString) -> Self {
        Self::SchemaLoad {
            path: path.into(),
            message: message.to_string(),
        }
    }

    pub fn render(artifact: impl Into<String>, message: impl ToString) -> Self {
        Self::Render {
            artifact: artifact.into(),
            message: message.to_string(),
        }
    }

    /// True for `api_class` misconfiguration
    pub fn is_configuration(&self) -> bool {
        matches!(self, Self::Configuration { .. })
    }
}
