pub mod config;
pub mod error;
pub mod generator;
pub mod output;
pub mod property;
pub mod schema;
pub mod utils;

#[cfg(test)]
mod tests;

// Re-export main types and functions for easier access
pub use property::types::{ApiClass, ClassDescriptor, PropertyRecord};
pub use property::{build_descriptors, resolve_classname, DEFAULT_CLASS_PREFIX};
pub use schema::{PropertySchema, SchemaLoader};
pub use output::{OutputPlan, TemplateRenderer};
pub use config::{GeneratorConfig, GeneratorOptions};
pub use error::GeneratorError;
pub use generator::{GenerationResult, Generator};

// Re-export utility functions
pub use utils::file_utils;
