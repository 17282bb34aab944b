pub mod types;
pub mod loader;

// Re-export main types and functions for easier access
pub use types::{PropertySchema, SchemaFormat};
pub use loader::{parse_schema, SchemaLoader};
