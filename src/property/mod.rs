pub mod types;
pub mod resolver;
pub mod grouping;
pub mod descriptor;

// Re-export the main API for easier access
pub use types::{ApiClass, ClassDescriptor, PropertyRecord};
pub use resolver::{resolve_classname, DEFAULT_CLASS_PREFIX};
pub use grouping::{group_properties, ClassGroup, ClassGroups};
pub use descriptor::assemble_descriptors;

use crate::error::Result;

/// Resolve, group and number the properties in one pass
pub fn build_descriptors(properties: &[PropertyRecord], prefix: &str) -> Result<Vec<ClassDescriptor>> {
    let groups = group_properties(properties, prefix)?;
    Ok(assemble_descriptors(groups))
}
