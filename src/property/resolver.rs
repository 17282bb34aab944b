use log::trace;

use crate::error::{GeneratorError, Result};
use super::types::{ApiClass, PropertyRecord};

/// Prefix for auto-derived API class names
pub const DEFAULT_CLASS_PREFIX: &str = "CSSPropertyAPI";

/// Compute the name of the API class responsible for a property.
///
/// Callers filter out `ApiClass::Absent` first; reaching that arm means the
/// pipeline was driven incorrectly. The name becomes a C++ class and a header
/// file name, so anything that is not a plain identifier is rejected.
pub fn resolve_classname(property: &PropertyRecord, prefix: &str) -> Result<String> {
    let classname = match &property.api_class {
        ApiClass::AutoDerived => format!("{}{}", prefix, property.upper_camel_name),
        ApiClass::Explicit(name) => name.clone(),
        ApiClass::Absent => {
            return Err(GeneratorError::Internal {
                property: property.property_id.clone(),
                message: "class resolution requested for a property without api_class".to_string(),
            });
        }
    };

    if !is_cpp_identifier(&classname) {
        return Err(GeneratorError::Configuration {
            property: property.property_id.clone(),
            value: format!("{classname:?}"),
            expected: "a C++ identifier ([A-Za-z_][A-Za-z0-9_]*)",
        });
    }

    trace!("Resolved {} -> {}", property.property_id, classname);
    Ok(classname)
}

/// `[A-Za-z_][A-Za-z0-9_]*`
pub fn is_cpp_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    chars
        .next()
        .is_some_and(|first| first.is_ascii_alphabetic() || first == '_')
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}
