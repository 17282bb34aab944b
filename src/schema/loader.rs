use std::path::{Path, PathBuf};

use convert_case::{Case, Casing};
use log::{debug, info, trace};

use crate::error::{GeneratorError, Result};
use crate::property::{ApiClass, PropertyRecord};
use super::types::{PropertySchema, RawProperty, RawSchema, SchemaFormat};

/// Prefix for derived property identifiers
pub const PROPERTY_ID_PREFIX: &str = "CSSProperty";

/// Reads a property schema from disk
#[derive(Debug)]
pub struct SchemaLoader {
    /// Path to the schema file
    schema_path: PathBuf,
}

impl SchemaLoader {
    /// Create a loader for the given schema file
    pub fn new(schema_path: impl AsRef<Path>) -> Self {
        Self {
            schema_path: schema_path.as_ref().to_path_buf(),
        }
    }

    /// Format implied by the file extension
    pub fn format(&self) -> Result<SchemaFormat> {
        self.schema_path
            .extension()
            .and_then(|ext| ext.to_str())
            .and_then(SchemaFormat::from_extension)
            .ok_or_else(|| {
                GeneratorError::schema_load(
                    &self.schema_path,
                    "unsupported extension, expected .json, .json5, .yaml, .yml or .toml",
                )
            })
    }

    /// Load and validate the schema
    pub fn load(&self) -> Result<PropertySchema> {
        let path = &self.schema_path;
        debug!("Loading schema from {}", path.display());

        let format = self.format()?;
        let content = std::fs::read_to_string(path)
            .map_err(|e| GeneratorError::schema_load(path, e))?;

        let schema = parse_schema(&content, format, path)?;
        info!(
            "Loaded {} properties ({} with an API class) from {}",
            schema.properties.len(),
            schema.api_property_count(),
            path.display()
        );
        Ok(schema)
    }
}

/// Parse schema text in the given format. `origin` only labels errors.
pub fn parse_schema(content: &str, format: SchemaFormat, origin: &Path) -> Result<PropertySchema> {
    let raw: RawSchema = match format {
        SchemaFormat::Json => serde_json::from_str(content).map_err(|e| GeneratorError::schema_load(origin, e))?,
        SchemaFormat::Json5 => json5::from_str(content).map_err(|e| GeneratorError::schema_load(origin, e))?,
        SchemaFormat::Yaml => serde_yaml::from_str(content).map_err(|e| GeneratorError::schema_load(origin, e))?,
        SchemaFormat::Toml => toml::from_str(content).map_err(|e| GeneratorError::schema_load(origin, e))?,
    };

    let vocabulary = raw.parameters.api_methods.valid_values;
    let properties = raw
        .data
        .into_iter()
        .map(|property| to_record(property, &vocabulary, origin))
        .collect::<Result<Vec<_>>>()?;

    Ok(PropertySchema {
        properties,
        api_methods: vocabulary,
        method_signatures: raw.parameters.api_methods.signatures,
    })
}

/// `background-color` -> `BackgroundColor`
pub fn derive_upper_camel_name(css_name: &str) -> String {
    css_name.to_case(Case::Pascal)
}

fn to_record(raw: RawProperty, vocabulary: &[String], origin: &Path) -> Result<PropertyRecord> {
    if raw.name.trim().is_empty() {
        return Err(GeneratorError::schema_load(origin, "property with an empty name"));
    }

    if !vocabulary.is_empty() {
        if let Some(unknown) = raw.api_methods.iter().find(|m| !vocabulary.contains(*m)) {
            return Err(GeneratorError::schema_load(
                origin,
                format!(
                    "property '{}' lists api_method '{}' which is not one of {:?}",
                    raw.name, unknown, vocabulary
                ),
            ));
        }
    }

    let upper_camel_name = raw
        .upper_camel_name
        .unwrap_or_else(|| derive_upper_camel_name(&raw.name));
    let property_id = raw
        .property_id
        .unwrap_or_else(|| format!("{}{}", PROPERTY_ID_PREFIX, upper_camel_name));

    let api_class = ApiClass::from_raw(&property_id, raw.api_class.as_ref())?;
    trace!("Property {} ({}) -> {:?}", property_id, raw.name, api_class);

    Ok(PropertyRecord {
        property_id,
        name: raw.name,
        upper_camel_name,
        api_class,
        api_methods: raw.api_methods.into_iter().collect(),
    })
}
