use indexmap::IndexMap;
use serde::Deserialize;
use serde_json::Value;

use crate::property::PropertyRecord;

/// Schema document as written on disk
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawSchema {
    /// Schema-wide parameters
    #[serde(default)]
    pub parameters: RawParameters,

    /// Property table, in schema order
    #[serde(default)]
    pub data: Vec<RawProperty>,
}

/// The `parameters` block of a schema
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawParameters {
    #[serde(default)]
    pub api_methods: RawApiMethods,
}

/// Declared vocabulary of behavioral methods
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawApiMethods {
    /// Every method name a property may list
    #[serde(default)]
    pub valid_values: Vec<String>,

    /// Optional C++ declarations keyed by method name
    #[serde(default)]
    pub signatures: IndexMap<String, String>,
}

/// One entry of the property table
#[derive(Debug, Clone, Deserialize)]
pub struct RawProperty {
    /// CSS property name, e.g. `background-color`
    pub name: String,

    /// Kept raw so that unsupported shapes can be reported per property
    #[serde(default)]
    pub api_class: Option<Value>,

    #[serde(default)]
    pub api_methods: Vec<String>,

    /// Overrides the derived `CSSProperty<UpperCamelName>` identifier
    #[serde(default)]
    pub property_id: Option<String>,

    /// Overrides the camel-cased form of `name`
    #[serde(default)]
    pub upper_camel_name: Option<String>,
}

/// A loaded, validated schema
#[derive(Debug, Clone, Default)]
pub struct PropertySchema {
    /// Property records in schema order
    pub properties: Vec<PropertyRecord>,

    /// Valid method names, in declaration order
    pub api_methods: Vec<String>,

    /// C++ declarations for methods that have one
    pub method_signatures: IndexMap<String, String>,
}

impl PropertySchema {
    /// Number of properties that ask for an API class
    pub fn api_property_count(&self) -> usize {
        self.properties
            .iter()
            .filter(|property| !property.api_class.is_absent())
            .count()
    }
}

/// Supported schema encodings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchemaFormat {
    Json,
    /// JSON plus comments, unquoted keys and trailing commas
    Json5,
    Yaml,
    Toml,
}

impl SchemaFormat {
    /// Pick the format from a file extension
    pub fn from_extension(extension: &str) -> Option<Self> {
        match extension.to_ascii_lowercase().as_str() {
            "json" => Some(Self::Json),
            "json5" => Some(Self::Json5),
            "yaml" | "yml" => Some(Self::Yaml),
            "toml" => Some(Self::Toml),
            _ => None,
        }
    }
}
