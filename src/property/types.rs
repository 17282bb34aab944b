use std::collections::BTreeSet;

use serde_json::Value;

use crate::error::{GeneratorError, Result};

/// Which implementation class a property asks for
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiClass {
    /// No generated API class
    Absent,

    /// Generated class named after the property
    AutoDerived,

    /// Class named explicitly in the schema
    Explicit(String),
}

impl ApiClass {
    /// Convert the raw schema value into a variant.
    ///
    /// Only a missing value, `null`, `true` or a string are accepted. Anything
    /// else (numbers, `false`, lists, objects) is a configuration error that
    /// names the offending property.
    pub fn from_raw(property_id: &str, raw: Option<&Value>) -> Result<Self> {
        match raw {
            None | Some(Value::Null) => Ok(Self::Absent),
            Some(Value::Bool(true)) => Ok(Self::AutoDerived),
            Some(Value::String(name)) => Ok(Self::Explicit(name.clone())),
            Some(other) => Err(GeneratorError::Configuration {
                property: property_id.to_string(),
                value: other.to_string(),
                expected: "None, True or a string",
            }),
        }
    }

    pub fn is_absent(&self) -> bool {
        matches!(self, Self::Absent)
    }
}

/// Build-time metadata for one CSS property
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PropertyRecord {
    /// Unique property identifier, e.g. `CSSPropertyWidth`
    pub property_id: String,

    /// CSS name as written in the schema, e.g. `background-color`
    pub name: String,

    /// Camel-cased name, e.g. `BackgroundColor`
    pub upper_camel_name: String,

    /// Requested API class
    pub api_class: ApiClass,

    /// Behavioral methods the API class must implement
    pub api_methods: BTreeSet<String>,
}

impl PropertyRecord {
    /// Create a record whose CSS name equals its identifier
    pub fn new<I, S>(
        property_id: impl Into<String>,
        upper_camel_name: impl Into<String>,
        api_class: ApiClass,
        api_methods: I,
    ) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let property_id = property_id.into();
        Self {
            name: property_id.clone(),
            property_id,
            upper_camel_name: upper_camel_name.into(),
            api_class,
            api_methods: api_methods.into_iter().map(Into::into).collect(),
        }
    }
}

/// One implementation class and the properties it serves
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassDescriptor {
    /// 1-based position in first-seen order
    pub index: usize,

    /// Name of the API class
    pub classname: String,

    /// Property identifiers in first-encountered order
    pub property_ids: Vec<String>,

    /// Methods the class implements, taken from its first property
    pub api_methods: BTreeSet<String>,
}
