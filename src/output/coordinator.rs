use std::collections::{BTreeSet, HashSet};

use indexmap::IndexMap;
use log::{debug, info, warn};
use serde::Serialize;

use crate::error::{GeneratorError, Result};
use crate::property::ClassDescriptor;
use crate::schema::PropertySchema;
use super::renderer::{TemplateRenderer, CLASS_STUB_TEMPLATE, DESCRIPTOR_TABLE_TEMPLATE};

/// File name of the descriptor table artifact
pub const DESCRIPTOR_TABLE_ARTIFACT: &str = "CSSPropertyDescriptor.cpp";

/// What an artifact is rendered from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArtifactSource {
    /// The table of every class descriptor
    DescriptorTable,

    /// Interface stub for one API class
    ClassStub {
        classname: String,
        api_methods: BTreeSet<String>,
    },
}

/// A rendered artifact, ready to be written
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedArtifact {
    /// File name relative to the output directory
    pub name: String,

    /// Rendered text
    pub content: String,
}

/// One method slot of a descriptor row, in vocabulary order
#[derive(Debug, Clone, Serialize)]
pub struct MethodSlot {
    pub name: String,
    pub implemented: bool,

    /// `Class::method` when implemented, `nullptr` otherwise
    pub entry: String,
}

/// One row of the descriptor table
#[derive(Debug, Clone, Serialize)]
pub struct DescriptorRow {
    pub index: usize,
    pub classname: String,
    pub property_ids: Vec<String>,
    pub api_methods: Vec<String>,
    pub method_slots: Vec<MethodSlot>,
}

/// Property to descriptor index
#[derive(Debug, Clone, Serialize)]
pub struct PropertyIndex {
    pub property_id: String,
    pub index: usize,
}

/// Data for the descriptor table template
#[derive(Debug, Clone, Serialize)]
pub struct DescriptorTableData {
    pub source: String,
    pub api_classes: Vec<DescriptorRow>,
    pub api_methods: Vec<String>,
    pub property_indices: Vec<PropertyIndex>,
}

/// One method declared by a class stub
#[derive(Debug, Clone, Serialize)]
pub struct StubMethod {
    pub name: String,
    pub signature: Option<String>,
}

/// Data for the class stub template
#[derive(Debug, Clone, Serialize)]
pub struct ClassStubData {
    pub source: String,
    pub api_classname: String,
    pub api_methods: Vec<StubMethod>,
}

/// Maps every artifact name to what it is rendered from
#[derive(Debug, Clone)]
pub struct OutputPlan {
    /// Schema file name, quoted in generated headers
    source: String,
    descriptors: Vec<ClassDescriptor>,
    api_methods: Vec<String>,
    method_signatures: IndexMap<String, String>,
    artifacts: IndexMap<String, ArtifactSource>,
}

impl OutputPlan {
    /// Plan the descriptor table plus one stub per class
    pub fn new(descriptors: Vec<ClassDescriptor>, schema: &PropertySchema, source: impl Into<String>) -> Self {
        let mut artifacts = IndexMap::with_capacity(descriptors.len() + 1);
        artifacts.insert(DESCRIPTOR_TABLE_ARTIFACT.to_string(), ArtifactSource::DescriptorTable);

        for descriptor in &descriptors {
            artifacts.insert(
                format!("{}.h", descriptor.classname),
                ArtifactSource::ClassStub {
                    classname: descriptor.classname.clone(),
                    api_methods: descriptor.api_methods.clone(),
                },
            );
        }

        // Without a declared vocabulary, every method some class implements gets a slot
        let api_methods = if schema.api_methods.is_empty() {
            descriptors
                .iter()
                .flat_map(|descriptor| descriptor.api_methods.iter().cloned())
                .collect::<BTreeSet<_>>()
                .into_iter()
                .collect()
        } else {
            schema.api_methods.clone()
        };

        debug!("Planned {} artifacts over {} method slots", artifacts.len(), api_methods.len());

        Self {
            source: source.into(),
            descriptors,
            api_methods,
            method_signatures: schema.method_signatures.clone(),
            artifacts,
        }
    }

    /// Artifact names in output order
    pub fn artifact_names(&self) -> impl Iterator<Item = &str> {
        self.artifacts.keys().map(String::as_str)
    }

    /// Look up what an artifact is rendered from
    pub fn source_of(&self, artifact: &str) -> Option<&ArtifactSource> {
        self.artifacts.get(artifact)
    }

    pub fn descriptors(&self) -> &[ClassDescriptor] {
        &self.descriptors
    }

    /// Method names that get a slot in every descriptor row
    pub fn api_methods(&self) -> &[String] {
        &self.api_methods
    }

    /// Render the selected artifacts, or all of them when `selection` is empty.
    ///
    /// Unknown names are rejected before anything is rendered.
    pub fn render(&self, renderer: &TemplateRenderer, selection: &[String]) -> Result<Vec<RenderedArtifact>> {
        if let Some(unknown) = selection.iter().find(|name| !self.artifacts.contains_key(name.as_str())) {
            return Err(GeneratorError::UnknownArtifact(unknown.clone()));
        }

        let rendered = self
            .artifacts
            .iter()
            .filter(|(name, _)| selection.is_empty() || selection.contains(*name))
            .map(|(name, source)| -> Result<RenderedArtifact> {
                let content = match source {
                    ArtifactSource::DescriptorTable => render_descriptor_table(
                        renderer,
                        &self.source,
                        &self.descriptors,
                        &self.api_methods,
                    )?,
                    ArtifactSource::ClassStub { classname, api_methods } => render_class_stub(
                        renderer,
                        &self.source,
                        classname,
                        api_methods,
                        &self.method_signatures,
                    )?,
                };
                Ok(RenderedArtifact {
                    name: name.clone(),
                    content,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        info!("Rendered {} of {} artifacts", rendered.len(), self.artifacts.len());
        Ok(rendered)
    }
}

/// Build the descriptor table template data
pub fn descriptor_table_data(
    source: &str,
    descriptors: &[ClassDescriptor],
    api_methods: &[String],
) -> DescriptorTableData {
    let api_classes = descriptors
        .iter()
        .map(|descriptor| DescriptorRow {
            index: descriptor.index,
            classname: descriptor.classname.clone(),
            property_ids: descriptor.property_ids.clone(),
            api_methods: descriptor.api_methods.iter().cloned().collect(),
            method_slots: api_methods
                .iter()
                .map(|name| {
                    let implemented = descriptor.api_methods.contains(name);
                    MethodSlot {
                        name: name.clone(),
                        implemented,
                        entry: if implemented {
                            format!("{}::{}", descriptor.classname, name)
                        } else {
                            "nullptr".to_string()
                        },
                    }
                })
                .collect(),
        })
        .collect();

    // One switch case per identifier; a repeated id resolves to its first descriptor
    let mut seen = HashSet::new();
    let property_indices = descriptors
        .iter()
        .flat_map(|descriptor| {
            descriptor.property_ids.iter().map(move |property_id| PropertyIndex {
                property_id: property_id.clone(),
                index: descriptor.index,
            })
        })
        .filter(|entry| {
            let first = seen.insert(entry.property_id.clone());
            if !first {
                warn!(
                    "Property {} is listed more than once; descriptor lookup uses its first class",
                    entry.property_id
                );
            }
            first
        })
        .collect();

    DescriptorTableData {
        source: source.to_string(),
        api_classes,
        api_methods: api_methods.to_vec(),
        property_indices,
    }
}

/// Render the descriptor table
pub fn render_descriptor_table(
    renderer: &TemplateRenderer,
    source: &str,
    descriptors: &[ClassDescriptor],
    api_methods: &[String],
) -> Result<String> {
    let data = descriptor_table_data(source, descriptors, api_methods);
    renderer.render(DESCRIPTOR_TABLE_TEMPLATE, DESCRIPTOR_TABLE_ARTIFACT, &data)
}

/// Render the interface stub of one class
pub fn render_class_stub(
    renderer: &TemplateRenderer,
    source: &str,
    classname: &str,
    api_methods: &BTreeSet<String>,
    signatures: &IndexMap<String, String>,
) -> Result<String> {
    let data = ClassStubData {
        source: source.to_string(),
        api_classname: classname.to_string(),
        api_methods: api_methods
            .iter()
            .map(|name| StubMethod {
                name: name.clone(),
                signature: signatures.get(name).cloned(),
            })
            .collect(),
    };
    renderer.render(CLASS_STUB_TEMPLATE, &format!("{classname}.h"), &data)
}
