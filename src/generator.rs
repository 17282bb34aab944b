use std::path::{Path, PathBuf};

use anyhow::Result;
use log::{debug, info};

use crate::config::GeneratorOptions;
use crate::output::{ArtifactWriter, OutputPlan, TemplateRenderer, WriteStats};
use crate::property::{build_descriptors, ClassDescriptor};
use crate::schema::{PropertySchema, SchemaLoader};

/// Outcome of a generation run
#[derive(Debug, Clone)]
pub struct GenerationResult {
    /// Class descriptors in index order
    pub descriptors: Vec<ClassDescriptor>,

    /// Names of the artifacts that were rendered
    pub artifacts: Vec<String>,

    /// What happened on disk
    pub stats: WriteStats,
}

/// Drives schema loading, descriptor synthesis, rendering and writing
#[derive(Debug)]
pub struct Generator {
    /// Configuration options for the run
    options: GeneratorOptions,

    /// Directory receiving the artifacts
    output_dir: PathBuf,
}

impl Generator {
    /// Create a generator with the given options and output directory
    pub fn new(options: GeneratorOptions, output_dir: impl AsRef<Path>) -> Self {
        Self {
            options,
            output_dir: output_dir.as_ref().to_path_buf(),
        }
    }

    /// Create a generator with default options
    pub fn with_defaults(output_dir: impl AsRef<Path>) -> Self {
        Self::new(GeneratorOptions::default(), output_dir)
    }

    /// Build the output plan for an already loaded schema
    pub fn plan_schema(&self, schema: &PropertySchema, source: &str) -> crate::error::Result<OutputPlan> {
        let descriptors = build_descriptors(&schema.properties, &self.options.class_prefix)?;
        Ok(OutputPlan::new(descriptors, schema, source))
    }

    /// Load a schema file and build its output plan
    pub fn plan(&self, schema_path: impl AsRef<Path>) -> crate::error::Result<OutputPlan> {
        let schema_path = schema_path.as_ref();
        let schema = SchemaLoader::new(schema_path).load()?;
        self.plan_schema(&schema, &source_name(schema_path))
    }

    /// Run the whole pipeline. Nothing is written unless every selected artifact renders.
    pub fn run(&self, schema_path: impl AsRef<Path>) -> Result<GenerationResult> {
        let schema_path = schema_path.as_ref();
        info!("Generating property APIs from {}", schema_path.display());

        let plan = self.plan(schema_path)?;

        let renderer = match &self.options.template_dir {
            Some(dir) => TemplateRenderer::with_template_dir(dir)?,
            None => TemplateRenderer::new()?,
        };
        debug!("{:?}", renderer);

        let rendered = plan.render(&renderer, &self.options.only)?;

        let writer = ArtifactWriter::new(&self.output_dir, self.options.write_if_changed);
        let stats = writer.write_all(&rendered)?;

        Ok(GenerationResult {
            descriptors: plan.descriptors().to_vec(),
            artifacts: rendered.into_iter().map(|artifact| artifact.name).collect(),
            stats,
        })
    }
}

/// File name of the schema, as quoted in generated files
fn source_name(schema_path: &Path) -> String {
    schema_path
        .file_name()
        .map(|name| name.to_string_lossy().to_string())
        .unwrap_or_else(|| schema_path.display().to_string())
}
