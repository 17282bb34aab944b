use std::path::Path;

use handlebars::Handlebars;
use log::{debug, info};
use serde::Serialize;

use crate::error::{GeneratorError, Result};
use super::template_collector::TemplateCollector;

/// Template for the descriptor table
pub const DESCRIPTOR_TABLE_TEMPLATE: &str = "CSSPropertyDescriptor.cpp.tmpl";

/// Template for per-class interface stubs
pub const CLASS_STUB_TEMPLATE: &str = "CSSPropertyAPIFiles.h.tmpl";

const BUILTIN_TEMPLATES: [(&str, &str); 2] = [
    (
        DESCRIPTOR_TABLE_TEMPLATE,
        include_str!("../../templates/CSSPropertyDescriptor.cpp.tmpl"),
    ),
    (
        CLASS_STUB_TEMPLATE,
        include_str!("../../templates/CSSPropertyAPIFiles.h.tmpl"),
    ),
];

/// Renders named templates with serializable data
pub struct TemplateRenderer {
    handlebars: Handlebars<'static>,
}

impl std::fmt::Debug for TemplateRenderer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut names: Vec<&String> = self.handlebars.get_templates().keys().collect();
        names.sort();
        f.debug_struct("TemplateRenderer").field("templates", &names).finish()
    }
}

impl TemplateRenderer {
    /// Create a renderer with the built-in templates
    pub fn new() -> Result<Self> {
        let mut handlebars = Handlebars::new();

        // Missing fields are template/data mismatches, not empty strings
        handlebars.set_strict_mode(true);
        // Output is C++, not HTML
        handlebars.register_escape_fn(handlebars::no_escape);

        let mut renderer = Self { handlebars };
        for (name, source) in BUILTIN_TEMPLATES {
            renderer.register(name, source)?;
        }
        Ok(renderer)
    }

    /// Create a renderer whose built-ins are overridden by the `*.tmpl` files in a directory
    pub fn with_template_dir(template_dir: impl AsRef<Path>) -> Result<Self> {
        let template_dir = template_dir.as_ref();
        let mut renderer = Self::new()?;

        for (name, path) in TemplateCollector::new().collect_templates(template_dir)? {
            let source = std::fs::read_to_string(&path)
                .map_err(|e| GeneratorError::render(&name, format!("{}: {}", path.display(), e)))?;
            renderer.register(&name, &source)?;
            info!("Using template {} from {}", name, path.display());
        }

        Ok(renderer)
    }

    /// Register or replace a template
    pub fn register(&mut self, name: &str, source: &str) -> Result<()> {
        debug!("Registering template {}", name);
        self.handlebars
            .register_template_string(name, source)
            .map_err(|e| GeneratorError::render(name, e))
    }

    /// Whether a template of this name is known
    pub fn has_template(&self, name: &str) -> bool {
        self.handlebars.has_template(name)
    }

    /// Render `template` with `data`. `artifact` labels errors.
    pub fn render<T: Serialize>(&self, template: &str, artifact: &str, data: &T) -> Result<String> {
        self.handlebars
            .render(template, data)
            .map_err(|e| GeneratorError::render(artifact, e))
    }
}
