pub mod coordinator;
pub mod renderer;
pub mod template_collector;
pub mod writer;

// Re-export from submodules
pub use coordinator::{
    render_class_stub, render_descriptor_table, ArtifactSource, OutputPlan, RenderedArtifact,
    DESCRIPTOR_TABLE_ARTIFACT,
};
pub use renderer::TemplateRenderer;
pub use template_collector::TemplateCollector;
pub use writer::{ArtifactWriter, WriteStats};
