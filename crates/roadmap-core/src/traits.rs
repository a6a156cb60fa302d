// SPDX-License-Identifier: AGPL-3.0-or-later
//! Renderer trait, render configuration and the renderer registry

use crate::model::{OutputFormat, Roadmap};
use crate::schema::SchemaError;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::io::Write;

/// Error type for decoding and validating roadmap documents
#[derive(Debug, thiserror::Error)]
pub enum RoadmapError {
    #[error("Validation error: {0}")]
    Schema(#[from] SchemaError),

    #[error("Failed to parse roadmap as JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, RoadmapError>;

/// Configuration for rendering
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Week count shown when the roadmap omits `total_weeks`
    pub default_total_weeks: u32,
    /// Items drawn per subtopic in the diagram; the rest are omitted
    pub diagram_item_limit: usize,
    /// Maximum characters of an item label in the diagram
    pub item_label_max: usize,
    /// Maximum characters of the name-derived part of a diagram node id
    pub node_id_max: usize,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            default_total_weeks: 16,
            diagram_item_limit: 3,
            item_label_max: 40,
            node_id_max: 30,
        }
    }
}

/// Renderer trait: convert a validated roadmap to a target format
///
/// Rendering is total: a `Roadmap` can only be built from a document that
/// passed validation, so there is no failure path.
pub trait Renderer: Send + Sync {
    /// The target format this renderer produces
    fn format(&self) -> OutputFormat;

    /// Render a Roadmap to a string
    fn render(&self, roadmap: &Roadmap, config: &RenderConfig) -> String;
}

/// Extension trait for streaming operations (not dyn-compatible)
pub trait RendererExt: Renderer {
    /// Render to a writer, terminated by a newline
    fn render_writer<W: Write>(
        &self,
        roadmap: &Roadmap,
        writer: &mut W,
        config: &RenderConfig,
    ) -> Result<()> {
        let output = self.render(roadmap, config);
        writer.write_all(output.as_bytes())?;
        writer.write_all(b"\n")?;
        Ok(())
    }
}

impl<T: Renderer> RendererExt for T {}

/// Registry of renderers keyed by output format
pub struct RendererRegistry {
    renderers: HashMap<OutputFormat, Box<dyn Renderer>>,
}

impl RendererRegistry {
    pub fn new() -> Self {
        Self {
            renderers: HashMap::new(),
        }
    }

    /// Registry with the tree and Mermaid renderers installed
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.register(Box::new(crate::formats::TreeRenderer::new()));
        registry.register(Box::new(crate::formats::MermaidRenderer::new()));
        registry
    }

    pub fn register(&mut self, renderer: Box<dyn Renderer>) {
        self.renderers.insert(renderer.format(), renderer);
    }

    pub fn get(&self, format: OutputFormat) -> Option<&dyn Renderer> {
        self.renderers.get(&format).map(|r| r.as_ref())
    }

    /// Render with the registered renderer for `format`, if any
    pub fn render(
        &self,
        format: OutputFormat,
        roadmap: &Roadmap,
        config: &RenderConfig,
    ) -> Option<String> {
        self.get(format).map(|r| r.render(roadmap, config))
    }
}

impl Default for RendererRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}
