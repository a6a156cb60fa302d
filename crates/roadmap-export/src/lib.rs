// SPDX-License-Identifier: AGPL-3.0-or-later
//! Roadmap Export - Artifact writing for validated roadmaps
//!
//! An export writes, per roadmap:
//! - `{slug}_roadmap.json`: the roadmap as pretty-printed JSON
//! - `{slug}_roadmap.md`: a titled markdown file holding the Mermaid diagram
//! - `{slug}_roadmap.txt`: the ASCII tree (optional)

use roadmap_core::{MermaidRenderer, OutputFormat, RenderConfig, Renderer, Roadmap, TreeRenderer};
use serde::Serialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("Failed to write {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ExportError>;

/// Response shape consumed by the web front end
#[derive(Debug, Clone, Serialize)]
pub struct ExportBundle<'a> {
    pub success: bool,
    pub roadmap: &'a Roadmap,
    pub mermaid: String,
}

impl<'a> ExportBundle<'a> {
    pub fn new(roadmap: &'a Roadmap, config: &RenderConfig) -> Self {
        Self {
            success: true,
            roadmap,
            mermaid: MermaidRenderer::new().render(roadmap, config),
        }
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// File stem shared by every artifact of a domain
///
/// Lowercased; anything other than letters, digits, `-` and `_` becomes `_`,
/// so path separators and `.` never reach the file name.
pub fn slug(domain: &str) -> String {
    domain
        .to_lowercase()
        .chars()
        .map(|c| {
            if c.is_alphanumeric() || c == '-' || c == '_' {
                c
            } else {
                '_'
            }
        })
        .collect()
}

/// Writes roadmap artifacts into one output directory
pub struct Exporter {
    output_dir: PathBuf,
    config: RenderConfig,
}

impl Exporter {
    pub fn new(output_dir: impl Into<PathBuf>, config: RenderConfig) -> Self {
        Self {
            output_dir: output_dir.into(),
            config,
        }
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Save the roadmap as JSON
    pub fn save_roadmap(&self, roadmap: &Roadmap) -> Result<PathBuf> {
        let json = serde_json::to_string_pretty(roadmap)?;
        self.write(&roadmap.domain, "json", &json)
    }

    /// Save the Mermaid diagram under a markdown title
    pub fn save_diagram(&self, roadmap: &Roadmap) -> Result<PathBuf> {
        let diagram = MermaidRenderer::new().render(roadmap, &self.config);
        let content = format!(
            "# {} Roadmap ({})\n\n{}",
            roadmap.domain, roadmap.level, diagram
        );
        self.write(&roadmap.domain, OutputFormat::Mermaid.extension(), &content)
    }

    /// Save the ASCII tree
    pub fn save_tree(&self, roadmap: &Roadmap) -> Result<PathBuf> {
        let tree = TreeRenderer::new().render(roadmap, &self.config);
        self.write(&roadmap.domain, OutputFormat::Tree.extension(), &tree)
    }

    /// Save JSON and diagram, plus the tree when `with_tree` is set
    pub fn export(&self, roadmap: &Roadmap, with_tree: bool) -> Result<Vec<PathBuf>> {
        let mut written = vec![self.save_roadmap(roadmap)?, self.save_diagram(roadmap)?];
        if with_tree {
            written.push(self.save_tree(roadmap)?);
        }
        Ok(written)
    }

    fn write(&self, domain: &str, extension: &str, content: &str) -> Result<PathBuf> {
        let io_error = |path: &Path| {
            let path = path.to_path_buf();
            move |source: std::io::Error| ExportError::Io { path, source }
        };

        std::fs::create_dir_all(&self.output_dir).map_err(io_error(&self.output_dir))?;
        let path = self
            .output_dir
            .join(format!("{}_roadmap.{extension}", slug(domain)));
        std::fs::write(&path, content).map_err(io_error(&path))?;

        tracing::info!(path = %path.display(), "saved roadmap artifact");
        Ok(path)
    }
}
