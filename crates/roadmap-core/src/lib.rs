// SPDX-License-Identifier: AGPL-3.0-or-later
//! Roadmap Core - Outline validation and rendering
//!
//! This crate provides:
//! - A schema validator for untrusted four-level roadmap documents
//! - A typed roadmap model built only from validated documents
//! - Renderer trait and registry for output formats
//! - Implementations for 2 formats: ASCII tree and Mermaid flowchart

pub mod decode;
pub mod formats;
pub mod model;
pub mod schema;
pub mod traits;

pub use formats::{render_diagram, render_tree, MermaidRenderer, TreeRenderer};
pub use model::{Item, OutputFormat, Phase, Roadmap, Subtopic, Topic};
pub use schema::{parse_roadmap, validate, SchemaError};
pub use traits::{RenderConfig, Renderer, RendererRegistry, Result, RoadmapError};
