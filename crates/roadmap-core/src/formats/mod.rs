// SPDX-License-Identifier: AGPL-3.0-or-later
//! Renderers for each supported output format

pub mod mermaid;
pub mod tree;

pub use mermaid::{render_diagram, MermaidRenderer};
pub use tree::{render_tree, TreeRenderer};
