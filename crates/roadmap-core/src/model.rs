// SPDX-License-Identifier: AGPL-3.0-or-later
//! Typed roadmap model
//!
//! A four-level outline: roadmap → phases → topics → subtopics → items.
//! Values of these types are produced by [`crate::schema::parse_roadmap`],
//! so every list the renderers walk is known to be present and ordered as in
//! the source document.

use crate::schema;
use crate::traits::Result;
use serde::Serialize;
use serde_json::Value;

/// Output format identifier for renderers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Tree,
    Mermaid,
}

impl OutputFormat {
    /// File extension for this format
    pub const fn extension(&self) -> &'static str {
        match self {
            Self::Tree => "txt",
            Self::Mermaid => "md",
        }
    }

    /// Short display name
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Tree => "TREE",
            Self::Mermaid => "MERMAID",
        }
    }

    /// All formats in registry order
    pub const ALL: [Self; 2] = [Self::Tree, Self::Mermaid];
}

/// Leaf entry of a subtopic
pub type Item = String;

/// The root roadmap node
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Roadmap {
    pub domain: String,
    pub level: String,
    /// Week count as the producer sent it; shown verbatim, never type-checked
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_weeks: Option<Value>,
    pub phases: Vec<Phase>,
}

impl Roadmap {
    /// Decode producer text, validate it and build the typed roadmap
    pub fn from_json_str(text: &str) -> Result<Self> {
        let value = crate::decode::decode_document(text)?;
        Ok(schema::parse_roadmap(&value)?)
    }

    /// Declared week count as display text, or `default` when the document omits it
    pub fn total_weeks_or(&self, default: u32) -> String {
        match &self.total_weeks {
            Some(Value::String(s)) => s.clone(),
            Some(other) => other.to_string(),
            None => default.to_string(),
        }
    }

    /// Number of leaf items across all phases
    pub fn item_count(&self) -> usize {
        self.phases
            .iter()
            .flat_map(|p| &p.topics)
            .flat_map(|t| &t.subtopics)
            .map(|s| s.items.len())
            .sum()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Phase {
    pub name: String,
    /// Week-range label, e.g. "Week 1-3"
    pub weeks: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub topics: Vec<Topic>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Topic {
    pub name: String,
    pub subtopics: Vec<Subtopic>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Subtopic {
    pub name: String,
    pub items: Vec<Item>,
}
