// SPDX-License-Identifier: AGPL-3.0-or-later
//! Schema validation for untrusted roadmap documents
//!
//! Checks run top-down and left-to-right and stop at the first violation.
//! Every level is checked with the same three primitives: the value must be a
//! record, required fields must be present, and list fields must be non-empty
//! lists. Item values are opaque and never type-checked.

use crate::model::{Phase, Roadmap, Subtopic, Topic};
use serde_json::{Map, Value};

type Record = Map<String, Value>;

/// A single violated schema constraint
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SchemaError {
    #[error("{location} missing '{field}' field")]
    MissingField {
        location: String,
        field: &'static str,
    },

    #[error("{location} must be {expected}")]
    WrongType {
        location: String,
        expected: &'static str,
    },

    #[error("{location} must have a non-empty list of '{field}'")]
    EmptyOrWrongType {
        location: String,
        field: &'static str,
    },
}

impl SchemaError {
    /// Human-readable path to the offending node
    pub fn location(&self) -> &str {
        match self {
            Self::MissingField { location, .. }
            | Self::WrongType { location, .. }
            | Self::EmptyOrWrongType { location, .. } => location,
        }
    }
}

/// Check a document against the roadmap schema
///
/// Succeeds silently; callers keep using the document they passed in.
pub fn validate(document: &Value) -> Result<(), SchemaError> {
    check_roadmap(document).map(|_| ())
}

/// Validate a document and build the typed roadmap from it
pub fn parse_roadmap(document: &Value) -> Result<Roadmap, SchemaError> {
    let roadmap = check_roadmap(document)?;
    tracing::debug!(
        domain = %roadmap.domain,
        phases = roadmap.phases.len(),
        items = roadmap.item_count(),
        "roadmap validated"
    );
    Ok(roadmap)
}

fn check_roadmap(document: &Value) -> Result<Roadmap, SchemaError> {
    let location = "roadmap";
    let record = require_record(document, location)?;
    let domain = require_field(record, "domain", location)?;
    let level = require_field(record, "level", location)?;
    let phases = require_field(record, "phases", location)?;
    let phases = require_list(phases, "phases", location)?;

    let phases = phases
        .iter()
        .enumerate()
        .map(|(i, phase)| check_phase(phase, i + 1))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(Roadmap {
        domain: text(domain),
        level: text(level),
        total_weeks: optional_value(record.get("total_weeks")),
        phases,
    })
}

fn check_phase(value: &Value, ordinal: usize) -> Result<Phase, SchemaError> {
    let location = format!("phase {ordinal}");
    let record = require_record(value, &location)?;
    let name = text(require_field(record, "name", &location)?);
    let weeks = require_field(record, "weeks", &location)?;
    let topics = require_field(record, "topics", &location)?;

    let location = format!("phase '{name}'");
    let topics = require_list(topics, "topics", &location)?
        .iter()
        .enumerate()
        .map(|(j, topic)| check_topic(topic, j + 1, &location))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(Phase {
        name,
        weeks: text(weeks),
        description: optional_text(record.get("description")),
        topics,
    })
}

fn check_topic(value: &Value, ordinal: usize, parent: &str) -> Result<Topic, SchemaError> {
    let location = format!("topic {ordinal} in {parent}");
    let record = require_record(value, &location)?;
    let name = text(require_field(record, "name", &location)?);

    let location = format!("topic '{name}' in {parent}");
    let subtopics = require_field(record, "subtopics", &location)?;
    let scope = format!("topic '{name}'");
    let subtopics = require_list(subtopics, "subtopics", &location)?
        .iter()
        .enumerate()
        .map(|(k, subtopic)| check_subtopic(subtopic, k + 1, &scope))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(Topic { name, subtopics })
}

fn check_subtopic(value: &Value, ordinal: usize, parent: &str) -> Result<Subtopic, SchemaError> {
    let location = format!("subtopic {ordinal} in {parent}");
    let record = require_record(value, &location)?;
    let name = text(require_field(record, "name", &location)?);

    let location = format!("subtopic '{name}' in {parent}");
    let items = require_field(record, "items", &location)?;
    let items = require_list(items, "items", &location)?
        .iter()
        .map(text)
        .collect();

    Ok(Subtopic { name, items })
}

fn require_record<'a>(value: &'a Value, location: &str) -> Result<&'a Record, SchemaError> {
    value.as_object().ok_or_else(|| SchemaError::WrongType {
        location: location.to_string(),
        expected: "a record",
    })
}

fn require_field<'a>(
    record: &'a Record,
    field: &'static str,
    location: &str,
) -> Result<&'a Value, SchemaError> {
    record.get(field).ok_or_else(|| SchemaError::MissingField {
        location: location.to_string(),
        field,
    })
}

fn require_list<'a>(
    value: &'a Value,
    field: &'static str,
    location: &str,
) -> Result<&'a [Value], SchemaError> {
    match value.as_array() {
        Some(list) if !list.is_empty() => Ok(list),
        _ => Err(SchemaError::EmptyOrWrongType {
            location: location.to_string(),
            field,
        }),
    }
}

/// Strings verbatim; any other value by its JSON text
fn text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Optional fields: `null` counts as absent
fn optional_value(value: Option<&Value>) -> Option<Value> {
    value.filter(|v| !v.is_null()).cloned()
}

/// Optional text: falsy values (`null`, `false`, `0`, `""`, `[]`, `{}`) count as absent
fn optional_text(value: Option<&Value>) -> Option<String> {
    value.filter(|v| !is_falsy(v)).map(text)
}

fn is_falsy(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty(),
        Value::Array(list) => list.is_empty(),
        Value::Object(record) => record.is_empty(),
    }
}
