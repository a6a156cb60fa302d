// SPDX-License-Identifier: AGPL-3.0-or-later
//! Extract the JSON document from producer text
//!
//! Text-completion backends often wrap the payload in a markdown fence or
//! surround it with prose. Decoding only narrows the text down to the
//! outermost `{ ... }` span; it never repairs the JSON itself.

use crate::traits::Result;
use serde_json::Value;

/// Narrow producer text down to the JSON object it carries
pub fn extract_json(text: &str) -> &str {
    let mut content = text.trim();
    if let Some(rest) = content.strip_prefix("```json") {
        content = rest;
    }
    if let Some(rest) = content.strip_prefix("```") {
        content = rest;
    }
    if let Some(rest) = content.strip_suffix("```") {
        content = rest;
    }
    let content = content.trim();

    match (content.find('{'), content.rfind('}')) {
        (Some(start), Some(end)) if start <= end => &content[start..=end],
        _ => content,
    }
}

/// Parse producer text into an untyped document, ready for validation
pub fn decode_document(text: &str) -> Result<Value> {
    Ok(serde_json::from_str(extract_json(text))?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::traits::RoadmapError;

    #[test]
    fn test_extract_plain() {
        assert_eq!(extract_json(r#"  {"a": 1}  "#), r#"{"a": 1}"#);
    }

    #[test]
    fn test_extract_fenced() {
        let text = "```json\n{\"a\": 1}\n```";
        assert_eq!(extract_json(text), r#"{"a": 1}"#);

        let text = "```\n{\"a\": 1}\n```";
        assert_eq!(extract_json(text), r#"{"a": 1}"#);
    }

    #[test]
    fn test_extract_surrounded_by_prose() {
        let text = "Here is your roadmap: {\"a\": {\"b\": 2}} Enjoy!";
        assert_eq!(extract_json(text), r#"{"a": {"b": 2}}"#);
    }

    #[test]
    fn test_extract_without_braces_is_untouched() {
        assert_eq!(extract_json("  [1, 2]  "), "[1, 2]");
        assert_eq!(extract_json("} backwards {"), "} backwards {");
    }

    #[test]
    fn test_decode_reports_json_error() {
        let err = decode_document("{not json}").unwrap_err();
        assert!(matches!(err, RoadmapError::Json(_)));
        assert!(err.to_string().starts_with("Failed to parse roadmap as JSON"));
    }
}
