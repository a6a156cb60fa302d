// SPDX-License-Identifier: AGPL-3.0-or-later
//! ASCII tree renderer

use crate::model::{OutputFormat, Phase, Roadmap, Topic};
use crate::traits::{RenderConfig, Renderer};

const RULE_WIDTH: usize = 70;
const INDENT: &str = "   ";
const TEE: &str = "├─";
const CORNER: &str = "└─";
const PHASE_ARROW: &str = "         ⬇️";

/// Indented outline with box-drawing connectors
pub struct TreeRenderer;

impl TreeRenderer {
    pub fn new() -> Self {
        Self
    }
}

impl Default for TreeRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl Renderer for TreeRenderer {
    fn format(&self) -> OutputFormat {
        OutputFormat::Tree
    }

    fn render(&self, roadmap: &Roadmap, config: &RenderConfig) -> String {
        let mut lines = vec![
            format!(
                "🧭 {} Roadmap ({}) - {} Weeks",
                roadmap.domain,
                roadmap.level,
                roadmap.total_weeks_or(config.default_total_weeks)
            ),
            "=".repeat(RULE_WIDTH),
            String::new(),
        ];

        for (i, phase) in roadmap.phases.iter().enumerate() {
            render_phase(&mut lines, phase);
            if i + 1 < roadmap.phases.len() {
                lines.push(PHASE_ARROW.to_string());
                lines.push(String::new());
            }
        }

        tracing::debug!(lines = lines.len(), "rendered tree");
        lines.join("\n")
    }
}

/// Render with the default configuration
pub fn render_tree(roadmap: &Roadmap) -> String {
    TreeRenderer::new().render(roadmap, &RenderConfig::default())
}

fn render_phase(lines: &mut Vec<String>, phase: &Phase) {
    lines.push(format!("📅 {} | {}", phase.weeks, phase.name));
    if let Some(description) = phase.description.as_deref().filter(|d| !d.is_empty()) {
        lines.push(format!("{INDENT}{CORNER} {description}"));
    }
    lines.push(String::new());

    for (i, topic) in phase.topics.iter().enumerate() {
        render_topic(lines, topic, i + 1 == phase.topics.len());
    }
    lines.push(String::new());
}

fn render_topic(lines: &mut Vec<String>, topic: &Topic, is_last_topic: bool) {
    lines.push(format!("{INDENT}{} 📚 {}", connector(is_last_topic), topic.name));

    // No vertical bar below the last sibling, one column per level
    let topic_column = format!("{INDENT}{}", continuation(is_last_topic));
    for (s, subtopic) in topic.subtopics.iter().enumerate() {
        let is_last_subtopic = s + 1 == topic.subtopics.len();
        lines.push(format!(
            "{topic_column}{} 📌 {}",
            connector(is_last_subtopic),
            subtopic.name
        ));

        let item_column = format!("{topic_column}{}", continuation(is_last_subtopic));
        for (k, item) in subtopic.items.iter().enumerate() {
            let is_last_item = k + 1 == subtopic.items.len();
            lines.push(format!("{item_column}{} {item}", connector(is_last_item)));
        }
    }
}

fn connector(is_last: bool) -> &'static str {
    if is_last {
        CORNER
    } else {
        TEE
    }
}

fn continuation(is_last: bool) -> &'static str {
    if is_last {
        "   "
    } else {
        "│  "
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Subtopic;
    use pretty_assertions::assert_eq;

    fn subtopic(name: &str, items: &[&str]) -> Subtopic {
        Subtopic {
            name: name.to_string(),
            items: items.iter().map(|i| i.to_string()).collect(),
        }
    }

    fn topic(name: &str, subtopics: Vec<Subtopic>) -> Topic {
        Topic {
            name: name.to_string(),
            subtopics,
        }
    }

    fn phase(name: &str, weeks: &str, topics: Vec<Topic>) -> Phase {
        Phase {
            name: name.to_string(),
            weeks: weeks.to_string(),
            description: None,
            topics,
        }
    }

    fn roadmap(phases: Vec<Phase>) -> Roadmap {
        Roadmap {
            domain: "X".to_string(),
            level: "Beginner".to_string(),
            total_weeks: None,
            phases,
        }
    }

    #[test]
    fn test_render_example() {
        let doc = roadmap(vec![phase(
            "A",
            "W1",
            vec![topic("T", vec![subtopic("S", &["i1", "i2"])])],
        )]);

        let expected = [
            "🧭 X Roadmap (Beginner) - 16 Weeks",
            "=".repeat(70).as_str(),
            "",
            "📅 W1 | A",
            "",
            "   └─ 📚 T",
            "      └─ 📌 S",
            "         ├─ i1",
            "         └─ i2",
            "",
        ]
        .join("\n");
        assert_eq!(render_tree(&doc), expected);
    }

    #[test]
    fn test_two_topics_continuation() {
        let doc = roadmap(vec![phase(
            "A",
            "W1",
            vec![
                topic("T1", vec![subtopic("S1", &["a"]), subtopic("S2", &["b"])]),
                topic("T2", vec![subtopic("S3", &["c", "d"]), subtopic("S4", &["e"])]),
            ],
        )]);

        let output = render_tree(&doc);
        let body: Vec<&str> = output.lines().skip(5).collect();
        assert_eq!(
            body,
            vec![
                "   ├─ 📚 T1",
                "   │  ├─ 📌 S1",
                "   │  │  └─ a",
                "   │  └─ 📌 S2",
                "   │     └─ b",
                "   └─ 📚 T2",
                "      ├─ 📌 S3",
                "      │  ├─ c",
                "      │  └─ d",
                "      └─ 📌 S4",
                "         └─ e",
            ]
        );
    }

    #[test]
    fn test_phase_separator_and_description() {
        let topics = |name: &str, item: &str| vec![topic(name, vec![subtopic("S", &[item])])];
        let mut first = phase("Foundations", "Week 1-3", topics("T", "a"));
        first.description = Some("Core basics".to_string());
        let mut second = phase("Projects", "Week 4", topics("U", "b"));
        second.description = Some(String::new());
        let mut doc = roadmap(vec![first, second]);
        doc.total_weeks = Some(serde_json::json!("4"));

        let output = render_tree(&doc);
        assert!(output.starts_with("🧭 X Roadmap (Beginner) - 4 Weeks\n"));
        assert!(output.contains("📅 Week 1-3 | Foundations\n   └─ Core basics\n\n"));
        assert!(output.contains("         └─ a\n\n         ⬇️\n\n📅 Week 4 | Projects\n\n"));
        assert_eq!(output.matches("⬇️").count(), 1);
        assert!(output.ends_with("└─ b\n"));
    }

    #[test]
    fn test_default_weeks_from_config() {
        let doc = roadmap(vec![phase("A", "W1", vec![topic("T", vec![subtopic("S", &["a"])])])]);
        let config = RenderConfig {
            default_total_weeks: 10,
            ..RenderConfig::default()
        };
        let output = TreeRenderer::new().render(&doc, &config);
        assert!(output.starts_with("🧭 X Roadmap (Beginner) - 10 Weeks"));
    }
}
