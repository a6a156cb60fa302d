// SPDX-License-Identifier: AGPL-3.0-or-later
//! Command handlers
//!
//! Each handler returns the text to print on stdout; errors bubble up to
//! `main`, which reports them on stderr.

use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result};
use roadmap_core::decode::decode_document;
use roadmap_core::{OutputFormat, RenderConfig, RendererRegistry, Roadmap};
use roadmap_export::{ExportBundle, Exporter};

/// Load render settings, falling back to defaults without a file
pub fn load_config(path: Option<&Path>) -> Result<RenderConfig> {
    let Some(path) = path else {
        return Ok(RenderConfig::default());
    };
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config {}", path.display()))?;
    let config: RenderConfig = toml::from_str(&content)
        .with_context(|| format!("Invalid config {}", path.display()))?;
    tracing::debug!(?config, "loaded render config");
    Ok(config)
}

/// Read the document text from a file, or stdin for `-`
pub fn read_input(input: &Path) -> Result<String> {
    if input == Path::new("-") {
        let mut content = String::new();
        std::io::stdin()
            .read_to_string(&mut content)
            .context("Failed to read roadmap from stdin")?;
        return Ok(content);
    }
    std::fs::read_to_string(input).with_context(|| format!("Failed to read {}", input.display()))
}

fn load_roadmap(input: &Path) -> Result<Roadmap> {
    let content = read_input(input)?;
    Ok(Roadmap::from_json_str(&content)?)
}

pub fn validate(input: &Path) -> Result<String> {
    let document = decode_document(&read_input(input)?)?;
    roadmap_core::validate(&document).map_err(roadmap_core::RoadmapError::from)?;
    Ok("✅ Roadmap validated successfully!".to_string())
}

pub fn render(input: &Path, format: OutputFormat, config: &RenderConfig) -> Result<String> {
    let roadmap = load_roadmap(input)?;
    RendererRegistry::with_defaults()
        .render(format, &roadmap, config)
        .with_context(|| format!("No renderer registered for {}", format.label()))
}

pub fn export(
    input: &Path,
    output_dir: &Path,
    tree: bool,
    config: &RenderConfig,
) -> Result<String> {
    let roadmap = load_roadmap(input)?;
    let exporter = Exporter::new(output_dir, config.clone());
    let written = exporter.export(&roadmap, tree)?;
    tracing::info!(
        dir = %exporter.output_dir().display(),
        files = written.len(),
        "export complete"
    );

    Ok(written
        .iter()
        .map(|path| format!("💾 Saved to: {}", path.display()))
        .collect::<Vec<_>>()
        .join("\n"))
}

pub fn bundle(input: &Path, config: &RenderConfig) -> Result<String> {
    let roadmap = load_roadmap(input)?;
    Ok(ExportBundle::new(&roadmap, config).to_json()?)
}
