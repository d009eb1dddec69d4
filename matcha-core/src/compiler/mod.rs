//! Registry build pipeline
//!
//! One-pass, in-memory compilation of the catalogue into static artifacts.
//! Validation runs before the first write, so a schema-invalid catalogue
//! produces no partial output. Every artifact is fully computed in memory
//! and written once; re-running on unchanged inputs is byte-identical.

mod index;
mod payloads;
mod stylesheet;

pub use index::render_index_module;

use anyhow::{Context, Result};
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::registry::{ColorMapping, ColorTable, FrameworkTarget, ItemType, Registry};

/// Everything the compiler reads; all borrowed, never mutated
pub struct CompileInput<'a> {
    pub registry: &'a Registry,
    pub frameworks: &'a [FrameworkTarget],
    pub colors: &'a ColorTable,
    pub color_mapping: &'a ColorMapping,
}

/// Where the compiler writes
pub struct OutputLayout {
    /// Root directory for the JSON artifacts (`frameworks/`, `colors/`,
    /// `index.json`)
    pub registry_dir: PathBuf,

    /// Path of the generated lazy-module index file
    pub index_module: PathBuf,
}

/// Compile the catalogue into the full artifact set
pub fn compile(input: &CompileInput<'_>, layout: &OutputLayout) -> Result<()> {
    input
        .registry
        .validate()
        .context("Catalogue failed validation")?;

    tracing::debug!(
        entries = input.registry.entries().len(),
        frameworks = input.frameworks.len(),
        "Compiling registry"
    );

    // Lazy-module index. The previous file is removed first so a rename of
    // the layout never leaves a stale module behind.
    let module_text = index::render_index_module(input.registry, input.frameworks);
    if layout.index_module.exists() {
        fs::remove_file(&layout.index_module).with_context(|| {
            format!(
                "Failed to remove stale index module {}",
                layout.index_module.display()
            )
        })?;
    }
    if let Some(parent) = layout.index_module.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory {}", parent.display()))?;
    }
    fs::write(&layout.index_module, module_text).with_context(|| {
        format!(
            "Failed to write index module {}",
            layout.index_module.display()
        )
    })?;

    // Per-component payloads with inlined file contents.
    payloads::write_component_payloads(input.registry, input.frameworks, &layout.registry_dir)?;

    // Target lookup table.
    write_json(
        &layout.registry_dir.join("frameworks").join("index.json"),
        &input.frameworks,
    )?;

    // Component catalogue listing, metadata only.
    let components: Vec<_> = input.registry.of_type(ItemType::UiComponent).collect();
    write_json(&layout.registry_dir.join("index.json"), &components)?;

    // Color data. The colors tree is cleared and rebuilt wholesale.
    let colors_dir = layout.registry_dir.join("colors");
    if colors_dir.exists() {
        fs::remove_dir_all(&colors_dir)
            .with_context(|| format!("Failed to clear {}", colors_dir.display()))?;
    }
    fs::create_dir_all(&colors_dir)
        .with_context(|| format!("Failed to create {}", colors_dir.display()))?;

    let compiled_colors = input.colors.compile();
    write_json(&colors_dir.join("index.json"), &compiled_colors)?;

    stylesheet::write_base_color_stylesheets(
        &compiled_colors,
        input.color_mapping,
        input.frameworks,
        &layout.registry_dir,
    )?;

    tracing::info!("Registry compiled to {}", layout.registry_dir.display());
    Ok(())
}

/// Serialize a value as pretty JSON with a trailing newline
pub(crate) fn write_json<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory {}", parent.display()))?;
    }

    let mut body =
        serde_json::to_string_pretty(value).context("Failed to serialize registry artifact")?;
    body.push('\n');

    fs::write(path, body).with_context(|| format!("Failed to write {}", path.display()))
}
