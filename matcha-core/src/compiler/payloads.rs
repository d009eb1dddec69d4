//! Per-component payload materialization
//!
//! For every installable component and every framework target, reads the
//! declared source files and writes a JSON payload combining the entry
//! metadata with `{name, content}` pairs. Only the base name of each file
//! is kept; payload consumers decide their own directory layout.

use anyhow::{Context, Result};
use serde::Serialize;
use std::fs;
use std::path::Path;

use crate::registry::{FrameworkTarget, ItemType, Registry, RegistryEntry};

use super::write_json;

#[derive(Serialize)]
struct PayloadFile {
    name: String,
    content: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ComponentPayload<'a> {
    name: &'a str,
    #[serde(rename = "type")]
    item_type: ItemType,
    registry_dependencies: &'a [String],
    dependencies: &'a [String],
    files: Vec<PayloadFile>,
}

pub(crate) fn write_component_payloads(
    registry: &Registry,
    frameworks: &[FrameworkTarget],
    registry_dir: &Path,
) -> Result<()> {
    for framework in frameworks {
        let target_dir = registry_dir.join("frameworks").join(&framework.name);
        fs::create_dir_all(&target_dir)
            .with_context(|| format!("Failed to create directory {}", target_dir.display()))?;

        for entry in registry.of_type(ItemType::UiComponent) {
            let payload = ComponentPayload {
                name: &entry.name,
                item_type: entry.item_type,
                registry_dependencies: &entry.registry_dependencies,
                dependencies: &entry.dependencies,
                files: read_entry_files(entry, framework)?,
            };

            write_json(&target_dir.join(format!("{}.json", entry.name)), &payload)?;
        }
    }

    Ok(())
}

fn read_entry_files(entry: &RegistryEntry, framework: &FrameworkTarget) -> Result<Vec<PayloadFile>> {
    entry
        .files
        .iter()
        .map(|file| {
            let path = framework.source_root.join(file);
            let content = fs::read_to_string(&path).with_context(|| {
                format!(
                    "Failed to read source file {} for component '{}'",
                    path.display(),
                    entry.name
                )
            })?;

            let name = Path::new(file)
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_else(|| file.clone());

            Ok(PayloadFile { name, content })
        })
        .collect()
}
