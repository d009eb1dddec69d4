//! Component catalogue data model and validation
//!
//! The catalogue is a flat list of component descriptors supplied by the
//! surrounding application. Typed deserialization is the schema gate: an
//! entry missing a required field (or carrying an unknown `type`) never
//! becomes a `RegistryEntry`. Semantic rules that serde cannot express
//! (name uniqueness, dangling references) live in [`Registry::validate`].

mod colors;
mod framework;

pub use colors::{
    rgb_channel, hsl_channel, ColorChannels, ColorMapping, ColorRecord, ColorTable, ColorValue,
    CompiledColorValue, CompiledColors, BASE_COLORS,
};
pub use framework::{FrameworkTarget, StylesheetFlavor};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use thiserror::Error;

/// The kind of catalogue item a descriptor distributes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ItemType {
    /// An installable UI component
    #[serde(rename = "components:ui")]
    UiComponent,

    /// A documentation/demo example, never installed into consumer projects
    #[serde(rename = "components:example")]
    Example,
}

impl ItemType {
    /// The serialized form (`components:ui`, `components:example`)
    pub fn as_str(&self) -> &'static str {
        match self {
            ItemType::UiComponent => "components:ui",
            ItemType::Example => "components:example",
        }
    }

    /// Short form used in module paths (the segment after `components:`)
    pub fn short_name(&self) -> &'static str {
        match self {
            ItemType::UiComponent => "ui",
            ItemType::Example => "example",
        }
    }
}

/// One distributable component: its files and registry-level dependencies
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistryEntry {
    /// Unique catalogue key (lowercase alphanumeric with hyphens)
    pub name: String,

    /// Item kind
    #[serde(rename = "type")]
    pub item_type: ItemType,

    /// Source file paths, relative to each target's source root
    pub files: Vec<String>,

    /// Names of other catalogue entries this one depends on
    #[serde(default)]
    pub registry_dependencies: Vec<String>,

    /// npm package dependencies installed alongside the component
    #[serde(default)]
    pub dependencies: Vec<String>,
}

/// Catalogue validation errors
#[derive(Error, Debug)]
pub enum RegistryError {
    /// An entry has an empty name
    #[error("Catalogue entry at position {index} has an empty name")]
    EmptyName { index: usize },

    /// An entry name uses characters outside lowercase alphanumeric + hyphen
    #[error("Catalogue entry '{name}' must be lowercase alphanumeric with hyphens")]
    InvalidName { name: String },

    /// Two entries share a name
    #[error("Duplicate catalogue entry '{name}'")]
    DuplicateName { name: String },

    /// An entry declares no source files
    #[error("Catalogue entry '{name}' declares no files")]
    NoFiles { name: String },

    /// A registry dependency references a name that is not in the catalogue
    #[error("Catalogue entry '{entry}' depends on '{dependency}', which is not in the catalogue")]
    DanglingDependency { entry: String, dependency: String },
}

/// The full component catalogue, validated before compilation
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Registry {
    entries: Vec<RegistryEntry>,
}

impl Registry {
    /// Build a registry from already-constructed entries
    pub fn new(entries: Vec<RegistryEntry>) -> Self {
        Self { entries }
    }

    /// Parse a catalogue from a JSON document
    pub fn from_json(content: &str) -> Result<Self> {
        serde_json::from_str(content).context("Invalid catalogue JSON")
    }

    /// Parse a catalogue from an in-memory JSON value
    pub fn from_value(value: serde_json::Value) -> Result<Self> {
        serde_json::from_value(value).context("Invalid catalogue value")
    }

    /// All entries, in catalogue order
    pub fn entries(&self) -> &[RegistryEntry] {
        &self.entries
    }

    /// Look up an entry by name
    pub fn get(&self, name: &str) -> Option<&RegistryEntry> {
        self.entries.iter().find(|e| e.name == name)
    }

    /// Entries of one item type, in catalogue order
    pub fn of_type(&self, item_type: ItemType) -> impl Iterator<Item = &RegistryEntry> {
        self.entries.iter().filter(move |e| e.item_type == item_type)
    }

    /// Check the semantic rules serde cannot express
    ///
    /// Names must be unique, non-empty, lowercase alphanumeric with hyphens;
    /// every entry needs at least one file; every registry dependency must
    /// resolve to another catalogue entry.
    pub fn validate(&self) -> Result<(), RegistryError> {
        let mut seen = HashSet::new();

        for (index, entry) in self.entries.iter().enumerate() {
            if entry.name.is_empty() {
                return Err(RegistryError::EmptyName { index });
            }

            if !entry
                .name
                .chars()
                .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
            {
                return Err(RegistryError::InvalidName {
                    name: entry.name.clone(),
                });
            }

            if !seen.insert(entry.name.as_str()) {
                return Err(RegistryError::DuplicateName {
                    name: entry.name.clone(),
                });
            }

            if entry.files.is_empty() {
                return Err(RegistryError::NoFiles {
                    name: entry.name.clone(),
                });
            }
        }

        for entry in &self.entries {
            for dependency in &entry.registry_dependencies {
                if !seen.contains(dependency.as_str()) {
                    return Err(RegistryError::DanglingDependency {
                        entry: entry.name.clone(),
                        dependency: dependency.clone(),
                    });
                }
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod registry_tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn entry(name: &str, item_type: ItemType) -> RegistryEntry {
        RegistryEntry {
            name: name.to_string(),
            item_type,
            files: vec![format!("{}/{name}.tsx", item_type.short_name())],
            registry_dependencies: vec![],
            dependencies: vec![],
        }
    }

    #[test]
    fn test_parse_valid_catalogue() {
        let json = r#"[
            {
                "name": "button",
                "type": "components:ui",
                "files": ["ui/button.tsx"]
            },
            {
                "name": "button-demo",
                "type": "components:example",
                "files": ["example/button-demo.tsx"],
                "registryDependencies": ["button"]
            }
        ]"#;

        let registry = Registry::from_json(json).unwrap();
        assert_eq!(registry.entries().len(), 2);
        assert_eq!(registry.entries()[0].item_type, ItemType::UiComponent);
        assert_eq!(
            registry.entries()[1].registry_dependencies,
            vec!["button".to_string()]
        );
        assert!(registry.validate().is_ok());
    }

    #[test]
    fn test_missing_type_is_schema_failure() {
        let json = r#"[{ "name": "button", "files": ["ui/button.tsx"] }]"#;
        assert!(Registry::from_json(json).is_err());
    }

    #[test]
    fn test_unknown_type_is_schema_failure() {
        let json = r#"[
            { "name": "button", "type": "components:page", "files": ["ui/button.tsx"] }
        ]"#;
        assert!(Registry::from_json(json).is_err());
    }

    #[test]
    fn test_duplicate_name_rejected() {
        let registry = Registry::new(vec![
            entry("button", ItemType::UiComponent),
            entry("button", ItemType::Example),
        ]);

        let result = registry.validate();
        assert!(matches!(result, Err(RegistryError::DuplicateName { .. })));
    }

    #[test]
    fn test_dangling_dependency_rejected() {
        let mut demo = entry("button-demo", ItemType::Example);
        demo.registry_dependencies = vec!["button".to_string()];
        let registry = Registry::new(vec![demo]);

        let result = registry.validate();
        assert!(matches!(
            result,
            Err(RegistryError::DanglingDependency { .. })
        ));
    }

    #[test]
    fn test_invalid_name_rejected() {
        let registry = Registry::new(vec![entry("Button_One", ItemType::UiComponent)]);
        assert!(matches!(
            registry.validate(),
            Err(RegistryError::InvalidName { .. })
        ));
    }

    #[test]
    fn test_empty_catalogue_is_valid() {
        assert!(Registry::default().validate().is_ok());
    }
}
