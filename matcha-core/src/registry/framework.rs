//! Framework target definitions
//!
//! Each supported styling/build-tool ecosystem is described by a
//! configuration record instead of name-keyed branches in the compiler:
//! adding a target means adding a record here, not touching the pipeline.

use serde::Serialize;
use std::path::PathBuf;

use super::{ItemType, RegistryEntry};

/// Which fixed stylesheet template pair a target renders
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StylesheetFlavor {
    /// Utility-class styling: emits both the inline-colors template and the
    /// CSS-variables template
    Tailwind,

    /// Build-tool styling: emits only the CSS-variables template
    Uno,
}

/// One registry output target
#[derive(Debug, Clone, Serialize)]
pub struct FrameworkTarget {
    /// Unique key, used in artifact paths and index keys
    pub name: String,

    /// Human-readable label for consumers
    pub label: String,

    /// Directory the target's component sources live under; joined with
    /// each entry file path when inlining contents
    #[serde(skip)]
    pub source_root: PathBuf,

    /// Whether `Example`-typed entries appear in this target's lazy index
    #[serde(skip)]
    pub include_examples: bool,

    /// Deferred-import path template; `{type}` and `{name}` placeholders
    #[serde(skip)]
    pub module_specifier: String,

    /// Resolved file path template; `{file}` placeholder
    #[serde(skip)]
    pub file_prefix: String,

    /// Which stylesheet template pair the color step renders
    #[serde(skip)]
    pub stylesheet: StylesheetFlavor,
}

impl FrameworkTarget {
    /// The built-in targets the registry currently compiles for
    pub fn defaults() -> Vec<FrameworkTarget> {
        vec![
            FrameworkTarget {
                name: "tailwindcss".to_string(),
                label: "Tailwind CSS".to_string(),
                source_root: PathBuf::from("src/registry/tailwindcss"),
                include_examples: true,
                module_specifier: "@/registry/tailwindcss/{type}/{name}".to_string(),
                file_prefix: "registry/tailwindcss/{file}".to_string(),
                stylesheet: StylesheetFlavor::Tailwind,
            },
            FrameworkTarget {
                name: "unocss".to_string(),
                label: "UnoCSS".to_string(),
                source_root: PathBuf::from("packages/unocss"),
                include_examples: false,
                module_specifier: "@repo/unocss/{type}/{name}".to_string(),
                file_prefix: "../../packages/unocss/{file}".to_string(),
                stylesheet: StylesheetFlavor::Uno,
            },
        ]
    }

    /// Type-inclusion predicate for the lazy index
    pub fn includes(&self, item_type: ItemType) -> bool {
        self.include_examples || item_type != ItemType::Example
    }

    /// Render the deferred-import path for one entry
    pub fn module_path(&self, entry: &RegistryEntry) -> String {
        self.module_specifier
            .replace("{type}", entry.item_type.short_name())
            .replace("{name}", &entry.name)
    }

    /// Rewrite a declared file path into this target's resolved form
    pub fn resolved_file(&self, file: &str) -> String {
        self.file_prefix.replace("{file}", file)
    }
}
