//! Lazy-module index generation
//!
//! Renders the autogenerated module consumed by the documentation site:
//! one top-level key per framework target (present even when the target
//! contributes no entries), one entry per applicable catalogue item with a
//! deferred-import loader and target-resolved file paths.

use crate::registry::{FrameworkTarget, Registry};

/// Render the lazy-module index source text
pub fn render_index_module(registry: &Registry, frameworks: &[FrameworkTarget]) -> String {
    let mut index = String::from(
        "// This file is autogenerated by the registry compiler.\n\
         // Do not edit this file directly.\n\
         import { lazy } from \"solid-js\"\n\
         \n\
         export const Index = {\n",
    );

    for framework in frameworks {
        index.push_str(&format!("  \"{}\": {{", framework.name));

        for entry in registry
            .entries()
            .iter()
            .filter(|e| framework.includes(e.item_type))
        {
            let dependencies = entry
                .registry_dependencies
                .iter()
                .map(|d| format!("\"{d}\""))
                .collect::<Vec<_>>()
                .join(",");

            let files = entry
                .files
                .iter()
                .map(|f| format!("\"{}\"", framework.resolved_file(f)))
                .collect::<Vec<_>>()
                .join(",");

            index.push_str(&format!(
                "\n    \"{name}\": {{\n      \
                 name: \"{name}\",\n      \
                 type: \"{item_type}\",\n      \
                 registryDependencies: [{dependencies}],\n      \
                 component: lazy(() => import(\"{module}\")),\n      \
                 files: [{files}],\n    }},",
                name = entry.name,
                item_type = entry.item_type.as_str(),
                module = framework.module_path(entry),
            ));
        }

        index.push_str("\n  },\n");
    }

    index.push_str("}\n");
    index
}
