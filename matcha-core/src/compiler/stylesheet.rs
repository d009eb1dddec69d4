//! Base-color stylesheet materialization
//!
//! For each neutral base-color family and each framework target, resolves
//! the semantic slot mapping against the compiled color table and writes a
//! document carrying the raw lookup tables plus the rendered stylesheet
//! templates. Slots whose reference cannot be resolved (or whose color has
//! no derived channel string) are omitted from `cssVars`, matching the
//! channel-extraction policy.

use anyhow::Result;
use serde::Serialize;
use std::collections::BTreeMap;
use std::path::Path;

use crate::registry::{ColorMapping, CompiledColors, FrameworkTarget, StylesheetFlavor, BASE_COLORS};
use crate::templates::{
    render, TAILWIND_BASE_STYLES, TAILWIND_BASE_STYLES_WITH_VARIABLES,
    UNO_BASE_STYLES_WITH_VARIABLES,
};

use super::write_json;

#[derive(Clone, Serialize)]
struct ModeValues {
    light: BTreeMap<String, String>,
    dark: BTreeMap<String, String>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct BaseColorDoc {
    inline_colors: ModeValues,
    css_vars: ModeValues,
    #[serde(skip_serializing_if = "Option::is_none")]
    inline_colors_template: Option<String>,
    css_vars_template: String,
}

pub(crate) fn write_base_color_stylesheets(
    compiled: &CompiledColors,
    mapping: &ColorMapping,
    frameworks: &[FrameworkTarget],
    registry_dir: &Path,
) -> Result<()> {
    for base in BASE_COLORS {
        let (light_inline, light_vars) = resolve_mode(&mapping.light, base, compiled);
        let (dark_inline, dark_vars) = resolve_mode(&mapping.dark, base, compiled);

        let inline_colors = ModeValues {
            light: light_inline,
            dark: dark_inline,
        };
        let css_vars = ModeValues {
            light: light_vars,
            dark: dark_vars,
        };
        let bindings = template_bindings(&css_vars);

        for framework in frameworks {
            let (inline_colors_template, css_vars_template) = match framework.stylesheet {
                StylesheetFlavor::Tailwind => (
                    Some(render(TAILWIND_BASE_STYLES, &BTreeMap::new())),
                    render(TAILWIND_BASE_STYLES_WITH_VARIABLES, &bindings),
                ),
                StylesheetFlavor::Uno => {
                    (None, render(UNO_BASE_STYLES_WITH_VARIABLES, &bindings))
                }
            };

            let doc = BaseColorDoc {
                inline_colors: inline_colors.clone(),
                css_vars: css_vars.clone(),
                inline_colors_template,
                css_vars_template,
            };

            write_json(
                &registry_dir
                    .join("colors")
                    .join(&framework.name)
                    .join(format!("{base}.json")),
                &doc,
            )?;
        }
    }

    Ok(())
}

/// Resolve one mode's slots into the symbolic and channel forms
fn resolve_mode(
    slots: &BTreeMap<String, String>,
    base: &str,
    compiled: &CompiledColors,
) -> (BTreeMap<String, String>, BTreeMap<String, String>) {
    let mut inline = BTreeMap::new();
    let mut vars = BTreeMap::new();

    for (slot, value) in slots {
        let reference = value.replace("{{base}}", base);
        inline.insert(slot.clone(), reference.clone());

        if let Some(channel) = compiled
            .resolve(&reference)
            .and_then(|color| color.hsl_channel.clone())
        {
            vars.insert(slot.clone(), channel);
        }
    }

    (inline, vars)
}

fn template_bindings(css_vars: &ModeValues) -> BTreeMap<String, String> {
    let mut bindings = BTreeMap::new();
    for (mode, slots) in [("light", &css_vars.light), ("dark", &css_vars.dark)] {
        for (slot, channel) in slots {
            bindings.insert(format!("{mode}.{slot}"), channel.clone());
        }
    }
    bindings
}
