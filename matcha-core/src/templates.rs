//! Fixed stylesheet templates and interpolation
//!
//! The only templating behavior the registry needs is substituting resolved
//! color values into one of a small set of fixed bodies. `render` replaces
//! `<%- key %>` markers from a bindings map; there is no expression
//! evaluation and unknown keys render as the empty string.

use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::BTreeMap;

static MARKER_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"<%-\s*([A-Za-z0-9_.-]+)\s*%>").expect("valid marker pattern"));

/// Substitute `<%- key %>` markers with their bound values
pub fn render(template: &str, bindings: &BTreeMap<String, String>) -> String {
    MARKER_RE
        .replace_all(template, |caps: &regex::Captures<'_>| {
            bindings.get(&caps[1]).cloned().unwrap_or_default()
        })
        .into_owned()
}

/// Plain utility-class stylesheet, no variables
pub const TAILWIND_BASE_STYLES: &str = "\
@tailwind base;
@tailwind components;
@tailwind utilities;
";

/// Utility-class stylesheet with CSS variables for both modes
pub const TAILWIND_BASE_STYLES_WITH_VARIABLES: &str = r#"@tailwind base;
@tailwind components;
@tailwind utilities;

@layer base {
  :root {
    --background: <%- light.background %>;
    --foreground: <%- light.foreground %>;

    --card: <%- light.card %>;
    --card-foreground: <%- light.card-foreground %>;

    --popover: <%- light.popover %>;
    --popover-foreground: <%- light.popover-foreground %>;

    --primary: <%- light.primary %>;
    --primary-foreground: <%- light.primary-foreground %>;

    --secondary: <%- light.secondary %>;
    --secondary-foreground: <%- light.secondary-foreground %>;

    --muted: <%- light.muted %>;
    --muted-foreground: <%- light.muted-foreground %>;

    --accent: <%- light.accent %>;
    --accent-foreground: <%- light.accent-foreground %>;

    --destructive: <%- light.destructive %>;
    --destructive-foreground: <%- light.destructive-foreground %>;

    --border: <%- light.border %>;
    --input: <%- light.input %>;
    --ring: <%- light.ring %>;

    --radius: 0.5rem;
  }

  [data-kb-theme="dark"] {
    --background: <%- dark.background %>;
    --foreground: <%- dark.foreground %>;

    --card: <%- dark.card %>;
    --card-foreground: <%- dark.card-foreground %>;

    --popover: <%- dark.popover %>;
    --popover-foreground: <%- dark.popover-foreground %>;

    --primary: <%- dark.primary %>;
    --primary-foreground: <%- dark.primary-foreground %>;

    --secondary: <%- dark.secondary %>;
    --secondary-foreground: <%- dark.secondary-foreground %>;

    --muted: <%- dark.muted %>;
    --muted-foreground: <%- dark.muted-foreground %>;

    --accent: <%- dark.accent %>;
    --accent-foreground: <%- dark.accent-foreground %>;

    --destructive: <%- dark.destructive %>;
    --destructive-foreground: <%- dark.destructive-foreground %>;

    --border: <%- dark.border %>;
    --input: <%- dark.input %>;
    --ring: <%- dark.ring %>;
  }
}

@layer base {
  * {
    @apply border-border;
  }
  body {
    @apply bg-background text-foreground;
  }
}"#;

/// Build-tool stylesheet with CSS variables for both modes
pub const UNO_BASE_STYLES_WITH_VARIABLES: &str = r#":root {
  --background: <%- light.background %>;
  --foreground: <%- light.foreground %>;

  --card: <%- light.card %>;
  --card-foreground: <%- light.card-foreground %>;

  --popover: <%- light.popover %>;
  --popover-foreground: <%- light.popover-foreground %>;

  --primary: <%- light.primary %>;
  --primary-foreground: <%- light.primary-foreground %>;

  --secondary: <%- light.secondary %>;
  --secondary-foreground: <%- light.secondary-foreground %>;

  --muted: <%- light.muted %>;
  --muted-foreground: <%- light.muted-foreground %>;

  --accent: <%- light.accent %>;
  --accent-foreground: <%- light.accent-foreground %>;

  --destructive: <%- light.destructive %>;
  --destructive-foreground: <%- light.destructive-foreground %>;

  --border: <%- light.border %>;
  --input: <%- light.input %>;
  --ring: <%- light.ring %>;

  --radius: 0.5rem;
}

[data-kb-theme="dark"] {
  --background: <%- dark.background %>;
  --foreground: <%- dark.foreground %>;

  --card: <%- dark.card %>;
  --card-foreground: <%- dark.card-foreground %>;

  --popover: <%- dark.popover %>;
  --popover-foreground: <%- dark.popover-foreground %>;

  --primary: <%- dark.primary %>;
  --primary-foreground: <%- dark.primary-foreground %>;

  --secondary: <%- dark.secondary %>;
  --secondary-foreground: <%- dark.secondary-foreground %>;

  --muted: <%- dark.muted %>;
  --muted-foreground: <%- dark.muted-foreground %>;

  --accent: <%- dark.accent %>;
  --accent-foreground: <%- dark.accent-foreground %>;

  --destructive: <%- dark.destructive %>;
  --destructive-foreground: <%- dark.destructive-foreground %>;

  --border: <%- dark.border %>;
  --input: <%- dark.input %>;
  --ring: <%- dark.ring %>;
}


* {
  @apply border-border;
}
body {
  @apply bg-background text-foreground;
}"#;
