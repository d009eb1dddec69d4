//! Color palette table, semantic slot mapping, and channel extraction
//!
//! The palette is the source of truth for generated CSS variables. Each
//! record carries its `rgb(r,g,b)` and `hsl(h,s%,l%)` strings; compilation
//! derives space-separated channel strings usable inside CSS custom
//! properties. A source string that does not match the expected pattern
//! yields no channel fields rather than an error.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// The five neutral base-color families stylesheets are generated for
pub const BASE_COLORS: &[&str] = &["slate", "gray", "zinc", "neutral", "stone"];

static RGB_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^rgb\((\d+),(\d+),(\d+)\)$").expect("valid rgb pattern"));

static HSL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^hsl\(([\d.]+),([\d.]+%),([\d.]+%)\)$").expect("valid hsl pattern"));

/// Extract the channel string from an `rgb(r,g,b)` value
///
/// `"rgb(10,20,30)"` becomes `"10 20 30"`. Returns `None` when the input
/// does not match the pattern exactly.
pub fn rgb_channel(rgb: &str) -> Option<String> {
    RGB_RE
        .captures(rgb)
        .map(|caps| format!("{} {} {}", &caps[1], &caps[2], &caps[3]))
}

/// Extract the channel string from an `hsl(h,s%,l%)` value
///
/// `"hsl(210,40%,50%)"` becomes `"210 40% 50%"`. Returns `None` when the
/// input does not match the pattern exactly.
pub fn hsl_channel(hsl: &str) -> Option<String> {
    HSL_RE
        .captures(hsl)
        .map(|caps| format!("{} {} {}", &caps[1], &caps[2], &caps[3]))
}

/// One color in a family: a scale step, or the family's single value
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ColorRecord {
    /// Scale number (50–950); absent for single-value families
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scale: Option<u32>,

    /// Human-readable name, when the palette supplies one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// `rgb(r,g,b)` string
    pub rgb: String,

    /// `hsl(h,s%,l%)` string
    pub hsl: String,
}

/// A palette family value: a single record or an ordered scale
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ColorValue {
    Single(ColorRecord),
    Scale(Vec<ColorRecord>),
}

/// A color record with derived CSS channel strings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ColorChannels {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scale: Option<u32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    pub rgb: String,

    pub hsl: String,

    /// Space-separated RGB components; absent when `rgb` did not match
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rgb_channel: Option<String>,

    /// Space-separated HSL components; absent when `hsl` did not match
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hsl_channel: Option<String>,
}

impl From<&ColorRecord> for ColorChannels {
    fn from(record: &ColorRecord) -> Self {
        ColorChannels {
            scale: record.scale,
            name: record.name.clone(),
            rgb: record.rgb.clone(),
            hsl: record.hsl.clone(),
            rgb_channel: rgb_channel(&record.rgb),
            hsl_channel: hsl_channel(&record.hsl),
        }
    }
}

/// A compiled family value
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CompiledColorValue {
    Single(ColorChannels),
    Scale(Vec<ColorChannels>),
}

/// The compiled color table written to `colors/index.json`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CompiledColors {
    pub families: BTreeMap<String, CompiledColorValue>,
}

impl CompiledColors {
    /// Resolve a `family` or `family-scale` reference (e.g. `slate-950`)
    pub fn resolve(&self, reference: &str) -> Option<&ColorChannels> {
        match reference.split_once('-') {
            Some((family, scale)) => {
                let scale: u32 = scale.parse().ok()?;
                match self.families.get(family)? {
                    CompiledColorValue::Scale(records) => {
                        records.iter().find(|r| r.scale == Some(scale))
                    }
                    CompiledColorValue::Single(_) => None,
                }
            }
            None => match self.families.get(reference)? {
                CompiledColorValue::Single(record) => Some(record),
                CompiledColorValue::Scale(_) => None,
            },
        }
    }
}

/// Mapping from color-family name to palette value
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ColorTable {
    pub families: BTreeMap<String, ColorValue>,
}

impl ColorTable {
    /// Derive channel strings for every record in the table
    pub fn compile(&self) -> CompiledColors {
        let families = self
            .families
            .iter()
            .map(|(name, value)| {
                let compiled = match value {
                    ColorValue::Single(record) => CompiledColorValue::Single(record.into()),
                    ColorValue::Scale(records) => {
                        CompiledColorValue::Scale(records.iter().map(Into::into).collect())
                    }
                };
                (name.clone(), compiled)
            })
            .collect();

        CompiledColors { families }
    }

    /// The built-in palette: the five neutral families, the red family the
    /// destructive slot resolves through, and white/black
    pub fn defaults() -> ColorTable {
        fn step(scale: u32, rgb: &str, hsl: &str) -> ColorRecord {
            ColorRecord {
                scale: Some(scale),
                name: None,
                rgb: rgb.to_string(),
                hsl: hsl.to_string(),
            }
        }

        fn single(rgb: &str, hsl: &str) -> ColorValue {
            ColorValue::Single(ColorRecord {
                scale: None,
                name: None,
                rgb: rgb.to_string(),
                hsl: hsl.to_string(),
            })
        }

        let mut families = BTreeMap::new();

        families.insert(
            "slate".to_string(),
            ColorValue::Scale(vec![
                step(50, "rgb(248,250,252)", "hsl(210,40%,98%)"),
                step(100, "rgb(241,245,249)", "hsl(210,40%,96.1%)"),
                step(200, "rgb(226,232,240)", "hsl(214.3,31.8%,91.4%)"),
                step(300, "rgb(203,213,225)", "hsl(212.7,26.8%,83.9%)"),
                step(400, "rgb(148,163,184)", "hsl(215,20.2%,65.1%)"),
                step(500, "rgb(100,116,139)", "hsl(215.4,16.3%,46.9%)"),
                step(600, "rgb(71,85,105)", "hsl(215.3,19.3%,34.5%)"),
                step(700, "rgb(51,65,85)", "hsl(215.3,25%,26.7%)"),
                step(800, "rgb(30,41,59)", "hsl(217.2,32.6%,17.5%)"),
                step(900, "rgb(15,23,42)", "hsl(222.2,47.4%,11.2%)"),
                step(950, "rgb(2,6,23)", "hsl(222.2,84%,4.9%)"),
            ]),
        );

        families.insert(
            "gray".to_string(),
            ColorValue::Scale(vec![
                step(50, "rgb(249,250,251)", "hsl(210,20%,98%)"),
                step(100, "rgb(243,244,246)", "hsl(220,14.3%,95.9%)"),
                step(200, "rgb(229,231,235)", "hsl(220,13%,91%)"),
                step(300, "rgb(209,213,219)", "hsl(216,12.2%,83.9%)"),
                step(400, "rgb(156,163,175)", "hsl(217.9,10.6%,64.9%)"),
                step(500, "rgb(107,114,128)", "hsl(220,8.9%,46.1%)"),
                step(600, "rgb(75,85,99)", "hsl(215,13.8%,34.1%)"),
                step(700, "rgb(55,65,81)", "hsl(216.9,19.1%,26.7%)"),
                step(800, "rgb(31,41,55)", "hsl(215,27.9%,16.9%)"),
                step(900, "rgb(17,24,39)", "hsl(220.9,39.3%,11%)"),
                step(950, "rgb(3,7,18)", "hsl(224,71.4%,4.1%)"),
            ]),
        );

        families.insert(
            "zinc".to_string(),
            ColorValue::Scale(vec![
                step(50, "rgb(250,250,250)", "hsl(0,0%,98%)"),
                step(100, "rgb(244,244,245)", "hsl(240,4.8%,95.9%)"),
                step(200, "rgb(228,228,231)", "hsl(240,5.9%,90%)"),
                step(300, "rgb(212,212,216)", "hsl(240,4.9%,83.9%)"),
                step(400, "rgb(161,161,170)", "hsl(240,5%,64.9%)"),
                step(500, "rgb(113,113,122)", "hsl(240,3.8%,46.1%)"),
                step(600, "rgb(82,82,91)", "hsl(240,5.2%,33.9%)"),
                step(700, "rgb(63,63,70)", "hsl(240,5.3%,26.1%)"),
                step(800, "rgb(39,39,42)", "hsl(240,3.7%,15.9%)"),
                step(900, "rgb(24,24,27)", "hsl(240,5.9%,10%)"),
                step(950, "rgb(9,9,11)", "hsl(240,10%,3.9%)"),
            ]),
        );

        families.insert(
            "neutral".to_string(),
            ColorValue::Scale(vec![
                step(50, "rgb(250,250,250)", "hsl(0,0%,98%)"),
                step(100, "rgb(245,245,245)", "hsl(0,0%,96.1%)"),
                step(200, "rgb(229,229,229)", "hsl(0,0%,89.8%)"),
                step(300, "rgb(212,212,212)", "hsl(0,0%,83.1%)"),
                step(400, "rgb(163,163,163)", "hsl(0,0%,63.9%)"),
                step(500, "rgb(115,115,115)", "hsl(0,0%,45.1%)"),
                step(600, "rgb(82,82,82)", "hsl(0,0%,32.2%)"),
                step(700, "rgb(64,64,64)", "hsl(0,0%,25.1%)"),
                step(800, "rgb(38,38,38)", "hsl(0,0%,14.9%)"),
                step(900, "rgb(23,23,23)", "hsl(0,0%,9%)"),
                step(950, "rgb(10,10,10)", "hsl(0,0%,3.9%)"),
            ]),
        );

        families.insert(
            "stone".to_string(),
            ColorValue::Scale(vec![
                step(50, "rgb(250,250,249)", "hsl(60,9.1%,97.8%)"),
                step(100, "rgb(245,245,244)", "hsl(60,4.8%,95.9%)"),
                step(200, "rgb(231,229,228)", "hsl(20,5.9%,90%)"),
                step(300, "rgb(214,211,209)", "hsl(24,5.7%,82.9%)"),
                step(400, "rgb(168,162,158)", "hsl(24,5.4%,63.9%)"),
                step(500, "rgb(120,113,108)", "hsl(25,5.3%,44.7%)"),
                step(600, "rgb(87,83,78)", "hsl(33.3,5.5%,32.4%)"),
                step(700, "rgb(68,64,60)", "hsl(30,6.3%,25.1%)"),
                step(800, "rgb(41,37,36)", "hsl(12,6.5%,15.1%)"),
                step(900, "rgb(28,25,23)", "hsl(24,9.8%,10%)"),
                step(950, "rgb(12,10,9)", "hsl(20,14.3%,4.1%)"),
            ]),
        );

        families.insert(
            "red".to_string(),
            ColorValue::Scale(vec![
                step(50, "rgb(254,242,242)", "hsl(0,85.7%,97.3%)"),
                step(100, "rgb(254,226,226)", "hsl(0,93.3%,94.1%)"),
                step(200, "rgb(254,202,202)", "hsl(0,96.3%,89.4%)"),
                step(300, "rgb(252,165,165)", "hsl(0,93.5%,81.8%)"),
                step(400, "rgb(248,113,113)", "hsl(0,90.6%,70.8%)"),
                step(500, "rgb(239,68,68)", "hsl(0,84.2%,60.2%)"),
                step(600, "rgb(220,38,38)", "hsl(0,72.2%,50.6%)"),
                step(700, "rgb(185,28,28)", "hsl(0,73.7%,41.8%)"),
                step(800, "rgb(153,27,27)", "hsl(0,70%,35.3%)"),
                step(900, "rgb(127,29,29)", "hsl(0,62.8%,30.6%)"),
                step(950, "rgb(69,10,10)", "hsl(0,74.7%,15.5%)"),
            ]),
        );

        families.insert("white".to_string(), single("rgb(255,255,255)", "hsl(0,0%,100%)"));
        families.insert("black".to_string(), single("rgb(0,0,0)", "hsl(0,0%,0%)"));

        ColorTable { families }
    }
}

/// Per-mode semantic slot assignments
///
/// Slot values are either a literal family reference (`white`, `red-500`)
/// or a placeholder containing the `{{base}}` token substituted per
/// generated base color.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ColorMapping {
    pub light: BTreeMap<String, String>,
    pub dark: BTreeMap<String, String>,
}

impl ColorMapping {
    /// The built-in light/dark slot mapping
    pub fn defaults() -> ColorMapping {
        fn modes(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
            pairs
                .iter()
                .map(|(slot, value)| (slot.to_string(), value.to_string()))
                .collect()
        }

        ColorMapping {
            light: modes(&[
                ("background", "white"),
                ("foreground", "{{base}}-950"),
                ("card", "white"),
                ("card-foreground", "{{base}}-950"),
                ("popover", "white"),
                ("popover-foreground", "{{base}}-950"),
                ("primary", "{{base}}-900"),
                ("primary-foreground", "{{base}}-50"),
                ("secondary", "{{base}}-100"),
                ("secondary-foreground", "{{base}}-900"),
                ("muted", "{{base}}-100"),
                ("muted-foreground", "{{base}}-500"),
                ("accent", "{{base}}-100"),
                ("accent-foreground", "{{base}}-900"),
                ("destructive", "red-500"),
                ("destructive-foreground", "{{base}}-50"),
                ("border", "{{base}}-200"),
                ("input", "{{base}}-200"),
                ("ring", "{{base}}-950"),
            ]),
            dark: modes(&[
                ("background", "{{base}}-950"),
                ("foreground", "{{base}}-50"),
                ("card", "{{base}}-950"),
                ("card-foreground", "{{base}}-50"),
                ("popover", "{{base}}-950"),
                ("popover-foreground", "{{base}}-50"),
                ("primary", "{{base}}-50"),
                ("primary-foreground", "{{base}}-900"),
                ("secondary", "{{base}}-800"),
                ("secondary-foreground", "{{base}}-50"),
                ("muted", "{{base}}-800"),
                ("muted-foreground", "{{base}}-400"),
                ("accent", "{{base}}-800"),
                ("accent-foreground", "{{base}}-50"),
                ("destructive", "red-900"),
                ("destructive-foreground", "{{base}}-50"),
                ("border", "{{base}}-800"),
                ("input", "{{base}}-800"),
                ("ring", "{{base}}-300"),
            ]),
        }
    }
}

#[cfg(test)]
mod colors_tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_rgb_channel_extraction() {
        assert_eq!(rgb_channel("rgb(10,20,30)"), Some("10 20 30".to_string()));
        assert_eq!(
            rgb_channel("rgb(255,255,255)"),
            Some("255 255 255".to_string())
        );
    }

    #[test]
    fn test_hsl_channel_extraction() {
        assert_eq!(
            hsl_channel("hsl(210,40%,50%)"),
            Some("210 40% 50%".to_string())
        );
        assert_eq!(
            hsl_channel("hsl(222.2,47.4%,11.2%)"),
            Some("222.2 47.4% 11.2%".to_string())
        );
    }

    #[test]
    fn test_malformed_strings_yield_no_channels() {
        assert_eq!(rgb_channel("rgb(10, 20, 30)"), None);
        assert_eq!(rgb_channel("#0f172a"), None);
        assert_eq!(hsl_channel("hsl(210,40,50)"), None);
        assert_eq!(hsl_channel(""), None);
    }

    #[test]
    fn test_compile_derives_channels() {
        let compiled = ColorTable::defaults().compile();

        let slate950 = compiled.resolve("slate-950").unwrap();
        assert_eq!(slate950.rgb_channel.as_deref(), Some("2 6 23"));
        assert_eq!(slate950.hsl_channel.as_deref(), Some("222.2 84% 4.9%"));

        let white = compiled.resolve("white").unwrap();
        assert_eq!(white.hsl_channel.as_deref(), Some("0 0% 100%"));
    }

    #[test]
    fn test_compile_omits_channels_on_mismatch() {
        let mut families = BTreeMap::new();
        families.insert(
            "broken".to_string(),
            ColorValue::Single(ColorRecord {
                scale: None,
                name: None,
                rgb: "rgb(1, 2, 3)".to_string(),
                hsl: "not-a-color".to_string(),
            }),
        );

        let compiled = ColorTable { families }.compile();
        let broken = compiled.resolve("broken").unwrap();
        assert_eq!(broken.rgb_channel, None);
        assert_eq!(broken.hsl_channel, None);

        let json = serde_json::to_string(&compiled).unwrap();
        assert!(!json.contains("rgbChannel"));
        assert!(!json.contains("hslChannel"));
    }

    #[test]
    fn test_resolve_unknown_reference() {
        let compiled = ColorTable::defaults().compile();
        assert!(compiled.resolve("slate-975").is_none());
        assert!(compiled.resolve("chartreuse").is_none());
        assert!(compiled.resolve("white-500").is_none());
    }

    #[test]
    fn test_default_mapping_resolves_for_every_base() {
        let compiled = ColorTable::defaults().compile();
        let mapping = ColorMapping::defaults();

        for base in BASE_COLORS {
            for (_, value) in mapping.light.iter().chain(mapping.dark.iter()) {
                let reference = value.replace("{{base}}", base);
                assert!(
                    compiled.resolve(&reference).is_some(),
                    "unresolvable reference {reference}"
                );
            }
        }
    }
}
