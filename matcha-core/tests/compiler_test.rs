//! End-to-end tests for the registry build pipeline
//!
//! Each test compiles a small catalogue into a temporary directory and
//! inspects the artifact tree the way downstream consumers would.

use anyhow::Result;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

use matcha_core::compiler::{compile, CompileInput, OutputLayout};
use matcha_core::registry::{
    ColorMapping, ColorTable, FrameworkTarget, ItemType, Registry, RegistryEntry,
};

fn entry(name: &str, item_type: ItemType, registry_dependencies: &[&str]) -> RegistryEntry {
    RegistryEntry {
        name: name.to_string(),
        item_type,
        files: vec![format!("{}/{name}.tsx", item_type.short_name())],
        registry_dependencies: registry_dependencies.iter().map(|s| s.to_string()).collect(),
        dependencies: vec![],
    }
}

/// Lay out component sources for both default targets under a temp root and
/// return targets whose source roots point at them.
fn targets_with_sources(root: &Path, registry: &Registry) -> Result<Vec<FrameworkTarget>> {
    let mut targets = FrameworkTarget::defaults();
    for target in &mut targets {
        target.source_root = root.join("sources").join(&target.name);
        for entry in registry.entries() {
            for file in &entry.files {
                let path = target.source_root.join(file);
                fs::create_dir_all(path.parent().unwrap())?;
                fs::write(&path, format!("// {} source for {}\n", target.name, entry.name))?;
            }
        }
    }
    Ok(targets)
}

fn layout(root: &Path) -> OutputLayout {
    OutputLayout {
        registry_dir: root.join("public/registry"),
        index_module: root.join("src/__registry__/index.js"),
    }
}

fn sample_registry() -> Registry {
    Registry::new(vec![
        entry("button", ItemType::UiComponent, &[]),
        entry("card", ItemType::UiComponent, &[]),
        entry("button-demo", ItemType::Example, &["button"]),
    ])
}

fn compile_sample(root: &Path) -> Result<OutputLayout> {
    let registry = sample_registry();
    let targets = targets_with_sources(root, &registry)?;
    let colors = ColorTable::defaults();
    let color_mapping = ColorMapping::defaults();

    let layout = layout(root);
    compile(
        &CompileInput {
            registry: &registry,
            frameworks: &targets,
            colors: &colors,
            color_mapping: &color_mapping,
        },
        &layout,
    )?;
    Ok(layout)
}

/// Collect every file under a directory with its contents
fn snapshot(dir: &Path) -> Result<BTreeMap<PathBuf, Vec<u8>>> {
    let mut files = BTreeMap::new();
    if !dir.exists() {
        return Ok(files);
    }

    let mut stack = vec![dir.to_path_buf()];
    while let Some(current) = stack.pop() {
        for dirent in fs::read_dir(&current)? {
            let path = dirent?.path();
            if path.is_dir() {
                stack.push(path);
            } else {
                let content = fs::read(&path)?;
                files.insert(path.strip_prefix(dir)?.to_path_buf(), content);
            }
        }
    }
    Ok(files)
}

#[test]
fn test_compile_produces_expected_artifact_tree() -> Result<()> {
    let temp = TempDir::new()?;
    let layout = compile_sample(temp.path())?;

    assert!(layout.index_module.is_file());

    let registry_dir = &layout.registry_dir;
    assert!(registry_dir.join("index.json").is_file());
    assert!(registry_dir.join("frameworks/index.json").is_file());
    assert!(registry_dir.join("colors/index.json").is_file());

    for target in ["tailwindcss", "unocss"] {
        for component in ["button", "card"] {
            assert!(
                registry_dir
                    .join("frameworks")
                    .join(target)
                    .join(format!("{component}.json"))
                    .is_file(),
                "missing payload for {target}/{component}"
            );
        }

        for base in ["slate", "gray", "zinc", "neutral", "stone"] {
            assert!(
                registry_dir
                    .join("colors")
                    .join(target)
                    .join(format!("{base}.json"))
                    .is_file(),
                "missing stylesheet doc for {target}/{base}"
            );
        }
    }

    // Examples never get payloads.
    assert!(!registry_dir
        .join("frameworks/tailwindcss/button-demo.json")
        .exists());

    Ok(())
}

#[test]
fn test_component_payload_inlines_file_contents() -> Result<()> {
    let temp = TempDir::new()?;
    let layout = compile_sample(temp.path())?;

    let payload: serde_json::Value = serde_json::from_str(&fs::read_to_string(
        layout.registry_dir.join("frameworks/unocss/button.json"),
    )?)?;

    assert_eq!(payload["name"], "button");
    assert_eq!(payload["type"], "components:ui");
    assert_eq!(payload["files"][0]["name"], "button.tsx");
    assert_eq!(payload["files"][0]["content"], "// unocss source for button\n");
    Ok(())
}

#[test]
fn test_component_index_lists_only_ui_components() -> Result<()> {
    let temp = TempDir::new()?;
    let layout = compile_sample(temp.path())?;

    let index: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(layout.registry_dir.join("index.json"))?)?;
    let names: Vec<&str> = index
        .as_array()
        .unwrap()
        .iter()
        .map(|item| item["name"].as_str().unwrap())
        .collect();

    assert_eq!(names, vec!["button", "card"]);
    Ok(())
}

#[test]
fn test_index_module_excludes_examples_per_target() -> Result<()> {
    let temp = TempDir::new()?;
    let layout = compile_sample(temp.path())?;

    let module = fs::read_to_string(&layout.index_module)?;
    assert_eq!(module.matches("\"button-demo\": {").count(), 1);
    assert_eq!(module.matches("\"button\": {").count(), 2);

    // Every indexed name exists in the source catalogue.
    let registry = sample_registry();
    for line in module.lines() {
        if let Some(name) = line
            .trim()
            .strip_suffix("\": {")
            .and_then(|l| l.strip_prefix('"'))
        {
            if name != "tailwindcss" && name != "unocss" {
                assert!(registry.get(name).is_some(), "dangling index entry {name}");
            }
        }
    }
    Ok(())
}

#[test]
fn test_recompile_is_byte_identical() -> Result<()> {
    let temp = TempDir::new()?;
    let layout = compile_sample(temp.path())?;

    let first = snapshot(&layout.registry_dir)?;
    let first_module = fs::read(&layout.index_module)?;

    compile_sample(temp.path())?;

    let second = snapshot(&layout.registry_dir)?;
    let second_module = fs::read(&layout.index_module)?;

    assert_eq!(first, second);
    assert_eq!(first_module, second_module);
    Ok(())
}

#[test]
fn test_invalid_catalogue_writes_nothing() -> Result<()> {
    let temp = TempDir::new()?;

    let registry = Registry::new(vec![entry(
        "orphan-demo",
        ItemType::Example,
        &["does-not-exist"],
    )]);
    let targets = targets_with_sources(temp.path(), &registry)?;
    let colors = ColorTable::defaults();
    let color_mapping = ColorMapping::defaults();
    let layout = layout(temp.path());

    let result = compile(
        &CompileInput {
            registry: &registry,
            frameworks: &targets,
            colors: &colors,
            color_mapping: &color_mapping,
        },
        &layout,
    );

    assert!(result.is_err());
    assert!(!layout.registry_dir.exists());
    assert!(!layout.index_module.exists());
    Ok(())
}

#[test]
fn test_stylesheet_doc_shape_per_flavor() -> Result<()> {
    let temp = TempDir::new()?;
    let layout = compile_sample(temp.path())?;

    let tailwind: serde_json::Value = serde_json::from_str(&fs::read_to_string(
        layout.registry_dir.join("colors/tailwindcss/slate.json"),
    )?)?;
    let uno: serde_json::Value = serde_json::from_str(&fs::read_to_string(
        layout.registry_dir.join("colors/unocss/slate.json"),
    )?)?;

    assert!(tailwind["inlineColorsTemplate"].is_string());
    assert!(uno.get("inlineColorsTemplate").is_none());

    for doc in [&tailwind, &uno] {
        assert_eq!(doc["inlineColors"]["light"]["foreground"], "slate-950");
        assert_eq!(doc["cssVars"]["light"]["background"], "0 0% 100%");
        let rendered = doc["cssVarsTemplate"].as_str().unwrap();
        assert!(rendered.contains("--background: 0 0% 100%;"));
        assert!(!rendered.contains("<%-"));
    }
    Ok(())
}
