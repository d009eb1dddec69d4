//! `matcha init` - scaffold a project that consumes the component registry
//!
//! Linear flow: validate the target directory, write the generated config
//! and stylesheet, then install the runtime dependencies with whichever
//! package manager governs the project. Any failure aborts the run.

use anyhow::{bail, Context, Result};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::package_manager;
use crate::templates::{GLOBAL_CSS, UNO_CONFIG};

/// Runtime dependencies installed into every initialized project
const PROJECT_DEPENDENCIES: &[&str] = &["class-variance-authority", "@iconify-json/lucide"];

pub async fn init_command(cwd: PathBuf) -> Result<()> {
    if !cwd.exists() {
        bail!(
            "The path {} does not exist. Please try again.",
            cwd.display()
        );
    }

    let cwd = cwd
        .canonicalize()
        .with_context(|| format!("Failed to resolve {}", cwd.display()))?;

    run_init(&cwd).await?;

    println!();
    println!("Success! Project initialization completed.");
    println!();
    Ok(())
}

async fn run_init(cwd: &Path) -> Result<()> {
    let step = Status::start("Initializing project...");

    let styles_dir = cwd.join("src").join("styles");
    fs::create_dir_all(&styles_dir)
        .with_context(|| format!("Failed to create {}", styles_dir.display()))?;

    fs::write(cwd.join("uno.config.ts"), UNO_CONFIG).context("Failed to write uno.config.ts")?;
    fs::write(styles_dir.join("global.css"), GLOBAL_CSS)
        .context("Failed to write src/styles/global.css")?;

    step.succeed();

    let step = Status::start("Installing dependencies...");

    let manager = package_manager::detect(cwd).await;
    debug!("Detected package manager: {}", manager.as_str());

    let status = tokio::process::Command::new(manager.as_str())
        .arg(manager.install_verb())
        .args(PROJECT_DEPENDENCIES)
        .current_dir(cwd)
        .status()
        .await
        .with_context(|| format!("Failed to run {}", manager.as_str()))?;

    if !status.success() {
        bail!("{} exited with {}", manager.as_str(), status);
    }

    step.succeed();
    Ok(())
}

/// Minimal step reporter: one line when a step starts, a check when it ends
struct Status {
    label: &'static str,
}

impl Status {
    fn start(label: &'static str) -> Self {
        println!("⏳ {label}");
        Status { label }
    }

    fn succeed(self) {
        println!("✅ {}", self.label);
    }
}
