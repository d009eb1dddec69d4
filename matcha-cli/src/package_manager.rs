//! Package manager detection
//!
//! Probes the target directory for known lock files; the three existence
//! checks run concurrently and are joined before deciding. When no lock
//! file is present the `npm_config_user_agent` environment variable is
//! consulted, and npm is the final fallback.

use std::path::Path;

/// The package managers the installer knows how to drive
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PackageManager {
    Npm,
    Yarn,
    Pnpm,
}

impl PackageManager {
    /// Binary name
    pub fn as_str(&self) -> &'static str {
        match self {
            PackageManager::Npm => "npm",
            PackageManager::Yarn => "yarn",
            PackageManager::Pnpm => "pnpm",
        }
    }

    /// Install verb; npm says `install`, the others say `add`
    pub fn install_verb(&self) -> &'static str {
        match self {
            PackageManager::Npm => "install",
            PackageManager::Yarn | PackageManager::Pnpm => "add",
        }
    }
}

/// Detect the package manager governing `target_dir`
pub async fn detect(target_dir: &Path) -> PackageManager {
    let (yarn_lock, npm_lock, pnpm_lock) = tokio::join!(
        tokio::fs::try_exists(target_dir.join("yarn.lock")),
        tokio::fs::try_exists(target_dir.join("package-lock.json")),
        tokio::fs::try_exists(target_dir.join("pnpm-lock.yaml")),
    );

    if yarn_lock.unwrap_or(false) {
        return PackageManager::Yarn;
    }
    if pnpm_lock.unwrap_or(false) {
        return PackageManager::Pnpm;
    }
    if npm_lock.unwrap_or(false) {
        return PackageManager::Npm;
    }

    from_user_agent(std::env::var("npm_config_user_agent").ok().as_deref())
}

/// Classify an npm user-agent string (`"pnpm/7.0.0 npm/? node/..."`)
fn from_user_agent(user_agent: Option<&str>) -> PackageManager {
    match user_agent {
        Some(ua) if ua.starts_with("yarn") => PackageManager::Yarn,
        Some(ua) if ua.starts_with("pnpm") => PackageManager::Pnpm,
        _ => PackageManager::Npm,
    }
}

#[cfg(test)]
mod package_manager_tests {
    use super::*;
    use serial_test::serial;
    use std::fs;
    use tempfile::TempDir;

    fn clear_user_agent() {
        std::env::remove_var("npm_config_user_agent");
    }

    #[tokio::test]
    #[serial]
    async fn test_pnpm_lock_detected() {
        clear_user_agent();
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("pnpm-lock.yaml"), "").unwrap();

        assert_eq!(detect(temp.path()).await, PackageManager::Pnpm);
    }

    #[tokio::test]
    #[serial]
    async fn test_yarn_takes_priority_over_npm_lock() {
        clear_user_agent();
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("yarn.lock"), "").unwrap();
        fs::write(temp.path().join("package-lock.json"), "").unwrap();

        assert_eq!(detect(temp.path()).await, PackageManager::Yarn);
    }

    #[tokio::test]
    #[serial]
    async fn test_defaults_to_npm_without_locks_or_user_agent() {
        clear_user_agent();
        let temp = TempDir::new().unwrap();

        assert_eq!(detect(temp.path()).await, PackageManager::Npm);
    }

    #[tokio::test]
    #[serial]
    async fn test_user_agent_fallback() {
        let temp = TempDir::new().unwrap();
        std::env::set_var("npm_config_user_agent", "pnpm/7.0.0 npm/? node/v18.0.0");

        let detected = detect(temp.path()).await;
        clear_user_agent();

        assert_eq!(detected, PackageManager::Pnpm);
    }

    #[test]
    fn test_user_agent_classification() {
        assert_eq!(
            from_user_agent(Some("yarn/1.22.19 npm/? node/v18.0.0")),
            PackageManager::Yarn
        );
        assert_eq!(
            from_user_agent(Some("pnpm/7.0.0 npm/? node/v18.0.0")),
            PackageManager::Pnpm
        );
        assert_eq!(
            from_user_agent(Some("npm/9.5.0 node/v18.0.0")),
            PackageManager::Npm
        );
        assert_eq!(from_user_agent(None), PackageManager::Npm);
    }

    #[test]
    fn test_install_verbs() {
        assert_eq!(PackageManager::Npm.install_verb(), "install");
        assert_eq!(PackageManager::Yarn.install_verb(), "add");
        assert_eq!(PackageManager::Pnpm.install_verb(), "add");
    }
}
