//! Locates and loads the configuration file.
//!
//! Lookup order:
//!
//! 1. `--config <path>`
//! 2. `a11y-check.toml` or `.a11y-check.toml` next to the checked documents
//! 3. `config.toml` in the global directory (`$A11Y_CHECK_CONFIG_DIR`, else
//!    `~/.a11y-check/`)
//! 4. built-in defaults

use a11y_check_core::Config;
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

/// Where the configuration comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    /// Given with `--config`.
    Explicit(PathBuf),
    /// Found next to the documents.
    Project(PathBuf),
    /// Found in the global directory.
    Global(PathBuf),
    /// Nothing found.
    Default,
}

impl ConfigSource {
    /// The file to read, if any.
    #[must_use]
    pub fn path(&self) -> Option<&Path> {
        match self {
            Self::Explicit(p) | Self::Project(p) | Self::Global(p) => Some(p),
            Self::Default => None,
        }
    }

    /// Reads and validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or is invalid.
    pub fn load(&self) -> Result<Config> {
        let Some(path) = self.path() else {
            return Ok(Config::default());
        };
        if matches!(self, Self::Global(_)) {
            tracing::info!("Using global config: {}", path.display());
        }
        Config::from_file(path).with_context(|| format!("Failed to load config: {}", path.display()))
    }
}

const PROJECT_FILES: &[&str] = &["a11y-check.toml", ".a11y-check.toml"];
const GLOBAL_FILE: &str = "config.toml";
const GLOBAL_DIR_ENV: &str = "A11Y_CHECK_CONFIG_DIR";

/// Finds the configuration for documents in `project_dir`.
#[must_use]
pub fn resolve(project_dir: &Path, explicit: Option<&Path>) -> ConfigSource {
    let global_dir = std::env::var_os(GLOBAL_DIR_ENV)
        .map(PathBuf::from)
        .or_else(|| home::home_dir().map(|h| h.join(".a11y-check")));
    resolve_in(project_dir, explicit, global_dir.as_deref())
}

fn resolve_in(project_dir: &Path, explicit: Option<&Path>, global_dir: Option<&Path>) -> ConfigSource {
    if let Some(path) = explicit {
        return ConfigSource::Explicit(path.to_path_buf());
    }

    if let Some(found) = PROJECT_FILES
        .iter()
        .map(|name| project_dir.join(name))
        .find(|candidate| candidate.is_file())
    {
        tracing::debug!("Found project config: {}", found.display());
        return ConfigSource::Project(found);
    }

    match global_dir.map(|dir| dir.join(GLOBAL_FILE)) {
        Some(found) if found.is_file() => {
            tracing::debug!("Found global config: {}", found.display());
            ConfigSource::Global(found)
        }
        _ => ConfigSource::Default,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn explicit_path_wins_and_is_not_checked() {
        let project = TempDir::new().unwrap();
        fs::write(project.path().join("a11y-check.toml"), "").unwrap();
        let missing = Path::new("/nonexistent/a11y.toml");

        let source = resolve_in(project.path(), Some(missing), None);
        assert_eq!(source, ConfigSource::Explicit(missing.to_path_buf()));
        assert!(source.load().is_err());
    }

    #[test]
    fn project_files_in_order() {
        let project = TempDir::new().unwrap();
        fs::write(project.path().join(".a11y-check.toml"), "").unwrap();
        assert_eq!(
            resolve_in(project.path(), None, None),
            ConfigSource::Project(project.path().join(".a11y-check.toml"))
        );

        fs::write(project.path().join("a11y-check.toml"), "").unwrap();
        assert_eq!(
            resolve_in(project.path(), None, None),
            ConfigSource::Project(project.path().join("a11y-check.toml"))
        );
    }

    #[test]
    fn global_is_the_fallback() {
        let project = TempDir::new().unwrap();
        let global = TempDir::new().unwrap();
        assert_eq!(
            resolve_in(project.path(), None, Some(global.path())),
            ConfigSource::Default
        );

        fs::write(global.path().join("config.toml"), "fail_on = \"warning\"\n").unwrap();
        let source = resolve_in(project.path(), None, Some(global.path()));
        assert_eq!(source, ConfigSource::Global(global.path().join("config.toml")));
        assert_eq!(
            source.load().unwrap().fail_on(),
            a11y_check_core::Severity::Warning
        );

        fs::write(project.path().join("a11y-check.toml"), "").unwrap();
        assert!(matches!(
            resolve_in(project.path(), None, Some(global.path())),
            ConfigSource::Project(_)
        ));
    }

    #[test]
    fn default_source_loads_defaults() {
        let config = ConfigSource::Default.load().unwrap();
        assert!(config.preset.is_none());
        assert!(ConfigSource::Default.path().is_none());
    }

    #[test]
    fn invalid_issue_kind_is_rejected() {
        let project = TempDir::new().unwrap();
        let path = project.path().join("a11y-check.toml");
        fs::write(&path, "[issues.no-such-kind]\nenabled = false\n").unwrap();
        assert!(ConfigSource::Project(path).load().is_err());
    }
}
