//! Check command implementation.

use a11y_check_core::{Config, Document, IssueCollection};
use a11y_check_rules::{check_catalog, Preset};
use anyhow::{bail, Context, Result};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use crate::config_resolver;
use crate::OutputFormat;

/// Command-line options of `check`.
#[derive(Debug, Default)]
pub struct CheckOptions {
    /// Output format.
    pub format: OutputFormat,
    /// Comma-separated check names to run.
    pub checks: Option<String>,
    /// Preset overriding the configured one.
    pub preset: Option<String>,
}

/// Issues found in one snapshot file.
pub struct FileReport {
    /// Snapshot path.
    pub path: PathBuf,
    /// The parsed snapshot.
    pub document: Document,
    /// Issues of the scan.
    pub issues: IssueCollection,
}

/// Runs the check command. Returns true when an issue at or above the
/// configured `fail_on` severity was found.
pub fn run(paths: &[PathBuf], options: &CheckOptions, explicit: Option<&Path>) -> Result<bool> {
    let project_dir = project_dir(paths);
    let source = config_resolver::resolve(&project_dir, explicit);
    let mut config = source.load()?;

    let preset = select_preset(&mut config, options.preset.as_deref())?;
    if let Some(filter) = &options.checks {
        let names: Vec<&str> = filter
            .split(',')
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .collect();
        restrict_checks(&mut config, &names);
    }

    let files = collect_documents(paths)?;
    let mut scanner = preset.scanner(&config);
    tracing::info!(
        "Checking {} file(s) with {} checks (preset: {})",
        files.len(),
        scanner.check_count(),
        preset.name()
    );

    let mut reports = Vec::with_capacity(files.len());
    for path in files {
        let document = Document::from_path(&path)
            .with_context(|| format!("Failed to load document: {}", path.display()))?;
        let issues = scanner.scan(&document);
        reports.push(FileReport {
            path,
            document,
            issues,
        });
    }

    super::output::print(&reports, options.format)?;

    let fail_on = config.fail_on();
    Ok(reports.iter().any(|r| r.issues.has_issues_at(fail_on)))
}

/// Directory used to look up the project configuration.
fn project_dir(paths: &[PathBuf]) -> PathBuf {
    match paths.first() {
        Some(path) if path.is_dir() => path.clone(),
        Some(path) => path
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .map_or_else(|| PathBuf::from("."), Path::to_path_buf),
        None => PathBuf::from("."),
    }
}

/// Resolves the preset from the command line, then the configuration.
fn select_preset(config: &mut Config, cli_preset: Option<&str>) -> Result<Preset> {
    if let Some(name) = cli_preset {
        config.preset = Some(name.to_string());
    }
    match config.preset.as_deref() {
        None => Ok(Preset::default()),
        Some(name) => match Preset::from_name(name) {
            Some(preset) => Ok(preset),
            None => bail!("Unknown preset `{name}`. Valid presets: full, essential"),
        },
    }
}

/// Disables every check not named in `names`.
fn restrict_checks(config: &mut Config, names: &[&str]) {
    let catalog = check_catalog();
    for name in names {
        if !catalog.iter().any(|(known, _)| known == name) {
            tracing::warn!("Unknown check: {}", name);
        }
    }
    for (name, _) in catalog {
        if !names.contains(&name) {
            config.checks.entry(name.to_string()).or_default().enabled = Some(false);
        }
    }
}

/// Expands directories into the `*.json` files below them, sorted.
fn collect_documents(paths: &[PathBuf]) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for path in paths {
        if path.is_file() {
            files.push(path.clone());
            continue;
        }
        if !path.exists() {
            bail!("Path not found: {}", path.display());
        }
        let mut found: Vec<PathBuf> = WalkDir::new(path)
            .into_iter()
            .filter_map(|entry| match entry {
                Ok(entry) => Some(entry),
                Err(e) => {
                    tracing::warn!("Skipping unreadable entry: {}", e);
                    None
                }
            })
            .filter(|entry| entry.file_type().is_file())
            .map(walkdir::DirEntry::into_path)
            .filter(|p| p.extension().is_some_and(|ext| ext == "json"))
            .collect();
        found.sort();
        files.extend(found);
    }
    Ok(files)
}
