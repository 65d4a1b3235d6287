//! Init command implementation.

use anyhow::{bail, Context, Result};
use std::path::Path;

const CONFIG_FILE: &str = "a11y-check.toml";

const DEFAULT_CONFIG: &str = r#"# a11y-check configuration

# Check selection: "full" (default) or "essential"
preset = "full"

# Exit with status 1 when an issue of this severity or worse is found
fail_on = "error"

# Check configurations
# Each check can be disabled and may take options

[checks.hyperlink]
enabled = true
short_text_length = 5

[checks.text-contrast]
normal_text_ratio = 4.5
large_text_ratio = 3.0

# [checks.drawing-objects]
# enabled = false

# Issue kinds can be hidden or have their severity overridden

# [issues.avoid-footnotes]
# enabled = false

# [issues.text-spaces]
# severity = "error"
"#;

/// Runs the init command.
pub fn run(force: bool) -> Result<()> {
    write_config(Path::new(CONFIG_FILE), force)?;

    println!("Created {CONFIG_FILE}");
    println!("\nNext steps:");
    println!("  1. Edit {CONFIG_FILE} to configure checks");
    println!("  2. Run: a11y-check check <snapshot.json>");

    Ok(())
}

fn write_config(path: &Path, force: bool) -> Result<()> {
    if path.exists() && !force {
        bail!(
            "Configuration file already exists at {}. Use --force to overwrite.",
            path.display()
        );
    }
    std::fs::write(path, DEFAULT_CONFIG)
        .with_context(|| format!("Failed to write {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use a11y_check_core::Config;
    use tempfile::TempDir;

    #[test]
    fn default_config_parses() {
        let config = Config::parse(DEFAULT_CONFIG).unwrap();
        assert_eq!(config.preset.as_deref(), Some("full"));
        assert!(config.is_check_enabled("hyperlink"));
    }

    #[test]
    fn refuses_to_overwrite_without_force() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join(CONFIG_FILE);
        std::fs::write(&path, "preset = \"essential\"\n").unwrap();

        assert!(write_config(&path, false).is_err());
        assert_eq!(
            std::fs::read_to_string(&path).unwrap(),
            "preset = \"essential\"\n"
        );

        write_config(&path, true).unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), DEFAULT_CONFIG);
    }
}
