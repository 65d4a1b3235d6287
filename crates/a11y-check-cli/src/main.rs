//! a11y-check CLI tool.
//!
//! Usage:
//! ```bash
//! a11y-check check [OPTIONS] [PATHS]...
//! a11y-check list-checks
//! a11y-check init
//! ```

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

mod commands;
mod config_resolver;

/// Accessibility checker for document snapshots
#[derive(Parser)]
#[command(name = "a11y-check")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to configuration file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Check document snapshots
    Check {
        /// Snapshot files or directories to scan for `*.json` (default: current directory)
        #[arg(default_value = ".")]
        paths: Vec<PathBuf>,

        /// Output format
        #[arg(short, long, default_value = "text")]
        format: OutputFormat,

        /// Only run specific checks (comma-separated)
        #[arg(long)]
        checks: Option<String>,

        /// Preset to run: "full" or "essential"
        #[arg(long)]
        preset: Option<String>,
    },

    /// List available checks
    ListChecks,

    /// Initialize configuration file
    Init {
        /// Overwrite existing config
        #[arg(long)]
        force: bool,
    },
}

/// Output format for check results.
#[derive(Clone, Copy, Debug, Default, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text output.
    #[default]
    Text,
    /// JSON output.
    Json,
    /// One-line-per-issue compact format.
    Compact,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Check {
            paths,
            format,
            checks,
            preset,
        } => {
            let options = commands::check::CheckOptions {
                format,
                checks,
                preset,
            };
            let failed = commands::check::run(&paths, &options, cli.config.as_deref())?;
            if failed {
                std::process::exit(1);
            }
            Ok(())
        }
        Commands::ListChecks => {
            commands::list_checks::run();
            Ok(())
        }
        Commands::Init { force } => commands::init::run(force),
    }
}
