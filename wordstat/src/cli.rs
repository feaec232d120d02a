// src/cli.rs
use anyhow::{Context as _, Result};
use clap::Parser;
use std::env;
use std::path::PathBuf;

use crate::config::{Config, OutputFormat, absolute_dir, load_config_file, load_config_from};
use crate::core::scanner::aggregate_directory;
use crate::utils::render_report;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Directory to scan (defaults to current directory)
    #[arg(short, long, default_value = ".")]
    pub directory: PathBuf,

    /// Scan subdirectories for .txt files (default)
    #[arg(long, overrides_with = "no_subdirectories")]
    pub subdirectories: bool,

    /// Only scan files directly inside the directory, of any extension
    #[arg(long, overrides_with = "subdirectories")]
    pub no_subdirectories: bool,

    /// Report format
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Config file to use instead of searching for .wordstat.toml
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Log each analyzed file to stderr
    #[arg(short, long)]
    pub verbose: bool,
}

impl Args {
    /// Resolves the subdirectory toggle: flag, then config, then enabled.
    #[must_use]
    pub fn include_subdirectories(&self, config: &Config) -> bool {
        if self.no_subdirectories {
            false
        } else if self.subdirectories {
            true
        } else {
            config.include_subdirectories.unwrap_or(true)
        }
    }

    #[must_use]
    pub fn output_format(&self, config: &Config) -> OutputFormat {
        self.format.or(config.format).unwrap_or_default()
    }

    /// Combines flags, config file and defaults into the settings for a run.
    ///
    /// # Errors
    ///
    /// This function may return an error if:
    /// * The current working directory cannot be determined
    /// * The config file cannot be read or parsed
    pub fn resolve(&self) -> Result<Settings> {
        let cwd = env::current_dir().context("Failed to read current directory")?;
        let directory = absolute_dir(&cwd, &self.directory);

        let config = match &self.config {
            Some(path) => load_config_file(path)?,
            None => load_config_from(&cwd, &directory)?,
        };

        Ok(Settings {
            include_subdirectories: self.include_subdirectories(&config),
            format: self.output_format(&config),
            directory,
        })
    }
}

/// What a run scans and how it reports.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Absolute directory to scan
    pub directory: PathBuf,
    pub include_subdirectories: bool,
    pub format: OutputFormat,
}

/// Scans the requested directory and prints the report to stdout.
///
/// # Errors
///
/// This function may return an error if:
/// * The config file cannot be read or parsed
/// * The directory does not exist, is not a directory or cannot be listed
/// * The report cannot be rendered
pub fn run(args: Args) -> Result<()> {
    let settings = args.resolve()?;

    let result = aggregate_directory(&settings.directory, settings.include_subdirectories)
        .with_context(|| format!("Invalid directory: {}", args.directory.display()))?;

    let report = render_report(&result, settings.format)?;
    print!("{report}");
    Ok(())
}
