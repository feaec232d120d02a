// src/config.rs
mod loader;

pub use loader::{
    CONFIG_FILE_NAME, absolute_dir, find_config, load_config, load_config_file, load_config_from,
};

use clap::ValueEnum;
use serde::Deserialize;

/// Report format for the command-line output.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Settings read from a `.wordstat.toml` file. Unset keys fall back to the
/// command-line flags or the built-in defaults.
#[derive(Deserialize, Debug, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    pub include_subdirectories: Option<bool>,
    pub format: Option<OutputFormat>,
}

impl Config {
    /// Parses a config document.
    ///
    /// # Errors
    ///
    /// Returns an error if `content` is not valid TOML or contains keys this
    /// tool does not know.
    pub fn from_toml(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }
}
