// src/config/loader.rs
use crate::config::Config;
use anyhow::{Context as _, Result};
use std::collections::HashSet;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

pub const CONFIG_FILE_NAME: &str = ".wordstat.toml";

/// Searches `dir` and then each of its ancestors for a `.wordstat.toml`
/// file, returning the first one found.
#[must_use]
pub fn find_config(dir: &Path) -> Option<PathBuf> {
    let mut current_dir = dir.to_path_buf();
    let mut visited = HashSet::new();

    while visited.insert(current_dir.clone()) {
        let candidate = current_dir.join(CONFIG_FILE_NAME);
        if candidate.is_file() {
            return Some(candidate);
        }

        match current_dir.parent() {
            Some(parent) => current_dir = parent.to_path_buf(),
            None => break,
        }
    }

    None
}

/// Reads and parses the config file at `path`.
///
/// # Errors
///
/// This function may return an error if:
/// * The file cannot be read
/// * The file is not valid TOML or has unknown keys
pub fn load_config_file(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;
    Config::from_toml(&content)
        .with_context(|| format!("Failed to parse config file: {}", path.display()))
}

/// Joins a relative `dir` onto `base`, so the upward search walks the real
/// ancestors instead of stopping at `"."`.
#[must_use]
pub fn absolute_dir(base: &Path, dir: &Path) -> PathBuf {
    if dir.is_absolute() {
        dir.to_path_buf()
    } else {
        base.join(dir)
    }
}

/// Loads the config that applies to a scan of `dir`, or the default config
/// when no `.wordstat.toml` is found. Relative paths are taken from the
/// current working directory.
///
/// # Errors
///
/// This function may return an error if:
/// * The current working directory cannot be determined
/// * A config file is found but cannot be read or parsed
pub fn load_config(dir: &Path) -> Result<Config> {
    let cwd = env::current_dir().context("Failed to read current directory")?;
    load_config_from(&cwd, dir)
}

/// Like [`load_config`], resolving a relative `dir` against `base`.
///
/// # Errors
///
/// This function may return an error if a config file is found but cannot be
/// read or parsed.
pub fn load_config_from(base: &Path, dir: &Path) -> Result<Config> {
    match find_config(&absolute_dir(base, dir)) {
        Some(path) => {
            tracing::debug!(config = %path.display(), "loading config");
            load_config_file(&path)
        }
        None => Ok(Config::default()),
    }
}
