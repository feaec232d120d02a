// tests/integration_tests/config_test.rs
use super::common::{create_config_file, setup_test_directory};
use anyhow::Result;
use wordstat::{Config, OutputFormat, aggregate_directory, load_config};

#[test]
fn test_config_selects_top_level_scan() -> Result<()> {
    let temp_dir = setup_test_directory()?;
    create_config_file(
        temp_dir.path(),
        &["include_subdirectories = false", "format = \"json\""],
    )?;

    let config = load_config(temp_dir.path())?;
    assert_eq!(config.format, Some(OutputFormat::Json));

    let result = aggregate_directory(
        temp_dir.path(),
        config.include_subdirectories.unwrap_or(true),
    )?;
    // The config file itself is a top-level file
    assert!(result.get(".wordstat.toml").is_some());
    assert!(result.get("c.txt").is_none());
    Ok(())
}

#[test]
fn test_missing_config_falls_back_to_defaults() -> Result<()> {
    let temp_dir = setup_test_directory()?;
    let config = load_config(&temp_dir.path().join("letters"))?;
    assert_eq!(config, Config::default());
    Ok(())
}

#[test]
fn test_configurable_token_set_is_rejected() -> Result<()> {
    let temp_dir = setup_test_directory()?;
    create_config_file(temp_dir.path(), &["tokens = [\"the\", \"and\"]"])?;

    assert!(load_config(temp_dir.path()).is_err());
    Ok(())
}
