// tests/integration_tests/config_test.rs
use super::common::create_test_file;
use anyhow::Result;
use tally::{Config, load_config};
use tempfile::TempDir;

#[test]
fn test_no_config_flag_gives_defaults() -> Result<()> {
    assert_eq!(load_config(None)?, Config::default());
    Ok(())
}

#[test]
fn test_explicit_config_is_read() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let path = create_test_file(
        temp_dir.path(),
        "settings/tally.toml",
        "log_level = \"info\"\n[calculator]\nprecision = 2\n",
    )?;

    let config = load_config(Some(&path))?;
    assert_eq!(config.log_level.as_deref(), Some("info"));
    assert_eq!(config.calculator.precision, Some(2));
    assert_eq!(config.source, Some(path));
    Ok(())
}

#[test]
fn test_dot_files_in_the_tree_are_not_read() -> Result<()> {
    let temp_dir = TempDir::new()?;
    create_test_file(temp_dir.path(), ".tally.toml", "[calculator]\nprecision = 5\n")?;
    let explicit = create_test_file(temp_dir.path(), "other.toml", "[calculator]\nprecision = 0\n")?;

    let config = load_config(Some(&explicit))?;
    assert_eq!(config.calculator.precision, Some(0));
    Ok(())
}
