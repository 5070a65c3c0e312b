// tests/integration_tests/logging_config_test.rs
use super::common::create_logging_file;
use anyhow::Result;
use log::LevelFilter;
use tempfile::TempDir;
use wordfreq::ConfigError;
use wordfreq::logging::{LogSettings, load_settings};
use wordfreq::models::Stream;

#[test]
fn test_dict_config_style_file() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let path = create_logging_file(
        temp_dir.path(),
        "logging:
  version: 1
  disable_existing_loggers: false
  formatters:
    simple:
      format: '%(asctime)s - %(name)s - %(levelname)s - %(message)s'
  handlers:
    console:
      class: logging.StreamHandler
      level: DEBUG
  root:
    level: WARNING
  loggers:
    word_count:
      level: INFO
",
    )?;

    let settings = load_settings(&path)?;

    assert_eq!(settings.root, LevelFilter::Warn);
    assert_eq!(
        settings.targets,
        vec![(String::from("word_count"), LevelFilter::Info)]
    );
    assert_eq!(settings.stream, Stream::Stderr);
    Ok(())
}

#[test]
fn test_document_without_logging_section() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let path = create_logging_file(temp_dir.path(), "other: true\n")?;

    assert_eq!(load_settings(&path)?, LogSettings::default());
    Ok(())
}

#[test]
fn test_wrong_shape_is_parse_error() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let path = create_logging_file(temp_dir.path(), "logging:\n  root: 42\n")?;

    assert!(matches!(
        load_settings(&path),
        Err(ConfigError::Parse { .. })
    ));
    Ok(())
}
