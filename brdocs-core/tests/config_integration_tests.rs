// brdocs-core/tests/config_integration_tests.rs
use anyhow::Result;
use std::io::Write;
use tempfile::NamedTempFile;
use test_log::test;

use brdocs_core::{merge_config, Dispatcher, FieldKind, FormatMode, ValidatorConfig};

fn write_config(yaml: &str) -> Result<NamedTempFile> {
    let mut file = NamedTempFile::new()?;
    file.write_all(yaml.as_bytes())?;
    file.flush()?;
    Ok(file)
}

#[test]
fn loads_user_file_and_merges_over_defaults() -> Result<()> {
    let file = write_config(
        r#"
format_mode: lenient
disabled_operations:
  - formatarCep
  - notAnOperation
"#,
    )?;

    let user = ValidatorConfig::load_from_file(file.path())?;
    assert_eq!(user.format_mode, Some(FormatMode::Lenient));

    let config = merge_config(ValidatorConfig::load_default()?, Some(user));
    let dispatcher = Dispatcher::new(&config);
    assert_eq!(dispatcher.format_mode(), FormatMode::Lenient);

    let report = dispatcher.execute("formatCep", "01310100");
    assert!(!report.is_valid);
    assert_eq!(report.error.as_deref(), Some("Unsupported operation"));

    assert!(dispatcher.execute("validateCep", "01310100").is_valid);
    assert_eq!(dispatcher.format(FieldKind::Cpf, "cpf: 111.444.777-35"), "111.444.777-35");
    Ok(())
}

#[test]
fn missing_keys_fall_back_to_defaults() -> Result<()> {
    let file = write_config("disabled_operations: []\n")?;
    let config = merge_config(ValidatorConfig::load_default()?, Some(ValidatorConfig::load_from_file(file.path())?));
    assert_eq!(config.effective_format_mode(), FormatMode::Strict);
    Ok(())
}

#[test]
fn reports_unreadable_and_malformed_files() -> Result<()> {
    let err = ValidatorConfig::load_from_file("/definitely/not/here.yaml").unwrap_err();
    assert!(err.to_string().contains("Failed to read config file"));

    let file = write_config("format_mode: sideways\n")?;
    let err = ValidatorConfig::load_from_file(file.path()).unwrap_err();
    assert!(err.to_string().contains("Failed to parse config file"));
    Ok(())
}
