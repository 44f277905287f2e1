use std::io::Write;

use opportunity_board::config::loader::{load_config, parse_config};
use opportunity_board::config::types::AppConfig;

#[test]
fn default_config_has_sane_defaults() {
    let config = AppConfig::default();
    assert_eq!(config.page_size.get(), 5);
    assert_eq!(config.closed_stage_name, "Closed Won");
    assert_eq!(config.messages.error_title, "Erro");
    assert_eq!(config.messages.result_title, "Resultado");
}

#[test]
fn parse_empty_config_uses_defaults() {
    let config = parse_config("").unwrap();
    assert_eq!(config.page_size.get(), 5);
    assert_eq!(config.messages, AppConfig::default().messages);
}

#[test]
fn parse_page_size_and_stage() {
    let toml = r#"
page_size = 10
closed_stage_name = "Fechada Ganha"
"#;
    let config = parse_config(toml).unwrap();
    assert_eq!(config.page_size.get(), 10);
    assert_eq!(config.closed_stage_name, "Fechada Ganha");
}

#[test]
fn parse_zero_page_size_fails() {
    assert!(parse_config("page_size = 0").is_err());
}

#[test]
fn parse_partial_messages_keeps_other_defaults() {
    let toml = r#"
[messages]
error_title = "Error"
page_label = "Page {page} of {total}"
"#;
    let config: AppConfig = toml::from_str(toml).unwrap();
    assert_eq!(config.messages.error_title, "Error");
    assert_eq!(config.messages.result_title, "Resultado");
    assert_eq!(config.messages.format_page_label(2, 5), "Page 2 of 5");
}

#[test]
fn parse_unknown_keys_ignored() {
    let toml = r#"
unknown_top_level = "should be ignored"
page_size = 3
"#;
    let config = parse_config(toml).unwrap();
    assert_eq!(config.page_size.get(), 3);
}

#[test]
fn load_explicit_path() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "page_size = 7").unwrap();
    let config = load_config(Some(file.path())).unwrap();
    assert_eq!(config.page_size.get(), 7);
}

#[test]
fn load_missing_explicit_path_fails_with_context() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing.toml");
    let err = load_config(Some(&path)).unwrap_err();
    assert!(format!("{err:#}").contains("reading"));
}

#[test]
fn load_invalid_toml_fails() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "page_size = [").unwrap();
    assert!(load_config(Some(file.path())).is_err());
}
