//! Coverage for config parsing and override precedence.

use quickchat::config::{LogConfig, QuickchatConfig, StoreConfig};

#[test]
fn default_store_path() {
    let store = StoreConfig::default();
    assert_eq!(store.path, "messages.json");
}

#[test]
fn default_log_filter() {
    let log = LogConfig::default();
    assert_eq!(log.filter, "info");
}

#[test]
fn parse_minimal_config() {
    let toml_str = r#"
[store]
path = "sent/messages.json"
"#;
    let config_parse = toml::from_str::<QuickchatConfig>(toml_str);
    assert!(config_parse.is_ok());
    let config = match config_parse {
        Ok(config) => config,
        Err(err) => panic!("minimal config should parse: {err}"),
    };
    assert_eq!(config.store.path, "sent/messages.json");
    // Unspecified sections fall back to defaults.
    assert_eq!(config.log.filter, "info");
}

#[test]
fn parse_empty_config_uses_defaults() {
    let parsed = toml::from_str::<QuickchatConfig>("");
    assert!(parsed.is_ok());
    let config = match parsed {
        Ok(config) => config,
        Err(err) => panic!("empty config should parse: {err}"),
    };
    assert_eq!(config.store.path, "messages.json");
}

#[test]
fn env_override_wins_over_file_value() {
    let toml_str = r#"
[store]
path = "from-file.json"

[log]
filter = "debug"
"#;
    let mut config = match toml::from_str::<QuickchatConfig>(toml_str) {
        Ok(config) => config,
        Err(err) => panic!("config should parse: {err}"),
    };

    config.apply_overrides(|key| match key {
        "QUICKCHAT_STORE_PATH" => Some("from-env.json".to_owned()),
        _ => None,
    });

    assert_eq!(config.store.path, "from-env.json");
    // Untouched keys keep their file values.
    assert_eq!(config.log.filter, "debug");
}
