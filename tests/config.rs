use std::path::PathBuf;
use tempfile::TempDir;

use clickup_tasks::config::Config;
use clickup_tasks::constants::{DEFAULT_API_BASE_URL, DEFAULT_TOKEN_ENV};

#[test]
fn test_default_config() {
    let config = Config::default();
    assert_eq!(config.api.base_url, DEFAULT_API_BASE_URL);
    assert_eq!(config.api.token_env, DEFAULT_TOKEN_ENV);
    assert_eq!(config.api.timeout_secs, 30);
    assert!(config.api.token.is_none());
    assert!(!config.sync.always);
    assert_eq!(config.style.head, vec!["red".to_string()]);
    assert!(!config.logging.enabled);
    assert_eq!(config.logging.level, "warn");
    assert!(config.validate().is_ok());
}

#[test]
fn test_config_validation() {
    let mut config = Config::default();

    config.api.timeout_secs = 0;
    assert!(config.validate().is_err());

    config.api.timeout_secs = 30;
    config.style.tasks = vec!["sparkly".to_string()];
    assert!(config.validate().is_err());

    config.style.tasks = vec!["bold".to_string(), "lightblue".to_string(), "#ff8800".to_string()];
    assert!(config.validate().is_ok());

    config.logging.level = "chatty".to_string();
    assert!(config.validate().is_err());

    config.logging.level = "debug".to_string();
    config.api.base_url = "  ".to_string();
    assert!(config.validate().is_err());
}

#[test]
fn test_partial_config_deserialization() {
    let partial_toml = r#"
[api]
token = "pk_123"

[sync]
always = true

[style]
tasks = ["green"]
"#;

    let config: Config = toml::from_str(partial_toml).unwrap();

    assert_eq!(config.api.token.as_deref(), Some("pk_123"));
    assert!(config.sync.always);
    assert_eq!(config.style.tasks, vec!["green".to_string()]);

    // Unspecified values use defaults
    assert_eq!(config.api.base_url, DEFAULT_API_BASE_URL);
    assert_eq!(config.style.border, vec!["gray".to_string()]);
    assert_eq!(config.logging.level, "warn");
}

#[test]
fn test_empty_config_deserialization() {
    let config: Config = toml::from_str("").unwrap();
    let default_config = Config::default();

    assert_eq!(config.api.base_url, default_config.api.base_url);
    assert_eq!(config.sync.always, default_config.sync.always);
    assert_eq!(config.logging.enabled, default_config.logging.enabled);
}

#[test]
fn test_inline_token_wins_over_environment() {
    let mut config = Config::default();
    config.api.token = Some(" pk_inline ".to_string());
    config.api.token_env = "CLICKUP_TASKS_TEST_UNSET_VARIABLE".to_string();
    assert_eq!(config.api.resolve_token().unwrap(), "pk_inline");

    config.api.token = None;
    assert!(config.api.resolve_token().is_err());
}

#[test]
fn test_cache_dir_override() {
    let mut config = Config::default();
    config.cache.dir = Some(PathBuf::from("/tmp/clickup-cache"));
    assert_eq!(config.cache_dir().unwrap(), PathBuf::from("/tmp/clickup-cache"));
    assert_eq!(config.log_file().unwrap(), PathBuf::from("/tmp/clickup-cache/tasks.log"));
}

#[test]
fn test_load_and_generate_config_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nested").join("config.toml");

    Config::generate_default_config(&path).unwrap();
    let loaded = Config::load(Some(path.as_path())).unwrap();
    assert_eq!(loaded.api.base_url, DEFAULT_API_BASE_URL);

    std::fs::write(&path, "[api]\ntimeout_secs = 9000\n").unwrap();
    assert!(Config::load(Some(path.as_path())).is_err());
}
