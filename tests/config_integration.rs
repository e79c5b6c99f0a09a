use serial_test::serial;
use std::env;
use std::fs;
use std::time::Duration;
use word_insight_chat::config::AppConfig;

// Helper to clear environment variables that might interfere with tests
fn clear_env_vars() {
    unsafe {
        env::remove_var("WIC_SERVER__PORT");
        env::remove_var("WIC_SERVER__HOST");
        env::remove_var("WIC_CLIENT__ENDPOINT");
        env::remove_var("CONFIG_FILE");
    }
}

#[test]
#[serial]
fn test_default_config() {
    clear_env_vars();

    let config = AppConfig::load_from_args(["word-insight-chat", "serve"])
        .expect("Failed to load default config");

    assert_eq!(config.server.port, 5000);
    assert_eq!(config.server.host, "127.0.0.1");
    assert_eq!(config.server.request_timeout(), Some(Duration::from_secs(30)));
    assert_eq!(config.client.endpoint, "http://127.0.0.1:5000");
    assert_eq!(config.client.request_timeout(), None);
}

#[test]
#[serial]
fn test_env_override() {
    clear_env_vars();
    unsafe {
        env::set_var("WIC_SERVER__PORT", "9090");
    }

    let config =
        AppConfig::load_from_args(["word-insight-chat", "serve"]).expect("Failed to load config");
    assert_eq!(config.server.port, 9090);

    clear_env_vars();
}

#[test]
#[serial]
fn test_cli_beats_env() {
    clear_env_vars();
    unsafe {
        env::set_var("WIC_SERVER__PORT", "9090");
        env::set_var("WIC_CLIENT__ENDPOINT", "http://from-env:1");
    }

    let config = AppConfig::load_from_args(["word-insight-chat", "serve", "--port", "7000"])
        .expect("Failed to load config");
    assert_eq!(config.server.port, 7000);

    let config = AppConfig::load_from_args([
        "word-insight-chat",
        "chat",
        "--endpoint",
        "http://from-cli:2",
    ])
    .expect("Failed to load config");
    assert_eq!(config.client.endpoint, "http://from-cli:2");

    clear_env_vars();
}

#[test]
#[serial]
fn test_file_load() {
    clear_env_vars();

    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let file_path = dir.path().join("settings.yaml");
    fs::write(
        &file_path,
        r#"
server:
  port: 7070
client:
  endpoint: "http://analysis.internal:8080"
  request_timeout_secs: 10
    "#,
    )
    .expect("Failed to write temp config");

    let config = AppConfig::load_from_args([
        "word-insight-chat",
        "--config",
        file_path.to_str().unwrap(),
        "chat",
    ])
    .expect("Failed to load config from file");

    assert_eq!(config.server.port, 7070);
    assert_eq!(config.client.endpoint, "http://analysis.internal:8080");
    assert_eq!(config.client.request_timeout(), Some(Duration::from_secs(10)));
}

#[test]
#[serial]
fn test_file_from_env_var() {
    clear_env_vars();

    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let file_path = dir.path().join("settings.yaml");
    fs::write(&file_path, "server:\n  request_timeout_secs: 0\n").unwrap();

    unsafe {
        env::set_var("CONFIG_FILE", &file_path);
    }

    let config =
        AppConfig::load_from_args(["word-insight-chat", "serve"]).expect("Failed to load config");
    assert_eq!(config.server.request_timeout(), None);

    clear_env_vars();
}

#[test]
#[serial]
fn test_missing_config_file_is_an_error() {
    clear_env_vars();

    let result = AppConfig::load_from_args([
        "word-insight-chat",
        "--config",
        "/definitely/not/here.yaml",
        "serve",
    ]);
    assert!(result.is_err());
}

#[test]
#[serial]
fn test_subcommand_required() {
    clear_env_vars();

    assert!(AppConfig::load_from_args(["word-insight-chat"]).is_err());
}
