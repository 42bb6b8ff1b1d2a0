mod common;

use common::{FailingLauncher, RecordingLauncher};
use lantern::{ConfigError, LaunchError, ServerConfig, http, http_with_defaults, load_config};
use std::io::Write;

#[test]
fn test_http_hands_address_to_launcher() {
    let launcher = RecordingLauncher::default();
    let config = ServerConfig {
        ip: "0.0.0.0".to_string(),
        port: 2000,
    };

    let handlers = http(&config, &launcher, |app| {
        app.get("/", |http| http.response.push_str("home"));
        app.path("/notes", |notes| {
            notes.get("/new", |http| http.response.push_str("new note"));
        });
    })
    .unwrap();

    assert_eq!(handlers.len(), 2);
    assert_eq!(launcher.launches(), vec![("0.0.0.0".to_string(), 2000, 2)]);
}

#[test]
fn test_http_with_defaults() {
    let launcher = RecordingLauncher::default();
    http_with_defaults(&launcher, |app| {
        app.get("/", |_| {});
    })
    .unwrap();
    assert_eq!(launcher.launches(), vec![("127.0.0.1".to_string(), 80, 1)]);
}

#[test]
fn test_launch_failure() {
    let err = http_with_defaults(&FailingLauncher, |_| {}).unwrap_err();
    assert!(matches!(err, LaunchError::Launch(_)));
    assert_eq!(err.to_string(), "launch failed: address already in use");
}

#[test]
fn test_invalid_config_is_not_launched() {
    let launcher = RecordingLauncher::default();
    let config = ServerConfig {
        port: 0,
        ..ServerConfig::default()
    };
    let err = http(&config, &launcher, |_| {}).unwrap_err();
    assert!(matches!(err, LaunchError::Config(ConfigError::Validation(_))));
    assert!(launcher.launches().is_empty());
}

#[test]
fn test_load_config_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "ip = \"10.0.0.5\"\nport = 8080").unwrap();

    let config = load_config(file.path()).unwrap();
    assert_eq!(config.address(), "10.0.0.5:8080");
}
