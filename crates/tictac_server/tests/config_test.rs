//! Tests for server configuration loading.

use std::io::Write;
use tictac_server::{Cli, ConfigError, ServerConfig};

#[test]
fn test_defaults() {
    let config = ServerConfig::from_cli(&Cli::default()).unwrap();
    assert_eq!(config.host(), "127.0.0.1");
    assert_eq!(*config.port(), 3000);
    assert_eq!(config.log_filter(), "info");
    assert_eq!(config.bind_addr(), "127.0.0.1:3000");
}

#[test]
fn test_from_file_partial() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "port = 8080").unwrap();
    let config = ServerConfig::from_file(file.path()).unwrap();
    assert_eq!(*config.port(), 8080);
    assert_eq!(config.host(), "127.0.0.1");
}

#[test]
fn test_cli_overrides_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "host = \"0.0.0.0\"\nport = 8080\nlog_filter = \"debug\"").unwrap();
    let cli = Cli {
        config: Some(file.path().to_path_buf()),
        port: Some(9000),
        ..Cli::default()
    };
    let config = ServerConfig::from_cli(&cli).unwrap();
    assert_eq!(config.host(), "0.0.0.0");
    assert_eq!(*config.port(), 9000);
    assert_eq!(config.log_filter(), "debug");
}

#[test]
fn test_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("absent.toml");
    let err = ServerConfig::from_file(&path).unwrap_err();
    assert!(matches!(err, ConfigError::Read { .. }));
    assert_eq!(err.path(), path.as_path());
    assert!(err.to_string().starts_with("cannot read server config"));
}

#[test]
fn test_invalid_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "port = \"not a number\"").unwrap();
    let err = ServerConfig::from_file(file.path()).unwrap_err();
    assert!(matches!(err, ConfigError::Parse { .. }));
    assert_eq!(err.path(), file.path());
    assert!(std::error::Error::source(&err).is_some());
}
