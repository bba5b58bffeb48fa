//! Writing the Claude config through a session.

use std::fs;

use ambivo_installer::config::InstallerSettings;
use ambivo_installer::runtime::Platform;
use ambivo_installer::session::Session;
use ambivo_installer::InstallerError;
use serde_json::{json, Value};
use tempfile::TempDir;

fn session_writing_to(path: &std::path::Path) -> Session {
    let settings = InstallerSettings {
        claude_config_path: Some(path.to_path_buf()),
        ..InstallerSettings::default()
    };
    Session::for_platform(Platform::MacOS, settings)
}

fn read(path: &std::path::Path) -> Value {
    serde_json::from_str(&fs::read_to_string(path).unwrap()).unwrap()
}

#[test]
fn creates_missing_directories() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("Library/Application Support/Claude/claude_desktop_config.json");
    let mut session = session_writing_to(&path);
    session.set_python("/usr/local/bin/python3.12");

    let report = session.configure("tok-1").unwrap();

    assert_eq!(report.path, path);
    assert!(report.warnings.is_empty());
    assert_eq!(
        read(&path)["mcpServers"]["ambivo"],
        json!({
            "command": "/usr/local/bin/python3.12",
            "args": ["-m", "ambivo-mcp-server"],
            "env": {"AMBIVO_AUTH_TOKEN": "tok-1"}
        })
    );
}

#[test]
fn configuring_twice_keeps_one_entry() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("claude_desktop_config.json");
    fs::write(&path, r#"{"mcpServers": {"foo": {"command": "node"}}}"#).unwrap();
    let mut session = session_writing_to(&path);

    session.configure("first").unwrap();
    session.configure("second").unwrap();

    let servers = read(&path)["mcpServers"].clone();
    let servers = servers.as_object().unwrap();
    assert_eq!(servers.len(), 2);
    assert_eq!(servers["foo"]["command"], "node");
    assert_eq!(servers["ambivo"]["env"]["AMBIVO_AUTH_TOKEN"], "second");
}

#[test]
fn corrupt_config_is_replaced_with_a_warning() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("claude_desktop_config.json");
    fs::write(&path, "{not json").unwrap();
    let mut session = session_writing_to(&path);

    let report = session.configure("tok").unwrap();

    assert!(!report.warnings.is_empty());
    let written = read(&path);
    assert_eq!(written.as_object().unwrap().len(), 1);
    assert!(written["mcpServers"]["ambivo"].is_object());
}

#[test]
fn blank_token_writes_nothing() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("claude_desktop_config.json");
    let mut session = session_writing_to(&path);

    let err = session.configure("   ").unwrap_err();

    assert!(matches!(err, InstallerError::MissingToken));
    assert!(!path.exists());
}

#[test]
fn token_is_masked_after_configure() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("claude_desktop_config.json");
    let mut session = session_writing_to(&path);

    session.configure("tok-very-secret").unwrap();

    assert_eq!(
        session.mask("token=tok-very-secret"),
        "token=[REDACTED]"
    );
}
