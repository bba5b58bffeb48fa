//! Integration tests for the installer binary.
// The cargo_bin function is marked deprecated in favor of cargo_bin! macro,
// but both work correctly. Suppressing until assert_cmd stabilizes the new API.
#![allow(deprecated)]

use assert_cmd::cargo::cargo_bin;
use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

/// The binary with a scratch HOME and no token or path overrides.
fn installer(home: &Path) -> Command {
    let mut cmd = Command::new(cargo_bin("ambivo-installer"));
    cmd.env("HOME", home)
        .env_remove("AMBIVO_AUTH_TOKEN")
        .env_remove("AMBIVO_CLAUDE_CONFIG")
        .env_remove("AMBIVO_PROMPT_TOKEN")
        .env("NO_COLOR", "1");
    cmd
}

fn read_json(path: &Path) -> serde_json::Value {
    serde_json::from_str(&fs::read_to_string(path).unwrap()).unwrap()
}

#[test]
fn cli_shows_help() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    installer(temp.path())
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Installs the Ambivo MCP server"))
        .stdout(predicate::str::contains("configure"))
        .stdout(predicate::str::contains("get-python"));
    Ok(())
}

#[test]
fn cli_shows_version() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    installer(temp.path())
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
    Ok(())
}

#[test]
fn version_subcommand_prints_version() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    installer(temp.path())
        .arg("version")
        .assert()
        .success()
        .stdout(predicate::str::contains(format!(
            "ambivo-installer {}",
            env!("CARGO_PKG_VERSION")
        )));
    Ok(())
}

#[test]
fn configure_writes_fresh_config() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    let config = temp.path().join("Claude").join("claude_desktop_config.json");

    installer(temp.path())
        .args(["configure", "--token", "tok-secret-value", "--python", "python3"])
        .arg("--config-path")
        .arg(&config)
        .arg("--non-interactive")
        .assert()
        .success()
        .stdout(predicate::str::contains("Configuration successful"))
        .stdout(predicate::str::contains("tok-secret-value").not());

    let written = read_json(&config);
    assert_eq!(
        written,
        serde_json::json!({
            "mcpServers": {
                "ambivo": {
                    "command": "python3",
                    "args": ["-m", "ambivo-mcp-server"],
                    "env": {"AMBIVO_AUTH_TOKEN": "tok-secret-value"}
                }
            }
        })
    );
    Ok(())
}

#[test]
fn configure_preserves_other_servers() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    let config = temp.path().join("claude_desktop_config.json");
    fs::write(
        &config,
        r#"{"other": 1, "mcpServers": {"foo": {"command": "node"}}}"#,
    )?;

    installer(temp.path())
        .args(["configure", "--python", "python3", "--non-interactive"])
        .arg("--config-path")
        .arg(&config)
        .env("AMBIVO_AUTH_TOKEN", "tok-from-env")
        .assert()
        .success();

    let written = read_json(&config);
    assert_eq!(written["other"], 1);
    assert_eq!(written["mcpServers"]["foo"]["command"], "node");
    assert_eq!(
        written["mcpServers"]["ambivo"]["env"]["AMBIVO_AUTH_TOKEN"],
        "tok-from-env"
    );
    Ok(())
}

#[test]
fn configure_without_token_fails_non_interactive() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    let config = temp.path().join("claude_desktop_config.json");

    installer(temp.path())
        .args(["configure", "--python", "python3", "--non-interactive"])
        .arg("--config-path")
        .arg(&config)
        .assert()
        .failure()
        .stderr(predicate::str::contains("AMBIVO_PROMPT_TOKEN"));

    assert!(!config.exists());
    Ok(())
}

#[test]
fn configure_uses_path_from_environment() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    let config = temp.path().join("from-env.json");

    installer(temp.path())
        .args(["configure", "--token", "tok", "--no-detect", "--non-interactive"])
        .env("AMBIVO_CLAUDE_CONFIG", &config)
        .assert()
        .success();

    assert!(config.exists());
    Ok(())
}

#[test]
fn configure_uses_path_from_settings_file() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    let config = temp.path().join("from-settings.json");
    let settings = temp.path().join("installer.yml");
    fs::write(
        &settings,
        format!("claude_config_path: {}\n", config.display()),
    )?;

    installer(temp.path())
        .args(["configure", "--token", "tok", "--python", "python3"])
        .arg("--settings")
        .arg(&settings)
        .arg("--non-interactive")
        .assert()
        .success();

    assert!(config.exists());
    Ok(())
}

#[test]
fn missing_settings_file_is_an_error() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;

    installer(temp.path())
        .args(["version", "--settings"])
        .arg(temp.path().join("missing.yml"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("Settings file not found"));
    Ok(())
}

#[test]
fn invalid_settings_file_is_an_error() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    let settings = temp.path().join("installer.yml");
    fs::write(&settings, "probe_timeout: 3\n")?;

    installer(temp.path())
        .arg("version")
        .arg("--settings")
        .arg(&settings)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to parse settings"));
    Ok(())
}

#[test]
fn completions_for_bash() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    installer(temp.path())
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("ambivo-installer"));
    Ok(())
}

#[cfg(target_os = "linux")]
#[test]
fn get_python_is_unsupported_on_linux() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    installer(temp.path())
        .arg("get-python")
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "Unsupported platform for auto-install",
        ));
    Ok(())
}

#[cfg(target_os = "linux")]
#[test]
fn configure_needs_a_path_on_linux() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    installer(temp.path())
        .args(["configure", "--token", "tok", "--python", "python3"])
        .arg("--non-interactive")
        .assert()
        .failure()
        .stderr(predicate::str::contains("--config-path"));
    Ok(())
}

#[cfg(unix)]
#[test]
fn check_json_reports_extra_candidate() -> Result<(), Box<dyn std::error::Error>> {
    use std::os::unix::fs::PermissionsExt;

    let temp = TempDir::new()?;
    let fake = temp.path().join("fake-python");
    fs::write(&fake, "#!/bin/sh\necho 'Python 3.12.9'\n")?;
    fs::set_permissions(&fake, fs::Permissions::from_mode(0o755))?;
    let settings = temp.path().join("installer.yml");
    fs::write(
        &settings,
        format!("extra_candidates:\n  - {}\n", fake.display()),
    )?;

    let output = installer(temp.path())
        .args(["check", "--json", "--non-interactive"])
        .arg("--settings")
        .arg(&settings)
        .output()?;

    assert!(output.status.success());
    let outcome: serde_json::Value = serde_json::from_slice(&output.stdout)?;
    assert_eq!(outcome["installed"], true);
    assert_eq!(outcome["isValid"], true);
    assert_eq!(outcome["version"], "3.12");
    assert_eq!(outcome["command"], fake.display().to_string());
    Ok(())
}

#[test]
fn check_times_out_with_zero_deadline() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    let settings = temp.path().join("installer.yml");
    fs::write(&settings, "locate_timeout_secs: 0\n")?;

    let output = installer(temp.path())
        .args(["check", "--json", "--non-interactive"])
        .arg("--settings")
        .arg(&settings)
        .output()?;

    assert_eq!(output.status.code(), Some(2));
    let outcome: serde_json::Value = serde_json::from_slice(&output.stdout)?;
    assert_eq!(outcome["installed"], false);
    assert_eq!(outcome["error"], "timeout checking all Python locations");
    Ok(())
}
