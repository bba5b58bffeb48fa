//! Settings file discovery and loading.
//!
//! Layers are applied in this order (later overrides earlier):
//! 1. Built-in defaults
//! 2. User settings (`~/.ambivo/installer.yml`)
//! 3. Explicit `--settings` file
//! 4. Environment (`AMBIVO_CLAUDE_CONFIG`)
//!
//! CLI flags are applied on top by the caller.

use std::fs;
use std::path::{Path, PathBuf};

use crate::config::merger::merge_layers;
use crate::config::schema::InstallerSettings;
use crate::error::{InstallerError, Result};

/// Environment variable overriding the Claude config location.
pub const CONFIG_PATH_ENV_VAR: &str = "AMBIVO_CLAUDE_CONFIG";

/// Settings files in merge order.
#[derive(Debug, Clone, Default)]
pub struct SettingsPaths {
    /// User settings: ~/.ambivo/installer.yml
    pub user: Option<PathBuf>,

    /// File given with `--settings`; must exist.
    pub explicit: Option<PathBuf>,
}

impl SettingsPaths {
    /// Discover the user settings file and attach an explicit one.
    pub fn discover(explicit: Option<&Path>) -> Self {
        Self {
            user: Self::find_user_settings(),
            explicit: explicit.map(Path::to_path_buf),
        }
    }

    /// Find user settings at ~/.ambivo/installer.yml
    fn find_user_settings() -> Option<PathBuf> {
        let path = dirs::home_dir()?.join(".ambivo").join("installer.yml");
        if path.exists() {
            Some(path)
        } else {
            None
        }
    }

    /// All settings paths in merge order.
    pub fn all(&self) -> Vec<&PathBuf> {
        self.user.iter().chain(self.explicit.iter()).collect()
    }
}

/// Parse YAML content into settings.
pub fn parse_settings(content: &str, source_path: &Path) -> Result<InstallerSettings> {
    if content.trim().is_empty() {
        return Ok(InstallerSettings::default());
    }
    serde_yaml::from_str(content).map_err(|e| InstallerError::SettingsParse {
        path: source_path.to_path_buf(),
        message: e.to_string(),
    })
}

/// Load a settings file as a raw YAML value (for merging).
///
/// The file is also checked against the schema so errors point at the file
/// that caused them.
pub fn load_settings_value(path: &Path) -> Result<serde_yaml::Value> {
    let content = fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            InstallerError::SettingsNotFound {
                path: path.to_path_buf(),
            }
        } else {
            InstallerError::Io(e)
        }
    })?;

    parse_settings(&content, path)?;
    if content.trim().is_empty() {
        return Ok(serde_yaml::Value::Null);
    }

    serde_yaml::from_str(&content).map_err(|e| InstallerError::SettingsParse {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}

/// Load settings from discovered files and the process environment.
pub fn load_settings(explicit: Option<&Path>) -> Result<InstallerSettings> {
    load_settings_with(&SettingsPaths::discover(explicit), |key: &str| {
        std::env::var(key)
    })
}

/// Load settings from the given files and an explicit env lookup.
pub fn load_settings_with<F>(paths: &SettingsPaths, env_fn: F) -> Result<InstallerSettings>
where
    F: Fn(&str) -> std::result::Result<String, std::env::VarError>,
{
    let mut layers = Vec::new();
    for path in paths.all() {
        tracing::debug!("loading settings from {}", path.display());
        layers.push(load_settings_value(path)?);
    }

    let merged = merge_layers(&layers);
    let source = paths
        .explicit
        .clone()
        .or_else(|| paths.user.clone())
        .unwrap_or_default();
    let mut settings: InstallerSettings =
        serde_yaml::from_value(merged).map_err(|e| InstallerError::SettingsParse {
            path: source,
            message: e.to_string(),
        })?;

    if let Ok(path) = env_fn(CONFIG_PATH_ENV_VAR) {
        if !path.is_empty() {
            settings.claude_config_path = Some(PathBuf::from(path));
        }
    }

    Ok(settings)
}
