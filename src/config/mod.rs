//! Installer settings.
//!
//! - Schema definitions in [`schema`]
//! - File discovery and loading in [`loader`]
//! - Deep merging in [`merger`]
//!
//! # Example
//!
//! ```
//! use ambivo_installer::config::{load_settings_with, SettingsPaths};
//! use tempfile::TempDir;
//! use std::fs;
//!
//! let temp = TempDir::new().unwrap();
//! let path = temp.path().join("installer.yml");
//! fs::write(&path, "locate_timeout_secs: 30").unwrap();
//!
//! let paths = SettingsPaths { user: None, explicit: Some(path) };
//! let settings = load_settings_with(&paths, |_: &str| Err(std::env::VarError::NotPresent)).unwrap();
//! assert_eq!(settings.locate_timeout_secs, 30);
//! assert_eq!(settings.probe_timeout_secs, 3);
//! ```

pub mod loader;
pub mod merger;
pub mod schema;

pub use loader::{
    load_settings, load_settings_value, load_settings_with, parse_settings, SettingsPaths,
    CONFIG_PATH_ENV_VAR,
};
pub use merger::{deep_merge, merge_layers};
pub use schema::InstallerSettings;
