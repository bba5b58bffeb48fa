//! Claude desktop integration.
//!
//! Writes the `mcpServers.ambivo` entry into Claude's JSON config:
//!
//! - [`paths`] - Per-platform location of `claude_desktop_config.json`
//! - [`entry`] - The server entry and its fixed keys
//! - [`merger`] - Read-merge-write of the config document
//!
//! # Example
//!
//! ```
//! use ambivo_installer::integration::{merge_entry, ServerEntry};
//!
//! let existing = r#"{"other": 1}"#;
//! let merged = merge_entry(Some(existing), &ServerEntry::ambivo("python3", "token"));
//! assert_eq!(merged.document["other"], 1);
//! assert_eq!(merged.document["mcpServers"]["ambivo"]["command"], "python3");
//! ```

pub mod entry;
pub mod merger;
pub mod paths;

pub use entry::{ServerEntry, SERVERS_KEY, SERVER_KEY, TOKEN_ENV_VAR};
pub use merger::{
    merge_entry, render, write_entry, ConfigureReport, MergedDocument, CONFIGURE_SUCCESS,
};
pub use paths::{claude_config_path, claude_config_path_with, CONFIG_FILE_NAME};
