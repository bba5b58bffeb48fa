//! Merging the server entry into the Claude config document.
//!
//! # Merge Rules
//!
//! - A missing file starts from an empty document
//! - A file that is not a JSON object is discarded (with a warning)
//! - `mcpServers` is created when absent and replaced (with a warning) when
//!   it is not an object
//! - `mcpServers.ambivo` is overwritten in full; every other key, at any
//!   level, is left as it was and in its original position

use serde_json::{Map, Value};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{InstallerError, Result};

use super::entry::{ServerEntry, SERVERS_KEY, SERVER_KEY};

/// Message returned after a successful write.
pub const CONFIGURE_SUCCESS: &str = "Configuration successful";

/// Result of merging the entry into an existing document.
#[derive(Debug, Clone, PartialEq)]
pub struct MergedDocument {
    /// The full document to write back.
    pub document: Map<String, Value>,
    /// Content that had to be thrown away to make the merge possible.
    pub warnings: Vec<String>,
}

/// What `configure` did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigureReport {
    /// File that was written.
    pub path: PathBuf,
    /// Content that was discarded on the way.
    pub warnings: Vec<String>,
}

impl ConfigureReport {
    /// The confirmation shown to the user.
    pub fn message(&self) -> &'static str {
        CONFIGURE_SUCCESS
    }
}

/// Merge `entry` into the existing file contents (`None` if the file is absent).
pub fn merge_entry(existing: Option<&str>, entry: &ServerEntry) -> MergedDocument {
    let mut warnings = Vec::new();

    let mut document = match existing {
        None => Map::new(),
        Some(text) => match serde_json::from_str::<Value>(text) {
            Ok(Value::Object(map)) => map,
            Ok(_) => {
                warnings.push("existing config is not a JSON object; starting fresh".to_string());
                Map::new()
            }
            Err(e) => {
                warnings.push(format!("existing config is not valid JSON ({}); starting fresh", e));
                Map::new()
            }
        },
    };

    let servers = document
        .entry(SERVERS_KEY)
        .or_insert_with(|| Value::Object(Map::new()));
    if !servers.is_object() {
        warnings.push(format!("'{}' was not an object; replacing it", SERVERS_KEY));
        *servers = Value::Object(Map::new());
    }
    if let Value::Object(servers) = servers {
        servers.insert(SERVER_KEY.to_string(), entry.to_value());
    }

    MergedDocument { document, warnings }
}

/// Serialize a document the way it is written to disk (2-space indent).
pub fn render(document: &Map<String, Value>) -> Result<String> {
    serde_json::to_string_pretty(document).map_err(|e| InstallerError::Other(e.into()))
}

/// Read, merge and write the Claude config at `path`.
///
/// Parent directories are created as needed. The file is replaced in place,
/// not written atomically.
pub fn write_entry(path: &Path, entry: &ServerEntry) -> Result<ConfigureReport> {
    let write_error = |e: std::io::Error| InstallerError::ConfigWrite {
        path: path.to_path_buf(),
        message: e.to_string(),
    };

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(write_error)?;
        }
    }

    let existing = read_existing(path)?;
    let merged = merge_entry(existing.as_deref(), entry);

    for warning in &merged.warnings {
        tracing::warn!("{}: {}", path.display(), warning);
    }

    let rendered = render(&merged.document)?;
    fs::write(path, rendered).map_err(write_error)?;

    tracing::info!("wrote '{}' entry to {}", SERVER_KEY, path.display());

    Ok(ConfigureReport {
        path: path.to_path_buf(),
        warnings: merged.warnings,
    })
}

/// Current file contents, or `None` if there is no file.
///
/// Bytes that are not UTF-8 count as corrupt content, not as a read error.
fn read_existing(path: &Path) -> Result<Option<String>> {
    match fs::read(path) {
        Ok(bytes) => Ok(Some(String::from_utf8_lossy(&bytes).into_owned())),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
        Err(e) => Err(InstallerError::ConfigRead {
            path: path.to_path_buf(),
            message: e.to_string(),
        }),
    }
}
