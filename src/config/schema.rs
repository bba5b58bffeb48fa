//! Installer settings schema.
//!
//! Maps to `~/.ambivo/installer.yml` (or the file given with `--settings`).
//! Every field is optional in the file; missing fields take the defaults
//! below.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

use crate::runtime::LocatorTimeouts;

/// User-tunable installer settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct InstallerSettings {
    /// Explicit location of `claude_desktop_config.json`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub claude_config_path: Option<PathBuf>,

    /// Interpreter commands probed before the built-in candidates.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub extra_candidates: Vec<String>,

    /// Limit for the whole interpreter search.
    pub locate_timeout_secs: u64,

    /// Limit for each `--version` probe.
    pub probe_timeout_secs: u64,

    /// Limit for each discovery command.
    pub diagnostic_timeout_secs: u64,
}

impl Default for InstallerSettings {
    fn default() -> Self {
        Self {
            claude_config_path: None,
            extra_candidates: Vec::new(),
            locate_timeout_secs: 15,
            probe_timeout_secs: 3,
            diagnostic_timeout_secs: 2,
        }
    }
}

impl InstallerSettings {
    /// Time limits for the runtime locator.
    pub fn locator_timeouts(&self) -> LocatorTimeouts {
        LocatorTimeouts {
            diagnostic: Duration::from_secs(self.diagnostic_timeout_secs),
            probe: Duration::from_secs(self.probe_timeout_secs),
            overall: Duration::from_secs(self.locate_timeout_secs),
        }
    }
}
