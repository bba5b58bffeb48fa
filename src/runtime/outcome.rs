//! Results of probing and locating an interpreter.

use serde::Serialize;

use super::version::PythonVersion;

/// Error reported when the global deadline passes before a candidate answers.
pub const TIMEOUT_ERROR: &str = "timeout checking all Python locations";

/// Error reported when every candidate has been probed without success.
pub const EXHAUSTED_ERROR: &str = "no valid Python found in any location";

/// The result of probing a single candidate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProbeResult {
    /// The candidate ran and printed a parseable version.
    Success {
        version: PythonVersion,
        /// Trimmed probe output, e.g. `"Python 3.12.7"`.
        raw: String,
    },
    /// The candidate could not be used.
    Failure {
        reason: String,
        /// Output of a candidate that ran but printed no version banner.
        output: Option<String>,
    },
}

impl ProbeResult {
    /// The diagnostic log line for this probe.
    pub fn log_entry(&self, candidate: &str) -> String {
        match self {
            ProbeResult::Success { raw, .. } => format!("SUCCESS: {} -> {}", candidate, raw),
            ProbeResult::Failure {
                output: Some(output),
                ..
            } => format!("INVALID VERSION: {} -> {}", candidate, output),
            ProbeResult::Failure { reason, .. } => format!("FAILED: {} ({})", candidate, reason),
        }
    }
}

/// Outcome of one `locate` call.
///
/// Serialised in camelCase so `check --json` speaks the same field names as
/// the installer's UI contract.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LocatorOutcome {
    pub installed: bool,
    /// `major.minor` of the resolved interpreter.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version_string: Option<String>,
    /// Advisory: whether the version meets the minimum supported release.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_valid: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub command: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    pub debug_info: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tried_commands: Option<Vec<String>>,
}

impl LocatorOutcome {
    /// A candidate answered with a parseable version.
    pub fn found(command: &str, version: PythonVersion, raw: &str, debug_info: Vec<String>) -> Self {
        Self {
            installed: true,
            version: Some(version.short()),
            version_string: Some(raw.to_string()),
            is_valid: Some(version.is_supported()),
            command: Some(command.to_string()),
            error: None,
            debug_info,
            tried_commands: None,
        }
    }

    /// Every candidate failed.
    pub fn exhausted(tried: Vec<String>, debug_info: Vec<String>) -> Self {
        Self {
            error: Some(EXHAUSTED_ERROR.to_string()),
            debug_info,
            tried_commands: Some(tried),
            ..Default::default()
        }
    }

    /// The global deadline passed first.
    pub fn timed_out(debug_info: Vec<String>) -> Self {
        Self {
            error: Some(TIMEOUT_ERROR.to_string()),
            debug_info,
            ..Default::default()
        }
    }

    /// Whether the located interpreter is usable for the install.
    pub fn is_usable(&self) -> bool {
        self.installed && self.is_valid == Some(true)
    }

    /// Whether the locate gave up because of the global deadline.
    pub fn is_timeout(&self) -> bool {
        self.error.as_deref() == Some(TIMEOUT_ERROR)
    }
}
