//! Interpreter version parsing and the minimum-version policy.

use regex::Regex;
use std::fmt;
use std::sync::LazyLock;

/// Matches the banner printed by `python --version`.
static VERSION_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"Python (\d+)\.(\d+)\.(\d+)").unwrap());

/// Oldest supported release: 3.11.
pub const MIN_SUPPORTED: (u32, u32) = (3, 11);

/// A `major.minor.patch` interpreter version.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct PythonVersion {
    pub major: u32,
    pub minor: u32,
    pub patch: u32,
}

impl PythonVersion {
    /// Extract the version from probe output such as `"Python 3.12.7\n"`.
    ///
    /// Returns `None` when the output has no `Python X.Y.Z` banner.
    pub fn parse(output: &str) -> Option<Self> {
        let caps = VERSION_REGEX.captures(output)?;
        Some(Self {
            major: caps[1].parse().ok()?,
            minor: caps[2].parse().ok()?,
            patch: caps[3].parse().ok()?,
        })
    }

    /// Whether this release meets the minimum-version policy.
    ///
    /// Only 3.x is accepted; a future 4.x would need re-validation.
    pub fn is_supported(&self) -> bool {
        let (major, min_minor) = MIN_SUPPORTED;
        self.major == major && self.minor >= min_minor
    }

    /// The `major.minor` form reported to callers.
    pub fn short(&self) -> String {
        format!("{}.{}", self.major, self.minor)
    }
}

impl fmt::Display for PythonVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}
