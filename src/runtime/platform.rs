//! Target platforms.

use std::fmt;

/// Platform the installer is running on.
///
/// Candidate lists, default interpreter names, config locations and
/// installer downloads all depend on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    MacOS,
    Windows,
    Linux,
}

impl Platform {
    /// Detect the current platform.
    pub fn current() -> Self {
        if cfg!(target_os = "macos") {
            Platform::MacOS
        } else if cfg!(target_os = "windows") {
            Platform::Windows
        } else {
            Platform::Linux
        }
    }

    /// Interpreter name used when no candidate has been resolved.
    pub fn default_python(&self) -> &'static str {
        match self {
            Platform::Windows => "python",
            Platform::MacOS | Platform::Linux => "python3",
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Platform::MacOS => "macos",
            Platform::Windows => "windows",
            Platform::Linux => "linux",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_python_per_platform() {
        assert_eq!(Platform::Windows.default_python(), "python");
        assert_eq!(Platform::MacOS.default_python(), "python3");
        assert_eq!(Platform::Linux.default_python(), "python3");
    }

    #[test]
    fn current_matches_target() {
        let platform = Platform::current();
        if cfg!(target_os = "macos") {
            assert_eq!(platform, Platform::MacOS);
        } else if cfg!(target_os = "windows") {
            assert_eq!(platform, Platform::Windows);
        } else {
            assert_eq!(platform, Platform::Linux);
        }
    }

    #[test]
    fn display_is_lowercase() {
        assert_eq!(Platform::MacOS.to_string(), "macos");
    }
}
