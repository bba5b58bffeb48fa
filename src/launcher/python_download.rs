//! Pinned Python installer download.
//!
//! The download is left to the browser; nothing is verified or run here.

use crate::error::{InstallerError, Result};
use crate::runtime::Platform;

use super::browser::open_url;

/// Python release the installer links point at.
pub const PYTHON_INSTALLER_VERSION: &str = "3.12.7";

const MACOS_INSTALLER_URL: &str =
    "https://www.python.org/ftp/python/3.12.7/python-3.12.7-macos11.pkg";
const WINDOWS_INSTALLER_URL: &str =
    "https://www.python.org/ftp/python/3.12.7/python-3.12.7-amd64.exe";

const NEXT_STEPS: &str = "Python 3.12 installer downloaded. Please run it, then run \"ambivo-installer check\" again.\n\nIMPORTANT: After installing Python, you may need to restart this installer or your terminal for the new Python version to be detected.";

/// Official installer URL for `platform`.
pub fn python_installer_url(platform: Platform) -> Result<&'static str> {
    match platform {
        Platform::MacOS => Ok(MACOS_INSTALLER_URL),
        Platform::Windows => Ok(WINDOWS_INSTALLER_URL),
        Platform::Linux => Err(InstallerError::UnsupportedPlatform {
            operation: "auto-install".to_string(),
        }),
    }
}

/// Open the installer download for `platform` and return what to do next.
pub fn download_python_installer(platform: Platform) -> Result<&'static str> {
    let url = python_installer_url(platform)?;
    open_url(url)?;
    Ok(NEXT_STEPS)
}
