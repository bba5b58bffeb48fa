//! Operations that hand off to the OS: opening URLs, fetching the Python
//! installer and relaunching this executable.

mod browser;
mod python_download;
mod relaunch;

pub use browser::open_url;
pub use python_download::{
    download_python_installer, python_installer_url, PYTHON_INSTALLER_VERSION,
};
pub use relaunch::relaunch;

/// Current version of the installer.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn version_is_set() {
        assert!(!VERSION.is_empty());
        assert_eq!(VERSION.split('.').count(), 3);
    }
}
