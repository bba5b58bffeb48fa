//! Location of the Claude desktop config file.

use std::path::PathBuf;

use crate::error::{InstallerError, Result};
use crate::runtime::Platform;

/// File name of the Claude desktop config.
pub const CONFIG_FILE_NAME: &str = "claude_desktop_config.json";

/// Resolve the Claude config path for the current platform and environment.
pub fn claude_config_path(platform: Platform) -> Result<PathBuf> {
    claude_config_path_with(platform, dirs::home_dir(), |key: &str| std::env::var(key))
}

/// Resolve the Claude config path with explicit home and env lookups.
///
/// - macOS: `~/Library/Application Support/Claude/claude_desktop_config.json`
/// - Windows: `%APPDATA%\Claude\claude_desktop_config.json`
/// - anything else has no known location and is an error
pub fn claude_config_path_with<F>(
    platform: Platform,
    home: Option<PathBuf>,
    env_fn: F,
) -> Result<PathBuf>
where
    F: Fn(&str) -> std::result::Result<String, std::env::VarError>,
{
    match platform {
        Platform::MacOS => {
            let home = home.ok_or_else(|| InstallerError::MissingEnvVar {
                name: "HOME".to_string(),
            })?;
            Ok(home
                .join("Library")
                .join("Application Support")
                .join("Claude")
                .join(CONFIG_FILE_NAME))
        }
        Platform::Windows => {
            let app_data = env_fn("APPDATA")
                .ok()
                .filter(|v| !v.is_empty())
                .ok_or_else(|| InstallerError::MissingEnvVar {
                    name: "APPDATA".to_string(),
                })?;
            Ok(PathBuf::from(app_data).join("Claude").join(CONFIG_FILE_NAME))
        }
        Platform::Linux => Err(InstallerError::UnsupportedPlatform {
            operation: "locating the Claude config (pass --config-path)".to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env::VarError;

    fn no_env(_: &str) -> std::result::Result<String, VarError> {
        Err(VarError::NotPresent)
    }

    #[test]
    fn macos_path_is_under_application_support() {
        let path =
            claude_config_path_with(Platform::MacOS, Some(PathBuf::from("/Users/ada")), no_env)
                .unwrap();
        assert_eq!(
            path,
            PathBuf::from("/Users/ada/Library/Application Support/Claude/claude_desktop_config.json")
        );
    }

    #[test]
    fn windows_path_uses_appdata() {
        let path = claude_config_path_with(Platform::Windows, None, |key| {
            if key == "APPDATA" {
                Ok("C:/Users/ada/AppData/Roaming".to_string())
            } else {
                Err(VarError::NotPresent)
            }
        })
        .unwrap();
        assert_eq!(
            path,
            PathBuf::from("C:/Users/ada/AppData/Roaming")
                .join("Claude")
                .join(CONFIG_FILE_NAME)
        );
    }

    #[test]
    fn windows_without_appdata_fails() {
        let err = claude_config_path_with(Platform::Windows, None, no_env).unwrap_err();
        assert!(matches!(err, InstallerError::MissingEnvVar { ref name } if name == "APPDATA"));
    }

    #[test]
    fn linux_has_no_defined_location() {
        let err =
            claude_config_path_with(Platform::Linux, Some(PathBuf::from("/home/ada")), no_env)
                .unwrap_err();
        assert!(matches!(err, InstallerError::UnsupportedPlatform { .. }));
    }

    #[test]
    fn macos_without_home_fails() {
        let err = claude_config_path_with(Platform::MacOS, None, no_env).unwrap_err();
        assert!(matches!(err, InstallerError::MissingEnvVar { .. }));
    }
}
