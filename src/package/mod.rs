//! Installing the MCP server package with pip.
//!
//! The install is a single `<python> -m pip install ambivo-mcp-server`
//! run. pip is treated as opaque: it either exits 0 or it doesn't, and
//! nothing is retried.

use crate::error::{InstallerError, Result};
use crate::shell::{execute_streaming, CommandOptions, OutputCallback, OutputLine};

/// Name of the package that provides the MCP server.
pub const PACKAGE_NAME: &str = "ambivo-mcp-server";

/// Message returned after a successful install.
pub const INSTALL_SUCCESS: &str = "Installation successful";

/// The pip command line for `python`.
pub fn install_command(python: &str) -> String {
    format!("{} -m pip install {}", python, PACKAGE_NAME)
}

/// Install the package with `python`, with no time limit.
///
/// Output lines are passed to `on_output` as they arrive. Failures carry
/// the interpreter that was used so the user can tell which Python pip
/// belonged to.
pub fn install_package(python: &str, on_output: Option<OutputCallback>) -> Result<&'static str> {
    let command = install_command(python);
    tracing::info!("installing {}: {}", PACKAGE_NAME, command);

    let callback: OutputCallback = match on_output {
        Some(callback) => callback,
        None => Box::new(|line: OutputLine| tracing::debug!("pip: {:?}", line)),
    };

    let result = execute_streaming(&command, &CommandOptions::default(), callback).map_err(|e| {
        InstallerError::InstallFailed {
            python: python.to_string(),
            message: e.to_string(),
        }
    })?;

    if result.success {
        Ok(INSTALL_SUCCESS)
    } else {
        Err(InstallerError::InstallFailed {
            python: python.to_string(),
            message: format!("Command failed: {} ({})", command, result.failure_reason()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn install_command_uses_module_invocation() {
        assert_eq!(
            install_command("py -3"),
            "py -3 -m pip install ambivo-mcp-server"
        );
    }

    #[cfg(unix)]
    #[test]
    fn successful_install_returns_confirmation() {
        // `echo` stands in for an interpreter that exits 0.
        let message = install_package("echo", None).unwrap();
        assert_eq!(message, "Installation successful");
    }

    #[cfg(unix)]
    #[test]
    fn failed_install_names_the_interpreter() {
        let err = install_package("definitely-not-a-python-binary", None).unwrap_err();

        let msg = err.to_string();
        assert!(msg.starts_with("Installation failed with definitely-not-a-python-binary:"));
        assert!(msg.contains("exit code 127"));
    }

    #[cfg(unix)]
    #[test]
    fn output_is_streamed_to_callback() {
        use std::sync::{Arc, Mutex};

        let lines = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&lines);
        let callback: OutputCallback = Box::new(move |line| {
            if let OutputLine::Stdout(text) = line {
                sink.lock().unwrap().push(text);
            }
        });

        install_package("echo", Some(callback)).unwrap();

        let captured = lines.lock().unwrap();
        assert_eq!(captured.as_slice(), ["-m pip install ambivo-mcp-server"]);
    }
}
