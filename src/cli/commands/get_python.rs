//! Get-python command implementation.
//!
//! Opens the download of the pinned Python installer for this platform.

use crate::error::Result;
use crate::launcher::download_python_installer;
use crate::runtime::Platform;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The get-python command implementation.
pub struct GetPythonCommand {
    platform: Platform,
}

impl GetPythonCommand {
    /// Create a new get-python command for `platform`.
    pub fn new(platform: Platform) -> Self {
        Self { platform }
    }
}

impl Command for GetPythonCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let instructions = download_python_installer(self.platform)?;
        ui.success("Opened the Python download");
        ui.message(instructions);
        Ok(CommandResult::success())
    }
}
