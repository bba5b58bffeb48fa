//! Version command implementation.

use crate::error::Result;
use crate::launcher::VERSION;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// Prints the installer version.
#[derive(Debug, Default)]
pub struct VersionCommand;

impl VersionCommand {
    pub fn new() -> Self {
        Self
    }
}

impl Command for VersionCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        ui.message(&format!("ambivo-installer {}", VERSION));
        Ok(CommandResult::success())
    }
}
