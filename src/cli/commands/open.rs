//! Open command implementation.

use crate::cli::args::OpenArgs;
use crate::error::Result;
use crate::launcher::open_url;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// Opens a URL with the system handler.
pub struct OpenCommand {
    args: OpenArgs,
}

impl OpenCommand {
    /// Create a new open command.
    pub fn new(args: OpenArgs) -> Self {
        Self { args }
    }
}

impl Command for OpenCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        open_url(&self.args.url)?;
        ui.success(&format!("Opened {}", self.args.url));
        Ok(CommandResult::success())
    }
}
