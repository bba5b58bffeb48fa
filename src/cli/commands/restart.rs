//! Restart command implementation.
//!
//! Starts the installer again so a freshly installed Python shows up on
//! `PATH`.

use crate::cli::args::RestartArgs;
use crate::error::Result;
use crate::launcher::relaunch;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The restart command implementation.
pub struct RestartCommand {
    args: RestartArgs,
}

impl RestartCommand {
    /// Create a new restart command.
    pub fn new(args: RestartArgs) -> Self {
        Self { args }
    }
}

impl Command for RestartCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        ui.message("Restarting installer...");
        let never = relaunch(&self.args.args)?;
        match never {}
    }
}
