//! Check command implementation.
//!
//! The `ambivo-installer check` command looks for a Python 3.11+ interpreter
//! and reports what it found.

use crate::cli::args::CheckArgs;
use crate::error::{InstallerError, Result};
use crate::runtime::LocatorOutcome;
use crate::session::Session;
use crate::shell::{CommandRunner, ShellRunner};
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult, RUNTIME_MISSING_EXIT_CODE};
use super::interpreter::locate;

/// The check command implementation.
pub struct CheckCommand<R = ShellRunner> {
    session: Session,
    args: CheckArgs,
    runner: R,
}

impl CheckCommand<ShellRunner> {
    /// Create a new check command.
    pub fn new(session: Session, args: CheckArgs) -> Self {
        Self::with_runner(session, args, ShellRunner)
    }
}

impl<R: CommandRunner> CheckCommand<R> {
    /// Create a check command that probes through `runner`.
    pub fn with_runner(session: Session, args: CheckArgs, runner: R) -> Self {
        Self {
            session,
            args,
            runner,
        }
    }
}

impl<R: CommandRunner> Command for CheckCommand<R> {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let mut session = self.session.clone();

        let outcome = if self.args.json {
            session.locate_with(&self.runner)
        } else {
            ui.show_header("Python runtime");
            locate(&mut session, &self.runner, ui)
        };

        if self.args.json {
            let json = serde_json::to_string_pretty(&outcome)
                .map_err(|e| InstallerError::Other(e.into()))?;
            ui.message(&json);
        } else {
            report_outcome(&outcome, ui);
        }

        if outcome.is_usable() {
            Ok(CommandResult::success())
        } else {
            Ok(CommandResult::failure(RUNTIME_MISSING_EXIT_CODE))
        }
    }
}

/// Explain a search result to the user.
pub(super) fn report_outcome(outcome: &LocatorOutcome, ui: &mut dyn UserInterface) {
    if ui.output_mode().shows_command_output() {
        for line in &outcome.debug_info {
            ui.message(&format!("  {}", line));
        }
    }

    match (&outcome.command, &outcome.version) {
        (Some(command), Some(version)) if outcome.is_usable() => {
            ui.success(&format!("Python {} is ready: {}", version, command));
        }
        (Some(command), Some(version)) => {
            ui.warning(&format!(
                "Found Python {} at {}, but Python 3.11 or newer is required",
                version, command
            ));
            ui.show_hint("Run `ambivo-installer get-python` to download Python 3.12");
        }
        _ => {
            if let Some(error) = &outcome.error {
                ui.error(&format!("Python not found: {}", error));
            }
            if let Some(tried) = &outcome.tried_commands {
                ui.message(&format!("Tried {} locations", tried.len()));
            }
            ui.show_hint("Run `ambivo-installer get-python` to download Python 3.12");
            ui.show_hint("Already installed? Pass --python <path> or add it to extra_candidates");
        }
    }
}
