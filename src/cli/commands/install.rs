//! Install command implementation.
//!
//! The `ambivo-installer install` command runs
//! `<python> -m pip install ambivo-mcp-server`.

use crate::cli::args::InstallArgs;
use crate::error::Result;
use crate::package::PACKAGE_NAME;
use crate::session::Session;
use crate::shell::{CommandRunner, ShellRunner};
use crate::ui::{live_output_callback, UserInterface};

use super::dispatcher::{Command, CommandResult};
use super::interpreter::resolve_interpreter;

/// The install command implementation.
pub struct InstallCommand<R = ShellRunner> {
    session: Session,
    args: InstallArgs,
    runner: R,
}

impl InstallCommand<ShellRunner> {
    /// Create a new install command.
    pub fn new(session: Session, args: InstallArgs) -> Self {
        Self::with_runner(session, args, ShellRunner)
    }
}

impl<R: CommandRunner> InstallCommand<R> {
    /// Create an install command that searches for Python through `runner`.
    pub fn with_runner(session: Session, args: InstallArgs, runner: R) -> Self {
        Self {
            session,
            args,
            runner,
        }
    }
}

impl<R: CommandRunner> Command for InstallCommand<R> {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let mut session = self.session.clone();
        resolve_interpreter(&mut session, &self.args.interpreter, &self.runner, ui);

        if install(&session, ui) {
            Ok(CommandResult::success())
        } else {
            Ok(CommandResult::failure(1))
        }
    }
}

/// Run pip behind a spinner. Returns whether it succeeded.
pub(super) fn install(session: &Session, ui: &mut dyn UserInterface) -> bool {
    let base = format!("Installing {} with {}...", PACKAGE_NAME, session.python());
    let tail = if ui.output_mode().shows_command_output() { 10 } else { 3 };
    let mut spinner = ui.start_spinner(&base);
    let callback = spinner
        .progress_bar()
        .map(|bar| live_output_callback(bar, base.clone(), tail));

    match session.install_package(callback) {
        Ok(message) => {
            spinner.finish_success(message);
            true
        }
        Err(e) => {
            spinner.finish_error(&session.mask(&e.to_string()));
            false
        }
    }
}
