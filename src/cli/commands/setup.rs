//! Setup command implementation.
//!
//! The default command. Walks through the whole install:
//! 1. Find Python 3.11+ (offering the official installer if there is none)
//! 2. `pip install ambivo-mcp-server`
//! 3. Ask for the auth token and write Claude's config

use crate::cli::args::SetupArgs;
use crate::error::Result;
use crate::launcher::download_python_installer;
use crate::package::PACKAGE_NAME;
use crate::session::Session;
use crate::shell::{CommandRunner, ShellRunner};
use crate::ui::{Prompt, PromptType, UserInterface};

use super::check::report_outcome;
use super::configure::{ask_token, configure};
use super::dispatcher::{Command, CommandResult, RUNTIME_MISSING_EXIT_CODE};
use super::install::install;
use super::interpreter::locate;

/// The setup command implementation.
pub struct SetupCommand<R = ShellRunner> {
    session: Session,
    args: SetupArgs,
    runner: R,
}

impl SetupCommand<ShellRunner> {
    /// Create a new setup command.
    pub fn new(session: Session, args: SetupArgs) -> Self {
        Self::with_runner(session, args, ShellRunner)
    }
}

impl<R: CommandRunner> SetupCommand<R> {
    /// Create a setup command that searches for Python through `runner`.
    pub fn with_runner(session: Session, args: SetupArgs, runner: R) -> Self {
        Self {
            session,
            args,
            runner,
        }
    }

    fn confirm(&self, ui: &mut dyn UserInterface, key: &str, question: &str) -> Result<bool> {
        let answer = ui.prompt(&Prompt {
            key: key.to_string(),
            question: question.to_string(),
            prompt_type: PromptType::Confirm,
            default: Some("yes".to_string()),
        })?;
        Ok(answer.as_bool().unwrap_or(false))
    }

    /// Step 1. Returns false when there is no usable interpreter.
    fn ensure_python(&self, session: &mut Session, ui: &mut dyn UserInterface) -> Result<bool> {
        if let Some(python) = &self.args.python {
            session.set_python(python.clone());
            ui.success(&format!("Using {}", python));
            return Ok(true);
        }

        let outcome = locate(session, &self.runner, ui);
        if outcome.is_usable() {
            return Ok(true);
        }

        report_outcome(&outcome, ui);
        if ui.is_interactive()
            && self.confirm(ui, "get_python", "Download the official Python 3.12 installer?")?
        {
            let instructions = download_python_installer(session.platform())?;
            ui.message(instructions);
        }
        Ok(false)
    }
}

impl<R: CommandRunner> Command for SetupCommand<R> {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let mut session = self.session.clone();
        ui.show_header("Ambivo MCP Server setup");

        if !self.ensure_python(&mut session, ui)? {
            return Ok(CommandResult::failure(RUNTIME_MISSING_EXIT_CODE));
        }

        if self.args.skip_install {
            ui.message(&format!("Skipping installation of {}", PACKAGE_NAME));
        } else if self.confirm(
            ui,
            "install",
            &format!("Install {} with {}?", PACKAGE_NAME, session.python()),
        )? {
            if !install(&session, ui) {
                return Ok(CommandResult::failure(1));
            }
        } else {
            ui.message(&format!("Skipped installing {}", PACKAGE_NAME));
        }

        let token = match &self.args.token {
            Some(token) => token.clone(),
            None => ask_token(ui)?,
        };
        configure(&mut session, &token, ui)?;

        Ok(CommandResult::success())
    }
}
