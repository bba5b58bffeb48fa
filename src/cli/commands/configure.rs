//! Configure command implementation.
//!
//! The `ambivo-installer configure` command writes the `ambivo` server entry
//! into Claude Desktop's config.

use crate::cli::args::ConfigureArgs;
use crate::error::Result;
use crate::session::Session;
use crate::shell::{CommandRunner, ShellRunner};
use crate::ui::{Prompt, PromptType, UserInterface};

use super::dispatcher::{Command, CommandResult};
use super::interpreter::resolve_interpreter;

/// The configure command implementation.
pub struct ConfigureCommand<R = ShellRunner> {
    session: Session,
    args: ConfigureArgs,
    runner: R,
}

impl ConfigureCommand<ShellRunner> {
    /// Create a new configure command.
    pub fn new(session: Session, args: ConfigureArgs) -> Self {
        Self::with_runner(session, args, ShellRunner)
    }
}

impl<R: CommandRunner> ConfigureCommand<R> {
    /// Create a configure command that searches for Python through `runner`.
    pub fn with_runner(session: Session, args: ConfigureArgs, runner: R) -> Self {
        Self {
            session,
            args,
            runner,
        }
    }
}

impl<R: CommandRunner> Command for ConfigureCommand<R> {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let mut session = self.session.clone();
        resolve_interpreter(&mut session, &self.args.interpreter, &self.runner, ui);

        let token = match &self.args.token {
            Some(token) => token.clone(),
            None => ask_token(ui)?,
        };

        configure(&mut session, &token, ui)?;
        Ok(CommandResult::success())
    }
}

/// Prompt for the auth token without echoing it.
pub(super) fn ask_token(ui: &mut dyn UserInterface) -> Result<String> {
    let answer = ui.prompt(&Prompt {
        key: "token".to_string(),
        question: "Ambivo auth token".to_string(),
        prompt_type: PromptType::Password,
        default: None,
    })?;
    Ok(answer.as_string())
}

/// Write the config entry and report where it went.
pub(super) fn configure(
    session: &mut Session,
    token: &str,
    ui: &mut dyn UserInterface,
) -> Result<()> {
    let report = session.configure(token)?;

    for warning in &report.warnings {
        ui.warning(&session.mask(warning));
    }
    ui.success(report.message());
    ui.message(&format!("  Config:  {}", report.path.display()));
    ui.message(&format!("  Python:  {}", session.python()));
    ui.message(&format!(
        "  Token:   {}",
        crate::secrets::token_preview(token)
    ));
    ui.show_hint("Restart Claude Desktop to load the Ambivo server");
    Ok(())
}
