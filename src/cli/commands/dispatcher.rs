//! Command dispatching.
//!
//! This module provides the core command infrastructure:
//! - [`Command`] trait for implementing commands
//! - [`CommandResult`] for uniform result reporting
//! - [`CommandDispatcher`] for routing CLI subcommands

use crate::cli::args::{Cli, Commands, SetupArgs};
use crate::config::InstallerSettings;
use crate::error::Result;
use crate::runtime::Platform;
use crate::session::Session;
use crate::ui::UserInterface;

/// Exit code when no usable Python 3.11+ was found.
pub const RUNTIME_MISSING_EXIT_CODE: i32 = 2;

/// Trait for command implementations.
///
/// Each CLI subcommand implements this trait to provide its execution logic.
pub trait Command {
    /// Execute the command, reporting through `ui`.
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult>;
}

/// Result of command execution.
#[derive(Debug)]
pub struct CommandResult {
    /// Whether the command succeeded.
    pub success: bool,

    /// Exit code to use (0 for success, non-zero for failure).
    pub exit_code: i32,
}

impl CommandResult {
    /// Create a successful result.
    pub fn success() -> Self {
        Self {
            success: true,
            exit_code: 0,
        }
    }

    /// Create a failure result.
    pub fn failure(exit_code: i32) -> Self {
        Self {
            success: false,
            exit_code,
        }
    }
}

/// Dispatches CLI commands to their implementations.
pub struct CommandDispatcher {
    settings: InstallerSettings,
    platform: Platform,
}

impl CommandDispatcher {
    /// Create a dispatcher for the current platform.
    pub fn new(settings: InstallerSettings) -> Self {
        Self {
            settings,
            platform: Platform::current(),
        }
    }

    /// Dispatch as if running on `platform`.
    pub fn with_platform(mut self, platform: Platform) -> Self {
        self.platform = platform;
        self
    }

    /// Get the effective settings.
    pub fn settings(&self) -> &InstallerSettings {
        &self.settings
    }

    fn session(&self) -> Session {
        Session::for_platform(self.platform, self.settings.clone())
    }

    /// Dispatch and execute a command.
    pub fn dispatch(&self, cli: &Cli, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        match &cli.command {
            Some(Commands::Setup(args)) => {
                super::setup::SetupCommand::new(self.session(), args.clone()).execute(ui)
            }
            Some(Commands::Check(args)) => {
                super::check::CheckCommand::new(self.session(), args.clone()).execute(ui)
            }
            Some(Commands::Install(args)) => {
                super::install::InstallCommand::new(self.session(), args.clone()).execute(ui)
            }
            Some(Commands::Configure(args)) => {
                super::configure::ConfigureCommand::new(self.session(), args.clone()).execute(ui)
            }
            Some(Commands::Version) => super::version::VersionCommand::new().execute(ui),
            Some(Commands::Restart(args)) => {
                super::restart::RestartCommand::new(args.clone()).execute(ui)
            }
            Some(Commands::Open(args)) => super::open::OpenCommand::new(args.clone()).execute(ui),
            Some(Commands::GetPython) => {
                super::get_python::GetPythonCommand::new(self.platform).execute(ui)
            }
            Some(Commands::Completions(args)) => {
                super::completions::CompletionsCommand::new(args.clone()).execute(ui)
            }
            None => super::setup::SetupCommand::new(self.session(), SetupArgs::default())
                .execute(ui),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::MockUI;
    use clap::Parser;

    #[test]
    fn command_result_success() {
        let result = CommandResult::success();
        assert!(result.success);
        assert_eq!(result.exit_code, 0);
    }

    #[test]
    fn command_result_failure() {
        let result = CommandResult::failure(RUNTIME_MISSING_EXIT_CODE);
        assert!(!result.success);
        assert_eq!(result.exit_code, 2);
    }

    #[test]
    fn dispatches_version() {
        let cli = Cli::parse_from(["ambivo-installer", "version"]);
        let dispatcher = CommandDispatcher::new(InstallerSettings::default());
        let mut ui = MockUI::new();

        let result = dispatcher.dispatch(&cli, &mut ui).unwrap();

        assert!(result.success);
        assert!(ui.has_message(env!("CARGO_PKG_VERSION")));
    }

    #[test]
    fn dispatches_get_python_for_platform() {
        let cli = Cli::parse_from(["ambivo-installer", "get-python"]);
        let dispatcher =
            CommandDispatcher::new(InstallerSettings::default()).with_platform(Platform::Linux);
        let mut ui = MockUI::new();

        let err = dispatcher.dispatch(&cli, &mut ui).unwrap_err();

        assert_eq!(err.to_string(), "Unsupported platform for auto-install");
    }
}
