//! Per-run installer state.
//!
//! A [`Session`] carries the settings for one invocation and the interpreter
//! the locator resolved, so `install` and `configure` use the same Python
//! that `check` found.

use std::path::PathBuf;

use crate::config::InstallerSettings;
use crate::error::{InstallerError, Result};
use crate::integration::{claude_config_path, write_entry, ConfigureReport, ServerEntry};
use crate::package;
use crate::runtime::{LocatorOutcome, Platform, RuntimeLocator};
use crate::secrets::OutputMasker;
use crate::shell::{CommandRunner, OutputCallback, ShellRunner};

/// State shared by the steps of one installer run.
#[derive(Debug, Clone)]
pub struct Session {
    platform: Platform,
    settings: InstallerSettings,
    resolved_command: Option<String>,
    masker: OutputMasker,
}

impl Session {
    /// Start a session for the current platform.
    pub fn new(settings: InstallerSettings) -> Self {
        Self::for_platform(Platform::current(), settings)
    }

    /// Start a session that uses another platform's lists and paths.
    pub fn for_platform(platform: Platform, settings: InstallerSettings) -> Self {
        Self {
            platform,
            settings,
            resolved_command: None,
            masker: OutputMasker::new(),
        }
    }

    pub fn platform(&self) -> Platform {
        self.platform
    }

    pub fn settings(&self) -> &InstallerSettings {
        &self.settings
    }

    /// Use `command` as the interpreter without probing.
    pub fn set_python(&mut self, command: impl Into<String>) {
        self.resolved_command = Some(command.into());
    }

    /// The interpreter found by the last successful [`Session::locate`], if any.
    pub fn resolved_command(&self) -> Option<&str> {
        self.resolved_command.as_deref()
    }

    /// Interpreter to use: the resolved one, else the platform default.
    pub fn python(&self) -> &str {
        self.resolved_command
            .as_deref()
            .unwrap_or_else(|| self.platform.default_python())
    }

    /// Locate an interpreter using the system shell.
    pub fn locate(&mut self) -> LocatorOutcome {
        self.locate_with(ShellRunner)
    }

    /// Locate an interpreter with `runner`.
    ///
    /// A found command is remembered even when its version is too old, the
    /// same way it is reported. Failed searches leave any earlier result in
    /// place.
    pub fn locate_with<R: CommandRunner>(&mut self, runner: R) -> LocatorOutcome {
        let outcome = RuntimeLocator::with_runner(runner)
            .platform(self.platform)
            .timeouts(self.settings.locator_timeouts())
            .extra_candidates(self.settings.extra_candidates.clone())
            .locate();

        if let Some(command) = &outcome.command {
            tracing::info!("using interpreter {}", command);
            self.resolved_command = Some(command.clone());
        }
        outcome
    }

    /// Install the MCP server package with the session's interpreter.
    pub fn install_package(&self, on_output: Option<OutputCallback>) -> Result<&'static str> {
        package::install_package(self.python(), on_output)
    }

    /// Where the Claude config lives for this session.
    pub fn config_path(&self) -> Result<PathBuf> {
        match &self.settings.claude_config_path {
            Some(path) => Ok(path.clone()),
            None => claude_config_path(self.platform),
        }
    }

    /// Write the server entry with `token` into the Claude config.
    pub fn configure(&mut self, token: &str) -> Result<ConfigureReport> {
        if token.trim().is_empty() {
            return Err(InstallerError::MissingToken);
        }
        self.masker.add_secret(token);

        let path = self.config_path()?;
        let entry = ServerEntry::ambivo(self.python(), token);
        write_entry(&path, &entry)
    }

    /// Hide any token seen by this session from `text`.
    pub fn mask(&self, text: &str) -> String {
        self.masker.mask(text)
    }
}
