//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

use crate::integration::TOKEN_ENV_VAR;

/// Installs the Ambivo MCP server and registers it with Claude Desktop.
#[derive(Debug, Parser)]
#[command(name = "ambivo-installer")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Installer settings file (in addition to ~/.ambivo/installer.yml)
    #[arg(long, global = true, value_name = "PATH")]
    pub settings: Option<PathBuf>,

    /// Path to claude_desktop_config.json (overrides the platform default)
    #[arg(long, global = true, value_name = "PATH")]
    pub config_path: Option<PathBuf>,

    /// Show verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Minimal output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    /// Never prompt; answers come from flags, AMBIVO_PROMPT_* or defaults
    #[arg(long, global = true)]
    pub non_interactive: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Guided setup: check Python, install the server, configure Claude (default)
    Setup(SetupArgs),

    /// Look for a Python 3.11+ interpreter
    Check(CheckArgs),

    /// Install the ambivo-mcp-server package with pip
    Install(InstallArgs),

    /// Add the Ambivo server to Claude's config
    Configure(ConfigureArgs),

    /// Print the installer version
    Version,

    /// Restart the installer, e.g. after installing Python
    Restart(RestartArgs),

    /// Open a URL with the system handler
    Open(OpenArgs),

    /// Download the official Python 3.12 installer
    GetPython,

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// How the Python interpreter is chosen.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct InterpreterArgs {
    /// Python command to use instead of searching for one
    #[arg(long, value_name = "CMD")]
    pub python: Option<String>,

    /// Skip the search and use the platform default (python3, or python on Windows)
    #[arg(long, conflicts_with = "python")]
    pub no_detect: bool,
}

/// Arguments for the `check` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct CheckArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `install` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct InstallArgs {
    #[command(flatten)]
    pub interpreter: InterpreterArgs,
}

/// Arguments for the `configure` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct ConfigureArgs {
    /// Ambivo auth token (prompted for when omitted)
    #[arg(long, env = TOKEN_ENV_VAR, hide_env_values = true)]
    pub token: Option<String>,

    #[command(flatten)]
    pub interpreter: InterpreterArgs,
}

/// Arguments for the `setup` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct SetupArgs {
    /// Ambivo auth token (prompted for when omitted)
    #[arg(long, env = TOKEN_ENV_VAR, hide_env_values = true)]
    pub token: Option<String>,

    /// Python command to use instead of searching for one
    #[arg(long, value_name = "CMD")]
    pub python: Option<String>,

    /// Configure Claude without running pip
    #[arg(long)]
    pub skip_install: bool,
}

/// Arguments for the `restart` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct RestartArgs {
    /// Arguments for the new process
    #[arg(last = true)]
    pub args: Vec<String>,
}

/// Arguments for the `open` command.
#[derive(Debug, Clone, clap::Args)]
pub struct OpenArgs {
    /// URL to open
    pub url: String,
}

/// Arguments for the `completions` command.
#[derive(Debug, Clone, clap::Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn no_subcommand_means_setup() {
        let cli = Cli::try_parse_from(["ambivo-installer"]).unwrap();
        assert!(cli.command.is_none());
    }

    #[test]
    fn global_flags_after_subcommand() {
        let cli = Cli::try_parse_from([
            "ambivo-installer",
            "configure",
            "--token",
            "tok",
            "--config-path",
            "/tmp/claude.json",
            "--non-interactive",
        ])
        .unwrap();

        assert!(cli.non_interactive);
        assert_eq!(cli.config_path, Some(PathBuf::from("/tmp/claude.json")));
        match cli.command {
            Some(Commands::Configure(args)) => assert_eq!(args.token.as_deref(), Some("tok")),
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn python_and_no_detect_conflict() {
        let result = Cli::try_parse_from([
            "ambivo-installer",
            "install",
            "--python",
            "python3.12",
            "--no-detect",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn restart_collects_trailing_args() {
        let cli =
            Cli::try_parse_from(["ambivo-installer", "restart", "--", "check", "--json"]).unwrap();
        match cli.command {
            Some(Commands::Restart(args)) => assert_eq!(args.args, vec!["check", "--json"]),
            other => panic!("unexpected command: {:?}", other),
        }
    }
}
