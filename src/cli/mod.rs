//! Command-line interface.
//!
//! # Architecture
//!
//! - [`args`] - Argument definitions using clap derive macros
//! - [`commands`] - Command implementations

pub mod args;
pub mod commands;

pub use args::{
    CheckArgs, Cli, Commands, CompletionsArgs, ConfigureArgs, InstallArgs, InterpreterArgs,
    OpenArgs, RestartArgs, SetupArgs,
};
pub use commands::{Command, CommandDispatcher, CommandResult, RUNTIME_MISSING_EXIT_CODE};
