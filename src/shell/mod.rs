//! Shell command execution.

pub mod command;
pub mod platform;

pub use command::{
    execute, execute_quiet, execute_streaming, CommandOptions, CommandResult, CommandRunner,
    OutputCallback, OutputLine, ShellRunner,
};
pub use platform::{is_ci, shell_program};
