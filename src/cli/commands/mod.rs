//! CLI command implementations.
//!
//! Each command implements the [`Command`] trait and is routed to by
//! [`CommandDispatcher`].

pub mod check;
pub mod completions;
pub mod configure;
pub mod dispatcher;
pub mod get_python;
pub mod install;
mod interpreter;
pub mod open;
pub mod restart;
pub mod setup;
pub mod version;

pub use dispatcher::{Command, CommandDispatcher, CommandResult, RUNTIME_MISSING_EXIT_CODE};
