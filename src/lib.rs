//! Ambivo installer - sets up the Ambivo MCP server for Claude Desktop.
//!
//! The installer finds a Python 3.11+ interpreter, installs the
//! `ambivo-mcp-server` package with pip, and registers the server in
//! Claude Desktop's `claude_desktop_config.json`.
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`config`] - Installer settings loading and layering
//! - [`error`] - Error types and result aliases
//! - [`integration`] - Claude config location and merging
//! - [`launcher`] - Opening URLs, the Python download and relaunching
//! - [`package`] - pip installation of the server package
//! - [`runtime`] - Python interpreter discovery
//! - [`secrets`] - Token masking
//! - [`session`] - Per-run state (settings and resolved interpreter)
//! - [`shell`] - Shell command execution
//! - [`ui`] - Interactive prompts, spinners, and terminal output
//!
//! # Example
//!
//! ```
//! use ambivo_installer::integration::{merge_entry, render, ServerEntry};
//!
//! let entry = ServerEntry::ambivo("python3", "my-token");
//! let merged = merge_entry(Some(r#"{"theme": "dark"}"#), &entry);
//! let json = render(&merged.document).unwrap();
//! assert!(json.contains("\"ambivo\""));
//! assert!(json.contains("\"theme\": \"dark\""));
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod integration;
pub mod launcher;
pub mod package;
pub mod runtime;
pub mod secrets;
pub mod session;
pub mod shell;
pub mod ui;

pub use error::{InstallerError, Result};
