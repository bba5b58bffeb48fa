//! Error types for installer operations.
//!
//! This module defines [`InstallerError`], the primary error type used
//! throughout the installer, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Probe failures are recovered inside the runtime locator and only show up
//!   in its diagnostic log as `ProbeResult::Failure`
//! - Install and config failures are terminal for their operation and are
//!   shown to the user verbatim
//! - Use `anyhow::Error` (via `InstallerError::Other`) for unexpected errors

use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

/// Core error type for installer operations.
#[derive(Debug, Error)]
pub enum InstallerError {
    /// Shell command could not be started.
    #[error("Failed to start '{command}': {message}")]
    SpawnFailed { command: String, message: String },

    /// Shell command ran past its time limit and was killed.
    #[error("Command timed out after {timeout:?}: {command}")]
    CommandTimedOut { command: String, timeout: Duration },

    /// The package manager reported a failure.
    #[error("Installation failed with {python}: {message}")]
    InstallFailed { python: String, message: String },

    /// The operation has no defined behavior on this platform.
    #[error("Unsupported platform for {operation}")]
    UnsupportedPlatform { operation: String },

    /// A required environment variable is not set.
    #[error("Environment variable {name} is not set")]
    MissingEnvVar { name: String },

    /// The Claude config file could not be read.
    #[error("Failed to read {path}: {message}")]
    ConfigRead { path: PathBuf, message: String },

    /// The Claude config file or its directory could not be written.
    #[error("Failed to write {path}: {message}")]
    ConfigWrite { path: PathBuf, message: String },

    /// Installer settings file not found at an explicitly given location.
    #[error("Settings file not found: {path}")]
    SettingsNotFound { path: PathBuf },

    /// Installer settings file could not be parsed.
    #[error("Failed to parse settings at {path}: {message}")]
    SettingsParse { path: PathBuf, message: String },

    /// No auth token was supplied for configuration.
    #[error("An auth token is required to configure Claude")]
    MissingToken,

    /// A prompt could not be answered.
    #[error("Prompt failed: {message}")]
    PromptFailed { message: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for installer operations.
pub type Result<T> = std::result::Result<T, InstallerError>;
