//! Python runtime detection.
//!
//! This module finds a usable Python interpreter on the machine:
//!
//! - [`platform`] - Target platform and its default interpreter name
//! - [`candidates`] - Ordered candidate invocations and discovery commands
//! - [`version`] - Version banner parsing and the minimum-version policy
//! - [`outcome`] - Probe and locate results
//! - [`locator`] - The sequential probe loop with its global deadline

pub mod candidates;
pub mod locator;
pub mod outcome;
pub mod platform;
pub mod version;

pub use locator::{LocatorTimeouts, RuntimeLocator};
pub use outcome::{LocatorOutcome, ProbeResult, EXHAUSTED_ERROR, TIMEOUT_ERROR};
pub use platform::Platform;
pub use version::PythonVersion;
