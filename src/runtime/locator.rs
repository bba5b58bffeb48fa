//! Sequential interpreter probing.
//!
//! The locator runs the platform's discovery commands, builds the ordered
//! candidate list, then probes candidates one at a time with
//! `<candidate> --version`. The first candidate that prints a parseable
//! version wins and nothing after it is run.
//!
//! A global deadline bounds the probe loop. Each probe's wait is capped to
//! the time left, and the deadline is checked again when a probe returns,
//! so a probe that settles after the deadline never overrides the timeout.

use std::time::{Duration, Instant};

use crate::shell::{CommandRunner, ShellRunner};

use super::candidates::{build_candidates, diagnostic_commands};
use super::outcome::{LocatorOutcome, ProbeResult};
use super::platform::Platform;
use super::version::PythonVersion;

/// Time limits applied while locating an interpreter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LocatorTimeouts {
    /// Limit for each discovery command.
    pub diagnostic: Duration,
    /// Limit for each `--version` probe.
    pub probe: Duration,
    /// Limit for the whole probe loop.
    pub overall: Duration,
}

impl Default for LocatorTimeouts {
    fn default() -> Self {
        Self {
            diagnostic: Duration::from_secs(2),
            probe: Duration::from_secs(3),
            overall: Duration::from_secs(15),
        }
    }
}

/// Finds a Python interpreter by probing well-known locations.
///
/// # Example
///
/// ```no_run
/// use ambivo_installer::runtime::RuntimeLocator;
///
/// let outcome = RuntimeLocator::new().locate();
/// if let Some(command) = &outcome.command {
///     println!("found {} ({:?})", command, outcome.version_string);
/// }
/// ```
pub struct RuntimeLocator<R = ShellRunner> {
    runner: R,
    platform: Platform,
    timeouts: LocatorTimeouts,
    extra_candidates: Vec<String>,
}

impl RuntimeLocator<ShellRunner> {
    /// Create a locator for the current platform using the system shell.
    pub fn new() -> Self {
        Self::with_runner(ShellRunner)
    }
}

impl Default for RuntimeLocator<ShellRunner> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: CommandRunner> RuntimeLocator<R> {
    /// Create a locator that runs commands through `runner`.
    pub fn with_runner(runner: R) -> Self {
        Self {
            runner,
            platform: Platform::current(),
            timeouts: LocatorTimeouts::default(),
            extra_candidates: Vec::new(),
        }
    }

    /// Locate for another platform's candidate lists.
    pub fn platform(mut self, platform: Platform) -> Self {
        self.platform = platform;
        self
    }

    /// Override the time limits.
    pub fn timeouts(mut self, timeouts: LocatorTimeouts) -> Self {
        self.timeouts = timeouts;
        self
    }

    /// Probe these candidates before the platform's fixed list.
    pub fn extra_candidates(mut self, candidates: Vec<String>) -> Self {
        self.extra_candidates = candidates;
        self
    }

    /// The full ordered candidate list for a given diagnostic log.
    pub fn candidates(&self, diagnostics: &[String]) -> Vec<String> {
        build_candidates(self.platform, &self.extra_candidates, diagnostics)
    }

    /// Run discovery and probe candidates until one answers.
    pub fn locate(&self) -> LocatorOutcome {
        let mut debug_info = self.run_diagnostics();
        let candidates = self.candidates(&debug_info);

        tracing::debug!(
            "probing {} candidates on {} (deadline {:?})",
            candidates.len(),
            self.platform,
            self.timeouts.overall
        );

        let deadline = Instant::now() + self.timeouts.overall;

        for candidate in &candidates {
            let remaining = deadline.saturating_duration_since(Instant::now());
            if remaining.is_zero() {
                tracing::debug!("deadline passed before probing '{}'", candidate);
                return LocatorOutcome::timed_out(debug_info);
            }

            let result = self.probe(candidate, remaining.min(self.timeouts.probe));

            if Instant::now() >= deadline {
                tracing::debug!("deadline passed while probing '{}'", candidate);
                return LocatorOutcome::timed_out(debug_info);
            }

            debug_info.push(result.log_entry(candidate));

            if let ProbeResult::Success { version, raw } = result {
                tracing::info!("resolved Python {} at '{}'", version, candidate);
                return LocatorOutcome::found(candidate, version, &raw, debug_info);
            }
        }

        tracing::debug!("no candidate produced a version");
        LocatorOutcome::exhausted(candidates, debug_info)
    }

    /// Run each discovery command, keeping the non-empty output of those
    /// that succeed. Failures add nothing.
    fn run_diagnostics(&self) -> Vec<String> {
        let mut log = Vec::new();
        for command in diagnostic_commands(self.platform) {
            match self.runner.run(command, self.timeouts.diagnostic) {
                Ok(result) if result.success && !result.stdout.trim().is_empty() => {
                    log.push(format!("{}: {}", command, result.stdout.trim()));
                }
                Ok(_) => {}
                Err(e) => tracing::debug!("diagnostic '{}' failed: {}", command, e),
            }
        }
        log
    }

    /// Run `<candidate> --version` once.
    pub fn probe(&self, candidate: &str, timeout: Duration) -> ProbeResult {
        let command = format!("{} --version", candidate);
        tracing::debug!("probing: {}", command);

        let result = match self.runner.run(&command, timeout) {
            Ok(result) => result,
            Err(e) => {
                return ProbeResult::Failure {
                    reason: e.to_string(),
                    output: None,
                }
            }
        };

        if !result.success {
            return ProbeResult::Failure {
                reason: result.failure_reason(),
                output: None,
            };
        }

        // Only stdout counts; Python 2 prints its banner on stderr.
        let output = result.stdout.trim();

        match PythonVersion::parse(output) {
            Some(version) => ProbeResult::Success {
                version,
                raw: output.to_string(),
            },
            None => ProbeResult::Failure {
                reason: "no version in output".to_string(),
                output: Some(output.to_string()),
            },
        }
    }
}
