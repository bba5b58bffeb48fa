//! Shell command execution.

use crate::error::{InstallerError, Result};
use std::io::{BufRead, BufReader, Read};
use std::process::{Child, Command, Stdio};
use std::sync::mpsc;
use std::thread;
use std::time::{Duration, Instant};
use wait_timeout::ChildExt;

use super::platform::shell_program;

/// Result of executing a shell command.
#[derive(Debug, Clone)]
pub struct CommandResult {
    /// Exit code (None if killed by signal).
    pub exit_code: Option<i32>,

    /// Standard output.
    pub stdout: String,

    /// Standard error.
    pub stderr: String,

    /// Execution duration.
    pub duration: Duration,

    /// Whether command succeeded (exit code 0).
    pub success: bool,
}

impl CommandResult {
    /// Create a success result.
    pub fn success(stdout: String, stderr: String, duration: Duration) -> Self {
        Self {
            exit_code: Some(0),
            stdout,
            stderr,
            duration,
            success: true,
        }
    }

    /// Create a failure result.
    pub fn failure(
        exit_code: Option<i32>,
        stdout: String,
        stderr: String,
        duration: Duration,
    ) -> Self {
        Self {
            exit_code,
            stdout,
            stderr,
            duration,
            success: false,
        }
    }

    /// Short human-readable reason for a failed command.
    ///
    /// Prefers the last line of stderr, falling back to the exit code.
    pub fn failure_reason(&self) -> String {
        let last_line = self
            .stderr
            .lines()
            .rev()
            .map(str::trim)
            .find(|l| !l.is_empty());
        match (last_line, self.exit_code) {
            (Some(line), Some(code)) => format!("exit code {}: {}", code, line),
            (Some(line), None) => line.to_string(),
            (None, Some(code)) => format!("exit code {}", code),
            (None, None) => "terminated by signal".to_string(),
        }
    }
}

/// Options for command execution.
#[derive(Debug, Clone, Default)]
pub struct CommandOptions {
    /// Kill the command once this much time has passed (None = no limit).
    pub timeout: Option<Duration>,
}

/// Output line from command execution.
#[derive(Debug, Clone)]
pub enum OutputLine {
    Stdout(String),
    Stderr(String),
}

/// Callback for streaming output.
pub type OutputCallback = Box<dyn Fn(OutputLine) + Send>;

/// Something that can run a shell command with a time limit.
///
/// The runtime locator talks to this trait so tests can script probe
/// results without spawning processes.
pub trait CommandRunner {
    /// Run `command` through the shell, capturing output.
    ///
    /// Returns `Err(CommandTimedOut)` if the command is still running when
    /// `timeout` elapses.
    fn run(&self, command: &str, timeout: Duration) -> Result<CommandResult>;
}

impl<R: CommandRunner + ?Sized> CommandRunner for &R {
    fn run(&self, command: &str, timeout: Duration) -> Result<CommandResult> {
        (**self).run(command, timeout)
    }
}

/// [`CommandRunner`] backed by the platform shell.
#[derive(Debug, Clone, Copy, Default)]
pub struct ShellRunner;

impl CommandRunner for ShellRunner {
    fn run(&self, command: &str, timeout: Duration) -> Result<CommandResult> {
        execute_quiet(command, Some(timeout))
    }
}

/// A shell invocation of `command` with stdin closed and both outputs piped.
fn shell_command(command: &str) -> Command {
    let (shell, flag) = shell_program();

    let mut cmd = Command::new(shell);
    cmd.arg(flag);

    // cmd.exe does its own quote parsing, so hand it the string untouched.
    #[cfg(windows)]
    {
        use std::os::windows::process::CommandExt;
        cmd.raw_arg(command);
    }
    #[cfg(not(windows))]
    cmd.arg(command);

    cmd.stdin(Stdio::null());
    cmd.stdout(Stdio::piped());
    cmd.stderr(Stdio::piped());
    cmd
}

fn spawn_failed(command: &str) -> impl FnOnce(std::io::Error) -> InstallerError + '_ {
    move |e| {
        tracing::debug!("spawn of '{}' failed: {}", command, e);
        InstallerError::SpawnFailed {
            command: command.to_string(),
            message: e.to_string(),
        }
    }
}

/// Drain a pipe on a helper thread so the child never blocks on a full buffer.
fn drain<R: Read + Send + 'static>(pipe: Option<R>) -> Option<thread::JoinHandle<String>> {
    pipe.map(|mut pipe| {
        thread::spawn(move || {
            let mut buf = Vec::new();
            let _ = pipe.read_to_end(&mut buf);
            String::from_utf8_lossy(&buf).to_string()
        })
    })
}

fn wait_for(
    child: &mut Child,
    command: &str,
    timeout: Option<Duration>,
) -> Result<std::process::ExitStatus> {
    let status = match timeout {
        Some(limit) => child.wait_timeout(limit)?,
        None => Some(child.wait()?),
    };

    match status {
        Some(status) => Ok(status),
        None => {
            let _ = child.kill();
            let _ = child.wait();
            Err(InstallerError::CommandTimedOut {
                command: command.to_string(),
                timeout: timeout.unwrap_or_default(),
            })
        }
    }
}

/// Execute a shell command, capturing its output.
pub fn execute(command: &str, options: &CommandOptions) -> Result<CommandResult> {
    let start = Instant::now();

    let mut child = shell_command(command).spawn().map_err(spawn_failed(command))?;

    let stdout_handle = drain(child.stdout.take());
    let stderr_handle = drain(child.stderr.take());

    // On timeout the reader threads are left to finish on their own: a
    // grandchild may still hold the pipes open.
    let status = wait_for(&mut child, command, options.timeout)?;

    let duration = start.elapsed();

    let stdout = stdout_handle
        .map(|h| h.join().unwrap_or_default())
        .unwrap_or_default();
    let stderr = stderr_handle
        .map(|h| h.join().unwrap_or_default())
        .unwrap_or_default();

    if status.success() {
        Ok(CommandResult::success(stdout, stderr, duration))
    } else {
        Ok(CommandResult::failure(status.code(), stdout, stderr, duration))
    }
}

/// Execute a command with streaming output.
pub fn execute_streaming(
    command: &str,
    options: &CommandOptions,
    callback: OutputCallback,
) -> Result<CommandResult> {
    let start = Instant::now();

    let mut child = shell_command(command).spawn().map_err(spawn_failed(command))?;

    let (Some(stdout), Some(stderr)) = (child.stdout.take(), child.stderr.take()) else {
        return Err(InstallerError::SpawnFailed {
            command: command.to_string(),
            message: "output pipes were not captured".to_string(),
        });
    };

    let (tx, rx) = mpsc::channel();
    let tx_stdout = tx.clone();
    let tx_stderr = tx;

    let stdout_handle = thread::spawn(move || {
        let reader = BufReader::new(stdout);
        let mut output = String::new();
        for line in reader.lines().map_while(std::result::Result::ok) {
            output.push_str(&line);
            output.push('\n');
            let _ = tx_stdout.send(OutputLine::Stdout(line));
        }
        output
    });

    let stderr_handle = thread::spawn(move || {
        let reader = BufReader::new(stderr);
        let mut output = String::new();
        for line in reader.lines().map_while(std::result::Result::ok) {
            output.push_str(&line);
            output.push('\n');
            let _ = tx_stderr.send(OutputLine::Stderr(line));
        }
        output
    });

    for line in rx {
        callback(line);
    }

    let stdout_output = stdout_handle.join().unwrap_or_default();
    let stderr_output = stderr_handle.join().unwrap_or_default();

    let status = wait_for(&mut child, command, options.timeout)?;

    let duration = start.elapsed();

    if status.success() {
        Ok(CommandResult::success(
            stdout_output,
            stderr_output,
            duration,
        ))
    } else {
        Ok(CommandResult::failure(
            status.code(),
            stdout_output,
            stderr_output,
            duration,
        ))
    }
}

/// Execute a command and collect output without streaming.
pub fn execute_quiet(command: &str, timeout: Option<Duration>) -> Result<CommandResult> {
    execute(command, &CommandOptions { timeout })
}
