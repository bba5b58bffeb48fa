//! Platform-specific shell selection.

/// The shell program and the flag that passes it a command string.
///
/// Probe commands rely on the shell for globbing (`ls /usr/bin/python*`),
/// quoted paths and `%VAR%` expansion on Windows.
pub fn shell_program() -> (String, &'static str) {
    if cfg!(target_os = "windows") {
        let comspec = std::env::var("COMSPEC").unwrap_or_else(|_| "cmd.exe".to_string());
        (comspec, "/C")
    } else {
        ("/bin/sh".to_string(), "-c")
    }
}

/// Check if running in a CI environment.
///
/// Used to auto-detect CI and force non-interactive mode in `main()`.
/// Checks common CI environment variables: `CI`, `GITHUB_ACTIONS`,
/// `GITLAB_CI`, `CIRCLECI`, `TRAVIS`, `JENKINS_URL`.
pub fn is_ci() -> bool {
    ["CI", "GITHUB_ACTIONS", "GITLAB_CI", "CIRCLECI", "TRAVIS", "JENKINS_URL"]
        .iter()
        .any(|var| std::env::var(var).is_ok())
}
