//! Candidate interpreter invocations and discovery commands.
//!
//! Every list here is fixed and ordered: candidates run newest preferred
//! release first, so the first interpreter that answers is also the best
//! one installed at a well-known location.

use super::platform::Platform;

const MACOS_DIAGNOSTICS: &[&str] = &[
    "which python3",
    "which python",
    "ls /usr/bin/python*",
    "ls /usr/local/bin/python*",
    "ls /opt/homebrew/bin/python*",
    "ls /Library/Frameworks/Python.framework/Versions/*/bin/python*",
];

const WINDOWS_DIAGNOSTICS: &[&str] = &["where python", "where python3", "py -0"];

const LINUX_DIAGNOSTICS: &[&str] = &[
    "which python3",
    "which python",
    "ls /usr/bin/python3*",
    "ls /usr/local/bin/python3*",
];

const MACOS_CANDIDATES: &[&str] = &[
    "/Library/Frameworks/Python.framework/Versions/3.12/bin/python3",
    "/opt/homebrew/bin/python3.12",
    "/usr/local/bin/python3.12",
    "/Library/Frameworks/Python.framework/Versions/3.11/bin/python3",
    "/opt/homebrew/bin/python3.11",
    "/usr/local/bin/python3.11",
    "/Library/Frameworks/Python.framework/Versions/Current/bin/python3",
    "/opt/homebrew/bin/python3",
    "/usr/local/bin/python3",
    "/usr/bin/python3",
    "python3",
    "python",
];

const WINDOWS_CANDIDATES: &[&str] = &[
    "python",
    "python3",
    "py -3",
    "py -3.12",
    "py -3.11",
    r#""C:\Program Files\Python312\python.exe""#,
    r#""C:\Program Files\Python311\python.exe""#,
    r#""C:\Users\%USERNAME%\AppData\Local\Programs\Python\Python312\python.exe""#,
    r#""C:\Users\%USERNAME%\AppData\Local\Programs\Python\Python311\python.exe""#,
];

const LINUX_CANDIDATES: &[&str] = &["python3.12", "python3.11", "python3", "python"];

/// Discovery commands whose output is recorded in the diagnostic log.
pub fn diagnostic_commands(platform: Platform) -> &'static [&'static str] {
    match platform {
        Platform::MacOS => MACOS_DIAGNOSTICS,
        Platform::Windows => WINDOWS_DIAGNOSTICS,
        Platform::Linux => LINUX_DIAGNOSTICS,
    }
}

/// Fixed interpreter candidates for a platform, newest first.
pub fn fixed_candidates(platform: Platform) -> &'static [&'static str] {
    match platform {
        Platform::MacOS => MACOS_CANDIDATES,
        Platform::Windows => WINDOWS_CANDIDATES,
        Platform::Linux => LINUX_CANDIDATES,
    }
}

/// Build the full probe order.
///
/// `extra` entries come first, then the fixed list, then any interpreter
/// paths surfaced by the diagnostic log. Duplicates keep their first
/// position.
pub fn build_candidates(platform: Platform, extra: &[String], diagnostics: &[String]) -> Vec<String> {
    let mut candidates: Vec<String> = Vec::new();
    let mut push = |candidate: String| {
        if !candidate.is_empty() && !candidates.contains(&candidate) {
            candidates.push(candidate);
        }
    };

    for candidate in extra {
        push(candidate.trim().to_string());
    }
    for candidate in fixed_candidates(platform) {
        push(candidate.to_string());
    }
    for path in discovered_paths(platform, diagnostics) {
        push(path);
    }

    candidates
}

/// Interpreter paths found in diagnostic log entries (`"<cmd>: <output>"`).
fn discovered_paths(platform: Platform, diagnostics: &[String]) -> Vec<String> {
    diagnostics
        .iter()
        .filter_map(|entry| entry.split_once(": ").map(|(_, output)| output))
        .flat_map(str::lines)
        .map(str::trim)
        .filter(|line| looks_like_interpreter(line))
        .map(|line| quote_if_needed(platform, line))
        .collect()
}

fn looks_like_interpreter(line: &str) -> bool {
    if !line.contains('/') && !line.contains('\\') {
        return false;
    }
    let file_name = line.rsplit(['/', '\\']).next().unwrap_or_default();
    let file_name = file_name.to_ascii_lowercase();
    file_name.starts_with("python")
        && !file_name.ends_with("-config")
        && (file_name.starts_with("python3") || file_name == "python.exe")
}

fn quote_if_needed(platform: Platform, path: &str) -> String {
    if path.contains(' ') {
        match platform {
            Platform::Windows => format!("\"{}\"", path),
            Platform::MacOS | Platform::Linux => format!("'{}'", path),
        }
    } else {
        path.to_string()
    }
}
