//! Progress spinners.

use indicatif::{ProgressBar, ProgressStyle};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use crate::shell::{OutputCallback, OutputLine};

use super::theme::InstallerTheme;
use super::SpinnerHandle;

/// A progress spinner for long-running operations.
pub struct ProgressSpinner {
    bar: ProgressBar,
    theme: InstallerTheme,
}

impl ProgressSpinner {
    /// Create a new spinner with a message.
    pub fn new(message: &str, theme: InstallerTheme) -> Self {
        let bar = ProgressBar::new_spinner();
        bar.set_style(
            ProgressStyle::default_spinner()
                .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏")
                .template("{spinner:.cyan} {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_spinner()),
        );
        bar.set_message(message.to_string());
        bar.enable_steady_tick(Duration::from_millis(80));

        Self { bar, theme }
    }

    fn finish_with(&mut self, line: String) {
        if let Ok(style) = ProgressStyle::default_spinner().template("{msg}") {
            self.bar.set_style(style);
        }
        self.bar.finish_with_message(line);
    }
}

impl SpinnerHandle for ProgressSpinner {
    fn set_message(&mut self, msg: &str) {
        self.bar.set_message(msg.to_string());
    }

    fn finish_success(&mut self, msg: &str) {
        let line = self.theme.format_success(msg);
        self.finish_with(line);
    }

    fn finish_error(&mut self, msg: &str) {
        let line = self.theme.format_error(msg);
        self.finish_with(line);
    }

    fn progress_bar(&self) -> Option<ProgressBar> {
        Some(self.bar.clone())
    }
}

/// Create an output callback that shows the last `max_lines` output lines
/// under the spinner's base message.
pub fn live_output_callback(bar: ProgressBar, base_message: String, max_lines: usize) -> OutputCallback {
    let buffer: Arc<Mutex<VecDeque<String>>> = Arc::new(Mutex::new(VecDeque::new()));
    let theme = InstallerTheme::new();

    Box::new(move |line: OutputLine| {
        let text = match &line {
            OutputLine::Stdout(s) | OutputLine::Stderr(s) => s.trim_end(),
        };
        if text.is_empty() {
            return;
        }

        let display_text = if text.chars().count() > 72 {
            let head: String = text.chars().take(69).collect();
            format!("{}...", head)
        } else {
            text.to_string()
        };

        let Ok(mut buf) = buffer.lock() else {
            return;
        };
        buf.push_back(display_text);
        while buf.len() > max_lines {
            buf.pop_front();
        }

        let mut msg = base_message.clone();
        for line in buf.iter() {
            msg.push_str("\n  ");
            msg.push_str(&theme.dim.apply_to(format!("» {}", line)).to_string());
        }

        bar.set_message(msg);
    })
}
