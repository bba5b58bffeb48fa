//! Interactive terminal UI.
//!
//! Results go to stdout, warnings and errors to stderr, the same split the
//! non-interactive UI uses.

use console::Term;
use std::io::Write;

use crate::error::Result;

use super::{
    prompt_user, should_use_colors, InstallerTheme, NonInteractiveUI, OutputMode,
    ProgressSpinner, Prompt, PromptResult, SpinnerHandle, UserInterface,
};

/// Terminal UI with colors, spinners and dialoguer prompts.
pub struct TerminalUI {
    out: Term,
    err: Term,
    theme: InstallerTheme,
    mode: OutputMode,
}

impl TerminalUI {
    pub fn new(mode: OutputMode) -> Self {
        let theme = if should_use_colors() {
            InstallerTheme::new()
        } else {
            InstallerTheme::plain()
        };

        Self {
            out: Term::stdout(),
            err: Term::stderr(),
            theme,
            mode,
        }
    }
}

impl UserInterface for TerminalUI {
    fn output_mode(&self) -> OutputMode {
        self.mode
    }

    fn message(&mut self, msg: &str) {
        writeln!(self.out, "{}", msg).ok();
    }

    fn success(&mut self, msg: &str) {
        writeln!(self.out, "{}", self.theme.format_success(msg)).ok();
    }

    fn warning(&mut self, msg: &str) {
        writeln!(self.err, "{}", self.theme.format_warning(msg)).ok();
    }

    fn error(&mut self, msg: &str) {
        writeln!(self.err, "{}", self.theme.format_error(msg)).ok();
    }

    fn prompt(&mut self, prompt: &Prompt) -> Result<PromptResult> {
        prompt_user(prompt, &self.out)
    }

    fn start_spinner(&mut self, message: &str) -> Box<dyn SpinnerHandle> {
        if self.mode.shows_progress() {
            Box::new(ProgressSpinner::new(message, self.theme.clone()))
        } else {
            Box::new(ResultLine {
                out: self.out.clone(),
                err: self.err.clone(),
                theme: self.theme.clone(),
            })
        }
    }

    fn show_header(&mut self, title: &str) {
        if self.mode.shows_progress() {
            writeln!(self.out, "\n{}\n", self.theme.format_header(title)).ok();
        }
    }

    fn show_hint(&mut self, hint: &str) {
        if self.mode.shows_progress() {
            writeln!(self.out, "  {}", self.theme.hint.apply_to(hint)).ok();
        }
    }

    fn is_interactive(&self) -> bool {
        self.out.is_term()
    }
}

/// Quiet-mode spinner: nothing while running, one themed line at the end.
struct ResultLine {
    out: Term,
    err: Term,
    theme: InstallerTheme,
}

impl SpinnerHandle for ResultLine {
    fn set_message(&mut self, _msg: &str) {}

    fn finish_success(&mut self, msg: &str) {
        writeln!(self.out, "{}", self.theme.format_success(msg)).ok();
    }

    fn finish_error(&mut self, msg: &str) {
        writeln!(self.err, "{}", self.theme.format_error(msg)).ok();
    }
}

/// Pick the terminal UI when prompting is allowed and stdout is a terminal.
pub fn create_ui(interactive: bool, mode: OutputMode) -> Box<dyn UserInterface> {
    if interactive && Term::stdout().is_term() {
        Box::new(TerminalUI::new(mode))
    } else {
        Box::new(NonInteractiveUI::new(mode))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn terminal_ui_keeps_mode() {
        let ui = TerminalUI::new(OutputMode::Quiet);
        assert_eq!(ui.output_mode(), OutputMode::Quiet);
    }

    #[test]
    fn quiet_spinner_has_no_progress_bar() {
        let mut ui = TerminalUI::new(OutputMode::Quiet);
        let spinner = ui.start_spinner("Installing ambivo-mcp-server...");
        assert!(spinner.progress_bar().is_none());
    }

    #[test]
    fn create_ui_without_prompts_is_non_interactive() {
        let ui = create_ui(false, OutputMode::Verbose);
        assert!(!ui.is_interactive());
        assert_eq!(ui.output_mode(), OutputMode::Verbose);
    }
}
