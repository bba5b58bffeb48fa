//! Non-interactive UI for CI/headless environments.

use std::collections::HashMap;

use crate::error::{InstallerError, Result};

use super::{parse_bool, OutputMode, Prompt, PromptResult, PromptType, SpinnerHandle, UserInterface};

/// Prefix of environment variables that answer prompts by key.
pub const PROMPT_ENV_PREFIX: &str = "AMBIVO_PROMPT_";

/// UI implementation for non-interactive mode.
///
/// Prompts are answered from `AMBIVO_PROMPT_<KEY>` variables, then from the
/// prompt's default. A prompt with neither is an error.
pub struct NonInteractiveUI {
    mode: OutputMode,
    env_overrides: HashMap<String, String>,
}

impl NonInteractiveUI {
    /// Create a new non-interactive UI.
    pub fn new(mode: OutputMode) -> Self {
        let env_overrides: HashMap<String, String> = std::env::vars()
            .filter(|(k, _)| k.starts_with(PROMPT_ENV_PREFIX))
            .collect();

        Self {
            mode,
            env_overrides,
        }
    }

    /// Create with explicit overrides (for testing).
    pub fn with_overrides(mode: OutputMode, overrides: HashMap<String, String>) -> Self {
        Self {
            mode,
            env_overrides: overrides,
        }
    }

    fn answer(prompt: &Prompt, value: &str) -> Result<PromptResult> {
        if prompt.prompt_type != PromptType::Confirm {
            return Ok(PromptResult::String(value.to_string()));
        }
        parse_bool(value)
            .map(PromptResult::Bool)
            .ok_or_else(|| InstallerError::PromptFailed {
                message: format!("'{}' is not a yes/no answer for '{}'", value, prompt.key),
            })
    }
}

impl UserInterface for NonInteractiveUI {
    fn output_mode(&self) -> OutputMode {
        self.mode
    }

    fn message(&mut self, msg: &str) {
        println!("{}", msg);
    }

    fn success(&mut self, msg: &str) {
        println!("✓ {}", msg);
    }

    fn warning(&mut self, msg: &str) {
        eprintln!("⚠ {}", msg);
    }

    fn error(&mut self, msg: &str) {
        eprintln!("✗ {}", msg);
    }

    fn prompt(&mut self, prompt: &Prompt) -> Result<PromptResult> {
        let env_key = format!("{}{}", PROMPT_ENV_PREFIX, prompt.key.to_uppercase());
        if let Some(value) = self.env_overrides.get(&env_key) {
            return Self::answer(prompt, value);
        }

        if let Some(default) = &prompt.default {
            return Self::answer(prompt, default);
        }

        Err(InstallerError::PromptFailed {
            message: format!(
                "Cannot prompt for '{}' in non-interactive mode (set {})",
                prompt.key, env_key
            ),
        })
    }

    fn start_spinner(&mut self, message: &str) -> Box<dyn SpinnerHandle> {
        if self.mode.shows_progress() {
            println!("  {}", message);
        }
        Box::new(NoopSpinner)
    }

    fn show_header(&mut self, title: &str) {
        if self.mode.shows_progress() {
            println!("\n{}\n", title);
        }
    }

    fn show_hint(&mut self, hint: &str) {
        if self.mode.shows_progress() {
            println!("  {}", hint);
        }
    }

    fn is_interactive(&self) -> bool {
        false
    }
}

/// Spinner stand-in that prints only the final line.
struct NoopSpinner;

impl SpinnerHandle for NoopSpinner {
    fn set_message(&mut self, _msg: &str) {}

    fn finish_success(&mut self, msg: &str) {
        println!("✓ {}", msg);
    }

    fn finish_error(&mut self, msg: &str) {
        eprintln!("✗ {}", msg);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn prompt(key: &str, prompt_type: PromptType, default: Option<&str>) -> Prompt {
        Prompt {
            key: key.to_string(),
            question: "Question?".to_string(),
            prompt_type,
            default: default.map(String::from),
        }
    }

    #[test]
    fn non_interactive_is_not_interactive() {
        let ui = NonInteractiveUI::with_overrides(OutputMode::Normal, HashMap::new());
        assert!(!ui.is_interactive());
    }

    #[test]
    fn prompt_uses_default() {
        let mut ui = NonInteractiveUI::with_overrides(OutputMode::Normal, HashMap::new());

        let result = ui
            .prompt(&prompt("python", PromptType::Input, Some("python3")))
            .unwrap();

        assert_eq!(result, PromptResult::String("python3".to_string()));
    }

    #[test]
    fn prompt_fails_without_default() {
        let mut ui = NonInteractiveUI::with_overrides(OutputMode::Normal, HashMap::new());

        let err = ui
            .prompt(&prompt("token", PromptType::Password, None))
            .unwrap_err();

        assert!(err.to_string().contains("AMBIVO_PROMPT_TOKEN"));
    }

    #[test]
    fn prompt_uses_env_override() {
        let overrides = HashMap::from([("AMBIVO_PROMPT_TOKEN".to_string(), "tok-1".to_string())]);
        let mut ui = NonInteractiveUI::with_overrides(OutputMode::Normal, overrides);

        let result = ui
            .prompt(&prompt("token", PromptType::Password, None))
            .unwrap();

        assert_eq!(result.as_string(), "tok-1");
    }

    #[test]
    fn confirm_override_is_parsed() {
        let overrides = HashMap::from([("AMBIVO_PROMPT_INSTALL".to_string(), "no".to_string())]);
        let mut ui = NonInteractiveUI::with_overrides(OutputMode::Normal, overrides);

        let result = ui
            .prompt(&prompt("install", PromptType::Confirm, Some("yes")))
            .unwrap();

        assert_eq!(result, PromptResult::Bool(false));
    }

    #[test]
    fn confirm_rejects_garbage() {
        let overrides = HashMap::from([("AMBIVO_PROMPT_INSTALL".to_string(), "perhaps".to_string())]);
        let mut ui = NonInteractiveUI::with_overrides(OutputMode::Normal, overrides);

        let result = ui.prompt(&prompt("install", PromptType::Confirm, None));

        assert!(matches!(result, Err(InstallerError::PromptFailed { .. })));
    }
}
