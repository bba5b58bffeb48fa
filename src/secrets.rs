//! Output masking for the auth token.
//!
//! The token ends up in the Claude config file and nowhere else: anything
//! shown to the user or logged goes through an [`OutputMasker`] first.

use std::collections::HashSet;

/// Masks secret values in user-facing text.
///
/// # Example
///
/// ```
/// use ambivo_installer::secrets::OutputMasker;
///
/// let mut masker = OutputMasker::new();
/// masker.add_secret("tok-123456");
///
/// let output = masker.mask("AMBIVO_AUTH_TOKEN=tok-123456");
/// assert_eq!(output, "AMBIVO_AUTH_TOKEN=[REDACTED]");
/// ```
#[derive(Debug, Clone)]
pub struct OutputMasker {
    secrets: HashSet<String>,
    mask: String,
}

impl OutputMasker {
    /// Create a new masker with the default `[REDACTED]` mask.
    pub fn new() -> Self {
        Self {
            secrets: HashSet::new(),
            mask: "[REDACTED]".to_string(),
        }
    }

    /// Register a secret value to be masked. Empty strings are ignored.
    pub fn add_secret(&mut self, value: impl Into<String>) {
        let value = value.into();
        if !value.is_empty() {
            self.secrets.insert(value);
        }
    }

    /// Mask any secret values in the given string.
    ///
    /// Longer secrets are replaced first so one secret that contains
    /// another is masked whole.
    pub fn mask(&self, input: &str) -> String {
        let mut secrets: Vec<&String> = self.secrets.iter().collect();
        secrets.sort_by_key(|s| std::cmp::Reverse(s.len()));

        let mut result = input.to_string();
        for secret in secrets {
            result = result.replace(secret.as_str(), &self.mask);
        }
        result
    }

    /// Get the number of registered secrets.
    pub fn secret_count(&self) -> usize {
        self.secrets.len()
    }
}

impl Default for OutputMasker {
    fn default() -> Self {
        Self::new()
    }
}

/// Short preview of a token for confirmation messages, e.g. `"tok-…(16 chars)"`.
pub fn token_preview(token: &str) -> String {
    let count = token.chars().count();
    if count <= 8 {
        return format!("…({} chars)", count);
    }
    let head: String = token.chars().take(4).collect();
    format!("{}…({} chars)", head, count)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn masks_every_occurrence() {
        let mut masker = OutputMasker::new();
        masker.add_secret("s3cret");

        let output = masker.mask("s3cret and s3cret");

        assert_eq!(output, "[REDACTED] and [REDACTED]");
    }

    #[test]
    fn ignores_empty_secrets() {
        let mut masker = OutputMasker::new();
        masker.add_secret("");
        masker.add_secret("real-secret");

        assert_eq!(masker.mask("The real-secret is here"), "The [REDACTED] is here");
        assert_eq!(masker.secret_count(), 1);
    }

    #[test]
    fn overlapping_secrets_mask_longest_first() {
        let mut masker = OutputMasker::new();
        masker.add_secret("abc");
        masker.add_secret("abcdef");

        assert_eq!(masker.mask("key=abcdef"), "key=[REDACTED]");
    }

    #[test]
    fn text_without_secrets_is_unchanged() {
        let masker = OutputMasker::new();
        assert_eq!(masker.mask("nothing here"), "nothing here");
    }

    #[test]
    fn token_preview_hides_most_of_the_token() {
        assert_eq!(token_preview("abcd1234efgh5678"), "abcd…(16 chars)");
        assert_eq!(token_preview("short"), "…(5 chars)");
    }
}
