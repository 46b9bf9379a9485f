//! IME context for platform communication.
//!
//! Plain data the platform reads after each `process_key()`: what was
//! committed, how many units were erased first, the current token for the
//! suggestion collaborator, and UI hints.

use unicode_normalization::UnicodeNormalization;

/// Input purpose hint for context-aware input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputPurpose {
    /// Free-form text input (default)
    FreeForm,
    /// Password (disable suggestions)
    Password,
}

impl Default for InputPurpose {
    fn default() -> Self {
        Self::FreeForm
    }
}

/// Result of the last key event, for the platform.
#[derive(Debug, Clone, Default)]
pub struct ImeContext {
    /// Text committed by the last key event
    pub commit_text: String,

    /// Units erased before `commit_text` was inserted
    pub erased_units: usize,

    /// Run of non-whitespace before the cursor, NFC-normalized
    pub current_token: String,

    /// Language indicator ("EN" / "SI")
    pub auxiliary_text: String,

    /// Input purpose hint for context-aware behavior
    pub input_purpose: InputPurpose,
}

impl ImeContext {
    /// Create a new empty IME context.
    pub fn new() -> Self {
        Self::default()
    }

    /// Clear the per-key output. The token and hints survive.
    pub fn clear(&mut self) {
        self.commit_text.clear();
        self.erased_units = 0;
    }

    /// Take the commit text, leaving it empty.
    pub fn take_commit(&mut self) -> String {
        std::mem::take(&mut self.commit_text)
    }

    /// Check if there's text to commit.
    pub fn has_commit(&self) -> bool {
        !self.commit_text.is_empty()
    }

    /// Whether tokens should be published at all.
    pub fn suggestions_allowed(&self) -> bool {
        self.input_purpose != InputPurpose::Password
    }

    /// Set the input purpose.
    pub fn set_input_purpose(&mut self, purpose: InputPurpose) {
        self.input_purpose = purpose;
        if !self.suggestions_allowed() {
            self.current_token.clear();
        }
    }
}

/// The trailing run of non-whitespace in `text_before`, NFC-normalized.
pub fn current_token(text_before: &str) -> String {
    let start = text_before
        .char_indices()
        .rev()
        .find(|(_, ch)| ch.is_whitespace())
        .map(|(i, ch)| i + ch.len_utf8())
        .unwrap_or(0);
    text_before[start..].nfc().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_current_token() {
        assert_eq!(current_token("hello wor"), "wor");
        assert_eq!(current_token("කොහොමද ඔයා"), "ඔයා");
        assert_eq!(current_token("line\nනම"), "නම");
        assert_eq!(current_token("trailing "), "");
        assert_eq!(current_token(""), "");
        assert_eq!(current_token("single"), "single");
    }

    #[test]
    fn test_current_token_is_nfc() {
        // e + combining acute composes to é
        assert_eq!(current_token("cafe\u{0301}"), "caf\u{00E9}");
    }

    #[test]
    fn test_password_purpose_clears_token() {
        let mut ctx = ImeContext::new();
        ctx.current_token = "secret".into();
        ctx.set_input_purpose(InputPurpose::Password);
        assert!(!ctx.suggestions_allowed());
        assert!(ctx.current_token.is_empty());
    }

    #[test]
    fn test_free_form_allows_suggestions() {
        let mut ctx = ImeContext::new();
        assert_eq!(ctx.input_purpose, InputPurpose::FreeForm);
        assert!(ctx.suggestions_allowed());
        ctx.set_input_purpose(InputPurpose::Password);
        ctx.set_input_purpose(InputPurpose::FreeForm);
        assert!(ctx.suggestions_allowed());
    }

    #[test]
    fn test_take_commit() {
        let mut ctx = ImeContext::new();
        ctx.commit_text = "අ".into();
        assert!(ctx.has_commit());
        assert_eq!(ctx.take_commit(), "අ");
        assert!(!ctx.has_commit());
    }
}
