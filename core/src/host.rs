//! Contract with the host text field.
//!
//! The composers never own a text buffer. They read the committed text that
//! precedes the cursor and hand back edits; the host applies them. Lengths are
//! UTF-16 code units, matching what platform text fields count in.

use std::fmt;

/// Failure talking to the host text field. Never fatal: the engine logs it and
/// skips the operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HostError {
    /// No text field is attached (e.g. transient detachment).
    Unavailable,
    /// The host refused the edit.
    Rejected(String),
}

impl fmt::Display for HostError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HostError::Unavailable => write!(f, "host text field unavailable"),
            HostError::Rejected(reason) => write!(f, "host rejected edit: {}", reason),
        }
    }
}

impl std::error::Error for HostError {}

/// Text field the engine edits.
pub trait TextHost {
    /// Up to `n` UTF-16 units immediately before the cursor.
    fn units_before_cursor(&self, n: usize) -> Result<Vec<u16>, HostError>;

    /// Delete `units` code units before the cursor.
    fn delete_before(&mut self, units: usize) -> Result<(), HostError>;

    /// Insert `text` at the cursor.
    fn insert(&mut self, text: &str) -> Result<(), HostError>;

    /// Move the cursor by `delta` code points.
    fn move_cursor(&mut self, delta: isize) -> Result<(), HostError>;

    /// Up to `n` units before the cursor, decoded. Unpaired surrogates at the
    /// window edge decode to U+FFFD.
    fn text_before_cursor(&self, n: usize) -> Result<String, HostError> {
        Ok(String::from_utf16_lossy(&self.units_before_cursor(n)?))
    }

    /// Delete `erase` units, then insert `text`, as one edit.
    ///
    /// Hosts with a batch-edit facility should override this so no intermediate
    /// state is observable.
    fn apply(&mut self, erase: usize, text: &str) -> Result<(), HostError> {
        if erase > 0 {
            self.delete_before(erase)?;
        }
        if !text.is_empty() {
            self.insert(text)?;
        }
        Ok(())
    }

    /// Editor action (enter / go / send).
    fn perform_action(&mut self) -> Result<(), HostError> {
        self.insert("\n")
    }
}
