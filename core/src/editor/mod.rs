//! Editor trait and implementations for the two composing layouts.
//!
//! An editor takes one key, reads whatever context it needs from the host,
//! applies its edit, and reports what it did. The phonetic editor keeps its
//! memory in the session's `CompositionState`; the direct editor has none.

pub mod direct;
pub mod phonetic;

pub use direct::{DirectEditor, DirectOutcome};
pub use phonetic::{PhoneticEditor, Transition};

use crate::host::{HostError, TextHost};
use crate::session::ImeSession;

/// Result of processing a key event in an editor.
#[derive(Debug, Clone, PartialEq)]
pub enum EditorResult {
    /// `erased` units were removed and `text` inserted (either may be empty)
    Commit { text: String, erased: usize },

    /// The host could not be read or written; nothing changed
    Failed(HostError),
}

/// Editor for one input layout.
pub trait Editor {
    /// Process one key against the host, updating the session.
    fn process_key(
        &mut self,
        key: &str,
        session: &mut ImeSession,
        host: &mut dyn TextHost,
    ) -> EditorResult;

    /// Get a human-readable name for this editor (for debugging/logging).
    fn name(&self) -> &'static str;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_editor_result_equality() {
        assert_eq!(
            EditorResult::Commit { text: "ක".into(), erased: 0 },
            EditorResult::Commit { text: "ක".into(), erased: 0 }
        );
        assert_ne!(
            EditorResult::Commit { text: "ක".into(), erased: 0 },
            EditorResult::Failed(HostError::Unavailable)
        );
    }
}
