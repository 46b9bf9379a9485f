//! Direct-key editor for the native Wijesekara layout.
//!
//! Stateless: looks only at the single character before the cursor, read
//! fresh from the host, and fuses it with the typed label when the pair is in
//! the fusion table. Safe under arbitrary cursor movement.

use super::{Editor, EditorResult};
use crate::host::TextHost;
use crate::rules;
use crate::session::ImeSession;
use tracing::debug;

/// What the direct composer decided for one key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectOutcome {
    /// Replace the character before the cursor (erase 1) instead of inserting
    pub replace: bool,
    pub text: String,
}

/// Fuse `key` with the character before the cursor, or insert it verbatim.
pub fn compose(before: &str, key: &str) -> DirectOutcome {
    let pair = format!("{}{}", before, key);
    match rules::direct_fusion(&pair) {
        Some(fused) => DirectOutcome {
            replace: true,
            text: fused.text.to_string(),
        },
        None => DirectOutcome {
            replace: false,
            text: key.to_string(),
        },
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct DirectEditor;

impl DirectEditor {
    pub fn new() -> Self {
        Self
    }
}

impl Editor for DirectEditor {
    fn process_key(
        &mut self,
        key: &str,
        _session: &mut ImeSession,
        host: &mut dyn TextHost,
    ) -> EditorResult {
        let before = match host.text_before_cursor(1) {
            Ok(text) => text,
            Err(e) => return EditorResult::Failed(e),
        };
        let outcome = compose(&before, key);
        let erased = usize::from(outcome.replace);
        if let Err(e) = host.apply(erased, &outcome.text) {
            return EditorResult::Failed(e);
        }
        if outcome.replace {
            debug!(before = %before, key, fused = %outcome.text, "direct fusion");
        }
        EditorResult::Commit {
            text: outcome.text,
            erased,
        }
    }

    fn name(&self) -> &'static str {
        "direct"
    }
}
