//! Composition state carried between phonetic keystrokes.
//!
//! The state is an explicit value owned by the session and threaded through
//! the composer. It remembers the last atom committed, the anchor letter that
//! may still be lengthened, and a fingerprint of the text before the cursor at
//! the time it was written. A fingerprint mismatch means the cursor moved under
//! us, and the stored atoms must not be trusted.

use crate::catalog::Atom;

/// Number of UTF-16 units before the cursor captured in a fingerprint.
pub const DEFAULT_FINGERPRINT_WINDOW: usize = 5;

/// Fingerprint of the last `window` units of `units`.
pub fn fingerprint_of(units: &[u16], window: usize) -> String {
    let start = units.len().saturating_sub(window);
    String::from_utf16_lossy(&units[start..])
}

/// Mutable memory of the phonetic composer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CompositionState {
    last_atom: Option<Atom>,
    last_anchor: Option<Atom>,
    fingerprint: String,
}

impl CompositionState {
    /// Create a cleared state.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_atoms(
        last_atom: Option<Atom>,
        last_anchor: Option<Atom>,
        fingerprint: String,
    ) -> Self {
        Self {
            last_atom,
            last_anchor,
            fingerprint,
        }
    }

    pub fn last_atom(&self) -> Option<Atom> {
        self.last_atom
    }

    pub fn last_anchor(&self) -> Option<Atom> {
        self.last_anchor
    }

    pub fn fingerprint(&self) -> &str {
        &self.fingerprint
    }

    /// True when no composition is in progress.
    pub fn is_clear(&self) -> bool {
        self.last_atom.is_none() && self.last_anchor.is_none() && self.fingerprint.is_empty()
    }

    /// Forget everything (space, backspace, layout switch, session restart).
    pub fn clear(&mut self) {
        self.last_atom = None;
        self.last_anchor = None;
        self.fingerprint.clear();
    }

    /// Whether the text before the cursor differs from the recorded fingerprint.
    pub fn has_external_move(&self, current: &str) -> bool {
        self.fingerprint != current
    }

    /// The prior `(last_atom, last_anchor)` as the composer may see them:
    /// both absent when the fingerprint no longer matches.
    pub fn view(&self, current: &str) -> (Option<Atom>, Option<Atom>) {
        if self.has_external_move(current) {
            (None, None)
        } else {
            (self.last_atom, self.last_anchor)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::atoms;

    #[test]
    fn test_new_state_is_clear() {
        let state = CompositionState::new();
        assert!(state.is_clear());
        assert_eq!(state.view(""), (None, None));
    }

    #[test]
    fn test_view_hides_atoms_after_external_move() {
        let state = CompositionState::with_atoms(
            Some(atoms::VIRAMA),
            Some(atoms::KA),
            "ක්".to_string(),
        );
        assert!(!state.has_external_move("ක්"));
        assert_eq!(state.view("ක්"), (Some(atoms::VIRAMA), Some(atoms::KA)));

        assert!(state.has_external_move("ක"));
        assert_eq!(state.view("ක"), (None, None));
    }

    #[test]
    fn test_clear() {
        let mut state = CompositionState::with_atoms(Some(atoms::A), Some(atoms::A), "අ".into());
        state.clear();
        assert!(state.is_clear());
    }

    #[test]
    fn test_fingerprint_window() {
        let units: Vec<u16> = "abcdefg".encode_utf16().collect();
        assert_eq!(fingerprint_of(&units, 5), "cdefg");
        assert_eq!(fingerprint_of(&units, 50), "abcdefg");
        assert_eq!(fingerprint_of(&[], 5), "");
    }
}
