//! Keymaps: how layout keys resolve to catalog atoms or label text.
//!
//! The phonetic editor is generic over [`Keymap`]; [`SinglishKeymap`] is the
//! stock implementation.
//! The native Wijesekara layout has no phonetics, only key labels, so it is a
//! plain label table ([`wijesekara::label`]).

pub mod singlish;
pub mod wijesekara;

pub use singlish::SinglishKeymap;

use crate::catalog::Atom;

/// Resolves phonetic trigger keys to atoms.
pub trait Keymap {
    /// Resolve `key` (case-sensitive) to its base atom, or `None` when the key
    /// has no phonetic mapping and must pass through verbatim.
    fn resolve(&self, key: &str) -> Option<Atom>;

    /// Whether `key` is the trigger for the pending nasal mark.
    fn is_nasal_trigger(&self, key: &str) -> bool;

    /// Human-readable name for logging.
    fn name(&self) -> &'static str;
}
