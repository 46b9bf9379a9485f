//! libsinhala-core
//!
//! Sinhala composition engine shared by the layout front ends: the character
//! catalog and rule tables, keymaps, the phonetic and direct-key composers,
//! joiner-aware erase, and the session/engine layer that drives them against
//! a host text field.
//!
//! Public API:
//! - `Catalog`, `Atom`, `AtomClass` - the static grapheme catalog
//! - `PhoneticEditor`, `DirectEditor` - the two composers
//! - `CompositionState` - memory carried between phonetic keystrokes
//! - `erase_one`, `erase_count` - backspace that never splits a cluster
//! - `TextHost`, `TextBuffer` - host contract and an in-memory host
//! - `ImeEngine` - key routing, session and context
//! - `Config` - engine configuration

// Data
pub mod catalog;
pub use catalog::{atoms, Atom, AtomClass, AtomId, Catalog, Symbol};

pub mod rules;

pub mod keymap;
pub use keymap::{Keymap, SinglishKeymap};

// Composition
pub mod state;
pub use state::{fingerprint_of, CompositionState, DEFAULT_FINGERPRINT_WINDOW};

pub mod erase;
pub use erase::{erase_count, erase_one, plan_erase_one};

pub mod editor;
pub use editor::{DirectEditor, DirectOutcome, Editor, EditorResult, PhoneticEditor, Transition};

// Host
pub mod host;
pub use host::{HostError, TextHost};

pub mod buffer;
pub use buffer::TextBuffer;

// IME layer
pub mod config;
pub use config::{Config, Layout};

pub mod context;
pub use context::{ImeContext, InputPurpose};

pub mod session;
pub use session::{ImeSession, ShiftState};

pub mod ime_engine;
pub use ime_engine::{ImeEngine, KeyEvent, KeyResult};
