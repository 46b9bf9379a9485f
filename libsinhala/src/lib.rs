//! # libsinhala
//!
//! Sinhala input method engine built on libsinhala-core: Singlish phonetic
//! transliteration and the Wijesekara typewriter layout.

pub mod engine;
pub mod replay;
pub mod script;

// Re-export IME components from core
pub use libsinhala_core::*;

pub use engine::{
    create_ime_engine, create_ime_engine_from_toml, create_ime_engine_singlish,
    create_ime_engine_wijesekara, SinhalaEngine,
};
pub use replay::{replay, ReplayReport, StepReport};
pub use script::parse_script;
