//! Singlish phonetic keymap (Latin letters → Sinhala atoms).

use super::Keymap;
use crate::catalog::{atoms, Atom};
use phf::phf_map;

static SINGLISH: phf::Map<&'static str, Atom> = phf_map! {
    "a" => atoms::A,
    "b" => atoms::BA,
    "c" => atoms::CA,
    "d" => atoms::DDA,
    "e" => atoms::E,
    "f" => atoms::FA,
    "g" => atoms::GA,
    "h" => atoms::HA,
    "i" => atoms::I,
    "j" => atoms::JA,
    "k" => atoms::KA,
    "l" => atoms::LA,
    "m" => atoms::MA,
    "n" => atoms::NA,
    "o" => atoms::O,
    "p" => atoms::PA,
    "r" => atoms::RA,
    "s" => atoms::SA,
    "t" => atoms::TTA,
    "u" => atoms::U,
    "v" => atoms::VA,
    "w" => atoms::VA,
    "x" => atoms::ANUSVARA,
    "y" => atoms::YA,

    "A" => atoms::AE,
    "B" => atoms::MBA,
    "C" => atoms::CHA,
    "D" => atoms::DDHA,
    "E" => atoms::E,
    "F" => atoms::FA,
    "G" => atoms::GA,
    "H" => atoms::VISARGA,
    "I" => atoms::I,
    "J" => atoms::JHA,
    "K" => atoms::KHA,
    "L" => atoms::LLA,
    "M" => atoms::MA,
    "N" => atoms::NNA,
    "O" => atoms::O,
    "P" => atoms::PHA,
    "R" => atoms::IRU,
    "S" => atoms::SSA,
    "T" => atoms::TTHA,
    "U" => atoms::U,
    "V" => atoms::VA,
    "W" => atoms::VA,
    "X" => atoms::NGA,
    "Y" => atoms::YA,
};

/// Stock Singlish keymap. `z`/`Z` arm the nasal mark.
#[derive(Debug, Clone, Copy, Default)]
pub struct SinglishKeymap;

impl SinglishKeymap {
    pub fn new() -> Self {
        Self
    }

    /// All mapped keys, for rendering secondary key labels.
    pub fn keys(&self) -> impl Iterator<Item = &'static str> {
        SINGLISH.keys().copied()
    }
}

impl Keymap for SinglishKeymap {
    fn resolve(&self, key: &str) -> Option<Atom> {
        SINGLISH.get(key).copied()
    }

    fn is_nasal_trigger(&self, key: &str) -> bool {
        key == "z" || key == "Z"
    }

    fn name(&self) -> &'static str {
        "singlish"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_is_case_sensitive() {
        let map = SinglishKeymap::new();
        assert_eq!(map.resolve("t"), Some(atoms::TTA));
        assert_eq!(map.resolve("T"), Some(atoms::TTHA));
        assert_eq!(map.resolve("a"), Some(atoms::A));
        assert_eq!(map.resolve("A"), Some(atoms::AE));
    }

    #[test]
    fn unmapped_keys_resolve_to_none() {
        let map = SinglishKeymap::new();
        for key in ["q", "Q", "1", ",", " ", "ab", ""] {
            assert_eq!(map.resolve(key), None, "{key:?}");
        }
    }

    #[test]
    fn nasal_trigger_is_not_a_letter() {
        let map = SinglishKeymap::new();
        assert!(map.is_nasal_trigger("z"));
        assert!(map.is_nasal_trigger("Z"));
        assert!(!map.is_nasal_trigger("n"));
        assert_eq!(map.resolve("z"), None);
    }
}
