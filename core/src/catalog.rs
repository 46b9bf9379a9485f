//! Static catalog of Sinhala grapheme atoms.
//!
//! Every letter, sign and mark the composers can emit is an [`Atom`]: a stable
//! numeric id, its canonical text, and a phonetic class derived from the id.
//! Atoms are plain `Copy` records declared as constants in [`atoms`], so rule
//! tables and composition state refer to them by value without any fallible
//! lookup. [`Catalog`] indexes the full table by id and by text.
//!
//! A second, disjoint table of panel symbols lives alongside (see [`Symbol`]).
//! Its ids overlap with the letter catalog's punctuation ids; the two tables are
//! never compared against each other.

use ahash::AHashMap;
use once_cell::sync::Lazy;

/// Stable identifier of an atom. Sinhala atoms use their code point; synthetic
/// multi-codepoint atoms use negative ids.
pub type AtomId = i32;

/// Phonetic class of an atom.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AtomClass {
    /// Vowel letter with its own standalone glyph (අ, ආ, ...)
    IndependentVowel,
    /// Consonant letter carrying an inherent vowel (ක, ග, ...)
    Consonant,
    /// Diacritic attached to a consonant (ා, ි, ...)
    DependentSign,
    /// Virama, anusvara, visarga and the zero-width joiner
    Mark,
    /// Punctuation, synthetic conjuncts and sentinels
    Unclassified,
}

impl AtomClass {
    /// Classify an id by the Sinhala block ranges.
    pub const fn of_id(id: AtomId) -> Self {
        match id {
            3461..=3478 => AtomClass::IndependentVowel,
            3482..=3526 => AtomClass::Consonant,
            3535..=3571 => AtomClass::DependentSign,
            3458 | 3459 | 3530 | 8205 => AtomClass::Mark,
            _ => AtomClass::Unclassified,
        }
    }
}

/// One catalog entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Atom {
    pub id: AtomId,
    pub text: &'static str,
    pub class: AtomClass,
}

impl Atom {
    pub const fn new(id: AtomId, text: &'static str) -> Self {
        Self {
            id,
            text,
            class: AtomClass::of_id(id),
        }
    }

    pub fn is_consonant(&self) -> bool {
        self.class == AtomClass::Consonant
    }

    pub fn is_vowel(&self) -> bool {
        self.class == AtomClass::IndependentVowel
    }

    /// Length of the atom's text in UTF-16 code units.
    pub fn units(&self) -> usize {
        self.text.encode_utf16().count()
    }
}

/// Atom constants, named by romanized sound.
pub mod atoms {
    use super::Atom;

    // Independent vowels
    pub const A: Atom = Atom::new(3461, "අ");
    pub const AA: Atom = Atom::new(3462, "ආ");
    pub const AE: Atom = Atom::new(3463, "ඇ");
    pub const AEE: Atom = Atom::new(3464, "ඈ");
    pub const I: Atom = Atom::new(3465, "ඉ");
    pub const II: Atom = Atom::new(3466, "ඊ");
    pub const U: Atom = Atom::new(3467, "උ");
    pub const UU: Atom = Atom::new(3468, "ඌ");
    pub const IRU: Atom = Atom::new(3469, "ඍ");
    pub const IRUU: Atom = Atom::new(3470, "ඎ");
    pub const ILU: Atom = Atom::new(3471, "ඏ");
    pub const ILUU: Atom = Atom::new(3472, "ඐ");
    pub const E: Atom = Atom::new(3473, "එ");
    pub const EE: Atom = Atom::new(3474, "ඒ");
    pub const AI: Atom = Atom::new(3475, "ඓ");
    pub const O: Atom = Atom::new(3476, "ඔ");
    pub const OO: Atom = Atom::new(3477, "ඕ");
    pub const AU: Atom = Atom::new(3478, "ඖ");

    // Consonants
    pub const KA: Atom = Atom::new(3482, "ක");
    pub const KHA: Atom = Atom::new(3483, "ඛ");
    pub const GA: Atom = Atom::new(3484, "ග");
    pub const GHA: Atom = Atom::new(3485, "ඝ");
    pub const NGA: Atom = Atom::new(3486, "ඞ");
    pub const NNGA: Atom = Atom::new(3487, "ඟ");
    pub const CA: Atom = Atom::new(3488, "ච");
    pub const CHA: Atom = Atom::new(3489, "ඡ");
    pub const JA: Atom = Atom::new(3490, "ජ");
    pub const JHA: Atom = Atom::new(3491, "ඣ");
    pub const NYA: Atom = Atom::new(3492, "ඤ");
    pub const JNYA: Atom = Atom::new(3493, "ඥ");
    pub const NYJA: Atom = Atom::new(3494, "ඦ");
    pub const TTA: Atom = Atom::new(3495, "ට");
    pub const TTHA: Atom = Atom::new(3496, "ඨ");
    pub const DDA: Atom = Atom::new(3497, "ඩ");
    pub const DDHA: Atom = Atom::new(3498, "ඪ");
    pub const NNA: Atom = Atom::new(3499, "ණ");
    pub const NDDA: Atom = Atom::new(3500, "ඬ");
    pub const TA: Atom = Atom::new(3501, "ත");
    pub const THA: Atom = Atom::new(3502, "ථ");
    pub const DA: Atom = Atom::new(3503, "ද");
    pub const DHA: Atom = Atom::new(3504, "ධ");
    pub const NA: Atom = Atom::new(3505, "න");
    pub const NDA: Atom = Atom::new(3507, "ඳ");
    pub const PA: Atom = Atom::new(3508, "ප");
    pub const PHA: Atom = Atom::new(3509, "ඵ");
    pub const BA: Atom = Atom::new(3510, "බ");
    pub const BHA: Atom = Atom::new(3511, "භ");
    pub const MA: Atom = Atom::new(3512, "ම");
    pub const MBA: Atom = Atom::new(3513, "ඹ");
    pub const YA: Atom = Atom::new(3514, "ය");
    pub const RA: Atom = Atom::new(3515, "ර");
    pub const LA: Atom = Atom::new(3517, "ල");
    pub const VA: Atom = Atom::new(3520, "ව");
    pub const SHA: Atom = Atom::new(3521, "ශ");
    pub const SSA: Atom = Atom::new(3522, "ෂ");
    pub const SA: Atom = Atom::new(3523, "ස");
    pub const HA: Atom = Atom::new(3524, "හ");
    pub const LLA: Atom = Atom::new(3525, "ළ");
    pub const FA: Atom = Atom::new(3526, "ෆ");

    // Dependent vowel signs
    pub const SIGN_AA: Atom = Atom::new(3535, "ා");
    pub const SIGN_AE: Atom = Atom::new(3536, "ැ");
    pub const SIGN_AEE: Atom = Atom::new(3537, "ෑ");
    pub const SIGN_I: Atom = Atom::new(3538, "ි");
    pub const SIGN_II: Atom = Atom::new(3539, "ී");
    pub const SIGN_U: Atom = Atom::new(3540, "ු");
    pub const SIGN_UU: Atom = Atom::new(3542, "ූ");
    pub const SIGN_R: Atom = Atom::new(3544, "ෘ");
    pub const SIGN_E: Atom = Atom::new(3545, "ෙ");
    pub const SIGN_EE: Atom = Atom::new(3546, "ේ");
    pub const SIGN_AI: Atom = Atom::new(3547, "ෛ");
    pub const SIGN_O: Atom = Atom::new(3548, "ො");
    pub const SIGN_OO: Atom = Atom::new(3549, "ෝ");
    pub const SIGN_AU: Atom = Atom::new(3550, "ෞ");
    pub const SIGN_L: Atom = Atom::new(3551, "ෟ");
    pub const SIGN_RR: Atom = Atom::new(3570, "ෲ");
    pub const SIGN_LL: Atom = Atom::new(3571, "ෳ");

    // Marks
    pub const ANUSVARA: Atom = Atom::new(3458, "ං");
    pub const VISARGA: Atom = Atom::new(3459, "ඃ");
    pub const VIRAMA: Atom = Atom::new(3530, "්");
    pub const ZWJ: Atom = Atom::new(8205, "\u{200D}");

    // Latin punctuation reachable from the native layout
    pub const COMMA: Atom = Atom::new(44, ",");
    pub const FULL_STOP: Atom = Atom::new(46, ".");
    pub const LESS_THAN: Atom = Atom::new(60, "<");
    pub const GREATER_THAN: Atom = Atom::new(62, ">");
    pub const COLON: Atom = Atom::new(58, ":");
    pub const SEMICOLON: Atom = Atom::new(59, ";");

    // Synthetic conjunct marks (consonant + joiner + consonant)
    pub const YANSAYA: Atom = Atom::new(-1, "\u{0DCA}\u{200D}\u{0DBA}");
    pub const RAKARANSAYA: Atom = Atom::new(-2, "\u{0DCA}\u{200D}\u{0DBB}");
    pub const REPAYA: Atom = Atom::new(-3, "\u{0DBB}\u{0DCA}\u{200D}");

    /// Pending nasal mark: typed but not yet visible.
    pub const NASAL_MARK: Atom = Atom::new(-8, "");
    pub const EMPTY: Atom = Atom::new(-9, "");
}

/// Every atom in the letter catalog.
pub static ATOMS: &[Atom] = &[
    atoms::A, atoms::AA, atoms::AE, atoms::AEE, atoms::I, atoms::II, atoms::U, atoms::UU,
    atoms::IRU, atoms::IRUU, atoms::ILU, atoms::ILUU, atoms::E, atoms::EE, atoms::AI,
    atoms::O, atoms::OO, atoms::AU,
    atoms::KA, atoms::KHA, atoms::GA, atoms::GHA, atoms::NGA, atoms::NNGA, atoms::CA,
    atoms::CHA, atoms::JA, atoms::JHA, atoms::NYA, atoms::JNYA, atoms::NYJA, atoms::TTA,
    atoms::TTHA, atoms::DDA, atoms::DDHA, atoms::NNA, atoms::NDDA, atoms::TA, atoms::THA,
    atoms::DA, atoms::DHA, atoms::NA, atoms::NDA, atoms::PA, atoms::PHA, atoms::BA,
    atoms::BHA, atoms::MA, atoms::MBA, atoms::YA, atoms::RA, atoms::LA, atoms::VA,
    atoms::SHA, atoms::SSA, atoms::SA, atoms::HA, atoms::LLA, atoms::FA,
    atoms::SIGN_AA, atoms::SIGN_AE, atoms::SIGN_AEE, atoms::SIGN_I, atoms::SIGN_II,
    atoms::SIGN_U, atoms::SIGN_UU, atoms::SIGN_R, atoms::SIGN_E, atoms::SIGN_EE,
    atoms::SIGN_AI, atoms::SIGN_O, atoms::SIGN_OO, atoms::SIGN_AU, atoms::SIGN_L,
    atoms::SIGN_RR, atoms::SIGN_LL,
    atoms::ANUSVARA, atoms::VISARGA, atoms::VIRAMA, atoms::ZWJ,
    atoms::COMMA, atoms::FULL_STOP, atoms::LESS_THAN, atoms::GREATER_THAN, atoms::COLON,
    atoms::SEMICOLON,
    atoms::YANSAYA, atoms::RAKARANSAYA, atoms::REPAYA, atoms::NASAL_MARK, atoms::EMPTY,
];

/// Indexed view over [`ATOMS`], built once per process.
#[derive(Debug)]
pub struct Catalog {
    by_id: AHashMap<AtomId, Atom>,
    by_text: AHashMap<&'static str, Atom>,
}

static CATALOG: Lazy<Catalog> = Lazy::new(|| Catalog::build(ATOMS));

impl Catalog {
    fn build(entries: &[Atom]) -> Self {
        let mut by_id = AHashMap::with_capacity(entries.len());
        let mut by_text = AHashMap::with_capacity(entries.len());
        for atom in entries {
            by_id.insert(atom.id, *atom);
            // Sentinels share the empty text; they are not addressable by text.
            if !atom.text.is_empty() {
                by_text.entry(atom.text).or_insert(*atom);
            }
        }
        Self { by_id, by_text }
    }

    /// The process-wide catalog.
    pub fn global() -> &'static Catalog {
        &CATALOG
    }

    pub fn get(&self, id: AtomId) -> Option<Atom> {
        self.by_id.get(&id).copied()
    }

    /// Find the atom whose canonical text is exactly `text`.
    pub fn by_text(&self, text: &str) -> Option<Atom> {
        self.by_text.get(text).copied()
    }

    pub fn class_of(&self, atom: &Atom) -> AtomClass {
        atom.class
    }

    pub fn len(&self) -> usize {
        self.by_id.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_id.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &'static Atom> {
        ATOMS.iter()
    }
}

/// Panel symbol (separate id space from [`Atom`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Symbol {
    pub id: u32,
    pub text: &'static str,
}

const fn sym(id: u32, text: &'static str) -> Symbol {
    Symbol { id, text }
}

/// Symbols offered by the symbol panel.
pub static SYMBOLS: &[Symbol] = &[
    sym(96, "`"), sym(126, "~"), sym(33, "!"), sym(64, "@"), sym(35, "#"),
    sym(36, "$"), sym(37, "%"), sym(94, "^"), sym(38, "&"), sym(42, "*"),
    sym(40, "("), sym(41, ")"), sym(45, "-"), sym(95, "_"), sym(61, "="),
    sym(43, "+"), sym(91, "["), sym(93, "]"), sym(123, "{"), sym(125, "}"),
    sym(92, "\\"), sym(124, "|"), sym(59, ";"), sym(58, ":"), sym(39, "'"),
    sym(34, "\""), sym(44, ","), sym(46, "."), sym(60, "<"), sym(62, ">"),
    sym(47, "/"), sym(63, "?"),
    sym(247, "÷"), sym(215, "×"), sym(177, "±"), sym(8226, "•"), sym(9702, "◦"),
    sym(9642, "▪"), sym(9643, "▫"), sym(8227, "‣"), sym(8730, "√"), sym(960, "π"),
    sym(182, "¶"), sym(8710, "∆"), sym(8364, "€"), sym(165, "¥"), sym(163, "£"),
    sym(162, "¢"), sym(176, "°"), sym(169, "©"), sym(174, "®"), sym(8482, "™"),
    sym(8453, "℅"), sym(8860, "⊜"),
];

static SYMBOL_INDEX: Lazy<AHashMap<u32, Symbol>> =
    Lazy::new(|| SYMBOLS.iter().map(|s| (s.id, *s)).collect());

/// Look up a panel symbol by id.
pub fn symbol(id: u32) -> Option<Symbol> {
    SYMBOL_INDEX.get(&id).copied()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn atom_ids_are_unique() {
        let mut seen = HashSet::new();
        for atom in ATOMS {
            assert!(seen.insert(atom.id), "duplicate atom id {}", atom.id);
        }
        assert_eq!(Catalog::global().len(), ATOMS.len());
    }

    #[test]
    fn symbol_ids_are_unique() {
        let mut seen = HashSet::new();
        for s in SYMBOLS {
            assert!(seen.insert(s.id), "duplicate symbol id {}", s.id);
        }
    }

    #[test]
    fn classes_follow_block_ranges() {
        assert_eq!(atoms::A.class, AtomClass::IndependentVowel);
        assert_eq!(atoms::AU.class, AtomClass::IndependentVowel);
        assert_eq!(atoms::KA.class, AtomClass::Consonant);
        assert_eq!(atoms::FA.class, AtomClass::Consonant);
        assert_eq!(atoms::SIGN_AA.class, AtomClass::DependentSign);
        assert_eq!(atoms::SIGN_LL.class, AtomClass::DependentSign);
        assert_eq!(atoms::VIRAMA.class, AtomClass::Mark);
        assert_eq!(atoms::ZWJ.class, AtomClass::Mark);
        assert_eq!(atoms::COMMA.class, AtomClass::Unclassified);
        assert_eq!(atoms::YANSAYA.class, AtomClass::Unclassified);
        assert_eq!(atoms::NASAL_MARK.class, AtomClass::Unclassified);
    }

    #[test]
    fn sinhala_atoms_match_their_code_point() {
        for atom in ATOMS.iter().filter(|a| a.id > 3000) {
            let mut chars = atom.text.chars();
            let ch = chars.next().expect("non-empty text");
            assert_eq!(ch as i32, atom.id, "{:?}", atom);
            assert!(chars.next().is_none());
        }
    }

    #[test]
    fn lookup_by_id_and_text() {
        let catalog = Catalog::global();
        assert_eq!(catalog.get(3482), Some(atoms::KA));
        assert_eq!(catalog.get(12345), None);
        assert_eq!(catalog.by_text("ා"), Some(atoms::SIGN_AA));
        assert_eq!(catalog.by_text("\u{0DCA}\u{200D}\u{0DBA}"), Some(atoms::YANSAYA));
        assert_eq!(catalog.by_text(""), None);
    }

    #[test]
    fn conjunct_marks_span_three_units() {
        assert_eq!(atoms::YANSAYA.units(), 3);
        assert_eq!(atoms::REPAYA.units(), 3);
        assert_eq!(atoms::NASAL_MARK.units(), 0);
    }

    #[test]
    fn symbol_lookup() {
        assert_eq!(symbol(960).map(|s| s.text), Some("π"));
        assert_eq!(symbol(1), None);
    }
}
