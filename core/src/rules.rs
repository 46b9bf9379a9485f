//! Rule tables derived from the catalog.
//!
//! Each table is a small static map keyed by atom id (or id pair) and built once
//! on first use. Composers only consult them through the lookup functions below,
//! so every rule can be tested in isolation.

use crate::catalog::{atoms::*, Atom, AtomId};
use ahash::AHashMap;
use once_cell::sync::Lazy;

type UnaryTable = AHashMap<AtomId, Atom>;
type PairTable = AHashMap<(AtomId, AtomId), Atom>;

fn unary(pairs: &[(Atom, Atom)]) -> UnaryTable {
    pairs.iter().map(|(from, to)| (from.id, *to)).collect()
}

fn binary(triples: &[(Atom, Atom, Atom)]) -> PairTable {
    triples
        .iter()
        .map(|(first, second, to)| ((first.id, second.id), *to))
        .collect()
}

/// Independent vowel → dependent sign. අ has no sign: it is the inherent vowel.
static VOWEL_SIGNS: Lazy<UnaryTable> = Lazy::new(|| {
    unary(&[
        (AA, SIGN_AA),
        (AE, SIGN_AE),
        (AEE, SIGN_AEE),
        (I, SIGN_I),
        (II, SIGN_II),
        (U, SIGN_U),
        (UU, SIGN_UU),
        (IRU, SIGN_R),
        (IRUU, SIGN_RR),
        (ILU, SIGN_L),
        (ILUU, SIGN_LL),
        (E, SIGN_E),
        (EE, SIGN_EE),
        (AI, SIGN_AI),
        (O, SIGN_O),
        (OO, SIGN_OO),
        (AU, SIGN_AU),
    ])
});

/// Vowels that fuse straight onto a bare (vowel-bearing) consonant.
static CONSONANT_FUSIONS: Lazy<UnaryTable> =
    Lazy::new(|| unary(&[(A, SIGN_AA), (I, SIGN_AI), (U, SIGN_AU)]));

/// Anchor consonant → form selected by a trailing හ.
static ASPIRATES: Lazy<UnaryTable> = Lazy::new(|| {
    unary(&[
        (TTA, TA),
        (TTHA, THA),
        (DDA, DA),
        (DDHA, DHA),
        (KA, KHA),
        (GA, GHA),
        (CA, CHA),
        (JA, JHA),
        (TA, THA),
        (DA, DHA),
        (PA, PHA),
        (BA, BHA),
        (SA, SHA),
        (NDDA, NDA),
        (SSA, SSA),
    ])
});

/// Consonant → nasalized/prenasalized form, used after the pending nasal mark.
static NASALS: Lazy<UnaryTable> = Lazy::new(|| {
    unary(&[
        (KA, NYA),
        (GA, NNGA),
        (JA, NYJA),
        (DDA, NDDA),
        (BA, MBA),
        (HA, JNYA),
    ])
});

/// (short sign, typed vowel) → long sign.
static SIGN_LENGTHENING: Lazy<PairTable> = Lazy::new(|| {
    binary(&[
        (SIGN_AE, A, SIGN_AEE),
        (SIGN_I, I, SIGN_II),
        (SIGN_U, U, SIGN_UU),
        (SIGN_R, I, SIGN_RR),
        (SIGN_E, E, SIGN_EE),
        (SIGN_O, O, SIGN_OO),
    ])
});

/// (anchor vowel, typed vowel) → long vowel or diphthong.
static DIPHTHONGS: Lazy<PairTable> = Lazy::new(|| {
    binary(&[
        (A, A, AA),
        (A, I, AI),
        (A, U, AU),
        (AE, A, AEE),
        (I, I, II),
        (U, U, UU),
        (IRU, I, IRUU),
        (E, E, EE),
        (O, O, OO),
    ])
});

/// Two-character sequences the native layout fuses into one precomposed vowel.
static DIRECT_FUSIONS: Lazy<AHashMap<&'static str, Atom>> = Lazy::new(|| {
    [
        ("අැ", AE),
        ("අා", AA),
        ("එ්", EE),
        ("එෙ", AI),
        ("ෙඑ", AI),
        ("ඔ්", OO),
        ("උ්", UU),
    ]
    .into_iter()
    .collect()
});

pub fn vowel_sign(vowel: &Atom) -> Option<Atom> {
    VOWEL_SIGNS.get(&vowel.id).copied()
}

pub fn consonant_fusion(vowel: &Atom) -> Option<Atom> {
    CONSONANT_FUSIONS.get(&vowel.id).copied()
}

pub fn aspirated_form(consonant: &Atom) -> Option<Atom> {
    ASPIRATES.get(&consonant.id).copied()
}

pub fn nasal_form(consonant: &Atom) -> Option<Atom> {
    NASALS.get(&consonant.id).copied()
}

pub fn lengthened_sign(sign: &Atom, vowel: &Atom) -> Option<Atom> {
    SIGN_LENGTHENING.get(&(sign.id, vowel.id)).copied()
}

pub fn diphthong(anchor: &Atom, vowel: &Atom) -> Option<Atom> {
    DIPHTHONGS.get(&(anchor.id, vowel.id)).copied()
}

/// Whether `consonant` joins a preceding virama as a ZWJ conjunct.
pub fn is_conjunct_follower(consonant: &Atom) -> bool {
    consonant.id == RA.id || consonant.id == YA.id
}

/// Look up `before + typed` in the direct-key fusion table.
pub fn direct_fusion(pair: &str) -> Option<Atom> {
    DIRECT_FUSIONS.get(pair).copied()
}
