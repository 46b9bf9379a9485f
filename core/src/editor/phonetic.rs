//! Phonetic (Singlish) editor.
//!
//! The composer is a disambiguating state machine. The previous atom decides
//! which rule family applies ([`Prior`]); the rule tables decide the outcome;
//! every branch ends in the bare-letter rule, so any key in any state yields
//! a commit. Composition is pure ([`PhoneticEditor::compose`]); the [`Editor`]
//! impl only reads context from the host and applies the result.

use super::{Editor, EditorResult};
use crate::catalog::{atoms, Atom, AtomClass};
use crate::host::TextHost;
use crate::keymap::Keymap;
use crate::rules;
use crate::session::ImeSession;
use crate::state::{fingerprint_of, CompositionState, DEFAULT_FINGERPRINT_WINDOW};
use tracing::debug;

/// Most units a single key can retract (anchor consonant + virama).
pub const MAX_REVISION_UNITS: usize = 2;

/// Output of one composer step: erase `erase` units, insert `text`, then
/// continue from `state`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transition {
    pub text: String,
    pub erase: usize,
    pub state: CompositionState,
}

/// Where the previous keystroke left the composition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Prior {
    /// Nothing to extend (session start, reset, or cursor moved)
    Fresh,
    /// The nasal trigger was typed; nothing visible yet
    PendingNasal,
    /// A consonant followed by the virama
    Virama,
    /// A consonant carrying its inherent vowel
    BareConsonant,
    /// A dependent vowel sign
    Sign(Atom),
    /// An independent vowel, mark or other letter
    Letter,
}

impl Prior {
    fn of(last: Option<Atom>) -> Self {
        let Some(atom) = last else {
            return Prior::Fresh;
        };
        if atom == atoms::EMPTY {
            Prior::Fresh
        } else if atom == atoms::NASAL_MARK {
            Prior::PendingNasal
        } else if atom == atoms::VIRAMA {
            Prior::Virama
        } else {
            match atom.class {
                AtomClass::Consonant => Prior::BareConsonant,
                AtomClass::DependentSign => Prior::Sign(atom),
                _ => Prior::Letter,
            }
        }
    }
}

/// One decided step, before the fingerprint is attached.
#[derive(Debug)]
struct Step {
    text: String,
    erase: usize,
    last: Atom,
    anchor: Option<Atom>,
}

impl Step {
    /// Bare-letter rule: the atom's text, plus the virama after a consonant.
    fn letter(atom: Atom) -> Self {
        if atom.is_consonant() {
            Self {
                text: format!("{}{}", atom.text, atoms::VIRAMA.text),
                erase: 0,
                last: atoms::VIRAMA,
                anchor: Some(atom),
            }
        } else {
            Self {
                text: atom.text.to_string(),
                erase: 0,
                last: atom,
                anchor: Some(atom),
            }
        }
    }

    /// Retract `erase` units and emit `atom` in their place.
    fn replace(erase: usize, atom: Atom, anchor: Atom) -> Self {
        Self {
            text: atom.text.to_string(),
            erase,
            last: atom,
            anchor: Some(anchor),
        }
    }

    /// Append `sign` to a bare consonant. The typed vowel stays the last
    /// atom, so a following vowel can still form a diphthong with it.
    fn fuse(sign: Atom, vowel: Atom) -> Self {
        Self {
            text: sign.text.to_string(),
            erase: 0,
            last: vowel,
            anchor: Some(vowel),
        }
    }

    fn pending_nasal() -> Self {
        Self {
            text: String::new(),
            erase: 0,
            last: atoms::NASAL_MARK,
            anchor: None,
        }
    }
}

fn decide(prior: Option<Atom>, anchor: Option<Atom>, atom: Atom) -> Step {
    match Prior::of(prior) {
        Prior::Fresh => Step::letter(atom),
        Prior::BareConsonant => match rules::consonant_fusion(&atom) {
            Some(sign) => Step::fuse(sign, atom),
            None => Step::letter(atom),
        },
        Prior::Virama => after_virama(anchor, atom),
        Prior::Sign(sign) => match rules::lengthened_sign(&sign, &atom) {
            Some(long) => Step::replace(1, long, atom),
            None => Step::letter(atom),
        },
        Prior::PendingNasal => Step::letter(rules::nasal_form(&atom).unwrap_or(atom)),
        Prior::Letter => match anchor.and_then(|a| rules::diphthong(&a, &atom)) {
            Some(fused) => Step::replace(1, fused, fused),
            None => Step::letter(atom),
        },
    }
}

fn after_virama(anchor: Option<Atom>, atom: Atom) -> Step {
    // "a" cancels the virama and lets the anchor consonant stand bare
    if atom == atoms::A {
        return match anchor {
            Some(base) => Step {
                text: String::new(),
                erase: 1,
                last: base,
                anchor: Some(base),
            },
            None => Step::letter(atom),
        };
    }

    if rules::is_conjunct_follower(&atom) {
        return Step {
            text: format!("{}{}{}", atoms::ZWJ.text, atom.text, atoms::VIRAMA.text),
            erase: 0,
            last: atoms::VIRAMA,
            anchor: Some(atom),
        };
    }

    if atom == atoms::HA {
        return match anchor.and_then(|a| rules::aspirated_form(&a)) {
            Some(modified) => Step {
                text: format!("{}{}", modified.text, atoms::VIRAMA.text),
                erase: 2,
                last: atoms::VIRAMA,
                anchor: Some(modified),
            },
            None => Step::letter(atom),
        };
    }

    if atom.is_vowel() {
        if let (Some(_), Some(sign)) = (anchor, rules::vowel_sign(&atom)) {
            return Step::replace(1, sign, atom);
        }
    }

    Step::letter(atom)
}

/// Fingerprint the host will show once `erase`/`text` are applied to `before`.
fn predict_fingerprint(before: &[u16], erase: usize, text: &str, window: usize) -> String {
    let keep = before.len().saturating_sub(erase);
    let mut units = before[..keep].to_vec();
    units.extend(text.encode_utf16());
    fingerprint_of(&units, window)
}

/// Phonetic input editor, generic over the keymap.
pub struct PhoneticEditor<K: Keymap> {
    keymap: K,
    fingerprint_window: usize,
}

impl<K: Keymap> PhoneticEditor<K> {
    /// Create a phonetic editor with the default fingerprint window.
    pub fn new(keymap: K) -> Self {
        Self::with_fingerprint_window(keymap, DEFAULT_FINGERPRINT_WINDOW)
    }

    pub fn with_fingerprint_window(keymap: K, fingerprint_window: usize) -> Self {
        Self {
            keymap,
            fingerprint_window,
        }
    }

    pub fn keymap(&self) -> &K {
        &self.keymap
    }

    /// Units of host context [`compose`](Self::compose) needs to see.
    pub fn context_window(&self) -> usize {
        self.fingerprint_window + MAX_REVISION_UNITS
    }

    /// Compose one key.
    ///
    /// `before` is the host text preceding the cursor (at least
    /// [`context_window`](Self::context_window) units when available). It is
    /// used only to validate `state` and to fingerprint the result.
    pub fn compose(&self, key: &str, state: &CompositionState, before: &[u16]) -> Transition {
        let current = fingerprint_of(before, self.fingerprint_window);
        let (prior, anchor) = state.view(&current);
        if prior.is_none() && state.last_atom().is_some() {
            debug!("text before cursor changed outside the composer; starting fresh");
        }

        let step = if self.keymap.is_nasal_trigger(key) {
            Step::pending_nasal()
        } else {
            match self.keymap.resolve(key) {
                Some(atom) => decide(prior, anchor, atom),
                None => {
                    return Transition {
                        text: key.to_string(),
                        erase: 0,
                        state: CompositionState::new(),
                    }
                }
            }
        };

        let fingerprint =
            predict_fingerprint(before, step.erase, &step.text, self.fingerprint_window);
        Transition {
            text: step.text,
            erase: step.erase,
            state: CompositionState::with_atoms(Some(step.last), step.anchor, fingerprint),
        }
    }
}

impl<K: Keymap> Editor for PhoneticEditor<K> {
    fn process_key(
        &mut self,
        key: &str,
        session: &mut ImeSession,
        host: &mut dyn TextHost,
    ) -> EditorResult {
        let before = match host.units_before_cursor(self.context_window()) {
            Ok(units) => units,
            Err(e) => return EditorResult::Failed(e),
        };
        let transition = self.compose(key, session.state(), &before);
        if let Err(e) = host.apply(transition.erase, &transition.text) {
            return EditorResult::Failed(e);
        }
        debug!(
            keymap = self.keymap.name(),
            key,
            erase = transition.erase,
            text = %transition.text,
            "phonetic commit"
        );
        session.set_state(transition.state);
        EditorResult::Commit {
            text: transition.text,
            erased: transition.erase,
        }
    }

    fn name(&self) -> &'static str {
        "phonetic"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::buffer::TextBuffer;
    use crate::keymap::SinglishKeymap;

    /// Replay `keys` through the composer against an in-memory buffer.
    fn type_keys(keys: &[&str]) -> (TextBuffer, CompositionState) {
        let editor = PhoneticEditor::new(SinglishKeymap::new());
        let mut buf = TextBuffer::new();
        let mut state = CompositionState::new();
        for key in keys {
            let before = buf.units_before_cursor(editor.context_window()).unwrap();
            let t = editor.compose(key, &state, &before);
            buf.apply(t.erase, &t.text).unwrap();
            state = t.state;
        }
        (buf, state)
    }

    fn typed(keys: &str) -> String {
        let keys: Vec<String> = keys.chars().map(|c| c.to_string()).collect();
        let refs: Vec<&str> = keys.iter().map(String::as_str).collect();
        type_keys(&refs).0.text()
    }

    #[test]
    fn test_vowel_lengthening() {
        let editor = PhoneticEditor::new(SinglishKeymap::new());
        let t1 = editor.compose("a", &CompositionState::new(), &[]);
        assert_eq!((t1.text.as_str(), t1.erase), ("අ", 0));

        let before: Vec<u16> = "අ".encode_utf16().collect();
        let t2 = editor.compose("a", &t1.state, &before);
        assert_eq!((t2.text.as_str(), t2.erase), ("ආ", 1));
        assert_eq!(t2.state.last_atom(), Some(atoms::AA));
    }

    #[test]
    fn test_consonant_gets_virama() {
        let (buf, state) = type_keys(&["k"]);
        assert_eq!(buf.text(), "ක්");
        assert_eq!(state.last_atom(), Some(atoms::VIRAMA));
        assert_eq!(state.last_anchor(), Some(atoms::KA));
    }

    #[test]
    fn test_a_cancels_virama() {
        let (buf, state) = type_keys(&["k", "a"]);
        assert_eq!(buf.text(), "ක");
        assert_eq!(state.last_atom(), Some(atoms::KA));
    }

    #[test]
    fn test_vowel_signs_attach() {
        assert_eq!(typed("ki"), "කි");
        assert_eq!(typed("kii"), "කී");
        assert_eq!(typed("ku"), "කු");
        assert_eq!(typed("kuu"), "කූ");
        assert_eq!(typed("ke"), "කෙ");
        assert_eq!(typed("kee"), "කේ");
        assert_eq!(typed("ko"), "කො");
        assert_eq!(typed("koo"), "කෝ");
        assert_eq!(typed("kA"), "කැ");
        assert_eq!(typed("kAa"), "කෑ");
        assert_eq!(typed("kR"), "කෘ");
        assert_eq!(typed("kRi"), "කෲ");
    }

    #[test]
    fn test_fusion_onto_bare_consonant() {
        assert_eq!(typed("kaa"), "කා");
        assert_eq!(typed("kai"), "කෛ");
        assert_eq!(typed("kau"), "කෞ");
    }

    #[test]
    fn test_vowel_after_fusion_forms_diphthong() {
        let (buf, state) = type_keys(&["k", "a", "a"]);
        assert_eq!(buf.text(), "කා");
        assert_eq!(state.last_atom(), Some(atoms::A));
        assert_eq!(state.last_anchor(), Some(atoms::A));

        // the fused sign is replaced by the diphthong of the typed vowels
        assert_eq!(typed("kaaa"), "කආ");
        assert_eq!(typed("kaai"), "කඓ");
        assert_eq!(typed("kaiI"), "කඊ");
        // no diphthong: fresh letter
        assert_eq!(typed("kaak"), "කාක්");
    }

    #[test]
    fn test_aspirates_replace_two_units() {
        assert_eq!(typed("th"), "ත්");
        assert_eq!(typed("tha"), "ත");
        assert_eq!(typed("dh"), "ද්");
        assert_eq!(typed("kh"), "ඛ්");
        assert_eq!(typed("sh"), "ශ්");
        assert_eq!(typed("thh"), "ථ්");
        // no entry for m: h is a fresh letter
        assert_eq!(typed("mh"), "ම්හ්");
    }

    #[test]
    fn test_conjuncts_with_joiner() {
        assert_eq!(typed("kr"), "ක්\u{200D}ර්");
        assert_eq!(typed("kra"), "ක්\u{200D}ර");
        assert_eq!(typed("kya"), "ක්\u{200D}ය");
        assert_eq!(typed("kru"), "ක්\u{200D}රු");
    }

    #[test]
    fn test_nasal_mark() {
        let (buf, state) = type_keys(&["z"]);
        assert_eq!(buf.text(), "");
        assert_eq!(state.last_atom(), Some(atoms::NASAL_MARK));

        assert_eq!(typed("zga"), "ඟ");
        assert_eq!(typed("zba"), "ඹ");
        assert_eq!(typed("zdha"), "ඳ");
        // no nasal form for m
        assert_eq!(typed("zma"), "ම");
    }

    #[test]
    fn test_diphthongs() {
        assert_eq!(typed("ai"), "ඓ");
        assert_eq!(typed("au"), "ඖ");
        assert_eq!(typed("ii"), "ඊ");
        assert_eq!(typed("uu"), "ඌ");
        assert_eq!(typed("ee"), "ඒ");
        assert_eq!(typed("oo"), "ඕ");
        assert_eq!(typed("Aa"), "ඈ");
        assert_eq!(typed("Ri"), "ඎ");
        assert_eq!(typed("oa"), "ඔඅ");
    }

    #[test]
    fn test_unmapped_key_passes_through_and_clears() {
        let (buf, state) = type_keys(&["k", "1"]);
        assert_eq!(buf.text(), "ක්1");
        assert!(state.is_clear());
        // next vowel starts fresh instead of attaching to ක
        assert_eq!(typed("k1a"), "ක්1අ");
    }

    #[test]
    fn test_external_move_invalidates_state() {
        let editor = PhoneticEditor::new(SinglishKeymap::new());
        let mut buf = TextBuffer::from_text("xyz ");
        assert!(buf.set_cursor(4));
        let before = buf.units_before_cursor(editor.context_window()).unwrap();
        let t = editor.compose("k", &CompositionState::new(), &before);
        buf.apply(t.erase, &t.text).unwrap();
        assert_eq!(buf.text(), "xyz ක්");

        // user taps into the middle of the text
        assert!(buf.set_cursor(2));
        let before = buf.units_before_cursor(editor.context_window()).unwrap();
        let t = editor.compose("a", &t.state, &before);
        assert_eq!(t.erase, 0);
        assert_eq!(t.text, "අ");
    }

    #[test]
    fn test_fingerprint_tracks_host_text() {
        let (buf, state) = type_keys(&["m", "a", "m", "a", "k", "a"]);
        assert_eq!(buf.text(), "මමක");
        let tail = buf.text_before_cursor(DEFAULT_FINGERPRINT_WINDOW).unwrap();
        assert_eq!(state.fingerprint(), tail);
    }

    #[test]
    fn test_editor_leaves_state_on_host_failure() {
        let mut editor = PhoneticEditor::new(SinglishKeymap::new());
        let mut session = ImeSession::default();
        let mut buf = TextBuffer::new();
        editor.process_key("k", &mut session, &mut buf);
        let saved = session.state().clone();

        buf.detach();
        let result = editor.process_key("a", &mut session, &mut buf);
        assert!(matches!(result, EditorResult::Failed(_)));
        assert_eq!(session.state(), &saved);
    }
}
