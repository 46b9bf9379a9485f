//! Wijesekara typewriter layout: Latin key position → Sinhala key label.
//!
//! Labels are fed verbatim to the direct-key composer. Keys without a label
//! (digits, most punctuation) commit as typed.

use phf::phf_map;

static LABELS: phf::Map<&'static str, &'static str> = phf_map! {
    "q" => "ු",
    "w" => "අ",
    "e" => "ැ",
    "r" => "ර",
    "t" => "එ",
    "y" => "හ",
    "u" => "ම",
    "i" => "ස",
    "o" => "ද",
    "p" => "ච",
    "[" => "ඤ",
    "a" => "්",
    "s" => "ි",
    "d" => "ා",
    "f" => "ෙ",
    "g" => "ට",
    "h" => "ය",
    "j" => "ව",
    "k" => "න",
    "l" => "ක",
    ";" => "ත",
    "x" => "ං",
    "c" => "ජ",
    "v" => "ඩ",
    "b" => "ඉ",
    "n" => "බ",
    "m" => "ප",
    "," => "ල",
    "." => "ග",

    "Q" => "ූ",
    "W" => "උ",
    "E" => "ෑ",
    "R" => "ඍ",
    "T" => "ඔ",
    "Y" => "ශ",
    "U" => "ඹ",
    "I" => "ෂ",
    "O" => "ධ",
    "P" => "ඡ",
    "{" => "ඥ",
    "A" => "ෟ",
    "S" => "ී",
    "D" => "ෘ",
    "F" => "ෆ",
    "G" => "ඨ",
    "H" => "\u{0DCA}\u{200D}\u{0DBA}",
    "K" => "ණ",
    "L" => "ඛ",
    ":" => "ථ",
    "X" => "ඞ",
    "C" => "ඣ",
    "V" => "ඪ",
    "B" => "ඊ",
    "N" => "භ",
    "M" => "ඵ",
    "<" => "ළ",
    ">" => "ඝ",
};

/// Character produced by `ch` with shift held, on a US keyboard.
pub fn shifted_key(ch: char) -> char {
    match ch {
        '[' => '{',
        ']' => '}',
        ';' => ':',
        '\'' => '"',
        ',' => '<',
        '.' => '>',
        '/' => '?',
        _ => ch.to_ascii_uppercase(),
    }
}

/// Label printed on the Wijesekara key at `key`'s position.
pub fn label(key: &str) -> Option<&'static str> {
    LABELS.get(key).copied()
}
