//! Key scripts: a compact text form of a key event sequence.
//!
//! Plain characters are typed as they are (space is the space key, newline is
//! enter, ASCII digits come from the number row). Named keys are written in
//! angle brackets: `<bs>`, `<space>`, `<enter>`, `<shift>`, `<lang>`,
//! `<panel>`, `<left>`, `<right>`, and `<sym:ID>` for a symbol-panel key.
//! Anything else in angle brackets is typed literally, since `<` and `>` are
//! keys on the Wijesekara layout.

use libsinhala_core::KeyEvent;
use once_cell::sync::Lazy;
use regex::Regex;

static TOKEN_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"<(bs|space|enter|shift|lang|panel|left|right|sym:(\d+))>")
        .expect("valid key token regex")
});

fn named_key(name: &str, symbol_id: Option<&str>) -> Option<KeyEvent> {
    let event = match name {
        "bs" => KeyEvent::Backspace,
        "space" => KeyEvent::Space,
        "enter" => KeyEvent::Enter,
        "shift" => KeyEvent::Shift,
        "lang" => KeyEvent::SwitchLayout,
        "panel" => KeyEvent::TogglePanel,
        "left" => KeyEvent::Left,
        "right" => KeyEvent::Right,
        _ => KeyEvent::Symbol(symbol_id?.parse().ok()?),
    };
    Some(event)
}

fn push_literal(events: &mut Vec<KeyEvent>, text: &str) {
    for ch in text.chars() {
        events.push(match ch {
            ' ' => KeyEvent::Space,
            '\n' => KeyEvent::Enter,
            '0'..='9' => KeyEvent::Digit(ch),
            _ => KeyEvent::Char(ch),
        });
    }
}

/// Parse a key script into events.
pub fn parse_script(script: &str) -> Vec<KeyEvent> {
    let mut events = Vec::new();
    let mut last = 0;
    for caps in TOKEN_RE.captures_iter(script) {
        let Some(whole) = caps.get(0) else { continue };
        push_literal(&mut events, &script[last..whole.start()]);
        let name = caps.get(1).map_or("", |m| m.as_str());
        match named_key(name, caps.get(2).map(|m| m.as_str())) {
            Some(event) => events.push(event),
            // symbol id out of range
            None => push_literal(&mut events, whole.as_str()),
        }
        last = whole.end();
    }
    push_literal(&mut events, &script[last..]);
    events
}
