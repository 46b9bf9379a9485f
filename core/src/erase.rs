//! Code-point and joiner aware erasing.
//!
//! [`erase_one`] is backspace: one visual unit per call, where a surrogate pair
//! is one unit and a zero-width joiner is never left dangling at the cursor.
//! [`erase_count`] removes an exact number of raw units, for callers that know
//! precisely what they emitted.

use crate::host::{HostError, TextHost};

/// Zero-width joiner as a UTF-16 unit.
pub const ZWJ_UNIT: u16 = 0x200D;

/// Initial lookback for [`erase_one`]; doubled while a joiner chain may
/// continue past it.
const ERASE_LOOKBACK: usize = 16;

/// Length of the last code point in `units`: 2 for a surrogate pair, 1
/// otherwise, 0 when empty.
pub fn trailing_unit_len(units: &[u16]) -> usize {
    match units {
        [] => 0,
        [.., high, low]
            if (0xD800..=0xDBFF).contains(high) && (0xDC00..=0xDFFF).contains(low) =>
        {
            2
        }
        _ => 1,
    }
}

/// Units one backspace removes from the end of `units`.
///
/// Deletes the last code point, then keeps deleting while the unit left at
/// the cursor is a zero-width joiner.
pub fn plan_erase_one(units: &[u16]) -> usize {
    let mut end = units.len();
    loop {
        let step = trailing_unit_len(&units[..end]);
        if step == 0 {
            break;
        }
        end -= step;
        if end == 0 || units[end - 1] != ZWJ_UNIT {
            break;
        }
    }
    units.len() - end
}

/// Backspace once. Returns the number of units removed.
pub fn erase_one<H: TextHost + ?Sized>(host: &mut H) -> Result<usize, HostError> {
    let mut window = ERASE_LOOKBACK;
    loop {
        let units = host.units_before_cursor(window)?;
        let count = plan_erase_one(&units);
        // Consuming the whole window means a joiner chain may run further back.
        if count < units.len() || units.len() < window {
            if count > 0 {
                host.delete_before(count)?;
            }
            return Ok(count);
        }
        window *= 2;
    }
}

/// Remove exactly `n` raw units, without surrogate or joiner handling.
pub fn erase_count<H: TextHost + ?Sized>(host: &mut H, n: usize) -> Result<usize, HostError> {
    if n > 0 {
        host.delete_before(n)?;
    }
    Ok(n)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::buffer::TextBuffer;

    fn units(s: &str) -> Vec<u16> {
        s.encode_utf16().collect()
    }

    #[test]
    fn test_trailing_unit_len() {
        assert_eq!(trailing_unit_len(&[]), 0);
        assert_eq!(trailing_unit_len(&units("ක")), 1);
        assert_eq!(trailing_unit_len(&units("a😀")), 2);
        // Lone low surrogate is one unit
        assert_eq!(trailing_unit_len(&[0x61, 0xDC00]), 1);
    }

    #[test]
    fn test_plan_removes_dangling_joiner() {
        // ක් + ZWJ + ර : removing ර exposes the joiner, which goes too
        assert_eq!(plan_erase_one(&units("ක්\u{200D}ර")), 2);
        assert_eq!(plan_erase_one(&units("ක්\u{200D}\u{200D}ර")), 3);
        assert_eq!(plan_erase_one(&units("කා")), 1);
        assert_eq!(plan_erase_one(&units("\u{200D}x")), 2);
        assert_eq!(plan_erase_one(&[]), 0);
    }

    #[test]
    fn test_erase_one_surrogate_pair() {
        let mut buf = TextBuffer::from_text("ක😀");
        assert_eq!(erase_one(&mut buf).unwrap(), 2);
        assert_eq!(buf.text(), "ක");
    }

    #[test]
    fn test_erase_one_on_empty_buffer() {
        let mut buf = TextBuffer::new();
        assert_eq!(erase_one(&mut buf).unwrap(), 0);
    }

    #[test]
    fn test_erase_one_long_joiner_chain() {
        let text = format!("ක{}ර", "\u{200D}".repeat(40));
        let mut buf = TextBuffer::from_text(&text);
        assert_eq!(erase_one(&mut buf).unwrap(), 41);
        assert_eq!(buf.text(), "ක");
    }

    #[test]
    fn test_erase_count_is_raw() {
        let mut buf = TextBuffer::from_text("a😀");
        assert_eq!(erase_count(&mut buf, 1).unwrap(), 1);
        assert_eq!(buf.len(), 2);
    }

    #[test]
    fn test_erase_detached() {
        let mut buf = TextBuffer::from_text("ab");
        buf.detach();
        assert_eq!(erase_one(&mut buf), Err(HostError::Unavailable));
    }
}
