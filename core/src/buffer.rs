//! In-memory text field implementing [`TextHost`].
//!
//! Stores text as UTF-16 with a cursor, like a platform text field. Tests and
//! the replay CLI drive the engine against it; `detach()` simulates a lost
//! connection.

use crate::host::{HostError, TextHost};

fn is_high_surrogate(unit: u16) -> bool {
    (0xD800..=0xDBFF).contains(&unit)
}

fn is_low_surrogate(unit: u16) -> bool {
    (0xDC00..=0xDFFF).contains(&unit)
}

/// UTF-16 text buffer with cursor tracking.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextBuffer {
    units: Vec<u16>,
    cursor: usize, // unit offset
    attached: bool,
}

impl TextBuffer {
    /// Create a new empty, attached buffer.
    pub fn new() -> Self {
        Self {
            units: Vec::new(),
            cursor: 0,
            attached: true,
        }
    }

    /// Create a buffer holding `text` with the cursor at the end.
    pub fn from_text(text: &str) -> Self {
        let units: Vec<u16> = text.encode_utf16().collect();
        let cursor = units.len();
        Self {
            units,
            cursor,
            attached: true,
        }
    }

    /// The whole buffer, decoded.
    pub fn text(&self) -> String {
        String::from_utf16_lossy(&self.units)
    }

    /// Cursor position (unit offset).
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Length in UTF-16 units.
    pub fn len(&self) -> usize {
        self.units.len()
    }

    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }

    pub fn clear(&mut self) {
        self.units.clear();
        self.cursor = 0;
    }

    pub fn is_attached(&self) -> bool {
        self.attached
    }

    /// Drop the connection; every host call fails until `attach()`.
    pub fn detach(&mut self) {
        self.attached = false;
    }

    pub fn attach(&mut self) {
        self.attached = true;
    }

    /// Set the cursor. Fails if `pos` is past the end or splits a surrogate pair.
    pub fn set_cursor(&mut self, pos: usize) -> bool {
        if pos > self.units.len() {
            return false;
        }
        if pos > 0
            && pos < self.units.len()
            && is_low_surrogate(self.units[pos])
            && is_high_surrogate(self.units[pos - 1])
        {
            return false;
        }
        self.cursor = pos;
        true
    }

    /// Move cursor left by one code point.
    pub fn move_left(&mut self) -> bool {
        if self.cursor == 0 {
            return false;
        }
        let mut prev = self.cursor - 1;
        if prev > 0
            && is_low_surrogate(self.units[prev])
            && is_high_surrogate(self.units[prev - 1])
        {
            prev -= 1;
        }
        self.cursor = prev;
        true
    }

    /// Move cursor right by one code point.
    pub fn move_right(&mut self) -> bool {
        if self.cursor >= self.units.len() {
            return false;
        }
        let mut next = self.cursor + 1;
        if next < self.units.len()
            && is_high_surrogate(self.units[self.cursor])
            && is_low_surrogate(self.units[next])
        {
            next += 1;
        }
        self.cursor = next;
        true
    }

    fn ensure_attached(&self) -> Result<(), HostError> {
        if self.attached {
            Ok(())
        } else {
            Err(HostError::Unavailable)
        }
    }
}

impl Default for TextBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl TextHost for TextBuffer {
    fn units_before_cursor(&self, n: usize) -> Result<Vec<u16>, HostError> {
        self.ensure_attached()?;
        let start = self.cursor.saturating_sub(n);
        Ok(self.units[start..self.cursor].to_vec())
    }

    /// Deleting past the start of the buffer clamps.
    fn delete_before(&mut self, units: usize) -> Result<(), HostError> {
        self.ensure_attached()?;
        let start = self.cursor.saturating_sub(units);
        self.units.drain(start..self.cursor);
        self.cursor = start;
        Ok(())
    }

    fn insert(&mut self, text: &str) -> Result<(), HostError> {
        self.ensure_attached()?;
        let encoded: Vec<u16> = text.encode_utf16().collect();
        let len = encoded.len();
        self.units.splice(self.cursor..self.cursor, encoded);
        self.cursor += len;
        Ok(())
    }

    fn move_cursor(&mut self, delta: isize) -> Result<(), HostError> {
        self.ensure_attached()?;
        for _ in 0..delta.unsigned_abs() {
            let moved = if delta < 0 { self.move_left() } else { self.move_right() };
            if !moved {
                break;
            }
        }
        Ok(())
    }

    /// Single splice, so the edit is atomic.
    fn apply(&mut self, erase: usize, text: &str) -> Result<(), HostError> {
        self.ensure_attached()?;
        let start = self.cursor.saturating_sub(erase);
        let encoded: Vec<u16> = text.encode_utf16().collect();
        let len = encoded.len();
        self.units.splice(start..self.cursor, encoded);
        self.cursor = start + len;
        Ok(())
    }
}
