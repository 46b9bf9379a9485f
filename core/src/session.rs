//! IME session management.
//!
//! `ImeSession` holds everything that persists across key events within one
//! editing session: the composition state, the active layout, shift, and
//! whether the symbol panel is showing. It is owned by one engine; nothing
//! here is process-global.

use crate::config::Layout;
use crate::state::CompositionState;

/// Shift key cycle: off → one-shot → locked → off.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShiftState {
    Off,
    /// Applies to the next character only
    Once,
    Locked,
}

impl Default for ShiftState {
    fn default() -> Self {
        Self::Off
    }
}

impl ShiftState {
    pub fn next(self) -> Self {
        match self {
            ShiftState::Off => ShiftState::Once,
            ShiftState::Once => ShiftState::Locked,
            ShiftState::Locked => ShiftState::Off,
        }
    }

    pub fn is_active(self) -> bool {
        self != ShiftState::Off
    }
}

#[derive(Debug, Clone)]
pub struct ImeSession {
    state: CompositionState,
    layout: Layout,
    shift: ShiftState,
    symbols_active: bool,
}

impl ImeSession {
    /// Create a new session on `layout`.
    pub fn new(layout: Layout) -> Self {
        Self {
            state: CompositionState::new(),
            layout,
            shift: ShiftState::Off,
            symbols_active: false,
        }
    }

    pub fn state(&self) -> &CompositionState {
        &self.state
    }

    pub fn set_state(&mut self, state: CompositionState) {
        self.state = state;
    }

    pub fn layout(&self) -> Layout {
        self.layout
    }

    /// Switch layout. Any composition in progress is dropped.
    pub fn set_layout(&mut self, layout: Layout) {
        self.layout = layout;
        self.state.clear();
    }

    pub fn shift(&self) -> ShiftState {
        self.shift
    }

    pub fn set_shift(&mut self, shift: ShiftState) {
        self.shift = shift;
    }

    /// Drop a one-shot shift after it has been used.
    pub fn consume_shift(&mut self) {
        if self.shift == ShiftState::Once {
            self.shift = ShiftState::Off;
        }
    }

    pub fn symbols_active(&self) -> bool {
        self.symbols_active
    }

    pub fn toggle_symbols(&mut self) {
        self.symbols_active = !self.symbols_active;
    }

    /// Reset composition state; layout and shift survive.
    pub fn clear(&mut self) {
        self.state.clear();
    }
}

impl Default for ImeSession {
    fn default() -> Self {
        Self::new(Layout::default())
    }
}
