//! IME engine with session management and key event processing.
//!
//! `ImeEngine` owns the editors, the session and the context, and routes each
//! key event by the active layout: Singlish keys go to the phonetic editor,
//! Wijesekara keys are translated to their labels and go to the direct
//! editor, and everything else (English, the symbol panel, digits) is
//! committed verbatim. After each key the platform reads `context()`.

use crate::catalog;
use crate::config::{Config, Layout};
use crate::context::{current_token, ImeContext, InputPurpose};
use crate::editor::{DirectEditor, Editor, EditorResult, PhoneticEditor};
use crate::erase::erase_one;
use crate::host::{HostError, TextHost};
use crate::keymap::{wijesekara, Keymap};
use crate::session::ImeSession;
use tracing::{debug, warn};

/// Key event types that the IME can process.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyEvent {
    /// Letter key (shift is applied by the engine)
    Char(char),
    /// Label committed as-is (emoji, multi-character keys)
    Text(String),
    /// Number row key
    Digit(char),
    /// Symbol panel key, by symbol id
    Symbol(u32),
    Space,
    Enter,
    Backspace,
    /// Advance the shift cycle
    Shift,
    /// Language key: next enabled layout
    SwitchLayout,
    /// Show or hide the symbol panel
    TogglePanel,
    /// Left arrow key
    Left,
    /// Right arrow key
    Right,
}

/// Result of processing a key event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyResult {
    /// Key was handled by the IME
    Handled,
    /// Key was not handled (pass through to application)
    NotHandled,
}

/// IME engine with session management.
pub struct ImeEngine<K: Keymap> {
    /// Singlish editor
    phonetic_editor: PhoneticEditor<K>,

    /// Wijesekara editor
    direct_editor: DirectEditor,

    /// Session state
    session: ImeSession,

    /// Context for platform communication
    context: ImeContext,

    config: Config,
}

impl<K: Keymap> ImeEngine<K> {
    /// Create a new IME engine using `keymap` for phonetic input.
    pub fn new(keymap: K, config: Config) -> Self {
        let mut context = ImeContext::new();
        context.auxiliary_text = config.layout.indicator().to_string();
        Self {
            phonetic_editor: PhoneticEditor::with_fingerprint_window(
                keymap,
                config.fingerprint_window,
            ),
            direct_editor: DirectEditor::new(),
            session: ImeSession::new(config.layout),
            context,
            config,
        }
    }

    /// Get a reference to the context for reading IME state.
    pub fn context(&self) -> &ImeContext {
        &self.context
    }

    /// Get a mutable reference to the context.
    pub fn context_mut(&mut self) -> &mut ImeContext {
        &mut self.context
    }

    /// Get a reference to the session.
    pub fn session(&self) -> &ImeSession {
        &self.session
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Reset the IME to initial state (new field, session restart).
    /// Layout and shift survive.
    pub fn reset(&mut self) {
        self.session.clear();
        self.context.clear();
        self.context.current_token.clear();
    }

    /// Tell the engine what kind of field is being edited.
    pub fn set_input_purpose(&mut self, purpose: InputPurpose) {
        self.context.set_input_purpose(purpose);
    }

    /// Activate `layout` directly, bypassing the language-key cycle.
    pub fn set_layout(&mut self, layout: Layout) {
        debug!(from = ?self.session.layout(), to = ?layout, "layout switch");
        self.session.set_layout(layout);
        self.context.auxiliary_text = layout.indicator().to_string();
    }

    /// Process a key event against `host`.
    ///
    /// Returns `KeyResult::NotHandled` when the host could not be reached (the
    /// key is skipped and the composition left as it was) or when the key has
    /// nothing to act on, such as backspace at the start of the field.
    pub fn process_key(&mut self, key: KeyEvent, host: &mut dyn TextHost) -> KeyResult {
        self.context.clear();

        match key {
            KeyEvent::Char(ch) => self.process_char(ch, host),
            KeyEvent::Text(text) => self.commit_verbatim(&text, host),
            KeyEvent::Digit(ch) => self.commit_verbatim(ch.encode_utf8(&mut [0; 4]), host),
            KeyEvent::Symbol(id) => match catalog::symbol(id) {
                Some(symbol) => self.commit_verbatim(symbol.text, host),
                None => {
                    debug!(id, "unknown symbol id");
                    KeyResult::NotHandled
                }
            },
            KeyEvent::Space => {
                if let Err(e) = host.insert(" ") {
                    return host_failed("space", e);
                }
                self.context.commit_text.push(' ');
                self.session.clear();
                self.context.current_token.clear();
                KeyResult::Handled
            }
            KeyEvent::Enter => {
                if let Err(e) = host.perform_action() {
                    return host_failed("enter", e);
                }
                self.session.clear();
                self.context.current_token.clear();
                KeyResult::Handled
            }
            KeyEvent::Backspace => match erase_one(host) {
                Ok(0) => {
                    self.session.clear();
                    KeyResult::NotHandled
                }
                Ok(erased) => {
                    self.context.erased_units = erased;
                    self.session.clear();
                    self.refresh_token(host);
                    KeyResult::Handled
                }
                Err(e) => host_failed("backspace", e),
            },
            KeyEvent::Shift => {
                self.session.set_shift(self.session.shift().next());
                KeyResult::Handled
            }
            KeyEvent::SwitchLayout => {
                let next = self.config.next_layout(self.session.layout());
                self.set_layout(next);
                KeyResult::Handled
            }
            KeyEvent::TogglePanel => {
                self.session.toggle_symbols();
                KeyResult::Handled
            }
            KeyEvent::Left => self.move_cursor(-1, host),
            KeyEvent::Right => self.move_cursor(1, host),
        }
    }

    fn process_char(&mut self, ch: char, host: &mut dyn TextHost) -> KeyResult {
        let key: String = match self.session.layout() {
            _ if !self.session.shift().is_active() => ch.to_string(),
            // shifted punctuation carries its own labels
            Layout::Wijesekara if !self.session.symbols_active() => {
                wijesekara::shifted_key(ch).to_string()
            }
            _ => ch.to_uppercase().collect(),
        };

        let result = match self.session.layout() {
            _ if self.session.symbols_active() => return self.commit_verbatim(&key, host),
            Layout::English => return self.commit_verbatim(&key, host),
            Layout::Singlish => self
                .phonetic_editor
                .process_key(&key, &mut self.session, host),
            Layout::Wijesekara => {
                let label = wijesekara::label(&key).unwrap_or(key.as_str());
                self.direct_editor.process_key(label, &mut self.session, host)
            }
        };

        match result {
            EditorResult::Commit { text, erased } => {
                self.context.commit_text = text;
                self.context.erased_units = erased;
                if self.config.auto_unshift {
                    self.session.consume_shift();
                }
                self.refresh_token(host);
                KeyResult::Handled
            }
            EditorResult::Failed(e) => host_failed("compose", e),
        }
    }

    /// Insert `text` as-is. Ends any composition in progress.
    fn commit_verbatim(&mut self, text: &str, host: &mut dyn TextHost) -> KeyResult {
        if let Err(e) = host.insert(text) {
            return host_failed("commit", e);
        }
        self.context.commit_text = text.to_string();
        self.session.clear();
        if self.config.auto_unshift {
            self.session.consume_shift();
        }
        self.refresh_token(host);
        KeyResult::Handled
    }

    fn move_cursor(&mut self, delta: isize, host: &mut dyn TextHost) -> KeyResult {
        match host.move_cursor(delta) {
            Ok(()) => {
                self.refresh_token(host);
                KeyResult::Handled
            }
            Err(e) => host_failed("cursor move", e),
        }
    }

    /// Re-read the token before the cursor for the suggestion collaborator.
    fn refresh_token(&mut self, host: &dyn TextHost) {
        if !self.config.suggestions_enabled || !self.context.suggestions_allowed() {
            self.context.current_token.clear();
            return;
        }
        match host.text_before_cursor(self.config.token_window) {
            Ok(before) => self.context.current_token = current_token(&before),
            Err(e) => {
                warn!(error = %e, "could not read token before cursor");
                self.context.current_token.clear();
            }
        }
    }
}

fn host_failed(op: &'static str, error: HostError) -> KeyResult {
    warn!(op, error = %error, "host unavailable; key skipped");
    KeyResult::NotHandled
}
