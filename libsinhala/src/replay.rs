//! Replaying key events against an in-memory text field.

use crate::engine::SinhalaEngine;
use libsinhala_core::{KeyEvent, KeyResult, TextBuffer};
use serde::Serialize;
use tracing::{debug, trace};

/// What one key did to the buffer.
#[derive(Debug, Clone, Serialize)]
pub struct StepReport {
    pub key: String,
    pub handled: bool,
    pub erased: usize,
    pub commit: String,
    pub text: String,
}

/// Final state after a replay.
#[derive(Debug, Clone, Serialize)]
pub struct ReplayReport {
    pub text: String,
    pub token: String,
    pub layout: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub steps: Vec<StepReport>,
}

/// Feed `events` to `engine` against `buffer`, recording per-key steps when
/// `record_steps` is set.
pub fn replay(
    engine: &mut SinhalaEngine,
    buffer: &mut TextBuffer,
    events: &[KeyEvent],
    record_steps: bool,
) -> ReplayReport {
    let mut steps = Vec::new();
    for event in events {
        let result = engine.process_key(event.clone(), buffer);
        trace!(?event, ?result, "replayed key");
        if record_steps {
            let context = engine.context();
            steps.push(StepReport {
                key: format!("{:?}", event),
                handled: result == KeyResult::Handled,
                erased: context.erased_units,
                commit: context.commit_text.clone(),
                text: buffer.text(),
            });
        }
    }
    debug!(events = events.len(), text = %buffer.text(), "replay finished");
    ReplayReport {
        text: buffer.text(),
        token: engine.context().current_token.clone(),
        layout: format!("{:?}", engine.session().layout()).to_lowercase(),
        steps,
    }
}
