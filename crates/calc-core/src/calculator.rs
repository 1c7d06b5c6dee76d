//! Calculator session: engine + history ledger + display state.
//!
//! A renderer drives the session with [`Calculator::press`] and friends and
//! reads back a [`Screen`] via [`Calculator::snapshot`]. It never holds a
//! reference into the session's mutable state.

use serde::Serialize;

use crate::buttons::{
    ButtonDescriptor, ButtonKind, Operator, LABEL_DELETE, LABEL_LOG, LABEL_PERCENT,
};
use crate::engine::Engine;
use crate::history::{HistoryEntry, HistoryLedger};
use crate::storage::KeyValueStore;

/// What a single key press did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PressOutcome {
    /// The expression changed (or was re-evaluated without a record)
    Applied,
    /// The press was ignored (leading operator, log of non-positive, ...)
    Rejected,
    /// A computation completed and was recorded
    Committed(HistoryEntry),
}

/// Everything a renderer needs to draw one frame.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Screen {
    /// Primary display line
    pub display: String,
    /// Raw expression line
    pub expression: String,
    /// History, newest first
    pub history: Vec<HistoryEntry>,
}

#[derive(Debug)]
pub struct Calculator<S: KeyValueStore> {
    engine: Engine,
    ledger: HistoryLedger<S>,
    /// Result shown after `RESULT` until the expression next changes
    shown_result: Option<String>,
}

impl<S: KeyValueStore> Calculator<S> {
    /// Start a session, loading history from `store`.
    pub fn new(store: S) -> Self {
        Self {
            engine: Engine::new(),
            ledger: HistoryLedger::load(store),
            shown_result: None,
        }
    }

    /// Dispatch one key press.
    pub fn press(&mut self, button: &ButtonDescriptor) -> PressOutcome {
        if button.kind == ButtonKind::Evaluate {
            return self.evaluate();
        }

        let before = self.engine.as_str().to_string();
        let outcome = self.apply(button);
        if self.engine.as_str() != before {
            self.shown_result = None;
        }
        tracing::trace!(label = button.label, expression = self.engine.as_str(), "key pressed");
        outcome
    }

    fn apply(&mut self, button: &ButtonDescriptor) -> PressOutcome {
        match button.kind {
            ButtonKind::DigitOrSymbol => {
                self.engine.append_digit_or_symbol(button.label);
                PressOutcome::Applied
            }
            ButtonKind::Operator => {
                let appended = Operator::from_label(button.label)
                    .map(|op| self.engine.append_operator(op))
                    .unwrap_or(false);
                applied_if(appended)
            }
            ButtonKind::Function => match button.label {
                LABEL_DELETE => applied_if(self.engine.delete_last()),
                LABEL_PERCENT => applied_if(self.engine.apply_percent()),
                LABEL_LOG => match self.engine.apply_log10() {
                    Some(commit) => {
                        let entry = HistoryEntry::from(commit);
                        self.ledger.append(entry.clone());
                        PressOutcome::Committed(entry)
                    }
                    None => PressOutcome::Rejected,
                },
                _ => PressOutcome::Rejected,
            },
            ButtonKind::Evaluate => self.evaluate(),
        }
    }

    fn evaluate(&mut self) -> PressOutcome {
        let commit = self.engine.evaluate();
        if commit.is_error() {
            self.engine.reset();
        } else {
            self.engine.set_expression(commit.result.clone());
        }
        self.shown_result = Some(commit.result.clone());

        let entry = HistoryEntry::from(commit);
        tracing::debug!(
            expression = %entry.expression,
            result = %entry.result,
            "evaluated"
        );
        self.ledger.append(entry.clone());
        PressOutcome::Committed(entry)
    }

    /// Empty the expression and reset the display. History is kept.
    pub fn clear_all(&mut self) {
        self.engine.reset();
        self.shown_result = None;
    }

    /// Erase all history, in memory and in the store.
    pub fn clear_history(&mut self) {
        self.ledger.clear();
    }

    /// Replace the expression with the result of history entry `index`
    /// (0 = newest). Returns `false` if there is no such entry.
    pub fn load_entry(&mut self, index: usize) -> bool {
        let Some(entry) = self.ledger.get(index) else {
            return false;
        };
        let result = entry.result.clone();
        self.engine.set_expression(result);
        self.shown_result = None;
        true
    }

    /// Primary display text.
    pub fn display(&self) -> String {
        match &self.shown_result {
            Some(result) => result.clone(),
            None if self.engine.is_empty() => "0".to_string(),
            None => self.engine.as_str().to_string(),
        }
    }

    pub fn expression(&self) -> &str {
        self.engine.as_str()
    }

    pub fn history(&self) -> &[HistoryEntry] {
        self.ledger.entries()
    }

    pub fn into_store(self) -> S {
        self.ledger.into_store()
    }

    pub fn snapshot(&self) -> Screen {
        Screen {
            display: self.display(),
            expression: self.expression().to_string(),
            history: self.history().to_vec(),
        }
    }
}

fn applied_if(changed: bool) -> PressOutcome {
    if changed {
        PressOutcome::Applied
    } else {
        PressOutcome::Rejected
    }
}
