//! Per-frame intent buffer.

use arrayvec::ArrayVec;
use crossterm::event::KeyEvent;

use crate::map::handle_key_event;
use crate::types::GameAction;

/// Most intents kept for a single frame
pub const MAX_INTENTS_PER_FRAME: usize = 32;

/// Intents collected between two engine updates, in arrival order.
///
/// Fixed capacity, so collecting never allocates. Intents past the capacity are
/// dropped.
#[derive(Debug, Clone, Default)]
pub struct IntentBatch {
    actions: ArrayVec<GameAction, MAX_INTENTS_PER_FRAME>,
    dropped: u32,
}

impl IntentBatch {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue an intent. Returns false if the batch is full.
    pub fn push(&mut self, action: GameAction) -> bool {
        if self.actions.try_push(action).is_err() {
            self.dropped = self.dropped.saturating_add(1);
            return false;
        }
        true
    }

    /// Queue the intent for `key`, if it maps to one.
    pub fn push_key(&mut self, key: KeyEvent) -> bool {
        match handle_key_event(key) {
            Some(action) => self.push(action),
            None => false,
        }
    }

    pub fn as_slice(&self) -> &[GameAction] {
        &self.actions
    }

    pub fn len(&self) -> usize {
        self.actions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }

    /// Intents discarded since the last clear.
    pub fn dropped(&self) -> u32 {
        self.dropped
    }

    pub fn clear(&mut self) {
        self.actions.clear();
        self.dropped = 0;
    }
}
