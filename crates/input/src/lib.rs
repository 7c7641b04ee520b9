//! Terminal input module (engine-facing).
//!
//! This module is intentionally independent of any UI framework beyond key
//! decoding. It maps `crossterm` key events into [`crate::types::GameAction`]
//! intents and session commands (quit, restart), and buffers a frame's worth
//! of intents for the engine.

pub mod batch;
pub mod map;

pub use blockfall_types as types;

pub use batch::{IntentBatch, MAX_INTENTS_PER_FRAME};
pub use map::{handle_key_event, session_command, should_quit, SessionCommand};
