//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains the grid model, piece representation, collision detection,
//! rotation, row clearing and the per-update state machine. It has **zero
//! dependencies** on terminal, input, or I/O code, making it:
//!
//! - **Deterministic**: Same random source produces identical games
//! - **Testable**: Every rule is reachable through plain method calls
//! - **Portable**: Can run in any environment (terminal, GUI, headless)
//!
//! # Module Structure
//!
//! - [`shapes`]: The seven catalog shapes and their colors
//! - [`piece`]: The falling piece: position, own shape copy, color
//! - [`grid`]: The playing field with collision testing, locking and row clearing
//! - [`rng`]: Random source trait, seedable LCG and a scripted source for tests
//! - [`game_engine`]: Input and fall-timer state machine
//! - [`snapshot`]: Read-only view handed to the presentation layer
//!
//! # Game Rules
//!
//! - A random shape spawns at `(width / 2 - 1, 0)` and falls one row per interval
//! - Left, right, soft drop and clockwise rotation are reverted if they collide
//! - There is no wall kick and no top wall
//! - A piece locks only when the automatic fall cannot move it
//! - Full rows are removed and replaced with empty rows at the top
//! - The game ends when a freshly spawned piece collides
//!
//! # Example
//!
//! ```
//! use blockfall_core::GameEngine;
//! use blockfall_types::GameAction;
//!
//! let mut game = GameEngine::with_seed(12345);
//!
//! // Apply inputs, then let 500ms of gravity act
//! game.update(500, &[GameAction::MoveLeft, GameAction::Rotate]);
//!
//! assert!(!game.is_game_over());
//! assert_eq!(game.piece().unwrap().y, 1);
//! ```

pub mod game_engine;
pub mod grid;
pub mod piece;
pub mod rng;
pub mod shapes;
pub mod snapshot;

pub use blockfall_types as types;

// Re-export commonly used types for convenience
pub use game_engine::{EngineConfig, GameEngine, LockEvent};
pub use grid::Grid;
pub use piece::{spawn_x, Piece};
pub use rng::{pick_shape, RandomSource, SequenceRng, SimpleRng};
pub use shapes::{color_for, shape_for, shapes, Shape};
pub use snapshot::{GameSnapshot, PieceSnapshot};
