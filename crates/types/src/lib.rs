//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (core logic, terminal rendering, input mapping).
//!
//! # Play Field Dimensions
//!
//! The grid is derived from a play-field size in pixels and a fixed block size:
//!
//! - **Play field**: 300 x 600 px
//! - **Block**: 30 px
//! - **Grid**: 10 columns (indexed 0-9) x 20 rows (indexed 0-19)
//! - **Spawn position**: `(GRID_WIDTH / 2 - 1, 0)`, i.e. `(4, 0)` on the standard grid
//! - **Largest grid**: `MAX_GRID_DIM` cells per edge
//!
//! # Timing Constants
//!
//! Timing values are in milliseconds:
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `FRAME_MS` | 16 | Runner frame cadence (~60 FPS) |
//! | `DEFAULT_FALL_INTERVAL_MS` | 500 | Time between automatic one-row falls |
//!
//! # Examples
//!
//! ```
//! use blockfall_types::{GameAction, ShapeKind, GRID_HEIGHT, GRID_WIDTH};
//!
//! let kind = ShapeKind::from_str("t").unwrap();
//! assert_eq!(kind, ShapeKind::T);
//! assert_eq!(kind.index(), 1);
//!
//! let action = GameAction::from_str("moveLeft").unwrap();
//! assert_eq!(action, GameAction::MoveLeft);
//!
//! assert_eq!(GRID_WIDTH, 10);
//! assert_eq!(GRID_HEIGHT, 20);
//! ```

/// Play-field width in pixels
pub const PLAYFIELD_WIDTH_PX: u16 = 300;

/// Play-field height in pixels
pub const PLAYFIELD_HEIGHT_PX: u16 = 600;

/// Edge length of one block in pixels
pub const BLOCK_SIZE_PX: u16 = 30;

/// Grid width in cells (10 columns)
pub const GRID_WIDTH: u16 = PLAYFIELD_WIDTH_PX / BLOCK_SIZE_PX;

/// Grid height in cells (20 rows)
pub const GRID_HEIGHT: u16 = PLAYFIELD_HEIGHT_PX / BLOCK_SIZE_PX;

/// Runner frame interval in milliseconds (16ms ≈ 60 FPS)
pub const FRAME_MS: u32 = 16;

/// Default automatic fall interval (500ms per row)
pub const DEFAULT_FALL_INTERVAL_MS: u32 = 500;

/// Largest row or column count of any shape matrix
pub const MAX_SHAPE_DIM: usize = 4;

/// Largest grid edge in cells. Piece coordinates are `i16`.
pub const MAX_GRID_DIM: u16 = 1024;

/// Derive grid dimensions `(width, height)` in cells from a pixel size.
///
/// Partial blocks are dropped. Returns `None` when `block_px` is zero.
///
/// # Examples
///
/// ```
/// use blockfall_types::grid_dims_from_px;
///
/// assert_eq!(grid_dims_from_px(300, 600, 30), Some((10, 20)));
/// assert_eq!(grid_dims_from_px(310, 615, 30), Some((10, 20)));
/// assert_eq!(grid_dims_from_px(300, 600, 0), None);
/// ```
pub fn grid_dims_from_px(width_px: u16, height_px: u16, block_px: u16) -> Option<(u16, u16)> {
    if block_px == 0 {
        return None;
    }
    Some((width_px / block_px, height_px / block_px))
}

/// 24-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// A cell on the grid
///
/// - `None`: Empty cell
/// - `Some(Rgb)`: Cell occupied by a locked block of that color
pub type Cell = Option<Rgb>;

/// The seven shape kinds, in catalog order
///
/// The discriminant order (I, T, Z, S, O, L, J) is the catalog index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    I,
    T,
    Z,
    S,
    O,
    L,
    J,
}

impl ShapeKind {
    /// All kinds in catalog order
    pub const ALL: [ShapeKind; 7] = [
        ShapeKind::I,
        ShapeKind::T,
        ShapeKind::Z,
        ShapeKind::S,
        ShapeKind::O,
        ShapeKind::L,
        ShapeKind::J,
    ];

    /// Catalog index of this kind (0..7)
    pub fn index(self) -> usize {
        self as usize
    }

    /// Kind at a catalog index
    ///
    /// # Examples
    ///
    /// ```
    /// use blockfall_types::ShapeKind;
    ///
    /// assert_eq!(ShapeKind::from_index(4), Some(ShapeKind::O));
    /// assert_eq!(ShapeKind::from_index(7), None);
    /// ```
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Parse shape kind from string (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use blockfall_types::ShapeKind;
    ///
    /// assert_eq!(ShapeKind::from_str("i"), Some(ShapeKind::I));
    /// assert_eq!(ShapeKind::from_str("O"), Some(ShapeKind::O));
    /// assert_eq!(ShapeKind::from_str("unknown"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "i" => Some(ShapeKind::I),
            "t" => Some(ShapeKind::T),
            "z" => Some(ShapeKind::Z),
            "s" => Some(ShapeKind::S),
            "o" => Some(ShapeKind::O),
            "l" => Some(ShapeKind::L),
            "j" => Some(ShapeKind::J),
            _ => None,
        }
    }

    /// Convert to lowercase string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            ShapeKind::I => "i",
            ShapeKind::T => "t",
            ShapeKind::Z => "z",
            ShapeKind::S => "s",
            ShapeKind::O => "o",
            ShapeKind::L => "l",
            ShapeKind::J => "j",
        }
    }
}

/// Input intents the input layer feeds into the engine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Move piece one cell left
    MoveLeft,
    /// Move piece one cell right
    MoveRight,
    /// Move piece one cell down; never locks on its own
    SoftDrop,
    /// Rotate piece 90° clockwise
    Rotate,
}

impl GameAction {
    /// Parse action from string (case-insensitive camelCase)
    ///
    /// # Examples
    ///
    /// ```
    /// use blockfall_types::GameAction;
    ///
    /// assert_eq!(GameAction::from_str("moveLeft"), Some(GameAction::MoveLeft));
    /// assert_eq!(GameAction::from_str("ROTATE"), Some(GameAction::Rotate));
    /// assert_eq!(GameAction::from_str("hardDrop"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "moveleft" => Some(GameAction::MoveLeft),
            "moveright" => Some(GameAction::MoveRight),
            "softdrop" => Some(GameAction::SoftDrop),
            "rotate" => Some(GameAction::Rotate),
            _ => None,
        }
    }

    /// Convert to camelCase string
    pub fn as_str(&self) -> &'static str {
        match self {
            GameAction::MoveLeft => "moveLeft",
            GameAction::MoveRight => "moveRight",
            GameAction::SoftDrop => "softDrop",
            GameAction::Rotate => "rotate",
        }
    }
}

/// Lifecycle of one game session. `GameOver` is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum GameStatus {
    #[default]
    Running,
    GameOver,
}

impl GameStatus {
    pub fn is_running(self) -> bool {
        self == GameStatus::Running
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            GameStatus::Running => "running",
            GameStatus::GameOver => "game_over",
        }
    }
}
