//! Read-only game state handed to the presentation layer.

use crate::piece::Piece;
use crate::shapes::Shape;
use crate::types::{Cell, GameStatus, Rgb, ShapeKind};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PieceSnapshot {
    pub kind: ShapeKind,
    pub x: i16,
    pub y: i16,
    pub shape: Shape,
    pub color: Rgb,
}

impl PieceSnapshot {
    /// Absolute grid coordinates `(x, y)` of every occupied cell.
    pub fn blocks(&self) -> impl Iterator<Item = (i16, i16)> {
        let (x, y) = (self.x, self.y);
        self.shape
            .cells()
            .map(move |(r, c)| (x + c as i16, y + r as i16))
    }
}

impl From<Piece> for PieceSnapshot {
    fn from(value: Piece) -> Self {
        Self {
            kind: value.kind,
            x: value.x,
            y: value.y,
            shape: *value.shape(),
            color: value.color(),
        }
    }
}

/// Read-only copy of everything the presentation layer draws.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct GameSnapshot {
    pub width: u16,
    pub height: u16,
    /// Row-major cells, `height * width` long
    pub cells: Vec<Cell>,
    pub piece: Option<PieceSnapshot>,
    pub status: GameStatus,
    pub pieces_spawned: u32,
    pub rows_cleared: u32,
}

impl GameSnapshot {
    /// Cell at `(x, y)`, `None` when empty or out of range.
    pub fn cell(&self, x: u16, y: u16) -> Cell {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.cells
            .get(y as usize * self.width as usize + x as usize)
            .copied()
            .flatten()
    }

    pub fn is_game_over(&self) -> bool {
        self.status == GameStatus::GameOver
    }
}
