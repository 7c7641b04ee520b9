//! Piece module - the currently falling block
//!
//! A piece is a position plus its own copy of a catalog shape. Moves are applied
//! optimistically; the engine checks the grid afterwards and reverts on collision.

use crate::shapes::{color_for, shape_for, Shape};
use crate::types::{Rgb, ShapeKind};

/// Active falling piece
///
/// `(x, y)` is the top-left corner of the shape's bounding box in grid
/// coordinates. Shape cell `(row, col)` sits at grid `(x + col, y + row)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub kind: ShapeKind,
    pub x: i16,
    pub y: i16,
    shape: Shape,
    color: Rgb,
}

impl Piece {
    /// Create a piece of `kind` at `(x, y)` in its catalog orientation.
    pub fn new(kind: ShapeKind, x: i16, y: i16) -> Self {
        Self {
            kind,
            x,
            y,
            shape: shape_for(kind),
            color: color_for(kind),
        }
    }

    /// Create a piece at the spawn position for a grid of the given width.
    pub fn spawn(kind: ShapeKind, grid_width: u16) -> Self {
        Self::new(kind, spawn_x(grid_width), 0)
    }

    pub fn shape(&self) -> &Shape {
        &self.shape
    }

    /// Color bound at creation. Rotation never changes it.
    pub fn color(&self) -> Rgb {
        self.color
    }

    /// Shift by `(dx, dy)`. No bounds checking.
    pub fn translate(&mut self, dx: i16, dy: i16) {
        self.x += dx;
        self.y += dy;
    }

    /// Replace the shape with its clockwise rotation and return the previous shape.
    ///
    /// The rotation is applied immediately; callers restore the returned shape with
    /// [`Piece::restore_shape`] if the new placement is not allowed.
    pub fn rotate_clockwise(&mut self) -> Shape {
        let previous = self.shape;
        self.shape = previous.rotated_cw();
        previous
    }

    pub fn restore_shape(&mut self, shape: Shape) {
        self.shape = shape;
    }

    /// Absolute grid coordinates `(x, y)` of every occupied cell.
    pub fn blocks(&self) -> impl Iterator<Item = (i16, i16)> {
        let (x, y) = (self.x, self.y);
        self.shape
            .cells()
            .map(move |(r, c)| (x + c as i16, y + r as i16))
    }
}

/// Spawn column: `grid_width / 2 - 1`
pub fn spawn_x(grid_width: u16) -> i16 {
    (grid_width / 2) as i16 - 1
}
