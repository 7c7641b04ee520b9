//! Grid module - manages the playing field
//!
//! The grid is a `width x height` matrix where each cell is empty or holds a color.
//! Uses a flat row-major vector sized once at construction; it never resizes.
//! Coordinates: (x, y) where x runs left to right and y runs top to bottom.
//!
//! There is no top wall. Piece cells with `y < 0` never hit occupancy, only the
//! side walls; the spawn/game-over check relies on exactly this behavior.

use crate::piece::Piece;
use crate::types::{Cell, Rgb, GRID_HEIGHT, GRID_WIDTH, MAX_GRID_DIM};

/// The playing field
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    width: u16,
    height: u16,
    /// Flat array of cells, row-major order (y * width + x)
    cells: Vec<Cell>,
}

impl Grid {
    /// Create an empty grid. Each edge is capped at [`MAX_GRID_DIM`].
    pub fn new(width: u16, height: u16) -> Self {
        let (width, height) = (width.min(MAX_GRID_DIM), height.min(MAX_GRID_DIM));
        Self {
            width,
            height,
            cells: vec![None; width as usize * height as usize],
        }
    }

    /// Create an empty 10x20 grid
    pub fn standard() -> Self {
        Self::new(GRID_WIDTH, GRID_HEIGHT)
    }

    /// Calculate flat index from (x, y) coordinates
    #[inline(always)]
    fn index(&self, x: i16, y: i16) -> Option<usize> {
        if x < 0
            || y < 0
            || i32::from(x) >= i32::from(self.width)
            || i32::from(y) >= i32::from(self.height)
        {
            return None;
        }
        Some(y as usize * self.width as usize + x as usize)
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    /// Get cell at position (x, y)
    /// Returns None if out of bounds
    pub fn get(&self, x: i16, y: i16) -> Option<Cell> {
        self.index(x, y).map(|idx| self.cells[idx])
    }

    /// Set cell at position (x, y)
    /// Returns false if out of bounds
    pub fn set(&mut self, x: i16, y: i16, cell: Cell) -> bool {
        match self.index(x, y) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    /// Check if position is occupied (within bounds and filled)
    pub fn is_occupied(&self, x: i16, y: i16) -> bool {
        matches!(self.get(x, y), Some(Some(_)))
    }

    /// Check if a row is completely filled
    pub fn is_row_full(&self, y: usize) -> bool {
        self.row(y)
            .is_some_and(|row| row.iter().all(|cell| cell.is_some()))
    }

    /// Borrow one row, top row is 0
    pub fn row(&self, y: usize) -> Option<&[Cell]> {
        if y >= self.height as usize {
            return None;
        }
        let width = self.width as usize;
        let start = y * width;
        Some(&self.cells[start..start + width])
    }

    /// Rows from top to bottom
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        // chunks_exact(0) panics; a zero-width grid has no visible rows.
        let width = (self.width as usize).max(1);
        self.cells.chunks_exact(width)
    }

    /// Whether any cell of `piece` is out of the side or bottom walls, or overlaps
    /// an occupied cell.
    pub fn collides(&self, piece: &Piece) -> bool {
        piece.blocks().any(|(x, y)| {
            i32::from(y) >= i32::from(self.height)
                || x < 0
                || i32::from(x) >= i32::from(self.width)
                || (y >= 0 && self.is_occupied(x, y))
        })
    }

    /// Write the piece's color into every cell it covers.
    ///
    /// Cells above row 0 are skipped.
    pub fn lock_piece(&mut self, piece: &Piece) {
        let color = piece.color();
        for (x, y) in piece.blocks() {
            if y >= 0 {
                self.set(x, y, Some(color));
            }
        }
    }

    /// Remove every full row and insert as many empty rows at the top.
    ///
    /// Non-full rows keep their relative order. Returns the number of rows cleared.
    /// Single bottom-up two-pointer pass, no allocation.
    pub fn clear_full_rows(&mut self) -> usize {
        let width = self.width as usize;
        let height = self.height as usize;
        let mut cleared = 0;
        let mut write_y = height;

        for read_y in (0..height).rev() {
            if self.is_row_full(read_y) {
                cleared += 1;
            } else {
                write_y -= 1;
                if write_y != read_y {
                    let src_start = read_y * width;
                    self.cells
                        .copy_within(src_start..src_start + width, write_y * width);
                }
            }
        }

        self.cells[..write_y * width].fill(None);
        cleared
    }

    /// Fill a whole row with one color. Returns false if `y` is out of range.
    pub fn fill_row(&mut self, y: usize, color: Rgb) -> bool {
        if y >= self.height as usize {
            return false;
        }
        let width = self.width as usize;
        self.cells[y * width..(y + 1) * width].fill(Some(color));
        true
    }

    /// Number of occupied cells
    pub fn count_occupied(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_some()).count()
    }

    /// Get a reference to the internal cells array
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Clear the entire grid
    pub fn clear(&mut self) {
        self.cells.fill(None);
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self::standard()
    }
}
