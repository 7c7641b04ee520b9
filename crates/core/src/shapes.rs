//! Shapes module - shape matrices and the fixed seven-entry catalog
//!
//! A [`Shape`] is a small binary matrix (at most 4x4) stored as a bit set, so it is
//! `Copy` and never allocates. Cell `(row, col)` is bit `row * MAX_SHAPE_DIM + col`;
//! bits outside `rows x cols` are always zero, which keeps derived equality exact.
//!
//! The catalog is immutable. Pieces take a copy of a catalog entry and rotate
//! their own copy.

use crate::types::{Rgb, ShapeKind, MAX_SHAPE_DIM};

/// Binary occupancy matrix in a piece's local frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Shape {
    rows: u8,
    cols: u8,
    bits: u16,
}

impl Shape {
    /// Build a shape from a fixed-size matrix at compile time.
    ///
    /// Non-zero entries are occupied.
    pub const fn from_matrix<const R: usize, const C: usize>(matrix: [[u8; C]; R]) -> Self {
        assert!(R > 0 && R <= MAX_SHAPE_DIM);
        assert!(C > 0 && C <= MAX_SHAPE_DIM);

        let mut bits = 0u16;
        let mut r = 0;
        while r < R {
            let mut c = 0;
            while c < C {
                if matrix[r][c] != 0 {
                    bits |= 1 << (r * MAX_SHAPE_DIM + c);
                }
                c += 1;
            }
            r += 1;
        }

        Self {
            rows: R as u8,
            cols: C as u8,
            bits,
        }
    }

    /// Build a shape from row slices.
    ///
    /// Returns `None` for empty, ragged, or oversized input.
    ///
    /// # Examples
    ///
    /// ```
    /// use blockfall_core::Shape;
    ///
    /// let t = Shape::from_rows(&[&[1, 1, 1], &[0, 1, 0]]).unwrap();
    /// assert_eq!((t.rows(), t.cols()), (2, 3));
    /// assert!(Shape::from_rows(&[&[1, 1], &[1]]).is_none());
    /// ```
    pub fn from_rows(rows: &[&[u8]]) -> Option<Self> {
        let cols = rows.first()?.len();
        if rows.len() > MAX_SHAPE_DIM || cols == 0 || cols > MAX_SHAPE_DIM {
            return None;
        }
        if rows.iter().any(|row| row.len() != cols) {
            return None;
        }

        let mut bits = 0u16;
        for (r, row) in rows.iter().enumerate() {
            for (c, &v) in row.iter().enumerate() {
                if v != 0 {
                    bits |= Self::bit(r, c);
                }
            }
        }

        Some(Self {
            rows: rows.len() as u8,
            cols: cols as u8,
            bits,
        })
    }

    /// Treat a flat list as a single-row matrix.
    pub fn from_row(row: &[u8]) -> Option<Self> {
        Self::from_rows(&[row])
    }

    #[inline(always)]
    fn bit(r: usize, c: usize) -> u16 {
        1 << (r * MAX_SHAPE_DIM + c)
    }

    pub fn rows(&self) -> usize {
        self.rows as usize
    }

    pub fn cols(&self) -> usize {
        self.cols as usize
    }

    /// Whether local cell `(row, col)` is occupied. Out-of-range cells are empty.
    pub fn is_filled(&self, row: usize, col: usize) -> bool {
        row < self.rows() && col < self.cols() && self.bits & Self::bit(row, col) != 0
    }

    /// Number of occupied cells
    pub fn count(&self) -> u32 {
        self.bits.count_ones()
    }

    /// Occupied cells as `(row, col)` pairs, row-major.
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize)> {
        let shape = *self;
        (0..shape.rows()).flat_map(move |r| {
            (0..shape.cols()).filter_map(move |c| shape.is_filled(r, c).then_some((r, c)))
        })
    }

    /// Clockwise quarter turn: `rotated[c][rows - 1 - r] = self[r][c]`.
    ///
    /// The result has `cols` rows and `rows` columns.
    pub fn rotated_cw(&self) -> Self {
        let rows = self.rows();
        let mut bits = 0u16;
        for (r, c) in self.cells() {
            bits |= Self::bit(c, rows - 1 - r);
        }
        Self {
            rows: self.cols,
            cols: self.rows,
            bits,
        }
    }

    /// Copy out as nested rows of 0/1, mostly for tests and debugging.
    pub fn to_rows(&self) -> Vec<Vec<u8>> {
        (0..self.rows())
            .map(|r| (0..self.cols()).map(|c| self.is_filled(r, c) as u8).collect())
            .collect()
    }
}

const CATALOG: [Shape; 7] = [
    // I
    Shape::from_matrix([[1, 1, 1, 1]]),
    // T
    Shape::from_matrix([[1, 1, 1], [0, 1, 0]]),
    // Z
    Shape::from_matrix([[1, 1, 0], [0, 1, 1]]),
    // S
    Shape::from_matrix([[0, 1, 1], [1, 1, 0]]),
    // O
    Shape::from_matrix([[1, 1], [1, 1]]),
    // L
    Shape::from_matrix([[1, 1, 1], [1, 0, 0]]),
    // J
    Shape::from_matrix([[1, 1, 1], [0, 0, 1]]),
];

const COLORS: [Rgb; 7] = [
    Rgb::new(0, 255, 255),   // I
    Rgb::new(128, 0, 128),   // T
    Rgb::new(255, 0, 0),     // Z
    Rgb::new(0, 255, 0),     // S
    Rgb::new(255, 255, 0),   // O
    Rgb::new(255, 165, 0),   // L
    Rgb::new(0, 0, 255),     // J
];

/// The seven catalog shapes, indexed by [`ShapeKind::index`].
pub fn shapes() -> &'static [Shape; 7] {
    &CATALOG
}

/// Spawn-orientation shape for a kind
pub fn shape_for(kind: ShapeKind) -> Shape {
    CATALOG[kind.index()]
}

/// Fixed color for a catalog entry
pub fn color_for(kind: ShapeKind) -> Rgb {
    COLORS[kind.index()]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_has_seven_four_cell_shapes() {
        assert_eq!(shapes().len(), 7);
        for shape in shapes() {
            assert_eq!(shape.count(), 4);
        }
    }

    #[test]
    fn test_catalog_matrices() {
        assert_eq!(shape_for(ShapeKind::I).to_rows(), vec![vec![1, 1, 1, 1]]);
        assert_eq!(
            shape_for(ShapeKind::T).to_rows(),
            vec![vec![1, 1, 1], vec![0, 1, 0]]
        );
        assert_eq!(
            shape_for(ShapeKind::J).to_rows(),
            vec![vec![1, 1, 1], vec![0, 0, 1]]
        );
    }

    #[test]
    fn test_from_matrix_matches_from_rows() {
        let a = Shape::from_matrix([[0, 1, 1], [1, 1, 0]]);
        let b = Shape::from_rows(&[&[0, 1, 1], &[1, 1, 0]]).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_from_row_is_single_row_matrix() {
        let s = Shape::from_row(&[1, 0, 1]).unwrap();
        assert_eq!(s.rows(), 1);
        assert_eq!(s.cols(), 3);
        assert_eq!(s.cells().collect::<Vec<_>>(), vec![(0, 0), (0, 2)]);
    }

    #[test]
    fn test_from_rows_rejects_malformed() {
        assert!(Shape::from_rows(&[]).is_none());
        assert!(Shape::from_rows(&[&[]]).is_none());
        assert!(Shape::from_row(&[1, 1, 1, 1, 1]).is_none());
        assert!(Shape::from_rows(&[&[1], &[1], &[1], &[1], &[1]]).is_none());
    }

    #[test]
    fn test_rotate_i_becomes_vertical() {
        let v = shape_for(ShapeKind::I).rotated_cw();
        assert_eq!((v.rows(), v.cols()), (4, 1));
        assert_eq!(v.count(), 4);
    }

    #[test]
    fn test_rotate_t_clockwise() {
        // 1 1 1      0 1
        // 0 1 0  ->  1 1
        //            0 1
        let r = shape_for(ShapeKind::T).rotated_cw();
        assert_eq!(r.to_rows(), vec![vec![0, 1], vec![1, 1], vec![0, 1]]);
    }

    #[test]
    fn test_rotate_o_is_identity() {
        let o = shape_for(ShapeKind::O);
        assert_eq!(o.rotated_cw(), o);
    }
}
