//! Shape table - occupancy matrices per piece kind and orientation
//!
//! Each matrix is anchored at row/column 0. A `true` entry marks a square the
//! piece covers. Degenerate kinds reuse one entry for several orientations:
//! the square uses one matrix for all four, the bar uses two.

use crate::types::{Orientation, PieceKind, Vector};

/// Static boolean occupancy matrix, stored row by row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Shape {
    rows: &'static [&'static [bool]],
}

const X: bool = true;
const O: bool = false;

const I_VERTICAL: Shape = Shape::new(&[&[X], &[X], &[X], &[X]]);
const I_HORIZONTAL: Shape = Shape::new(&[&[X, X, X, X]]);

const R_SQUARE: Shape = Shape::new(&[&[X, X], &[X, X]]);

const L_UP: Shape = Shape::new(&[&[X, O], &[X, O], &[X, X]]);
const L_DOWN: Shape = Shape::new(&[&[X, X], &[X, O], &[X, O]]);
const L_LEFT: Shape = Shape::new(&[&[X, X, X], &[O, O, X]]);
const L_RIGHT: Shape = Shape::new(&[&[X, X, X], &[X, O, O]]);

const S_UP: Shape = Shape::new(&[&[O, X, X], &[X, X, O]]);
const S_DOWN: Shape = Shape::new(&[&[X, X, O], &[O, X, X]]);
const S_LEFT: Shape = Shape::new(&[&[O, X], &[X, X], &[X, O]]);
const S_RIGHT: Shape = Shape::new(&[&[X, O], &[X, X], &[O, X]]);

const T_UP: Shape = Shape::new(&[&[O, X, O], &[X, X, X]]);
const T_DOWN: Shape = Shape::new(&[&[X, X, X], &[O, X, O]]);
const T_LEFT: Shape = Shape::new(&[&[O, X], &[X, X], &[O, X]]);
const T_RIGHT: Shape = Shape::new(&[&[X, O], &[X, X], &[X, O]]);

/// Look up the matrix for a piece kind in the given orientation
pub fn shape_for(kind: PieceKind, orientation: Orientation) -> Shape {
    match (kind, orientation) {
        (PieceKind::I, Orientation::Up | Orientation::Down) => I_VERTICAL,
        (PieceKind::I, Orientation::Left | Orientation::Right) => I_HORIZONTAL,

        (PieceKind::R, _) => R_SQUARE,

        (PieceKind::L, Orientation::Up) => L_UP,
        (PieceKind::L, Orientation::Down) => L_DOWN,
        (PieceKind::L, Orientation::Left) => L_LEFT,
        (PieceKind::L, Orientation::Right) => L_RIGHT,

        (PieceKind::S, Orientation::Up) => S_UP,
        (PieceKind::S, Orientation::Down) => S_DOWN,
        (PieceKind::S, Orientation::Left) => S_LEFT,
        (PieceKind::S, Orientation::Right) => S_RIGHT,

        (PieceKind::T, Orientation::Up) => T_UP,
        (PieceKind::T, Orientation::Down) => T_DOWN,
        (PieceKind::T, Orientation::Left) => T_LEFT,
        (PieceKind::T, Orientation::Right) => T_RIGHT,
    }
}

impl Shape {
    const fn new(rows: &'static [&'static [bool]]) -> Self {
        Self { rows }
    }

    /// Raw rows of the matrix
    pub fn rows(&self) -> &'static [&'static [bool]] {
        self.rows
    }

    /// Number of columns (length of the first row)
    pub fn width(&self) -> usize {
        self.rows.first().map_or(0, |row| row.len())
    }

    pub fn height(&self) -> usize {
        self.rows.len()
    }

    /// Relative coordinates of every filled square, row-major
    pub fn filled_cells(&self) -> impl Iterator<Item = Vector> + '_ {
        self.rows.iter().enumerate().flat_map(|(row, cols)| {
            cols.iter()
                .enumerate()
                .filter(|(_, filled)| **filled)
                .map(move |(col, _)| Vector::new(col as i32, row as i32))
        })
    }

    /// Absolute coordinates of every filled square when row/column 0 sits at `origin`
    pub fn anchored_at(&self, origin: Vector) -> impl Iterator<Item = Vector> + '_ {
        self.filled_cells().map(move |offset| origin + offset)
    }
}
