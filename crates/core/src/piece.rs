//! Piece module - one block on the playing field
//!
//! A piece knows its kind, its orientation and the absolute cells it covers.
//! It never touches the grid: the playing field decides whether a move or a
//! rotation is legal and only then updates the piece.

use arrayvec::ArrayVec;

use crate::shape::{shape_for, Shape};
use crate::types::{Orientation, PieceKind, Vector, CELLS_PER_PIECE};

/// Occupied cells of one piece, stored inline
pub type PieceCells = ArrayVec<Vector, CELLS_PER_PIECE>;

/// Identity of a piece inside its playing field.
///
/// Ids are handed out in spawn order and double as the arena index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PieceId(pub(crate) u32);

impl PieceId {
    pub fn get(&self) -> u32 {
        self.0
    }

    pub(crate) fn index(&self) -> usize {
        self.0 as usize
    }
}

/// Description of an upcoming piece: its kind plus an opaque visual handle.
///
/// The handle (an image, a colour, nothing at all) is handed back unchanged to
/// draw callbacks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PieceSpec<H> {
    pub kind: PieceKind,
    pub handle: H,
}

impl<H> PieceSpec<H> {
    pub fn new(kind: PieceKind, handle: H) -> Self {
        Self { kind, handle }
    }
}

impl PieceSpec<()> {
    /// Spec without a visual handle
    pub fn plain(kind: PieceKind) -> Self {
        Self::new(kind, ())
    }
}

/// A spawned piece
#[derive(Debug, Clone)]
pub struct Piece<H> {
    id: PieceId,
    kind: PieceKind,
    orientation: Orientation,
    cells: PieceCells,
    handle: H,
}

impl<H> Piece<H> {
    pub(crate) fn new(id: PieceId, spec: PieceSpec<H>) -> Self {
        Self {
            id,
            kind: spec.kind,
            orientation: Orientation::Up,
            cells: PieceCells::new(),
            handle: spec.handle,
        }
    }

    pub fn id(&self) -> PieceId {
        self.id
    }

    pub fn kind(&self) -> PieceKind {
        self.kind
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    pub fn handle(&self) -> &H {
        &self.handle
    }

    /// Shape used when the piece enters the field
    pub fn initial_occupancy(&self) -> Shape {
        shape_for(self.kind, Orientation::Up)
    }

    /// Orientation a rotate command would move to
    pub fn next_orientation(&self) -> Orientation {
        self.orientation.next()
    }

    /// Shape for the pending orientation; nothing is committed yet
    pub fn shape_for_next_orientation(&self) -> Shape {
        shape_for(self.kind, self.next_orientation())
    }

    /// Advance to the pending orientation.
    ///
    /// Only call once the field has accepted the rotated cells.
    pub fn commit_rotation(&mut self) {
        self.orientation = self.next_orientation();
    }

    pub fn occupied_cells(&self) -> &[Vector] {
        &self.cells
    }

    pub fn set_occupied_cells(&mut self, cells: PieceCells) {
        self.cells = cells;
    }

    /// Minimum column and minimum row over the occupied cells
    pub fn bounding_top_left(&self) -> Option<Vector> {
        bounding_top_left(&self.cells)
    }
}

pub(crate) fn bounding_top_left(cells: &[Vector]) -> Option<Vector> {
    let min_x = cells.iter().map(|c| c.x).min()?;
    let min_y = cells.iter().map(|c| c.y).min()?;
    Some(Vector::new(min_x, min_y))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn piece(kind: PieceKind) -> Piece<()> {
        Piece::new(PieceId(0), PieceSpec::plain(kind))
    }

    #[test]
    fn test_new_piece_starts_up_without_cells() {
        let p = piece(PieceKind::L);
        assert_eq!(p.orientation(), Orientation::Up);
        assert!(p.occupied_cells().is_empty());
        assert_eq!(p.bounding_top_left(), None);
    }

    #[test]
    fn test_initial_occupancy_is_up_shape() {
        let p = piece(PieceKind::I);
        assert_eq!(p.initial_occupancy(), shape_for(PieceKind::I, Orientation::Up));
        assert_eq!(p.initial_occupancy().width(), 1);
        assert_eq!(p.initial_occupancy().height(), 4);
    }

    #[test]
    fn test_next_shape_does_not_commit() {
        let p = piece(PieceKind::T);
        assert_eq!(
            p.shape_for_next_orientation(),
            shape_for(PieceKind::T, Orientation::Right)
        );
        assert_eq!(p.orientation(), Orientation::Up);
    }

    #[test]
    fn test_commit_rotation_cycles() {
        let mut p = piece(PieceKind::S);
        let mut seen = Vec::new();
        for _ in 0..4 {
            p.commit_rotation();
            seen.push(p.orientation());
        }
        assert_eq!(
            seen,
            vec![
                Orientation::Right,
                Orientation::Down,
                Orientation::Left,
                Orientation::Up
            ]
        );
    }

    #[test]
    fn test_bounding_top_left() {
        let mut p = piece(PieceKind::T);
        let cells: PieceCells = [
            Vector::new(4, 2),
            Vector::new(3, 3),
            Vector::new(4, 3),
            Vector::new(5, 3),
        ]
        .into_iter()
        .collect();
        p.set_occupied_cells(cells);
        assert_eq!(p.bounding_top_left(), Some(Vector::new(3, 2)));
    }
}
