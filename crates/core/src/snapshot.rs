use serde::Serialize;

use crate::field::FieldStatus;
use crate::piece::Piece;
use crate::types::{Orientation, PieceKind, Vector};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ActiveSnapshot {
    pub id: u32,
    pub kind: PieceKind,
    pub orientation: Orientation,
    pub cells: Vec<Vector>,
}

impl ActiveSnapshot {
    pub fn from_piece<H>(piece: &Piece<H>) -> Self {
        Self {
            id: piece.id().get(),
            kind: piece.kind(),
            orientation: piece.orientation(),
            cells: piece.occupied_cells().to_vec(),
        }
    }
}

/// Owned copy of a playing field, detached from its visual handles.
///
/// `grid[row][column]` is `0` for an empty cell, otherwise [`PieceKind::code`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldSnapshot {
    pub width: u16,
    pub height: u16,
    pub grid: Vec<Vec<u8>>,
    pub active: Option<ActiveSnapshot>,
    pub upcoming: Vec<PieceKind>,
    pub locked: usize,
    pub status: FieldStatus,
}

impl FieldSnapshot {
    /// Kind covering `(column, row)`, if any
    pub fn kind_at(&self, column: usize, row: usize) -> Option<PieceKind> {
        self.grid
            .get(row)
            .and_then(|cells| cells.get(column))
            .and_then(|&code| PieceKind::from_code(code))
    }

    /// Whether `(column, row)` belongs to the falling piece
    pub fn is_active_cell(&self, column: usize, row: usize) -> bool {
        self.active.as_ref().is_some_and(|active| {
            active
                .cells
                .iter()
                .any(|c| c.x == column as i32 && c.y == row as i32)
        })
    }
}
