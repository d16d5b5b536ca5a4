//! Playing field module - grid ownership, movement and locking
//!
//! The field is the only thing that mutates the grid. It spawns pieces from
//! its queue, checks every move and rotation against the grid and the walls,
//! and locks the active piece once it can no longer fall.
//!
//! Rejected commands leave the field untouched and report `false`. The only
//! rejected command with a side effect is [`PlayingField::move_down`], which
//! locks the piece and spawns the next one.

use std::collections::VecDeque;

use serde::Serialize;
use tracing::{debug, trace};

use crate::config::FieldConfig;
use crate::error::FieldError;
use crate::grid::Grid;
use crate::piece::{Piece, PieceCells, PieceId, PieceSpec};
use crate::shape::Shape;
use crate::snapshot::{ActiveSnapshot, FieldSnapshot};
use crate::types::{GameAction, PieceKind, Vector};

const DOWN: Vector = Vector::new(0, 1);
const LEFT: Vector = Vector::new(-1, 0);
const RIGHT: Vector = Vector::new(1, 0);

/// Lifecycle of the field as a whole
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldStatus {
    /// A piece is falling and accepts commands
    Falling,
    /// A spawn was needed but the queue was empty
    OutOfPieces,
    /// The next piece did not fit at its spawn position
    SpawnBlocked,
}

impl FieldStatus {
    /// No further command can change the field
    pub fn is_terminal(&self) -> bool {
        !matches!(self, FieldStatus::Falling)
    }
}

/// The playing field
///
/// `H` is the visual handle carried by each piece. The field never looks at it.
#[derive(Debug, Clone)]
pub struct PlayingField<H> {
    config: FieldConfig,
    grid: Grid,
    /// Every spawned piece, indexed by `PieceId`
    pieces: Vec<Piece<H>>,
    active: Option<PieceId>,
    queue: VecDeque<PieceSpec<H>>,
    /// Pixel position of cell (0, 0)
    top_left: Vector,
    status: FieldStatus,
}

impl<H> PlayingField<H> {
    /// Build a field and spawn the first piece from `supply`.
    ///
    /// Pieces spawn in the order `supply` yields them. An empty supply is not an
    /// error: the field starts out in [`FieldStatus::OutOfPieces`].
    pub fn new(
        config: FieldConfig,
        supply: impl IntoIterator<Item = PieceSpec<H>>,
    ) -> Result<Self, FieldError> {
        config.validate()?;

        let mut field = Self {
            config,
            grid: Grid::new(config.width, config.height),
            pieces: Vec::new(),
            active: None,
            queue: supply.into_iter().collect(),
            top_left: Vector::ZERO,
            status: FieldStatus::Falling,
        };
        field.spawn_next();
        Ok(field)
    }

    pub fn width(&self) -> u16 {
        self.config.width
    }

    pub fn height(&self) -> u16 {
        self.config.height
    }

    pub fn cell_size_px(&self) -> u16 {
        self.config.cell_size_px
    }

    pub fn status(&self) -> FieldStatus {
        self.status
    }

    /// The falling piece, if any
    pub fn active(&self) -> Option<&Piece<H>> {
        self.active.map(|id| &self.pieces[id.index()])
    }

    pub fn piece(&self, id: PieceId) -> Option<&Piece<H>> {
        self.pieces.get(id.index())
    }

    /// All pieces on the grid, in spawn order
    pub fn pieces(&self) -> impl Iterator<Item = &Piece<H>> {
        self.pieces.iter()
    }

    /// Id of the piece covering `(column, row)`; `None` if empty or out of bounds
    pub fn cell(&self, column: i32, row: i32) -> Option<PieceId> {
        self.grid.get(Vector::new(column, row)).flatten()
    }

    /// Kinds still waiting in the queue, next one first
    pub fn upcoming(&self) -> impl Iterator<Item = PieceKind> + '_ {
        self.queue.iter().map(|spec| spec.kind)
    }

    pub fn remaining(&self) -> usize {
        self.queue.len()
    }

    /// Number of pieces that have landed
    pub fn locked_count(&self) -> usize {
        self.pieces.len() - usize::from(self.active.is_some())
    }

    pub fn top_left(&self) -> Vector {
        self.top_left
    }

    /// Set the pixel position of the field's top-left corner
    pub fn set_top_left(&mut self, top_left: Vector) {
        self.top_left = top_left;
    }

    /// Size of the whole field in pixels: exactly the cell area, no margin
    pub fn size_pixels(&self) -> Vector {
        Vector::new(self.config.width as i32, self.config.height as i32)
            .scale(self.config.cell_size_px as i32)
    }

    /// Pop the next piece from the queue and place it centred on row 0.
    ///
    /// Returns false when the queue is empty or the spawn cells are taken; the
    /// field then enters the matching terminal status. Also returns false, with
    /// no change, while a piece is still falling or the round is over.
    pub fn spawn_next(&mut self) -> bool {
        if self.active.is_some() || self.status.is_terminal() {
            return false;
        }

        let Some(spec) = self.queue.pop_front() else {
            debug!(locked = self.pieces.len(), "out of pieces");
            self.status = FieldStatus::OutOfPieces;
            return false;
        };

        let id = PieceId(self.pieces.len() as u32);
        let mut piece = Piece::new(id, spec);
        let shape = piece.initial_occupancy();
        let column = spawn_column(self.config.width, &shape);
        let cells: PieceCells = shape.anchored_at(Vector::new(column, 0)).collect();

        if !self.can_occupy(&cells, id) {
            debug!(kind = piece.kind().as_str(), column, "spawn blocked");
            self.status = FieldStatus::SpawnBlocked;
            return false;
        }

        for &cell in &cells {
            self.grid.set(cell, Some(id));
        }
        piece.set_occupied_cells(cells);
        debug!(
            piece = id.get(),
            kind = piece.kind().as_str(),
            column,
            remaining = self.queue.len(),
            "spawned piece"
        );

        self.pieces.push(piece);
        self.active = Some(id);
        self.status = FieldStatus::Falling;
        true
    }

    /// Move the active piece one row down.
    ///
    /// If it cannot move it locks in place and the next piece spawns. Returns
    /// true only when the piece actually moved.
    pub fn move_down(&mut self) -> bool {
        let Some(id) = self.active else {
            return false;
        };

        if self.translate(id, DOWN) {
            return true;
        }

        self.lock(id);
        self.spawn_next();
        false
    }

    /// Move the active piece one column left; no-op against a wall or another piece
    pub fn move_left(&mut self) -> bool {
        match self.active {
            Some(id) => self.translate(id, LEFT),
            None => false,
        }
    }

    /// Move the active piece one column right; no-op against a wall or another piece
    pub fn move_right(&mut self) -> bool {
        match self.active {
            Some(id) => self.translate(id, RIGHT),
            None => false,
        }
    }

    /// Rotate the active piece to its next orientation.
    ///
    /// The rotated shape is anchored at the current bounding top-left. There is
    /// no wall kick: if the rotated cells do not fit, nothing changes.
    pub fn rotate(&mut self) -> bool {
        let Some(id) = self.active else {
            return false;
        };

        let piece = &self.pieces[id.index()];
        let Some(origin) = piece.bounding_top_left() else {
            return false;
        };
        let candidate: PieceCells = piece
            .shape_for_next_orientation()
            .anchored_at(origin)
            .collect();

        if !self.can_occupy(&candidate, id) {
            trace!(piece = id.get(), "rotation rejected");
            return false;
        }

        self.pieces[id.index()].commit_rotation();
        self.relocate(id, candidate);
        true
    }

    /// Dispatch a logical command. `ToggleDebug` is not a field command.
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        match action {
            GameAction::MoveLeft => self.move_left(),
            GameAction::MoveRight => self.move_right(),
            GameAction::SoftDrop => self.move_down(),
            GameAction::Rotate => self.rotate(),
            GameAction::ToggleDebug => false,
        }
    }

    /// Whether `piece` may cover every cell in `candidates`.
    ///
    /// A cell is allowed when it lies inside the field and is either empty or
    /// already covered by `piece` itself.
    pub fn can_occupy(&self, candidates: &[Vector], piece: PieceId) -> bool {
        candidates.iter().all(|&cell| match self.grid.get(cell) {
            Some(None) => true,
            Some(Some(owner)) => owner == piece,
            None => false,
        })
    }

    /// Call `emit` once per piece on the grid with the pixel position of its
    /// bounding top-left.
    pub fn draw(&self, mut emit: impl FnMut(&Piece<H>, Vector)) {
        let mut drawn = vec![false; self.pieces.len()];
        for (_, id) in self.grid.iter_occupied() {
            if std::mem::replace(&mut drawn[id.index()], true) {
                continue;
            }
            let piece = &self.pieces[id.index()];
            if let Some(corner) = piece.bounding_top_left() {
                emit(piece, self.to_pixels(corner));
            }
        }
    }

    /// Call `emit` for every occupied cell with its owner, grid position and
    /// pixel position, row by row.
    pub fn for_each_cell(&self, mut emit: impl FnMut(&Piece<H>, Vector, Vector)) {
        for (cell, id) in self.grid.iter_occupied() {
            emit(&self.pieces[id.index()], cell, self.to_pixels(cell));
        }
    }

    /// Check that grid and pieces agree: every occupied cell is listed by its
    /// owner and every piece cell points back at its owner.
    pub fn is_consistent(&self) -> bool {
        let grid_agrees = self.grid.iter_occupied().all(|(cell, id)| {
            self.pieces
                .get(id.index())
                .is_some_and(|piece| piece.occupied_cells().contains(&cell))
        });

        let pieces_agree = self.pieces.iter().all(|piece| {
            let cells = piece.occupied_cells();
            let distinct = cells
                .iter()
                .enumerate()
                .all(|(i, cell)| !cells[..i].contains(cell));
            distinct
                && cells
                    .iter()
                    .all(|&cell| self.grid.get(cell) == Some(Some(piece.id())))
        });

        let total: usize = self.pieces.iter().map(|p| p.occupied_cells().len()).sum();
        grid_agrees && pieces_agree && total == self.grid.occupied_count()
    }

    /// Owned, renderer-friendly copy of the current state
    pub fn snapshot(&self) -> FieldSnapshot {
        let width = self.config.width as usize;
        let mut grid = vec![vec![0u8; width]; self.config.height as usize];
        for (cell, id) in self.grid.iter_occupied() {
            grid[cell.y as usize][cell.x as usize] = self.pieces[id.index()].kind().code();
        }

        FieldSnapshot {
            width: self.config.width,
            height: self.config.height,
            grid,
            active: self.active().map(ActiveSnapshot::from_piece),
            upcoming: self.upcoming().collect(),
            locked: self.locked_count(),
            status: self.status,
        }
    }

    fn translate(&mut self, id: PieceId, delta: Vector) -> bool {
        let candidate: PieceCells = self.pieces[id.index()]
            .occupied_cells()
            .iter()
            .map(|&cell| cell + delta)
            .collect();

        if !self.can_occupy(&candidate, id) {
            trace!(piece = id.get(), dx = delta.x, dy = delta.y, "move rejected");
            return false;
        }

        self.relocate(id, candidate);
        true
    }

    /// Clear the old cells, then write the new ones.
    fn relocate(&mut self, id: PieceId, cells: PieceCells) {
        let piece = &mut self.pieces[id.index()];
        for &old in piece.occupied_cells() {
            self.grid.set(old, None);
        }
        for &new in &cells {
            self.grid.set(new, Some(id));
        }
        piece.set_occupied_cells(cells);
    }

    fn lock(&mut self, id: PieceId) {
        let piece = &self.pieces[id.index()];
        debug!(
            piece = id.get(),
            kind = piece.kind().as_str(),
            row = piece.bounding_top_left().map_or(0, |c| c.y),
            "piece locked"
        );
        self.active = None;
    }

    fn to_pixels(&self, cell: Vector) -> Vector {
        self.top_left + cell.scale(self.config.cell_size_px as i32)
    }
}

/// Leftmost column that centres `shape` on a field `field_width` cells wide.
///
/// Never negative; a shape wider than the field then fails its collision check.
fn spawn_column(field_width: u16, shape: &Shape) -> i32 {
    (field_width as i32 / 2 - shape.width() as i32 / 2).max(0)
}
