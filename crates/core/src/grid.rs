//! Grid module - cell occupancy of the playing field
//!
//! Each cell is empty or holds the id of the piece covering it.
//! Uses a flat row-major vector sized once at construction.
//! Coordinates: (x, y) where x is the column (left to right) and y is the row (top to bottom).

use crate::piece::PieceId;
use crate::types::Vector;

/// A grid cell: `None` when empty
pub type Slot = Option<PieceId>;

#[derive(Debug, Clone, PartialEq)]
pub struct Grid {
    width: u16,
    height: u16,
    /// Row-major order (y * width + x)
    slots: Vec<Slot>,
}

impl Grid {
    /// Create an empty grid
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            width,
            height,
            slots: vec![None; width as usize * height as usize],
        }
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    #[inline(always)]
    fn index(&self, pos: Vector) -> Option<usize> {
        if !self.in_bounds(pos) {
            return None;
        }
        Some(pos.y as usize * self.width as usize + pos.x as usize)
    }

    pub fn in_bounds(&self, pos: Vector) -> bool {
        pos.x >= 0 && pos.x < self.width as i32 && pos.y >= 0 && pos.y < self.height as i32
    }

    /// Slot at `pos`, or `None` if out of bounds
    pub fn get(&self, pos: Vector) -> Option<Slot> {
        self.index(pos).map(|idx| self.slots[idx])
    }

    /// Write a slot. Returns false if `pos` is out of bounds.
    pub fn set(&mut self, pos: Vector, slot: Slot) -> bool {
        match self.index(pos) {
            Some(idx) => {
                self.slots[idx] = slot;
                true
            }
            None => false,
        }
    }

    /// Occupied cells in row-major order
    pub fn iter_occupied(&self) -> impl Iterator<Item = (Vector, PieceId)> + '_ {
        let width = self.width as usize;
        self.slots.iter().enumerate().filter_map(move |(idx, slot)| {
            slot.map(|id| (Vector::new((idx % width) as i32, (idx / width) as i32), id))
        })
    }

    pub fn occupied_count(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_some()).count()
    }
}
