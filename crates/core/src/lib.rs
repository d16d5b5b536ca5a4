//! Core game logic - the playing field and everything it is built from
//!
//! This crate holds the rules of the game and nothing else. It has no
//! dependencies on terminals, input devices or timing, which makes it:
//!
//! - **Deterministic**: the same supply and commands always give the same grid
//! - **Testable**: every rule is reachable through plain method calls
//! - **Portable**: the driver decides how often to call what
//!
//! # Module Structure
//!
//! - [`shape`]: occupancy matrices per piece kind and orientation
//! - [`piece`]: one piece with its orientation and occupied cells
//! - [`grid`]: flat cell storage owned by the field
//! - [`field`]: spawning, movement, rotation, locking and draw enumeration
//! - [`supply`]: seeded random piece lists
//! - [`config`] / [`error`]: field construction parameters and their validation
//! - [`snapshot`]: owned copy of the field for renderers and tooling
//!
//! # Rules
//!
//! - Pieces spawn on row 0, horizontally centred
//! - A piece that cannot move down locks in place and the next one spawns
//! - Rotation re-anchors the next shape at the current top-left, with no wall kick
//! - Rows never clear; the round ends when the supply runs out
//!
//! # Example
//!
//! ```
//! use just_not_tetris_core::{FieldConfig, PieceSpec, PlayingField};
//! use just_not_tetris_types::PieceKind;
//!
//! let supply = [PieceKind::I, PieceKind::R].map(PieceSpec::plain);
//! let mut field = PlayingField::new(FieldConfig::default(), supply).unwrap();
//!
//! assert!(field.move_left());
//! assert!(field.move_down());
//! assert!(field.is_consistent());
//! ```

pub mod config;
pub mod error;
pub mod field;
pub mod grid;
pub mod piece;
pub mod shape;
pub mod snapshot;
pub mod supply;

pub use just_not_tetris_types as types;

pub use config::FieldConfig;
pub use error::FieldError;
pub use field::{FieldStatus, PlayingField};
pub use grid::Grid;
pub use piece::{Piece, PieceCells, PieceId, PieceSpec};
pub use shape::{shape_for, Shape};
pub use snapshot::{ActiveSnapshot, FieldSnapshot};
pub use supply::{random_kinds, random_supply, SimpleRng};
