//! Errors raised while setting up a playing field.
//!
//! Rejected moves are not errors: they are reported as `false` by the command
//! methods and leave the field unchanged.

use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FieldError {
    #[error("field size must be non-zero, got {width}x{height}")]
    InvalidSize { width: u16, height: u16 },

    #[error("field size {width}x{height} exceeds {max} cells per side")]
    TooLarge { width: u16, height: u16, max: u16 },

    #[error("cell size must be at least one pixel")]
    InvalidCellSize,
}
