//! Playing field configuration.

use crate::error::FieldError;
use crate::types::{
    DEFAULT_CELL_SIZE_PX, DEFAULT_FIELD_HEIGHT, DEFAULT_FIELD_WIDTH, MAX_FIELD_DIMENSION,
};

/// Size of the field in cells and of one cell in pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldConfig {
    pub width: u16,
    pub height: u16,
    pub cell_size_px: u16,
}

impl FieldConfig {
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            width,
            height,
            ..Self::default()
        }
    }

    pub fn with_cell_size_px(mut self, cell_size_px: u16) -> Self {
        self.cell_size_px = cell_size_px;
        self
    }

    /// Reject configurations no field can be built from
    pub fn validate(&self) -> Result<(), FieldError> {
        if self.width == 0 || self.height == 0 {
            return Err(FieldError::InvalidSize {
                width: self.width,
                height: self.height,
            });
        }
        if self.width > MAX_FIELD_DIMENSION || self.height > MAX_FIELD_DIMENSION {
            return Err(FieldError::TooLarge {
                width: self.width,
                height: self.height,
                max: MAX_FIELD_DIMENSION,
            });
        }
        if self.cell_size_px == 0 {
            return Err(FieldError::InvalidCellSize);
        }
        Ok(())
    }
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_FIELD_WIDTH,
            height: DEFAULT_FIELD_HEIGHT,
            cell_size_px: DEFAULT_CELL_SIZE_PX,
        }
    }
}
