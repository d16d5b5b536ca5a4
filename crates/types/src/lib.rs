//! Shared types module - plain data used by every crate in the workspace
//!
//! Everything here is pure data with no behaviour beyond small conversions, so it
//! can be used by the playing field, the input layer and the terminal view alike.
//!
//! # Field Dimensions
//!
//! The default playing field is a narrow, tall board:
//!
//! - **Width**: 7 columns (indexed 0-6)
//! - **Height**: 14 rows (indexed 0-13)
//! - **Cell size**: 44 pixels per square
//!
//! # Timing Constants
//!
//! Timing is measured by the driver, never by the playing field:
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `DROP_INTERVAL_MS` | 500 | Minimum time between gravity ticks |
//! | `MOVE_INTERVAL_MS` | 200 | Minimum time between lateral/rotate commands |
//!
//! # Examples
//!
//! ```
//! use just_not_tetris_types::{GameAction, Orientation, PieceKind, Vector};
//!
//! let kind = PieceKind::from_str("r").unwrap();
//! assert_eq!(kind, PieceKind::R);
//!
//! assert_eq!(Orientation::Up.next(), Orientation::Right);
//!
//! let moved = Vector::new(3, 0) + Vector::new(0, 1);
//! assert_eq!(moved, Vector::new(3, 1));
//!
//! assert_eq!(GameAction::from_str("rotate"), Some(GameAction::Rotate));
//! ```

use std::ops::{Add, Sub};

use serde::Serialize;

/// Default field width in cells (7 columns)
pub const DEFAULT_FIELD_WIDTH: u16 = 7;

/// Default field height in cells (14 rows)
pub const DEFAULT_FIELD_HEIGHT: u16 = 14;

/// Largest accepted field width or height in cells
pub const MAX_FIELD_DIMENSION: u16 = 1024;

/// Default size of one square in pixels
pub const DEFAULT_CELL_SIZE_PX: u16 = 44;

/// Minimum time between two gravity ticks
pub const DROP_INTERVAL_MS: u32 = 500;

/// Minimum time between two accepted lateral or rotate commands
pub const MOVE_INTERVAL_MS: u32 = 200;

/// Number of pieces generated for one round
pub const DEFAULT_PIECE_COUNT: usize = 10;

/// Every piece kind covers exactly this many cells
pub const CELLS_PER_PIECE: usize = 4;

/// Integer 2D vector.
///
/// Used both for grid coordinates (`x` = column, `y` = row) and pixel positions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub struct Vector {
    pub x: i32,
    pub y: i32,
}

impl Vector {
    pub const ZERO: Vector = Vector { x: 0, y: 0 };

    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Multiply both components by `factor`
    pub const fn scale(self, factor: i32) -> Vector {
        Vector::new(self.x * factor, self.y * factor)
    }
}

impl Add for Vector {
    type Output = Vector;

    fn add(self, rhs: Vector) -> Vector {
        Vector::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Vector {
    type Output = Vector;

    fn sub(self, rhs: Vector) -> Vector {
        Vector::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl From<(i32, i32)> for Vector {
    fn from((x, y): (i32, i32)) -> Self {
        Vector::new(x, y)
    }
}

/// The five block kinds of the game
///
/// - **I**: straight bar
/// - **L**: L-shaped
/// - **R**: 2x2 square
/// - **S**: S-shaped
/// - **T**: T-shaped
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum PieceKind {
    I,
    L,
    R,
    S,
    T,
}

impl PieceKind {
    /// All kinds, in the order the random supply draws from
    pub const ALL: [PieceKind; 5] = [
        PieceKind::I,
        PieceKind::L,
        PieceKind::R,
        PieceKind::S,
        PieceKind::T,
    ];

    /// Parse piece kind from string (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use just_not_tetris_types::PieceKind;
    ///
    /// assert_eq!(PieceKind::from_str("i"), Some(PieceKind::I));
    /// assert_eq!(PieceKind::from_str("T"), Some(PieceKind::T));
    /// assert_eq!(PieceKind::from_str("o"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "i" => Some(PieceKind::I),
            "l" => Some(PieceKind::L),
            "r" => Some(PieceKind::R),
            "s" => Some(PieceKind::S),
            "t" => Some(PieceKind::T),
            _ => None,
        }
    }

    /// Uppercase single-letter name, also the key of the piece image
    pub fn as_str(&self) -> &'static str {
        match self {
            PieceKind::I => "I",
            PieceKind::L => "L",
            PieceKind::R => "R",
            PieceKind::S => "S",
            PieceKind::T => "T",
        }
    }

    /// Compact non-zero code used in grid snapshots
    pub fn code(&self) -> u8 {
        match self {
            PieceKind::I => 1,
            PieceKind::L => 2,
            PieceKind::R => 3,
            PieceKind::S => 4,
            PieceKind::T => 5,
        }
    }

    /// Inverse of [`PieceKind::code`]
    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            1 => Some(PieceKind::I),
            2 => Some(PieceKind::L),
            3 => Some(PieceKind::R),
            4 => Some(PieceKind::S),
            5 => Some(PieceKind::T),
            _ => None,
        }
    }
}

/// Rotation state of a piece
///
/// The rotation cycle goes: Up → Right → Down → Left → Up
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Orientation {
    Up,
    Right,
    Down,
    Left,
}

impl Orientation {
    /// The orientation reached by one rotate command
    ///
    /// # Examples
    ///
    /// ```
    /// use just_not_tetris_types::Orientation;
    ///
    /// assert_eq!(Orientation::Up.next(), Orientation::Right);
    /// assert_eq!(Orientation::Right.next(), Orientation::Down);
    /// assert_eq!(Orientation::Down.next(), Orientation::Left);
    /// assert_eq!(Orientation::Left.next(), Orientation::Up);
    /// ```
    pub fn next(&self) -> Self {
        match self {
            Orientation::Up => Orientation::Right,
            Orientation::Right => Orientation::Down,
            Orientation::Down => Orientation::Left,
            Orientation::Left => Orientation::Up,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Orientation::Up => "up",
            Orientation::Right => "right",
            Orientation::Down => "down",
            Orientation::Left => "left",
        }
    }
}

/// Logical commands produced by the input layer
///
/// The playing field only understands the first four; `ToggleDebug` is handled
/// by the frame loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Move the active piece one column left
    MoveLeft,
    /// Move the active piece one column right
    MoveRight,
    /// Move the active piece one row down (also the gravity tick)
    SoftDrop,
    /// Rotate the active piece to its next orientation
    Rotate,
    /// Show or hide the debug overlay
    ToggleDebug,
}

impl GameAction {
    /// Parse action from string (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use just_not_tetris_types::GameAction;
    ///
    /// assert_eq!(GameAction::from_str("moveLeft"), Some(GameAction::MoveLeft));
    /// assert_eq!(GameAction::from_str("softDrop"), Some(GameAction::SoftDrop));
    /// assert_eq!(GameAction::from_str("hardDrop"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "moveleft" => Some(GameAction::MoveLeft),
            "moveright" => Some(GameAction::MoveRight),
            "softdrop" => Some(GameAction::SoftDrop),
            "rotate" => Some(GameAction::Rotate),
            "toggledebug" => Some(GameAction::ToggleDebug),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            GameAction::MoveLeft => "moveLeft",
            GameAction::MoveRight => "moveRight",
            GameAction::SoftDrop => "softDrop",
            GameAction::Rotate => "rotate",
            GameAction::ToggleDebug => "toggleDebug",
        }
    }
}
