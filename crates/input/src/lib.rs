//! Terminal input module (driver-facing).
//!
//! Maps `crossterm` key events to [`crate::types::GameAction`] and gates how
//! often those actions reach the playing field. The playing field itself keeps
//! no clock; all timing lives here.

pub mod gate;
pub mod map;

pub use just_not_tetris_types as types;

pub use gate::CommandGate;
pub use map::{action_for_key, should_quit};
