//! Just Not Tetris (workspace facade crate).
//!
//! Re-exports the workspace crates as `just_not_tetris::{core,input,term,types}`
//! and holds the pieces shared by the binaries: command-line arguments and
//! logging setup.

pub mod cli;
pub mod logging;

pub use just_not_tetris_core as core;
pub use just_not_tetris_input as input;
pub use just_not_tetris_term as term;
pub use just_not_tetris_types as types;
