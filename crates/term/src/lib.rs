//! Terminal front end for the playing field.
//!
//! A small rendering layer: [`FieldView`] turns a field snapshot into a
//! framebuffer, and [`TerminalRenderer`] flushes framebuffers to the terminal.
//! The playing field itself never sees any of this.

pub mod fb;
pub mod renderer;
pub mod view;

pub use just_not_tetris_core as core;
pub use just_not_tetris_types as types;

pub use fb::{FrameBuffer, Glyph, Rgb, Style};
pub use renderer::{changed_rows, encode_frame_into, TerminalRenderer};
pub use view::{FieldView, Hud, Viewport};
