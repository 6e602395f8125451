//! Terminal rendering for the playfield.
//!
//! A small, game-oriented rendering layer: the session is painted into a simple
//! framebuffer, and the framebuffer is flushed to the terminal as a diff against
//! the previous frame.
//!
//! Goals:
//! - Keep `core` deterministic and free of I/O
//! - Redraw only what changed between frames
//! - Allow precise control over aspect ratio (2 chars wide per cell)

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use blockfall_core as core;
pub use blockfall_types as types;

pub use fb::{CellStyle, FrameBuffer, Glyph, Rgb};
pub use game_view::{AnchorY, GameView, Viewport};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
