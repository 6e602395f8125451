//! Terminal input module (engine-facing).
//!
//! This module is independent of any UI framework. It maps
//! `crossterm` key events into [`crate::types::Command`] values and recognizes
//! the keys that end a session.

pub mod map;

pub use blockfall_types as types;

pub use map::{handle_key_event, should_quit};
