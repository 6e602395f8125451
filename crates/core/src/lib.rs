//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains the gameplay and collision engine: the playfield, piece
//! geometry and rotation, landing and lock-down, and completed-line removal.
//! It has **zero dependencies** on terminals, timers, or I/O, making it:
//!
//! - **Deterministic**: same spawner seed and inputs produce the same session
//! - **Testable**: every rule is reachable from plain method calls
//! - **Portable**: the caller decides where ticks and commands come from
//!
//! # Module Structure
//!
//! - [`grid`]: playfield with a Hidden spawn row, collision checks and line removal
//! - [`piece`]: piece points, per-kind spawn templates and rotation-rule tables
//! - [`gameplay`]: the controller that applies ticks and commands and emits events
//! - [`rng`]: next-piece selection
//!
//! # Example
//!
//! ```
//! use blockfall_core::{Gameplay, Spawner};
//! use blockfall_types::{Command, Event, PieceKind};
//!
//! let mut game = Gameplay::new(10, 20, Spawner::Fixed(PieceKind::T));
//!
//! game.on_command(Command::MoveLeft);
//! game.on_command(Command::Rotate);
//! game.on_command(Command::HardDrop);
//!
//! // The dropped piece locks on the next tick.
//! let events = game.on_tick();
//! assert!(!events.contains(&Event::GameOver));
//! assert_eq!(game.field().block_count(), 4);
//! ```
//!
//! # Threading
//!
//! Everything here is synchronous and unsynchronized. Callers serialize ticks and
//! commands through a single loop (or a single mutex).

pub mod gameplay;
pub mod grid;
pub mod piece;
pub mod rng;

pub use blockfall_types as types;

// Re-export commonly used types for convenience
pub use gameplay::{Events, Gameplay};
pub use grid::Grid;
pub use piece::{definition, Piece, PieceDef, RotationRule};
pub use rng::{SimpleRng, Spawner};
