//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (gameplay engine, terminal rendering, key decoding).
//!
//! # Coordinates
//!
//! A [`Point`] is `(x, y)` where `x` is the column (left to right) and `y` is the
//! *storage* row (top to bottom). Storage row 0 is the Hidden buffer row above the
//! visible playfield, so a grid of height `h` allocates rows `0..=h` and the
//! playable rows are `1..=h`. Rendering accessors use 0-based playable rows instead.
//!
//! # Defaults
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `DEFAULT_WIDTH` | 10 | Columns of a classic playfield |
//! | `DEFAULT_HEIGHT` | 20 | Playable rows of a classic playfield |
//! | `BASE_TICK_MS` | 500 | Initial gravity interval |
//! | `MIN_TICK_MS` | 100 | Gravity floor after acceleration |
//! | `TICK_STEP_MS` | 25 | Interval reduction per acceleration step |
//! | `TICKS_PER_STEP` | 100 | Ticks between acceleration steps |
//!
//! # Examples
//!
//! ```
//! use blockfall_types::{Command, PieceKind, DEFAULT_HEIGHT, DEFAULT_WIDTH};
//!
//! let kind = PieceKind::from_str("t").unwrap();
//! assert_eq!(kind, PieceKind::T);
//!
//! let cmd = Command::from_str("hard-drop").unwrap();
//! assert_eq!(cmd, Command::HardDrop);
//!
//! assert_eq!(DEFAULT_WIDTH, 10);
//! assert_eq!(DEFAULT_HEIGHT, 20);
//! ```

/// Playfield width in columns
pub const DEFAULT_WIDTH: usize = 10;

/// Playfield height in playable rows (the Hidden row is extra)
pub const DEFAULT_HEIGHT: usize = 20;

/// Smallest accepted width/height
pub const MIN_DIMENSION: usize = 4;

/// Largest accepted width/height (coordinates are stored as `i16`)
pub const MAX_DIMENSION: usize = 200;

/// Initial tick interval in milliseconds
pub const BASE_TICK_MS: u64 = 500;

/// Tick interval floor in milliseconds
pub const MIN_TICK_MS: u64 = 100;

/// Interval reduction applied at each acceleration step
pub const TICK_STEP_MS: u64 = 25;

/// Number of ticks between acceleration steps
pub const TICKS_PER_STEP: u32 = 100;

/// Number of points in every piece
pub const PIECE_POINTS: usize = 4;

/// Content of one grid cell.
///
/// Cells carry no color or piece identity; that is a rendering concern.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    /// Off-screen buffer row above the playfield
    Hidden,
    /// Unoccupied playable space
    Empty,
    /// Settled, locked block
    Block,
}

/// A cell coordinate: `x` is the column, `y` the storage row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Point {
    pub x: i16,
    pub y: i16,
}

impl Point {
    pub const fn new(x: i16, y: i16) -> Self {
        Self { x, y }
    }
}

/// The seven tetromino piece kinds
///
/// Each kind owns a spawn template and its own rotation-rule table; see
/// `blockfall_core::piece`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    I,
    O,
    T,
    S,
    Z,
    J,
    L,
}

impl PieceKind {
    /// All kinds, in a fixed order
    pub const ALL: [PieceKind; 7] = [
        PieceKind::I,
        PieceKind::O,
        PieceKind::T,
        PieceKind::S,
        PieceKind::Z,
        PieceKind::J,
        PieceKind::L,
    ];

    /// Parse piece kind from string (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use blockfall_types::PieceKind;
    ///
    /// assert_eq!(PieceKind::from_str("i"), Some(PieceKind::I));
    /// assert_eq!(PieceKind::from_str("O"), Some(PieceKind::O));
    /// assert_eq!(PieceKind::from_str("unknown"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "i" => Some(PieceKind::I),
            "o" => Some(PieceKind::O),
            "t" => Some(PieceKind::T),
            "s" => Some(PieceKind::S),
            "z" => Some(PieceKind::Z),
            "j" => Some(PieceKind::J),
            "l" => Some(PieceKind::L),
            _ => None,
        }
    }

    /// Convert to lowercase string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            PieceKind::I => "i",
            PieceKind::O => "o",
            PieceKind::T => "t",
            PieceKind::S => "s",
            PieceKind::Z => "z",
            PieceKind::J => "j",
            PieceKind::L => "l",
        }
    }
}

/// Player commands accepted by the gameplay controller
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    /// Move piece one column left
    MoveLeft,
    /// Move piece one column right
    MoveRight,
    /// Advance the piece to its next rotation state
    Rotate,
    /// Drop piece to its lowest legal resting position (locks on next tick)
    HardDrop,
}

impl Command {
    /// Parse command from string (case-insensitive, dashes optional)
    ///
    /// # Examples
    ///
    /// ```
    /// use blockfall_types::Command;
    ///
    /// assert_eq!(Command::from_str("move-left"), Some(Command::MoveLeft));
    /// assert_eq!(Command::from_str("MoveRight"), Some(Command::MoveRight));
    /// assert_eq!(Command::from_str("rotate"), Some(Command::Rotate));
    /// assert_eq!(Command::from_str("jump"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().replace('-', "").as_str() {
            "moveleft" => Some(Command::MoveLeft),
            "moveright" => Some(Command::MoveRight),
            "rotate" => Some(Command::Rotate),
            "harddrop" => Some(Command::HardDrop),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Command::MoveLeft => "move-left",
            Command::MoveRight => "move-right",
            Command::Rotate => "rotate",
            Command::HardDrop => "hard-drop",
        }
    }
}

/// Domain event emitted by the gameplay controller after a tick
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Rows removed by the last lock-down, 0-based playable indices, top to bottom
    LinesUpdated { cleared: Vec<usize> },
    /// The freshly spawned piece could not be placed; the session is over
    GameOver,
}
