//! Gameplay module - the controller that owns the session state
//!
//! [`Gameplay`] is the only mutator of the grid and the active piece. Each tick
//! either advances the piece one row or, when it has landed, locks it, removes
//! completed lines and spawns the next piece. Player commands are tried
//! optimistically and rolled back when the grid rejects the result, so no command
//! can leave the piece in an illegal pose.
//!
//! Outcomes are returned as [`Event`] values instead of callbacks.

use arrayvec::ArrayVec;
use log::{debug, info};

use crate::grid::Grid;
use crate::piece::Piece;
use crate::rng::Spawner;
use crate::types::{Command, Event};

/// Events produced by one tick: at most `LinesUpdated` followed by `GameOver`
pub type Events = ArrayVec<Event, 2>;

/// Gameplay session: one grid and the current piece
#[derive(Debug, Clone)]
pub struct Gameplay {
    grid: Grid,
    current: Piece,
    spawner: Spawner,
    over: bool,
    lines_cleared: u32,
}

impl Gameplay {
    /// Start a session on an empty `width` x `height` grid
    ///
    /// Panics if either dimension exceeds `MAX_DIMENSION`.
    pub fn new(width: usize, height: usize, spawner: Spawner) -> Self {
        Self::from_parts(Grid::new(width, height), spawner)
    }

    /// Start a session on a prepared grid
    ///
    /// If the first piece cannot be placed the session starts already over.
    pub fn from_parts(grid: Grid, mut spawner: Spawner) -> Self {
        let current = Piece::spawn(spawner.draw(), grid.width());
        let over = !grid.can_place(&current);
        if over {
            info!("session starts blocked: {:?} cannot spawn", current.kind());
        }

        Self {
            grid,
            current,
            spawner,
            over,
            lines_cleared: 0,
        }
    }

    pub fn current_piece(&self) -> &Piece {
        &self.current
    }

    pub fn field(&self) -> &Grid {
        &self.grid
    }

    pub fn is_over(&self) -> bool {
        self.over
    }

    /// Total rows removed during this session
    pub fn lines_cleared(&self) -> u32 {
        self.lines_cleared
    }

    /// Advance the session by one gravity step
    pub fn on_tick(&mut self) -> Events {
        let mut events = Events::new();
        if self.over {
            return events;
        }

        if !self.grid.is_landed(&self.current) {
            self.current.move_vertical(1);
            return events;
        }

        debug!("lock-down {:?} at {:?}", self.current.kind(), self.current.points());
        self.grid.lock_down(&self.current);

        let cleared = self.grid.remove_completed_lines();
        if !cleared.is_empty() {
            self.lines_cleared += cleared.len() as u32;
            events.push(Event::LinesUpdated { cleared });
        }

        self.current = Piece::spawn(self.spawner.draw(), self.grid.width());
        if !self.grid.can_place(&self.current) {
            info!(
                "game over: {:?} cannot spawn, {} lines cleared",
                self.current.kind(),
                self.lines_cleared
            );
            self.over = true;
            events.push(Event::GameOver);
        }

        events
    }

    /// Apply a player command
    ///
    /// Returns true if the command was accepted. A rejected command leaves the
    /// piece exactly as it was.
    pub fn on_command(&mut self, cmd: Command) -> bool {
        if self.over {
            return false;
        }

        let accepted = match cmd {
            Command::MoveLeft => self.try_shift(-1),
            Command::MoveRight => self.try_shift(1),
            Command::Rotate => self.try_rotate(),
            Command::HardDrop => self.hard_drop() > 0,
        };
        debug!("{} -> {}", cmd.as_str(), accepted);
        accepted
    }

    /// Try to move the piece horizontally, undoing the move if it collides
    fn try_shift(&mut self, dx: i16) -> bool {
        self.current.move_horizontal(dx);
        if self.grid.can_place(&self.current) {
            return true;
        }
        self.current.move_horizontal(-dx);
        false
    }

    /// Rotate a clone and adopt it only if it fits
    fn try_rotate(&mut self) -> bool {
        let mut cand = self.current.clone();
        cand.rotate();
        if !self.grid.can_place(&cand) {
            return false;
        }
        self.current = cand;
        true
    }

    /// Drop the piece onto the obstruction below it; returns rows fallen
    ///
    /// The piece is not locked here; the next tick sees it landed.
    fn hard_drop(&mut self) -> u32 {
        let mut distance = 0;
        loop {
            self.current.move_vertical(1);
            if !self.grid.can_place(&self.current) {
                self.current.move_vertical(-1);
                break;
            }
            distance += 1;
        }
        distance
    }
}
