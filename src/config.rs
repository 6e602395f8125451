//! Command line configuration.
//!
//! Grid dimensions are the only configuration the engine itself takes; the rest
//! tunes the tick source and the next-piece policy.

use std::time::{Duration, SystemTime, UNIX_EPOCH};

use anyhow::{ensure, Result};
use clap::Parser;

use crate::core::Spawner;
use crate::ticker::TickSchedule;
use crate::types::{
    PieceKind, BASE_TICK_MS, DEFAULT_HEIGHT, DEFAULT_WIDTH, MAX_DIMENSION, MIN_DIMENSION,
    MIN_TICK_MS,
};

/// Falling-block puzzle game for the terminal.
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Playfield width in columns.
    #[arg(long, default_value_t = DEFAULT_WIDTH)]
    pub width: usize,

    /// Playfield height in visible rows.
    #[arg(long, default_value_t = DEFAULT_HEIGHT)]
    pub height: usize,

    /// Initial gravity interval in milliseconds.
    #[arg(long, default_value_t = BASE_TICK_MS)]
    pub tick_ms: u64,

    /// Fastest gravity interval in milliseconds.
    #[arg(long, default_value_t = MIN_TICK_MS)]
    pub min_tick_ms: u64,

    /// Seed for random piece selection (defaults to the clock).
    #[arg(long)]
    pub seed: Option<u32>,

    /// Spawn only this piece kind (i, o, t, s, z, j, l).
    #[arg(long, value_parser = parse_piece_kind)]
    pub piece: Option<PieceKind>,
}

impl Default for Cli {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            tick_ms: BASE_TICK_MS,
            min_tick_ms: MIN_TICK_MS,
            seed: None,
            piece: None,
        }
    }
}

impl Cli {
    /// Reject values the session cannot run with.
    pub fn validate(&self) -> Result<()> {
        for (name, value) in [("width", self.width), ("height", self.height)] {
            ensure!(
                (MIN_DIMENSION..=MAX_DIMENSION).contains(&value),
                "--{name} must be between {MIN_DIMENSION} and {MAX_DIMENSION}, got {value}"
            );
        }
        ensure!(self.min_tick_ms > 0, "--min-tick-ms must be positive");
        ensure!(
            self.tick_ms >= self.min_tick_ms,
            "--tick-ms ({}) must not be below --min-tick-ms ({})",
            self.tick_ms,
            self.min_tick_ms
        );
        Ok(())
    }

    /// Seed in effect for this run.
    pub fn resolved_seed(&self) -> u32 {
        self.seed.unwrap_or_else(|| {
            SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .map(|d| d.subsec_nanos() ^ d.as_secs() as u32)
                .unwrap_or(1)
        })
    }

    pub fn spawner(&self, seed: u32) -> Spawner {
        match self.piece {
            Some(kind) => Spawner::Fixed(kind),
            None => Spawner::random(seed),
        }
    }

    pub fn schedule(&self) -> TickSchedule {
        TickSchedule::new(
            Duration::from_millis(self.tick_ms),
            Duration::from_millis(self.min_tick_ms),
        )
    }
}

fn parse_piece_kind(s: &str) -> Result<PieceKind, String> {
    PieceKind::from_str(s).ok_or_else(|| format!("unknown piece kind '{s}'"))
}
