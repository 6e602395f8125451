//! RNG module - next-piece selection
//!
//! The controller asks a [`Spawner`] for the kind of every new piece. A spawner
//! either repeats one kind forever or picks uniformly with a seeded LCG, so a
//! session is reproducible from its seed.

use crate::types::PieceKind;

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses constants from Numerical Recipes
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u32) -> Self {
        // Avoid 0 seed which would produce all zeros
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Generate next random u32
    pub fn next_u32(&mut self) -> u32 {
        // LCG formula: (a * state + c) mod m
        // Using Numerical Recipes constants: a=1664525, c=1013904223, m=2^32
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Generate random value in range [0, max)
    pub fn next_range(&mut self, max: u32) -> u32 {
        // Low LCG bits have short periods; use the high half.
        (self.next_u32() >> 16) % max
    }
}

/// Source of piece kinds for new spawns
#[derive(Debug, Clone)]
pub enum Spawner {
    /// Always the same kind
    Fixed(PieceKind),
    /// Uniform pick among all kinds
    Random(SimpleRng),
}

impl Spawner {
    pub fn random(seed: u32) -> Self {
        Spawner::Random(SimpleRng::new(seed))
    }

    /// Draw the kind of the next piece
    pub fn draw(&mut self) -> PieceKind {
        match self {
            Spawner::Fixed(kind) => *kind,
            Spawner::Random(rng) => {
                PieceKind::ALL[rng.next_range(PieceKind::ALL.len() as u32) as usize]
            }
        }
    }
}

impl Default for Spawner {
    fn default() -> Self {
        Self::random(1)
    }
}
