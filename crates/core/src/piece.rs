//! Piece module - tetromino geometry and rotation-rule tables
//!
//! A piece is four absolute grid points plus a rotation state. Rotation is pure
//! data: each kind owns an ordered table of rules, one per rotation state, where a
//! rule is a per-point `(dx, dy)` delta that moves the piece into the next state.
//! Adding a kind means adding a spawn template and a table, no new logic.
//!
//! Nothing here checks collisions. Callers try moves on a clone and commit only
//! what `Grid::can_place` accepts.

use crate::types::{PieceKind, Point, MAX_DIMENSION, PIECE_POINTS};

/// Per-point delta applied when leaving one rotation state
pub type RotationRule = [(i16, i16); PIECE_POINTS];

/// Static description of a piece kind
#[derive(Debug)]
pub struct PieceDef {
    /// Spawn points relative to the top-left of the spawn box (row 0 is the Hidden row)
    pub template: [(i16, i16); PIECE_POINTS],
    /// Width of the spawn box, used to center the piece
    pub width: i16,
    /// Rotation rules, indexed by current rotation state
    pub rules: &'static [RotationRule],
}

const T_RULES: [RotationRule; 4] = [
    [(1, 1), (1, -1), (0, 0), (-1, 1)],
    [(-1, 1), (1, 1), (0, 0), (-1, -1)],
    [(-1, -1), (-1, 1), (0, 0), (1, -1)],
    [(1, -1), (-1, -1), (0, 0), (1, 1)],
];

// A square looks the same in every orientation.
const O_RULES: [RotationRule; 1] = [[(0, 0); PIECE_POINTS]];

const I_RULES: [RotationRule; 4] = [
    [(2, -1), (1, 0), (0, 1), (-1, 2)],
    [(-2, 2), (-1, 1), (0, 0), (1, -1)],
    [(1, -2), (0, -1), (-1, 0), (-2, 1)],
    [(-1, 1), (0, 0), (1, -1), (2, -2)],
];

const S_RULES: [RotationRule; 2] = [
    [(0, 0), (-1, 1), (2, 0), (1, 1)],
    [(0, 0), (1, -1), (-2, 0), (-1, -1)],
];

const Z_RULES: [RotationRule; 2] = [
    [(2, 0), (0, 1), (1, 0), (-1, 1)],
    [(-2, 0), (0, -1), (-1, 0), (1, -1)],
];

const J_RULES: [RotationRule; 4] = [
    [(1, 0), (2, -1), (0, 0), (-1, 1)],
    [(-1, 1), (-1, 1), (1, 0), (1, 0)],
    [(1, -1), (0, 0), (-2, 1), (-1, 0)],
    [(-1, 0), (-1, 0), (1, -1), (1, -1)],
];

const L_RULES: [RotationRule; 4] = [
    [(-1, 0), (1, 0), (0, 1), (0, 1)],
    [(-1, 1), (0, 0), (1, -1), (-2, 0)],
    [(0, -1), (0, -1), (-1, 0), (1, 0)],
    [(2, 0), (-1, 1), (0, 0), (1, -1)],
];

static T_DEF: PieceDef = PieceDef {
    template: [(1, 0), (0, 1), (1, 1), (2, 1)],
    width: 3,
    rules: &T_RULES,
};

static O_DEF: PieceDef = PieceDef {
    template: [(0, 0), (1, 0), (0, 1), (1, 1)],
    width: 2,
    rules: &O_RULES,
};

static I_DEF: PieceDef = PieceDef {
    template: [(0, 1), (1, 1), (2, 1), (3, 1)],
    width: 4,
    rules: &I_RULES,
};

static S_DEF: PieceDef = PieceDef {
    template: [(1, 0), (2, 0), (0, 1), (1, 1)],
    width: 3,
    rules: &S_RULES,
};

static Z_DEF: PieceDef = PieceDef {
    template: [(0, 0), (1, 0), (1, 1), (2, 1)],
    width: 3,
    rules: &Z_RULES,
};

static J_DEF: PieceDef = PieceDef {
    template: [(0, 0), (0, 1), (1, 1), (2, 1)],
    width: 3,
    rules: &J_RULES,
};

static L_DEF: PieceDef = PieceDef {
    template: [(2, 0), (0, 1), (1, 1), (2, 1)],
    width: 3,
    rules: &L_RULES,
};

/// Get the static spawn template and rotation table for a kind
pub fn definition(kind: PieceKind) -> &'static PieceDef {
    match kind {
        PieceKind::I => &I_DEF,
        PieceKind::O => &O_DEF,
        PieceKind::T => &T_DEF,
        PieceKind::S => &S_DEF,
        PieceKind::Z => &Z_DEF,
        PieceKind::J => &J_DEF,
        PieceKind::L => &L_DEF,
    }
}

/// The active falling piece
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Piece {
    kind: PieceKind,
    points: [Point; PIECE_POINTS],
    rotation: usize,
    rules: &'static [RotationRule],
}

impl Piece {
    /// Create a piece of `kind` at its spawn pose, centered on a grid `grid_width` wide
    ///
    /// Panics if `grid_width` exceeds [`MAX_DIMENSION`].
    pub fn spawn(kind: PieceKind, grid_width: usize) -> Self {
        assert!(grid_width <= MAX_DIMENSION, "grid width {grid_width} exceeds {MAX_DIMENSION}");
        let def = definition(kind);
        let offset = (grid_width as i16 - def.width) / 2;
        let points = def.template.map(|(x, y)| Point::new(x + offset, y));

        Self {
            kind,
            points,
            rotation: 0,
            rules: def.rules,
        }
    }

    pub fn kind(&self) -> PieceKind {
        self.kind
    }

    /// Absolute grid points occupied by the piece
    pub fn points(&self) -> &[Point; PIECE_POINTS] {
        &self.points
    }

    /// Current rotation state, always in `0..rotation_states()`
    pub fn rotation(&self) -> usize {
        self.rotation
    }

    /// Length of this kind's rotation cycle
    pub fn rotation_states(&self) -> usize {
        self.rules.len()
    }

    /// Apply the rule for the current state and advance to the next state
    pub fn rotate(&mut self) {
        let rule = &self.rules[self.rotation];
        for (p, &(dx, dy)) in self.points.iter_mut().zip(rule.iter()) {
            p.x += dx;
            p.y += dy;
        }
        self.rotation = (self.rotation + 1) % self.rules.len();
    }

    /// Shift every point by `delta` rows (positive is down)
    pub fn move_vertical(&mut self, delta: i16) {
        for p in &mut self.points {
            p.y += delta;
        }
    }

    /// Shift every point by `delta` columns (positive is right)
    pub fn move_horizontal(&mut self, delta: i16) {
        for p in &mut self.points {
            p.x += delta;
        }
    }

    /// Lowest (largest) storage row occupied by the piece
    pub fn bottom(&self) -> i16 {
        self.points.iter().map(|p| p.y).max().unwrap_or(0)
    }

    /// Leftmost column occupied by the piece
    pub fn left(&self) -> i16 {
        self.points.iter().map(|p| p.x).min().unwrap_or(0)
    }
}
