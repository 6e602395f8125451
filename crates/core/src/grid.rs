//! Grid module - manages the playfield cells
//!
//! The grid has `width` columns and `height + 1` rows. Storage row 0 is the Hidden
//! buffer row where pieces spawn; rows `1..=height` are playable. Piece points use
//! storage rows, while the rendering accessors ([`Grid::cell`], [`Grid::line`],
//! [`Grid::copy_line`]) and the indices returned by line removal are 0-based over
//! playable rows only.
//!
//! Rows are owned as a fixed set of row buffers. Line removal empties completed rows
//! and compacts by swapping row buffers, never reallocating.

use log::debug;

use crate::piece::Piece;
use crate::types::{Cell, Point, MAX_DIMENSION};

/// The playfield: a Hidden row on top of `height` playable rows
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    width: usize,
    /// Storage rows; `rows[0]` is always entirely Hidden
    rows: Vec<Vec<Cell>>,
}

impl Grid {
    /// Create a grid with every playable cell empty
    ///
    /// Panics if either dimension exceeds [`MAX_DIMENSION`]; point coordinates
    /// are `i16` and larger grids cannot be addressed.
    pub fn new(width: usize, height: usize) -> Self {
        assert!(
            width <= MAX_DIMENSION && height <= MAX_DIMENSION,
            "grid {width}x{height} exceeds {MAX_DIMENSION}"
        );
        let mut rows = Vec::with_capacity(height + 1);
        rows.push(vec![Cell::Hidden; width]);
        rows.extend((0..height).map(|_| vec![Cell::Empty; width]));
        Self { width, rows }
    }

    /// Get width of the grid
    pub fn width(&self) -> usize {
        self.width
    }

    /// Get number of playable rows
    pub fn height(&self) -> usize {
        self.rows.len() - 1
    }

    /// Storage row of the bottom playable line
    #[inline(always)]
    fn last_row(&self) -> i16 {
        self.height() as i16
    }

    /// Map a storage point to `(row, col)` indices, None if outside the allocation
    #[inline(always)]
    fn index(&self, p: Point) -> Option<(usize, usize)> {
        if p.x < 0 || p.x as usize >= self.width || p.y < 0 || p.y > self.last_row() {
            return None;
        }
        Some((p.y as usize, p.x as usize))
    }

    fn at(&self, p: Point) -> Option<Cell> {
        self.index(p).map(|(row, col)| self.rows[row][col])
    }

    /// Cell at playable `row` (0-based) and column `col`
    ///
    /// Panics if the coordinates are outside the playfield.
    pub fn cell(&self, row: usize, col: usize) -> Cell {
        self.rows[row + 1][col]
    }

    /// Borrow one playable row (0-based)
    pub fn line(&self, row: usize) -> &[Cell] {
        &self.rows[row + 1]
    }

    /// Copy playable `row` (0-based) into `dst`
    ///
    /// Copies `min(dst.len(), width)` cells.
    pub fn copy_line(&self, row: usize, dst: &mut [Cell]) {
        let src = &self.rows[row + 1];
        let n = src.len().min(dst.len());
        dst[..n].copy_from_slice(&src[..n]);
    }

    /// Set the cell at playable `row` (0-based) and column `col`
    ///
    /// Returns false if out of bounds, or if `cell` is [`Cell::Hidden`], which only
    /// belongs to the buffer row.
    pub fn set(&mut self, row: usize, col: usize, cell: Cell) -> bool {
        if cell == Cell::Hidden || row >= self.height() || col >= self.width {
            return false;
        }
        self.rows[row + 1][col] = cell;
        true
    }

    /// Check if every point is inside the allocated rows and not on a block
    pub fn can_place(&self, piece: &Piece) -> bool {
        piece
            .points()
            .iter()
            .all(|&p| matches!(self.at(p), Some(cell) if cell != Cell::Block))
    }

    /// Check if the piece would collide if moved one row down
    ///
    /// The Hidden row never blocks anything.
    pub fn is_landed(&self, piece: &Piece) -> bool {
        let last = self.last_row();
        piece
            .points()
            .iter()
            .any(|&p| p.y == last || self.at(Point::new(p.x, p.y + 1)) == Some(Cell::Block))
    }

    /// Write a block into every playable cell the piece occupies
    ///
    /// Points in the Hidden row are dropped so that row stays Hidden.
    pub fn lock_down(&mut self, piece: &Piece) {
        for &p in piece.points() {
            match self.index(p) {
                Some((0, _)) => debug!("lock-down discards hidden-row point {:?}", p),
                Some((row, col)) => self.rows[row][col] = Cell::Block,
                None => debug!("lock-down ignores out-of-range point {:?}", p),
            }
        }
    }

    /// Check if any point of the piece lies in the Hidden row
    pub fn is_hidden(&self, piece: &Piece) -> bool {
        piece
            .points()
            .iter()
            .any(|&p| self.at(p) == Some(Cell::Hidden))
    }

    /// Check if a playable row (0-based) has no empty cell
    pub fn is_row_full(&self, row: usize) -> bool {
        row < self.height() && !self.rows[row + 1].contains(&Cell::Empty)
    }

    /// Completed playable rows (0-based), top to bottom
    pub fn completed_lines(&self) -> Vec<usize> {
        (0..self.height()).filter(|&row| self.is_row_full(row)).collect()
    }

    /// Remove all completed rows and let the rows above fall
    ///
    /// Completed rows are emptied first, then a single bottom-up pass swaps every
    /// surviving row down by the number of completed rows seen below it. Returns the
    /// removed rows (0-based playable indices, top to bottom).
    pub fn remove_completed_lines(&mut self) -> Vec<usize> {
        let completed = self.completed_lines();
        if completed.is_empty() {
            return completed;
        }

        for &row in &completed {
            self.rows[row + 1].fill(Cell::Empty);
        }

        let mut step = 0;
        for row in (0..self.height()).rev() {
            if completed.contains(&row) {
                step += 1;
                continue;
            }
            if step == 0 {
                continue;
            }
            self.rows.swap(row + 1, row + 1 + step);
        }

        debug!("removed lines {:?}", completed);
        completed
    }

    /// Number of block cells on the grid
    pub fn block_count(&self) -> usize {
        self.rows
            .iter()
            .map(|row| row.iter().filter(|&&c| c == Cell::Block).count())
            .sum()
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self::new(crate::types::DEFAULT_WIDTH, crate::types::DEFAULT_HEIGHT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::PieceKind;

    fn fill_row(grid: &mut Grid, row: usize) {
        for col in 0..grid.width() {
            grid.set(row, col, Cell::Block);
        }
    }

    #[test]
    fn test_grid_index_calculation() {
        let grid = Grid::new(10, 20);
        assert_eq!(grid.index(Point::new(0, 0)), Some((0, 0)));
        assert_eq!(grid.index(Point::new(9, 20)), Some((20, 9)));
        assert_eq!(grid.index(Point::new(-1, 0)), None);
        assert_eq!(grid.index(Point::new(10, 0)), None);
        assert_eq!(grid.index(Point::new(0, -1)), None);
        assert_eq!(grid.index(Point::new(0, 21)), None);
    }

    #[test]
    fn test_new_grid_layout() {
        let grid = Grid::new(10, 20);
        assert_eq!(grid.rows.len(), 21);
        assert!(grid.rows[0].iter().all(|&c| c == Cell::Hidden));
        assert!(grid.rows[1..]
            .iter()
            .all(|row| row.len() == 10 && row.iter().all(|&c| c == Cell::Empty)));
    }

    #[test]
    fn test_largest_grid_is_addressable() {
        let grid = Grid::new(MAX_DIMENSION, MAX_DIMENSION);
        let last = Point::new(MAX_DIMENSION as i16 - 1, MAX_DIMENSION as i16);
        assert_eq!(grid.index(last), Some((MAX_DIMENSION, MAX_DIMENSION - 1)));
        assert!(grid.can_place(&Piece::spawn(PieceKind::T, MAX_DIMENSION)));
    }

    #[test]
    #[should_panic(expected = "exceeds")]
    fn test_oversized_height_panics() {
        Grid::new(10, 40_000);
    }

    #[test]
    #[should_panic(expected = "exceeds")]
    fn test_oversized_width_panics() {
        Grid::new(MAX_DIMENSION + 1, 20);
    }

    #[test]
    fn test_set_refuses_hidden_and_out_of_bounds() {
        let mut grid = Grid::new(10, 20);
        assert!(!grid.set(0, 0, Cell::Hidden));
        assert!(!grid.set(20, 0, Cell::Block));
        assert!(!grid.set(0, 10, Cell::Block));
        assert!(grid.set(19, 9, Cell::Block));
        assert_eq!(grid.cell(19, 9), Cell::Block);
    }

    #[test]
    fn test_lock_down_keeps_hidden_row() {
        let mut grid = Grid::new(10, 20);
        let piece = Piece::spawn(PieceKind::T, 10);
        grid.lock_down(&piece);

        assert!(grid.rows[0].iter().all(|&c| c == Cell::Hidden));
        assert_eq!(grid.cell(0, 3), Cell::Block);
        assert_eq!(grid.cell(0, 4), Cell::Block);
        assert_eq!(grid.cell(0, 5), Cell::Block);
        assert_eq!(grid.block_count(), 3);
    }

    #[test]
    fn test_compaction_swaps_rows_in_order() {
        let mut grid = Grid::new(4, 5);
        grid.set(0, 0, Cell::Block); // A
        fill_row(&mut grid, 1);
        grid.set(2, 1, Cell::Block); // B
        fill_row(&mut grid, 3);
        grid.set(4, 2, Cell::Block); // C

        assert_eq!(grid.remove_completed_lines(), vec![1, 3]);

        assert!(grid.line(0).iter().all(|&c| c == Cell::Empty));
        assert!(grid.line(1).iter().all(|&c| c == Cell::Empty));
        assert_eq!(grid.line(2), &[Cell::Block, Cell::Empty, Cell::Empty, Cell::Empty]);
        assert_eq!(grid.line(3), &[Cell::Empty, Cell::Block, Cell::Empty, Cell::Empty]);
        assert_eq!(grid.line(4), &[Cell::Empty, Cell::Empty, Cell::Block, Cell::Empty]);
        assert!(grid.rows[0].iter().all(|&c| c == Cell::Hidden));
    }

    #[test]
    fn test_copy_line_respects_dst_len() {
        let mut grid = Grid::new(4, 4);
        grid.set(3, 0, Cell::Block);
        let mut dst = [Cell::Hidden; 2];
        grid.copy_line(3, &mut dst);
        assert_eq!(dst, [Cell::Block, Cell::Empty]);
    }

    proptest::proptest! {
        #[test]
        fn lock_down_never_writes_hidden_row(
            dx in -12i16..12,
            dy in -3i16..24,
            turns in 0usize..4,
        ) {
            let mut grid = Grid::new(10, 20);
            let mut piece = Piece::spawn(PieceKind::J, 10);
            for _ in 0..turns {
                piece.rotate();
            }
            piece.move_horizontal(dx);
            piece.move_vertical(dy);

            grid.lock_down(&piece);
            proptest::prop_assert!(grid.rows[0].iter().all(|&c| c == Cell::Hidden));
            proptest::prop_assert!(grid.block_count() <= 4);
        }
    }

}
