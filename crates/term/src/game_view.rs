//! GameView: maps a `core::Gameplay` session into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::{Gameplay, Grid, Piece};
use crate::fb::{CellStyle, FrameBuffer, Glyph, Rgb};
use crate::types::{Cell, PieceKind};

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnchorY {
    Center,
    Top,
}

const PLAY_BG: Rgb = Rgb::new(30, 30, 40);

/// A lightweight terminal renderer for the playfield.
pub struct GameView {
    /// Grid cell width in terminal columns.
    cell_w: u16,
    /// Grid cell height in terminal rows.
    cell_h: u16,
    anchor_y: AnchorY,
}

impl Default for GameView {
    fn default() -> Self {
        // 2x1 helps compensate for typical terminal glyph aspect ratio.
        Self {
            cell_w: 2,
            cell_h: 1,
            anchor_y: AnchorY::Center,
        }
    }
}

impl GameView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self {
            cell_w: cell_w.max(1),
            cell_h: cell_h.max(1),
            anchor_y: AnchorY::Center,
        }
    }

    pub fn with_anchor_y(mut self, anchor_y: AnchorY) -> Self {
        self.anchor_y = anchor_y;
        self
    }

    /// Terminal size needed for the bordered playfield alone.
    pub fn frame_size(&self, grid: &Grid) -> (u16, u16) {
        (
            (grid.width() as u16) * self.cell_w + 2,
            (grid.height() as u16) * self.cell_h + 2,
        )
    }

    /// Render the session into an existing framebuffer.
    ///
    /// Callers can reuse a framebuffer across frames and only resize when the
    /// terminal size changes.
    pub fn render_into(&self, game: &Gameplay, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(Glyph::default());

        let grid = game.field();
        let (frame_w, frame_h) = self.frame_size(grid);

        let start_x = viewport.width.saturating_sub(frame_w) / 2;
        let start_y = match self.anchor_y {
            AnchorY::Center => viewport.height.saturating_sub(frame_h) / 2,
            AnchorY::Top => 0,
        };

        let border = CellStyle::new(Rgb::new(200, 200, 200), Rgb::new(0, 0, 0));
        self.draw_border(fb, start_x, start_y, frame_w, frame_h, border);

        for row in 0..grid.height() {
            for col in 0..grid.width() {
                let (x, y) = (col as u16, row as u16);
                match grid.cell(row, col) {
                    Cell::Block => self.draw_block(fb, start_x, start_y, x, y, None),
                    _ => self.draw_empty_cell(fb, start_x, start_y, x, y),
                }
            }
        }

        if !game.is_over() {
            self.draw_piece(fb, grid, game.current_piece(), start_x, start_y);
        }

        self.draw_side_panel(fb, game, viewport, start_x, start_y, frame_w);

        if game.is_over() {
            self.draw_overlay_text(fb, start_x, start_y, frame_w, frame_h, "GAME OVER");
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, game: &Gameplay, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(game, viewport, &mut fb);
        fb
    }

    /// Draw the active piece unless it still overlaps the Hidden row.
    fn draw_piece(
        &self,
        fb: &mut FrameBuffer,
        grid: &Grid,
        piece: &Piece,
        start_x: u16,
        start_y: u16,
    ) {
        if grid.is_hidden(piece) {
            return;
        }
        for p in piece.points() {
            // Storage row 1 is the first playable row.
            if p.y < 1 || p.x < 0 || p.x as usize >= grid.width() || p.y as usize > grid.height() {
                continue;
            }
            let (x, y) = (p.x as u16, (p.y - 1) as u16);
            self.draw_block(fb, start_x, start_y, x, y, Some(piece.kind()));
        }
    }

    fn draw_border(&self, fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16, style: CellStyle) {
        if w < 2 || h < 2 {
            return;
        }

        fb.put_char(x, y, '┌', style);
        fb.put_char(x + w - 1, y, '┐', style);
        fb.put_char(x, y + h - 1, '└', style);
        fb.put_char(x + w - 1, y + h - 1, '┘', style);

        for dx in 1..w - 1 {
            fb.put_char(x + dx, y, '─', style);
            fb.put_char(x + dx, y + h - 1, '─', style);
        }
        for dy in 1..h - 1 {
            fb.put_char(x, y + dy, '│', style);
            fb.put_char(x + w - 1, y + dy, '│', style);
        }
    }

    fn draw_empty_cell(&self, fb: &mut FrameBuffer, start_x: u16, start_y: u16, x: u16, y: u16) {
        let style = CellStyle {
            dim: true,
            ..CellStyle::new(Rgb::new(90, 90, 100), PLAY_BG)
        };
        let (px, py) = self.cell_origin(start_x, start_y, x, y);
        fb.fill_rect(px, py, self.cell_w, self.cell_h, ' ', style);
        fb.put_char(px + self.cell_w - 1, py, '.', style);
    }

    /// Settled blocks have no kind and are drawn neutral.
    fn draw_block(
        &self,
        fb: &mut FrameBuffer,
        start_x: u16,
        start_y: u16,
        x: u16,
        y: u16,
        kind: Option<PieceKind>,
    ) {
        let fg = match kind {
            None => Rgb::new(170, 170, 180),
            Some(PieceKind::I) => Rgb::new(80, 220, 220),
            Some(PieceKind::O) => Rgb::new(240, 220, 80),
            Some(PieceKind::T) => Rgb::new(200, 120, 220),
            Some(PieceKind::S) => Rgb::new(100, 220, 120),
            Some(PieceKind::Z) => Rgb::new(220, 80, 80),
            Some(PieceKind::J) => Rgb::new(80, 120, 220),
            Some(PieceKind::L) => Rgb::new(255, 165, 0),
        };
        let style = CellStyle {
            bold: kind.is_some(),
            ..CellStyle::new(fg, PLAY_BG)
        };
        let (px, py) = self.cell_origin(start_x, start_y, x, y);
        fb.fill_rect(px, py, self.cell_w, self.cell_h, '█', style);
    }

    fn cell_origin(&self, start_x: u16, start_y: u16, x: u16, y: u16) -> (u16, u16) {
        (start_x + 1 + x * self.cell_w, start_y + 1 + y * self.cell_h)
    }

    fn draw_side_panel(
        &self,
        fb: &mut FrameBuffer,
        game: &Gameplay,
        viewport: Viewport,
        start_x: u16,
        start_y: u16,
        frame_w: u16,
    ) {
        let panel_x = start_x.saturating_add(frame_w).saturating_add(2);
        if panel_x >= viewport.width || viewport.width - panel_x < 12 {
            return;
        }

        let label = CellStyle {
            bold: true,
            ..CellStyle::default()
        };
        let value = CellStyle::new(Rgb::new(200, 200, 200), Rgb::new(0, 0, 0));
        let help = CellStyle { dim: true, ..value };

        let mut y = start_y;
        fb.put_str(panel_x, y, "LINES", label);
        y = y.saturating_add(1);
        fb.put_u32(panel_x, y, game.lines_cleared(), value);
        y = y.saturating_add(2);

        fb.put_str(panel_x, y, "PIECE", label);
        y = y.saturating_add(1);
        let kind_name = game.current_piece().kind().as_str().to_ascii_uppercase();
        fb.put_str(panel_x, y, &kind_name, value);
        y = y.saturating_add(2);

        for line in ["←/→ move", "↑ rotate", "space drop", "q quit"] {
            if y >= viewport.height {
                break;
            }
            fb.put_str(panel_x, y, line, help);
            y = y.saturating_add(1);
        }
    }

    fn draw_overlay_text(
        &self,
        fb: &mut FrameBuffer,
        start_x: u16,
        start_y: u16,
        frame_w: u16,
        frame_h: u16,
        text: &str,
    ) {
        let mid_y = start_y.saturating_add(frame_h / 2);
        let text_w = text.chars().count() as u16;
        let x = start_x.saturating_add(frame_w.saturating_sub(text_w) / 2);
        let style = CellStyle {
            bold: true,
            ..CellStyle::new(Rgb::new(255, 255, 255), Rgb::new(0, 0, 0))
        };
        fb.put_str(x, mid_y, text, style);
    }
}
