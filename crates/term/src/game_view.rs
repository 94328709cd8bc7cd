//! GameView: maps a `core::GameSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::{GameSnapshot, APPLE_GLYPH, HEAD_GLYPH, TAIL_GLYPH};
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::Cell as BoardCell;

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

const BOARD_BG: Rgb = Rgb::new(20, 24, 20);
const BORDER: CellStyle = CellStyle::new(Rgb::new(200, 200, 200), Rgb::new(0, 0, 0));
const HEAD: CellStyle = CellStyle::new(Rgb::new(240, 220, 80), BOARD_BG).bold();
const DOT: CellStyle = CellStyle::new(Rgb::new(70, 80, 70), BOARD_BG);
const TAIL: CellStyle = CellStyle::new(Rgb::new(100, 220, 120), BOARD_BG);
const APPLE: CellStyle = CellStyle::new(Rgb::new(220, 80, 80), BOARD_BG).bold();
const LABEL: CellStyle = CellStyle::new(Rgb::new(220, 220, 220), Rgb::new(0, 0, 0)).bold();
const VALUE: CellStyle = CellStyle::new(Rgb::new(200, 200, 200), Rgb::new(0, 0, 0));
const OVERLAY: CellStyle = CellStyle::new(Rgb::new(255, 255, 255), Rgb::new(0, 0, 0)).bold();

const DOT_GLYPH: char = '.';

const HELP: &str = "ijkl/arrows: turn  q: quit";

/// A lightweight terminal renderer for the snake board.
pub struct GameView {
    /// Board cell width in terminal columns.
    cell_w: u16,
    /// Board cell height in terminal rows.
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

    /// Size of the bordered board in terminal cells.
    pub fn frame_size(&self, snap: &GameSnapshot) -> (u16, u16) {
        let w = snap.bounds.width.saturating_mul(self.cell_w).saturating_add(2);
        let h = snap.bounds.height.saturating_mul(self.cell_h).saturating_add(2);
        (w, h)
    }

    /// Render the current game state into an existing framebuffer.
    ///
    /// Callers can reuse a framebuffer across frames and only resize when the
    /// terminal size changes.
    pub fn render_into(&self, snap: &GameSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::default().into_cell(' '));

        let (frame_w, frame_h) = self.frame_size(snap);
        let start_x = viewport.width.saturating_sub(frame_w) / 2;
        let start_y = match self.anchor_y {
            AnchorY::Center => viewport.height.saturating_sub(frame_h) / 2,
            AnchorY::Top => 0,
        };

        fb.fill_rect(
            start_x + 1,
            start_y + 1,
            (frame_w - 2).min(viewport.width),
            (frame_h - 2).min(viewport.height),
            ' ',
            CellStyle::new(BOARD_BG, BOARD_BG),
        );
        self.draw_border(fb, start_x, start_y, frame_w, frame_h);
        self.draw_background(fb, snap, start_x, start_y);

        for &apple in &snap.apples {
            self.draw_glyph(fb, snap, start_x, start_y, apple, APPLE_GLYPH, APPLE);
        }
        for &segment in snap.tail() {
            self.draw_glyph(fb, snap, start_x, start_y, segment, TAIL_GLYPH, TAIL);
        }
        if let Some(head) = snap.head() {
            self.draw_glyph(fb, snap, start_x, start_y, head, HEAD_GLYPH, HEAD);
        }

        self.draw_side_panel(fb, snap, viewport, start_x, start_y, frame_w);

        let help_y = start_y.saturating_add(frame_h);
        if help_y < viewport.height {
            fb.put_str(start_x, help_y, HELP, VALUE.dim());
        }

        if snap.game_over {
            self.draw_game_over(fb, snap, start_x, start_y, frame_w, frame_h);
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GameSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    fn draw_border(&self, fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16) {
        if w < 2 || h < 2 {
            return;
        }

        fb.put_char(x, y, '+', BORDER);
        fb.put_char(x + w - 1, y, '+', BORDER);
        fb.put_char(x, y + h - 1, '+', BORDER);
        fb.put_char(x + w - 1, y + h - 1, '+', BORDER);

        for dx in 1..w - 1 {
            fb.put_char(x + dx, y, '-', BORDER);
            fb.put_char(x + dx, y + h - 1, '-', BORDER);
        }
        for dy in 1..h - 1 {
            fb.put_char(x, y + dy, '|', BORDER);
            fb.put_char(x + w - 1, y + dy, '|', BORDER);
        }
    }

    /// Top-left terminal position of a board cell. Saturates on huge boards.
    fn cell_origin(&self, start_x: u16, start_y: u16, cell: BoardCell) -> (u16, u16) {
        let px = start_x
            .saturating_add(1)
            .saturating_add((cell.x as u16).saturating_mul(self.cell_w));
        let py = start_y
            .saturating_add(1)
            .saturating_add((cell.y as u16).saturating_mul(self.cell_h));
        (px, py)
    }

    /// A dot on every visible empty board cell.
    fn draw_background(
        &self,
        fb: &mut FrameBuffer,
        snap: &GameSnapshot,
        start_x: u16,
        start_y: u16,
    ) {
        for y in 0..snap.bounds.height {
            let (_, py) = self.cell_origin(start_x, start_y, BoardCell::new(0, y as i32));
            if py >= fb.height() {
                break;
            }
            for x in 0..snap.bounds.width {
                let (px, _) = self.cell_origin(start_x, start_y, BoardCell::new(x as i32, 0));
                if px >= fb.width() {
                    break;
                }
                fb.put_char(px, py, DOT_GLYPH, DOT);
            }
        }
    }

    /// Glyph in the top-left column of the board cell, rest padded with blanks.
    /// Cells off the board are skipped.
    #[allow(clippy::too_many_arguments)]
    fn draw_glyph(
        &self,
        fb: &mut FrameBuffer,
        snap: &GameSnapshot,
        start_x: u16,
        start_y: u16,
        cell: BoardCell,
        ch: char,
        style: CellStyle,
    ) {
        if !snap.bounds.contains(cell) {
            return;
        }
        let (px, py) = self.cell_origin(start_x, start_y, cell);
        fb.fill_rect(px, py, self.cell_w, self.cell_h, ' ', style);
        fb.put_char(px, py, ch, style);
    }

    fn draw_side_panel(
        &self,
        fb: &mut FrameBuffer,
        snap: &GameSnapshot,
        viewport: Viewport,
        start_x: u16,
        start_y: u16,
        frame_w: u16,
    ) {
        let panel_x = start_x.saturating_add(frame_w).saturating_add(2);
        if panel_x >= viewport.width || viewport.width - panel_x < 8 {
            return;
        }

        let mut y = start_y;
        fb.put_str(panel_x, y, "SCORE", LABEL);
        y = y.saturating_add(1);
        fb.put_u32(panel_x, y, snap.score as u32, VALUE);
        y = y.saturating_add(2);

        fb.put_str(panel_x, y, "LENGTH", LABEL);
        y = y.saturating_add(1);
        fb.put_u32(panel_x, y, snap.snake.len() as u32, VALUE);
        y = y.saturating_add(2);

        fb.put_str(panel_x, y, "APPLES", LABEL);
        y = y.saturating_add(1);
        fb.put_u32(panel_x, y, snap.apples.len() as u32, VALUE);
    }

    fn draw_game_over(
        &self,
        fb: &mut FrameBuffer,
        snap: &GameSnapshot,
        start_x: u16,
        start_y: u16,
        frame_w: u16,
        frame_h: u16,
    ) {
        let mid_y = start_y.saturating_add(frame_h / 2);

        let title = "GAME OVER";
        let title_w = title.len() as u16;
        let x = start_x.saturating_add(frame_w.saturating_sub(title_w) / 2);
        fb.put_str(x, mid_y.saturating_sub(1), title, OVERLAY);

        // "SCORE " followed by the number, centered as one run.
        let score = snap.score as u32;
        let digits = score.checked_ilog10().unwrap_or(0) as u16 + 1;
        let line_w = 6 + digits;
        let x = start_x.saturating_add(frame_w.saturating_sub(line_w) / 2);
        fb.put_str(x, mid_y, "SCORE ", OVERLAY);
        fb.put_u32(x + 6, mid_y, score, OVERLAY);
    }
}
