//! GameView: maps a `core::GameSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::{ActiveSnapshot, GameSnapshot};
use crate::fb::{CellStyle, FrameBuffer, Rgb};

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

/// Fixed 8-entry palette indexed by cell value. Index 0 is the empty background.
pub const PALETTE: [Rgb; 8] = [
    Rgb::new(0x00, 0x00, 0x00), // empty
    Rgb::new(0x00, 0xff, 0xff), // I cyan
    Rgb::new(0xff, 0xff, 0x00), // O yellow
    Rgb::new(0x80, 0x00, 0x80), // T purple
    Rgb::new(0x00, 0xff, 0x00), // S green
    Rgb::new(0xff, 0x00, 0x00), // Z red
    Rgb::new(0x00, 0x00, 0xff), // J blue
    Rgb::new(0xff, 0xa5, 0x00), // L orange
];

/// Palette color for a cell value; out-of-range values fall back to the background
pub fn palette_color(value: u8) -> Rgb {
    PALETTE.get(value as usize).copied().unwrap_or(PALETTE[0])
}

const BLOCK: char = '█';
const GRID_DOT: char = '·';
const BOARD_BG: Rgb = Rgb::new(0, 0, 0);
const GRID_FG: Rgb = Rgb::new(0x33, 0x33, 0x33);

/// Panel needs room for "SCORE" plus a 4-cell preview at 2 columns per cell.
const MIN_PANEL_W: u16 = 10;

/// A lightweight terminal renderer for the game.
pub struct GameView {
    /// Board cell width in terminal columns.
    cell_w: u16,
    /// Board cell height in terminal rows.
    cell_h: u16,
}

impl Default for GameView {
    fn default() -> Self {
        // 2x1 helps compensate for typical terminal glyph aspect ratio.
        Self {
            cell_w: 2,
            cell_h: 1,
        }
    }
}

/// Board frame placement inside the viewport
#[derive(Debug, Clone, Copy)]
struct Frame {
    x: u16,
    y: u16,
    w: u16,
    h: u16,
}

impl GameView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self {
            cell_w: cell_w.max(1),
            cell_h: cell_h.max(1),
        }
    }

    /// Render the snapshot into an existing framebuffer.
    ///
    /// Every call clears and redraws the whole frame. Callers can reuse a framebuffer
    /// across frames and only resize when the terminal size changes.
    pub fn render_into(&self, snap: &GameSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::default().into_cell(' '));

        let frame_w = (snap.width as u16) * self.cell_w + 2;
        let frame_h = (snap.height as u16) * self.cell_h + 2;
        let frame = Frame {
            x: viewport.width.saturating_sub(frame_w + MIN_PANEL_W + 2) / 2,
            y: viewport.height.saturating_sub(frame_h) / 2,
            w: frame_w,
            h: frame_h,
        };

        let border = CellStyle::new(Rgb::new(200, 200, 200), Rgb::new(0, 0, 0));
        self.draw_border(fb, frame, border);

        // Locked cells, with a grid dot in every empty one.
        for y in 0..snap.height as usize {
            for x in 0..snap.width as usize {
                let value = snap.cell(x, y);
                if value == 0 {
                    let style = CellStyle::new(GRID_FG, BOARD_BG);
                    self.fill_cell_rect(fb, frame, x as u16, y as u16, GRID_DOT, style);
                } else {
                    self.draw_block(fb, frame, x as u16, y as u16, value);
                }
            }
        }

        // The active piece is hidden once the game is over.
        if let (Some(active), false) = (snap.active, snap.game_over) {
            self.draw_active(fb, frame, snap, active);
        }

        self.draw_side_panel(fb, snap, viewport, frame);

        if snap.game_over {
            self.draw_game_over(fb, frame, snap);
        } else if snap.paused {
            self.draw_overlay_line(fb, frame, 0, "PAUSED");
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GameSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    fn draw_border(&self, fb: &mut FrameBuffer, frame: Frame, style: CellStyle) {
        let Frame { x, y, w, h } = frame;
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

    fn draw_active(
        &self,
        fb: &mut FrameBuffer,
        frame: Frame,
        snap: &GameSnapshot,
        active: ActiveSnapshot,
    ) {
        let value = active.kind.cell_value();
        for &(dx, dy) in active.shape().minos.iter() {
            let x = active.x + dx;
            let y = active.y + dy;
            // Cells above the board are not drawn.
            if x >= 0 && (x as u8) < snap.width && y >= 0 && (y as u8) < snap.height {
                self.draw_block(fb, frame, x as u16, y as u16, value);
            }
        }
    }

    fn draw_block(&self, fb: &mut FrameBuffer, frame: Frame, x: u16, y: u16, value: u8) {
        let style = CellStyle::new(palette_color(value), BOARD_BG).bold();
        self.fill_cell_rect(fb, frame, x, y, BLOCK, style);
    }

    fn fill_cell_rect(
        &self,
        fb: &mut FrameBuffer,
        frame: Frame,
        cell_x: u16,
        cell_y: u16,
        ch: char,
        style: CellStyle,
    ) {
        let px = frame.x + 1 + cell_x * self.cell_w;
        let py = frame.y + 1 + cell_y * self.cell_h;
        fb.fill_rect(px, py, self.cell_w, self.cell_h, ch, style);
    }

    fn draw_side_panel(
        &self,
        fb: &mut FrameBuffer,
        snap: &GameSnapshot,
        viewport: Viewport,
        frame: Frame,
    ) {
        let panel_x = frame.x.saturating_add(frame.w).saturating_add(2);
        if panel_x >= viewport.width || viewport.width - panel_x < MIN_PANEL_W {
            return;
        }

        let label = CellStyle::default().bold();
        let value = CellStyle::new(Rgb::new(200, 200, 200), Rgb::new(0, 0, 0));

        let mut y = frame.y;
        for (name, n) in [("SCORE", snap.score), ("LINES", snap.lines), ("LEVEL", snap.level)] {
            fb.put_str(panel_x, y, name, label);
            fb.put_u32(panel_x, y.saturating_add(1), n, value);
            y = y.saturating_add(3);
        }

        fb.put_str(panel_x, y, "NEXT", label);
        y = y.saturating_add(1);
        if let Some(next) = snap.next {
            self.draw_preview(fb, panel_x, y, next);
        }
        y = y.saturating_add(5);

        let hint = CellStyle::new(Rgb::new(140, 140, 140), Rgb::new(0, 0, 0)).dim();
        for line in ["P pause", "R restart", "Q quit"] {
            if y >= viewport.height {
                break;
            }
            fb.put_str(panel_x, y, line, hint);
            y = y.saturating_add(1);
        }
    }

    /// Draw the next piece's matrix, always 2 columns per cell regardless of board scale.
    fn draw_preview(&self, fb: &mut FrameBuffer, x: u16, y: u16, next: ActiveSnapshot) {
        let style = CellStyle::new(palette_color(next.kind.cell_value()), BOARD_BG).bold();
        for &(dx, dy) in next.shape().minos.iter() {
            let px = x + (dx as u16) * 2;
            let py = y + dy as u16;
            fb.put_char(px, py, BLOCK, style);
            fb.put_char(px + 1, py, BLOCK, style);
        }
    }

    fn draw_game_over(&self, fb: &mut FrameBuffer, frame: Frame, snap: &GameSnapshot) {
        let style = CellStyle::new(Rgb::new(255, 255, 255), Rgb::new(0, 0, 0)).bold();
        self.draw_overlay_line(fb, frame, -1, "GAME OVER");

        let mid_y = frame.y.saturating_add(frame.h / 2);
        for (offset, name, n) in [(1, "SCORE ", snap.score), (2, "LINES ", snap.lines)] {
            let x = frame.x.saturating_add(frame.w.saturating_sub(12) / 2);
            let end = fb.put_str(x, mid_y + offset, name, style);
            fb.put_u32(end, mid_y + offset, n, style);
        }
        self.draw_overlay_line(fb, frame, 4, "R to restart");
    }

    fn draw_overlay_line(&self, fb: &mut FrameBuffer, frame: Frame, row_offset: i16, text: &str) {
        let mid_y = frame.y.saturating_add(frame.h / 2);
        let y = mid_y.saturating_add_signed(row_offset);
        let text_w = text.chars().count() as u16;
        let x = frame.x.saturating_add(frame.w.saturating_sub(text_w) / 2);
        let style = CellStyle::new(Rgb::new(255, 255, 255), Rgb::new(0, 0, 0)).bold();
        fb.put_str(x, y, text, style);
    }
}
