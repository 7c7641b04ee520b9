//! GameView: maps a `core::GameSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::GameSnapshot;
use crate::fb::{CellStyle, FrameBuffer, Rgb};

const WELL_BG: Rgb = Rgb::new(30, 30, 40);
const BLOCK: char = '█';

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

/// A lightweight terminal renderer for the game.
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
        Self::new(2, 1)
    }
}

/// Top-left corner of the well's border in terminal coordinates.
#[derive(Debug, Clone, Copy)]
struct Origin {
    x: u16,
    y: u16,
}

impl GameView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self {
            cell_w,
            cell_h,
            anchor_y: AnchorY::Center,
        }
    }

    pub fn with_anchor_y(mut self, anchor_y: AnchorY) -> Self {
        self.anchor_y = anchor_y;
        self
    }

    /// Terminal size of the bordered well for a grid of `width x height` cells.
    pub fn frame_size(&self, width: u16, height: u16) -> (u16, u16) {
        (
            width.saturating_mul(self.cell_w).saturating_add(2),
            height.saturating_mul(self.cell_h).saturating_add(2),
        )
    }

    /// Render a snapshot into an existing framebuffer.
    ///
    /// Callers can reuse a framebuffer across frames; it is only resized when
    /// the viewport changes.
    pub fn render_into(&self, snap: &GameSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::default().into_cell(' '));

        let (frame_w, frame_h) = self.frame_size(snap.width, snap.height);
        let origin = Origin {
            x: viewport.width.saturating_sub(frame_w) / 2,
            y: match self.anchor_y {
                AnchorY::Center => viewport.height.saturating_sub(frame_h) / 2,
                AnchorY::Top => 0,
            },
        };

        let border = CellStyle::new(Rgb::new(200, 200, 200), Rgb::new(0, 0, 0));
        self.draw_border(fb, origin, frame_w, frame_h, border);

        // Locked cells, with a dot marking empty ones.
        let empty = CellStyle {
            dim: true,
            ..CellStyle::new(Rgb::new(90, 90, 100), WELL_BG)
        };
        for y in 0..snap.height {
            for x in 0..snap.width {
                match snap.cell(x, y) {
                    Some(color) => self.draw_block(fb, origin, x, y, color),
                    None => self.fill_cell_rect(fb, origin, x, y, '·', empty),
                }
            }
        }

        // Active piece; cells above the field are not drawn.
        if let Some(piece) = snap.piece {
            for (x, y) in piece.blocks() {
                if x >= 0 && y >= 0 && (x as u16) < snap.width && (y as u16) < snap.height {
                    self.draw_block(fb, origin, x as u16, y as u16, piece.color);
                }
            }
        }

        self.draw_side_panel(fb, snap, viewport, origin, frame_w);

        if snap.is_game_over() {
            self.draw_overlay_text(fb, origin, frame_w, frame_h, "GAME OVER");
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GameSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    fn draw_border(&self, fb: &mut FrameBuffer, o: Origin, w: u16, h: u16, style: CellStyle) {
        if w < 2 || h < 2 {
            return;
        }
        let (right, bottom) = (o.x + w - 1, o.y + h - 1);

        fb.put_char(o.x, o.y, '┌', style);
        fb.put_char(right, o.y, '┐', style);
        fb.put_char(o.x, bottom, '└', style);
        fb.put_char(right, bottom, '┘', style);

        for x in o.x + 1..right {
            fb.put_char(x, o.y, '─', style);
            fb.put_char(x, bottom, '─', style);
        }
        for y in o.y + 1..bottom {
            fb.put_char(o.x, y, '│', style);
            fb.put_char(right, y, '│', style);
        }
    }

    fn draw_block(&self, fb: &mut FrameBuffer, o: Origin, x: u16, y: u16, color: Rgb) {
        let style = CellStyle {
            bold: true,
            ..CellStyle::new(color, WELL_BG)
        };
        self.fill_cell_rect(fb, o, x, y, BLOCK, style);
    }

    fn fill_cell_rect(
        &self,
        fb: &mut FrameBuffer,
        o: Origin,
        cell_x: u16,
        cell_y: u16,
        ch: char,
        style: CellStyle,
    ) {
        // Cells whose position overflows the terminal coordinate range are clipped.
        let px = cell_x
            .checked_mul(self.cell_w)
            .and_then(|x| x.checked_add(o.x.saturating_add(1)));
        let py = cell_y
            .checked_mul(self.cell_h)
            .and_then(|y| y.checked_add(o.y.saturating_add(1)));
        if let (Some(px), Some(py)) = (px, py) {
            fb.fill_rect(px, py, self.cell_w, self.cell_h, ch, style);
        }
    }

    fn draw_side_panel(
        &self,
        fb: &mut FrameBuffer,
        snap: &GameSnapshot,
        viewport: Viewport,
        o: Origin,
        frame_w: u16,
    ) {
        let panel_x = o.x.saturating_add(frame_w).saturating_add(2);
        if panel_x >= viewport.width || viewport.width - panel_x < 12 {
            return;
        }

        let label = CellStyle {
            bold: true,
            ..CellStyle::default()
        };
        let value = CellStyle::new(Rgb::new(200, 200, 200), Rgb::new(0, 0, 0));
        let hint = CellStyle { dim: true, ..value };

        let mut y = o.y;
        fb.put_str(panel_x, y, "PIECES", label);
        y = y.saturating_add(1);
        fb.put_u32(panel_x, y, snap.pieces_spawned, value);
        y = y.saturating_add(2);

        fb.put_str(panel_x, y, "ROWS", label);
        y = y.saturating_add(1);
        fb.put_u32(panel_x, y, snap.rows_cleared, value);
        y = y.saturating_add(2);

        fb.put_str(panel_x, y, "KEYS", label);
        for line in ["← → move", "↑   rotate", "↓   drop", "r   restart", "q   quit"] {
            y = y.saturating_add(1);
            if y >= viewport.height {
                break;
            }
            fb.put_str(panel_x, y, line, hint);
        }
    }

    fn draw_overlay_text(&self, fb: &mut FrameBuffer, o: Origin, frame_w: u16, frame_h: u16, text: &str) {
        let mid_y = o.y.saturating_add(frame_h / 2);
        let text_w = text.chars().count() as u16;
        let x = o.x.saturating_add(frame_w.saturating_sub(text_w) / 2);
        let style = CellStyle {
            bold: true,
            ..CellStyle::new(Rgb::new(255, 255, 255), Rgb::new(0, 0, 0))
        };
        fb.put_str(x, mid_y, text, style);
    }
}
