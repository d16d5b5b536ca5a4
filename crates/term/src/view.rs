//! FieldView: maps a [`FieldSnapshot`] into a terminal framebuffer.
//!
//! Pure (no I/O), so layouts can be checked in unit tests.

use crate::core::{FieldSnapshot, FieldStatus};
use crate::fb::{FrameBuffer, Rgb, Style};
use crate::types::PieceKind;

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

/// Frame-loop state shown next to the field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Hud {
    /// Debug overlay visible
    pub debug: bool,
    pub fps: u32,
}

const PLAY_BG: Rgb = Rgb::new(30, 30, 40);

/// Draws the field frame, its cells and a small side panel.
pub struct FieldView {
    /// Field cell width in terminal columns.
    cell_w: u16,
    /// Field cell height in terminal rows.
    cell_h: u16,
}

impl Default for FieldView {
    fn default() -> Self {
        // Two columns per cell roughly squares up terminal glyphs.
        Self::new(2, 1)
    }
}

impl FieldView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self {
            cell_w: cell_w.max(1),
            cell_h: cell_h.max(1),
        }
    }

    /// Outer size of the bordered field in terminal cells
    pub fn frame_size(&self, snap: &FieldSnapshot) -> (u16, u16) {
        (
            snap.width.saturating_mul(self.cell_w).saturating_add(2),
            snap.height.saturating_mul(self.cell_h).saturating_add(2),
        )
    }

    /// Top-left corner of the bordered field inside `viewport`
    pub fn frame_origin(&self, snap: &FieldSnapshot, viewport: Viewport) -> (u16, u16) {
        let (frame_w, frame_h) = self.frame_size(snap);
        (
            viewport.width.saturating_sub(frame_w) / 2,
            viewport.height.saturating_sub(frame_h) / 2,
        )
    }

    /// Render into an existing framebuffer, resizing it to the viewport.
    pub fn render_into(
        &self,
        snap: &FieldSnapshot,
        hud: &Hud,
        viewport: Viewport,
        fb: &mut FrameBuffer,
    ) {
        fb.resize(viewport.width, viewport.height);
        fb.clear();

        let (frame_w, frame_h) = self.frame_size(snap);
        let (x0, y0) = self.frame_origin(snap, viewport);

        fb.fill_rect(
            x0 + 1,
            y0 + 1,
            frame_w - 2,
            frame_h - 2,
            ' ',
            Style::default().on(PLAY_BG),
        );
        draw_border(fb, x0, y0, frame_w, frame_h);

        let empty = Style::fg(Rgb::new(90, 90, 100)).on(PLAY_BG).dim();
        for row in 0..snap.height as usize {
            for column in 0..snap.width as usize {
                let (ch, style) = match snap.kind_at(column, row) {
                    Some(kind) => {
                        let style = Style::fg(kind_color(kind)).on(PLAY_BG);
                        if snap.is_active_cell(column, row) {
                            ('█', style.bold())
                        } else {
                            ('▓', style)
                        }
                    }
                    None => ('·', empty),
                };
                self.fill_cell(fb, x0, y0, column as u16, row as u16, ch, style);
            }
        }

        let panel_x = x0.saturating_add(frame_w).saturating_add(2);
        self.draw_side_panel(fb, snap, hud, panel_x, y0);

        match snap.status {
            FieldStatus::Falling => {}
            FieldStatus::OutOfPieces => draw_banner(fb, x0, y0, frame_w, frame_h, "OUT OF PIECES"),
            FieldStatus::SpawnBlocked => draw_banner(fb, x0, y0, frame_w, frame_h, "BLOCKED"),
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &FieldSnapshot, hud: &Hud, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, hud, viewport, &mut fb);
        fb
    }

    #[allow(clippy::too_many_arguments)]
    fn fill_cell(
        &self,
        fb: &mut FrameBuffer,
        x0: u16,
        y0: u16,
        column: u16,
        row: u16,
        ch: char,
        style: Style,
    ) {
        let px = x0
            .saturating_add(1)
            .saturating_add(column.saturating_mul(self.cell_w));
        let py = y0
            .saturating_add(1)
            .saturating_add(row.saturating_mul(self.cell_h));
        fb.fill_rect(px, py, self.cell_w, self.cell_h, ch, style);
    }

    fn draw_side_panel(&self, fb: &mut FrameBuffer, snap: &FieldSnapshot, hud: &Hud, x: u16, y0: u16) {
        if x.saturating_add(8) > fb.width() {
            return;
        }

        let label = Style::default().bold();
        let value = Style::fg(Rgb::new(200, 200, 200));

        let mut y = y0;
        fb.put_str(x, y, "NEXT", label);
        y += 1;
        for kind in snap.upcoming.iter().take(5) {
            fb.put_str(x, y, kind.as_str(), Style::fg(kind_color(*kind)));
            y += 1;
        }
        if snap.upcoming.is_empty() {
            fb.put_str(x, y, "-", value);
            y += 1;
        }

        y += 1;
        fb.put_str(x, y, "LEFT", label);
        fb.put_str(x + 7, y, &snap.upcoming.len().to_string(), value);
        y += 1;
        fb.put_str(x, y, "LOCKED", label);
        fb.put_str(x + 7, y, &snap.locked.to_string(), value);

        if hud.debug {
            let dim = value.dim();
            y += 2;
            fb.put_str(x, y, &format!("FPS {}", hud.fps), dim);
            if let Some(active) = &snap.active {
                y += 1;
                fb.put_str(
                    x,
                    y,
                    &format!("#{} {}", active.id, active.orientation.as_str()),
                    dim,
                );
            }
        }
    }
}

fn draw_border(fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16) {
    let style = Style::fg(Rgb::new(200, 200, 200));
    let (right, bottom) = (x + w - 1, y + h - 1);

    fb.put(x, y, '┌', style);
    fb.put(right, y, '┐', style);
    fb.put(x, bottom, '└', style);
    fb.put(right, bottom, '┘', style);
    for cx in x + 1..right {
        fb.put(cx, y, '─', style);
        fb.put(cx, bottom, '─', style);
    }
    for cy in y + 1..bottom {
        fb.put(x, cy, '│', style);
        fb.put(right, cy, '│', style);
    }
}

fn draw_banner(fb: &mut FrameBuffer, x0: u16, y0: u16, frame_w: u16, frame_h: u16, text: &str) {
    let text_w = text.chars().count() as u16;
    let x = x0 + frame_w.saturating_sub(text_w) / 2;
    let y = y0 + frame_h / 2;
    fb.put_str(x, y, text, Style::fg(Rgb::new(255, 255, 255)).bold());
}

fn kind_color(kind: PieceKind) -> Rgb {
    match kind {
        PieceKind::I => Rgb::new(80, 220, 220),
        PieceKind::L => Rgb::new(255, 165, 0),
        PieceKind::R => Rgb::new(240, 220, 80),
        PieceKind::S => Rgb::new(100, 220, 120),
        PieceKind::T => Rgb::new(200, 120, 220),
    }
}
