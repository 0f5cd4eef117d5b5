//! GameView: maps a `core::SessionSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.
//!
//! The same layout drives rendering and [`GameView::hit_test`], so a mouse
//! click always lands on the card that was drawn under it.

use crate::core::{CardState, SessionSnapshot};
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::{format_status, Position, DEFAULT_COLUMNS};

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

/// What a terminal cell maps to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Hit {
    Card(Position),
    /// The elapsed-time line (clicking it restarts a finished game).
    Status,
}

/// Resolved on-screen geometry for one frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Layout {
    /// Cards per row actually used, never more than there are cards.
    columns: u16,
    start_x: u16,
    start_y: u16,
    frame_w: u16,
    frame_h: u16,
    status_y: u16,
}

/// A lightweight terminal renderer for the card grid.
pub struct GameView {
    /// Cards per row.
    columns: u16,
    /// Card width in terminal columns.
    card_w: u16,
    /// Card height in terminal rows.
    card_h: u16,
    gap_x: u16,
    gap_y: u16,
    anchor_y: AnchorY,
}

impl Default for GameView {
    fn default() -> Self {
        // 6x3 keeps cards roughly square on typical terminal glyphs.
        Self {
            columns: DEFAULT_COLUMNS,
            card_w: 6,
            card_h: 3,
            gap_x: 1,
            gap_y: 1,
            anchor_y: AnchorY::Center,
        }
    }
}

const COVER_FG: Rgb = Rgb::new(90, 110, 170);
const COVER_BG: Rgb = Rgb::new(30, 40, 80);
const TABLE_BG: Rgb = Rgb::new(20, 20, 28);

impl GameView {
    pub fn with_columns(mut self, columns: u16) -> Self {
        self.columns = columns.max(1);
        self
    }

    pub fn with_anchor_y(mut self, anchor_y: AnchorY) -> Self {
        self.anchor_y = anchor_y;
        self
    }

    /// A row is never wider than the board.
    fn effective_columns(&self, card_count: usize) -> u16 {
        let cap = u16::try_from(card_count).unwrap_or(u16::MAX).max(1);
        self.columns.min(cap)
    }

    fn layout(&self, card_count: usize, viewport: Viewport) -> Layout {
        let columns = self.effective_columns(card_count);
        let rows = u16::try_from(card_count.div_ceil(columns as usize)).unwrap_or(u16::MAX);
        let grid_w = span(columns, self.card_w, self.gap_x);
        let grid_h = span(rows, self.card_h, self.gap_y);
        // Border plus one column of padding on each side.
        let frame_w = grid_w.saturating_add(4);
        let frame_h = grid_h.saturating_add(2);
        // Status and pairs lines sit under the frame.
        let total_h = frame_h.saturating_add(2);

        let start_x = viewport.width.saturating_sub(frame_w) / 2;
        let start_y = match self.anchor_y {
            AnchorY::Center => viewport.height.saturating_sub(total_h) / 2,
            AnchorY::Top => 0,
        };

        Layout {
            columns,
            start_x,
            start_y,
            frame_w,
            frame_h,
            status_y: start_y.saturating_add(frame_h),
        }
    }

    fn card_origin(&self, layout: &Layout, index: usize) -> (u16, u16) {
        let columns = layout.columns as usize;
        let col = (index % columns) as u16;
        let row = u16::try_from(index / columns).unwrap_or(u16::MAX);
        let step_x = self.card_w.saturating_add(self.gap_x);
        let step_y = self.card_h.saturating_add(self.gap_y);
        (
            layout
                .start_x
                .saturating_add(2)
                .saturating_add(col.saturating_mul(step_x)),
            layout
                .start_y
                .saturating_add(1)
                .saturating_add(row.saturating_mul(step_y)),
        )
    }

    /// Render the current session into an existing framebuffer.
    ///
    /// Callers can reuse a framebuffer across frames and only resize when the
    /// terminal size changes. `cursor` highlights the keyboard selection.
    pub fn render_into(
        &self,
        snap: &SessionSnapshot,
        cursor: Option<Position>,
        viewport: Viewport,
        fb: &mut FrameBuffer,
    ) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::default().into_cell(' '));

        let layout = self.layout(snap.cards.len(), viewport);
        let table = CellStyle {
            fg: Rgb::new(80, 80, 90),
            bg: TABLE_BG,
            bold: false,
            dim: false,
        };
        let border = CellStyle {
            fg: Rgb::new(200, 200, 200),
            bg: Rgb::new(0, 0, 0),
            bold: false,
            dim: false,
        };

        fb.fill_rect(
            layout.start_x + 1,
            layout.start_y + 1,
            layout.frame_w.saturating_sub(2),
            layout.frame_h.saturating_sub(2),
            ' ',
            table,
        );
        self.draw_border(
            fb,
            layout.start_x,
            layout.start_y,
            layout.frame_w,
            layout.frame_h,
            border,
        );

        for (i, card) in snap.cards.iter().enumerate() {
            let pending = snap.pending_selection.map(Position::index) == Some(i);
            let focused = cursor.map(Position::index) == Some(i);
            self.draw_card(fb, &layout, i, card, pending, focused);
        }

        self.draw_status(fb, snap, &layout);
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(
        &self,
        snap: &SessionSnapshot,
        cursor: Option<Position>,
        viewport: Viewport,
    ) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, cursor, viewport, &mut fb);
        fb
    }

    /// Map a terminal cell to the card or status line drawn there.
    pub fn hit_test(&self, card_count: usize, viewport: Viewport, x: u16, y: u16) -> Option<Hit> {
        let layout = self.layout(card_count, viewport);

        if y == layout.status_y
            && x >= layout.start_x
            && x < layout.start_x.saturating_add(layout.frame_w)
        {
            return Some(Hit::Status);
        }

        (0..card_count)
            .find(|&i| {
                let (cx, cy) = self.card_origin(&layout, i);
                x >= cx
                    && x < cx.saturating_add(self.card_w)
                    && y >= cy
                    && y < cy.saturating_add(self.card_h)
            })
            .map(|i| Hit::Card(Position::new(i)))
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

    fn draw_card(
        &self,
        fb: &mut FrameBuffer,
        layout: &Layout,
        index: usize,
        card: &CardState,
        pending: bool,
        focused: bool,
    ) {
        let (x, y) = self.card_origin(layout, index);

        if card.visible {
            let style = CellStyle {
                fg: if focused { Rgb::new(240, 240, 255) } else { COVER_FG },
                bg: if focused { Rgb::new(60, 80, 150) } else { COVER_BG },
                bold: focused,
                dim: false,
            };
            fb.fill_rect(x, y, self.card_w, self.card_h, '▒', style);
            return;
        }

        // Revealed: the pending card stands out, matched cards stay quiet.
        let bg = if pending {
            Rgb::new(150, 120, 30)
        } else if focused {
            Rgb::new(70, 70, 80)
        } else {
            Rgb::new(45, 45, 55)
        };
        let style = CellStyle {
            fg: Rgb::new(255, 255, 255),
            bg,
            bold: pending,
            dim: !pending && !focused,
        };
        fb.fill_rect(x, y, self.card_w, self.card_h, ' ', style);

        let glyph_w = card.symbol.width().min(self.card_w);
        let gx = x.saturating_add((self.card_w - glyph_w) / 2);
        let gy = y.saturating_add(self.card_h / 2);
        fb.put_str(gx, gy, card.symbol.as_str(), style);
    }

    fn draw_status(&self, fb: &mut FrameBuffer, snap: &SessionSnapshot, layout: &Layout) {
        let label = CellStyle {
            fg: Rgb::new(220, 220, 220),
            bg: Rgb::new(0, 0, 0),
            bold: true,
            dim: false,
        };
        let value = CellStyle {
            bold: false,
            dim: true,
            ..label
        };

        let status = status_text(snap);
        self.put_centered(fb, layout, layout.status_y, &status, label);

        let pairs_y = layout.status_y.saturating_add(1);
        let found = u32::try_from(snap.matches_found).unwrap_or(u32::MAX);
        let total = u32::try_from(snap.pair_count).unwrap_or(u32::MAX);
        let line_w = 7 + digit_count(found) + digit_count(total);
        let mut x = layout
            .start_x
            .saturating_add(layout.frame_w.saturating_sub(line_w) / 2);
        x = x.saturating_add(fb.put_str(x, pairs_y, "PAIRS ", value));
        x = x.saturating_add(fb.put_u32(x, pairs_y, found, value));
        fb.put_char(x, pairs_y, '/', value);
        fb.put_u32(x.saturating_add(1), pairs_y, total, value);
    }

    fn put_centered(
        &self,
        fb: &mut FrameBuffer,
        layout: &Layout,
        y: u16,
        text: &str,
        style: CellStyle,
    ) {
        let text_w = text.chars().count() as u16;
        let x = layout
            .start_x
            .saturating_add(layout.frame_w.saturating_sub(text_w) / 2);
        fb.put_str(x, y, text, style);
    }
}

/// Extent of `count` cells of `size` separated by `gap`.
fn span(count: u16, size: u16, gap: u16) -> u16 {
    count
        .saturating_mul(size)
        .saturating_add(count.saturating_sub(1).saturating_mul(gap))
}

fn digit_count(n: u32) -> u16 {
    n.checked_ilog10().map_or(1, |d| d as u16 + 1)
}

/// Elapsed time, plus the play-again hint once every pair is found.
pub fn status_text(snap: &SessionSnapshot) -> String {
    format_status(snap.elapsed_tenths, snap.completed())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Symbol;

    fn snapshot(n: usize) -> SessionSnapshot {
        SessionSnapshot {
            cards: (0..n)
                .map(|i| CardState::new(Symbol::new(((b'A' + (i / 2) as u8) as char).to_string())))
                .collect(),
            pair_count: n / 2,
            running: true,
            ..SessionSnapshot::default()
        }
    }

    #[test]
    fn test_layout_for_standard_board() {
        let view = GameView::default();
        let layout = view.layout(16, Viewport::new(31, 19));
        // 4 cards * 6 + 3 gaps = 27 (+4 frame), 4 rows * 3 + 3 gaps = 15 (+2 frame)
        assert_eq!(layout.frame_w, 31);
        assert_eq!(layout.frame_h, 17);
        assert_eq!((layout.start_x, layout.start_y), (0, 0));
        assert_eq!(layout.status_y, 17);
    }

    #[test]
    fn test_hit_test_maps_every_card_origin() {
        let view = GameView::default();
        let vp = Viewport::new(80, 24);
        let layout = view.layout(16, vp);
        for i in 0..16 {
            let (x, y) = view.card_origin(&layout, i);
            assert_eq!(
                view.hit_test(16, vp, x, y),
                Some(Hit::Card(Position::new(i)))
            );
            assert_eq!(
                view.hit_test(16, vp, x + view.card_w - 1, y + view.card_h - 1),
                Some(Hit::Card(Position::new(i)))
            );
        }
    }

    #[test]
    fn test_hit_test_gaps_and_status() {
        let view = GameView::default();
        let vp = Viewport::new(31, 19);
        // Column gap between the first two cards.
        assert_eq!(view.hit_test(16, vp, 2 + 6, 1), None);
        // Border.
        assert_eq!(view.hit_test(16, vp, 0, 0), None);
        assert_eq!(view.hit_test(16, vp, 10, 17), Some(Hit::Status));
    }

    #[test]
    fn test_oversized_columns_fit_the_board() {
        let view = GameView::default().with_columns(11000);
        let vp = Viewport::new(80, 24);
        let fb = view.render(&snapshot(16), None, vp);

        let layout = view.layout(16, vp);
        assert_eq!(layout.columns, 16);
        // 16 cards * 6 + 15 gaps + 4 frame
        assert_eq!(layout.frame_w, 115);
        assert_eq!(layout.frame_h, 5);
        assert_eq!(fb.get(2, layout.start_y + 1).map(|c| c.ch), Some('▒'));

        let (x, y) = view.card_origin(&layout, 15);
        assert_eq!(view.hit_test(16, vp, x, y), Some(Hit::Card(Position::new(15))));
        assert_eq!(view.hit_test(16, vp, u16::MAX, u16::MAX), None);
    }

    #[test]
    fn test_pairs_line_shows_counts() {
        let mut snap = snapshot(16);
        snap.matches_found = 3;
        let vp = Viewport::new(31, 19);
        let view = GameView::default();
        let fb = view.render(&snap, None, vp);
        let layout = view.layout(16, vp);
        assert_eq!(fb.row_text(layout.status_y + 1).trim(), "PAIRS 3/8");
    }

    #[test]
    fn test_status_text_suffix() {
        let mut snap = snapshot(4);
        snap.elapsed_tenths = 57;
        assert_eq!(status_text(&snap), "5.7s");

        snap.matches_found = 2;
        snap.running = false;
        assert_eq!(status_text(&snap), "5.7s - Click to play again");
    }
}
