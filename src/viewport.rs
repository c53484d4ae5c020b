//! Mapping between world coordinates and terminal cells.
//!
//! Row 0 holds the HUD and the last row the controls hint; the rows in
//! between show the whole 800×600 world, scaled independently on each axis.

use crate::config::{SCREEN_HEIGHT, SCREEN_WIDTH};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Viewport {
    pub cols: u16,
    pub rows: u16,
}

impl Viewport {
    /// Rows above the play field.
    pub const TOP: u16 = 1;

    pub fn new(cols: u16, rows: u16) -> Self {
        Self {
            cols: cols.max(1),
            rows,
        }
    }

    /// Number of terminal rows showing the play field (always at least one).
    pub fn field_rows(&self) -> u16 {
        self.rows.saturating_sub(2).max(1)
    }

    /// Cell covering a world point, or `None` outside the world.
    pub fn to_cell(&self, x: f32, y: f32) -> Option<(u16, u16)> {
        if !(0.0..=SCREEN_WIDTH).contains(&x) || !(0.0..=SCREEN_HEIGHT).contains(&y) {
            return None;
        }
        let col = ((x / SCREEN_WIDTH) * self.cols as f32) as u16;
        let row = ((y / SCREEN_HEIGHT) * self.field_rows() as f32) as u16;
        Some((
            col.min(self.cols - 1),
            Self::TOP + row.min(self.field_rows() - 1),
        ))
    }

    /// World point at the centre of a cell. Cells outside the play field
    /// are clamped onto its nearest edge.
    pub fn to_world(&self, col: u16, row: u16) -> (f32, f32) {
        let col = col.min(self.cols - 1);
        let row = row
            .saturating_sub(Self::TOP)
            .min(self.field_rows() - 1);
        (
            (col as f32 + 0.5) / self.cols as f32 * SCREEN_WIDTH,
            (row as f32 + 0.5) / self.field_rows() as f32 * SCREEN_HEIGHT,
        )
    }

    /// Cells spanned by a world-space box, clipped to the play field, as
    /// `(first_col, first_row, last_col, last_row)`.
    pub fn cell_span(&self, x: f32, y: f32, w: f32, h: f32) -> Option<(u16, u16, u16, u16)> {
        let x0 = x.max(0.0);
        let y0 = y.max(0.0);
        let x1 = (x + w).min(SCREEN_WIDTH);
        let y1 = (y + h).min(SCREEN_HEIGHT);
        if x0 > x1 || y0 > y1 {
            return None;
        }
        let (c0, r0) = self.to_cell(x0, y0)?;
        let (c1, r1) = self.to_cell(x1, y1)?;
        Some((c0, r0, c1, r1))
    }
}
