// src/components/table.rs
use super::Render;
use crate::config::Palette;
use crate::layout::{RenderState, TextStyle};
use aadhaar_render_lopdf::{Paint, RenderError};
use aadhaar_types::{Color, Rect};

/// Two-column label/count table with a coloured header and striped body rows.
#[derive(Debug, Clone, PartialEq)]
pub struct StatsTable {
    pub header: [String; 2],
    pub rows: Vec<(String, u32)>,
    /// Left edges of the two columns.
    pub columns: [f32; 2],
    pub width: f32,
    pub row_height: f32,
    /// Horizontal text inset inside each cell.
    pub inset: f32,
    /// Distance from a row's top edge to its text.
    pub text_offset: f32,
}

impl StatsTable {
    pub fn new(header: [&str; 2], rows: Vec<(String, u32)>) -> Self {
        Self {
            header: header.map(str::to_string),
            rows,
            columns: [80.0, 300.0],
            width: 340.0,
            row_height: 25.0,
            inset: 10.0,
            text_offset: 8.0,
        }
    }

    /// Even rows take the muted background, odd rows stay white.
    pub fn row_background(index: usize, palette: &Palette) -> Color {
        if index % 2 == 0 { palette.background } else { palette.white }
    }

    pub fn height(&self) -> f32 {
        (self.rows.len() + 1) as f32 * self.row_height
    }
}

impl Render for StatsTable {
    fn render(&self, state: &mut RenderState<'_>) -> Result<(), RenderError> {
        let palette = &state.config().palette;
        let top = state.y();
        let [left, second] = self.columns;

        let header_rect = Rect::new(left, top, self.width, self.row_height);
        state.rect(header_rect, Paint::FillAndStroke { fill: palette.primary, stroke: palette.primary })?;
        let header_style = TextStyle::bold(10.0, palette.white);
        state.text_at(&self.header[0], left + self.inset, top + self.text_offset, header_style)?;
        state.text_at(&self.header[1], second + self.inset, top + self.text_offset, header_style)?;

        let body_style = TextStyle::regular(9.0, palette.text);
        for (index, (label, value)) in self.rows.iter().enumerate() {
            let row_y = top + (index + 1) as f32 * self.row_height;
            let fill = Self::row_background(index, palette);
            let rect = Rect::new(left, row_y, self.width, self.row_height);
            state.rect(rect, Paint::FillAndStroke { fill, stroke: palette.border })?;
            state.text_at(label, left + self.inset, row_y + self.text_offset, body_style)?;
            state.text_at(&value.to_string(), second + self.inset, row_y + self.text_offset, body_style)?;
        }

        state.advance_to(top + self.height());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rows_alternate_by_parity() {
        let palette = Palette::default();
        let colors: Vec<_> = (0..4).map(|i| StatsTable::row_background(i, &palette)).collect();
        assert_eq!(colors, vec![palette.background, palette.white, palette.background, palette.white]);
    }

    #[test]
    fn height_includes_header_row() {
        let table = StatsTable::new(["Metric", "Count"], vec![("a".into(), 1), ("b".into(), 2)]);
        assert_eq!(table.height(), 75.0);
        assert_eq!(StatsTable::new(["Metric", "Count"], vec![]).height(), 25.0);
    }
}
