// src/components/chart.rs
use super::Render;
use crate::layout::{RenderState, TextStyle};
use aadhaar_render_lopdf::{Paint, RenderError};
use aadhaar_types::{Color, Rect, TextAlign};

#[derive(Debug, Clone, PartialEq)]
pub struct BarEntry {
    pub label: String,
    pub count: u32,
    pub color: Color,
}

impl BarEntry {
    pub fn new(label: impl Into<String>, count: u32, color: Color) -> Self {
        Self { label: label.into(), count, color }
    }
}

/// Horizontal bar chart, one row per entry, bars scaled against the largest count.
///
/// Each count is printed inside its bar near the origin when it fits there. Otherwise,
/// including zero counts, it is printed just past the bar's end in the text colour.
#[derive(Debug, Clone, PartialEq)]
pub struct BarChart {
    pub entries: Vec<BarEntry>,
    /// Left edge of the right-aligned label gutter.
    pub label_x: f32,
    pub gutter: f32,
    pub chart_x: f32,
    /// Length of the bar for the largest count.
    pub chart_width: f32,
    pub bar_height: f32,
    pub row_gap: f32,
}

impl BarChart {
    pub fn new(entries: Vec<BarEntry>) -> Self {
        Self {
            entries,
            label_x: 60.0,
            gutter: 55.0,
            chart_x: 120.0,
            chart_width: 300.0,
            bar_height: 20.0,
            row_gap: 6.0,
        }
    }

    /// The largest count, floored to 1 so an all-zero chart still scales.
    pub fn scale_max(&self) -> u32 {
        self.entries.iter().map(|e| e.count).max().unwrap_or(0).max(1)
    }

    pub fn bar_widths(&self) -> Vec<f32> {
        let max = self.scale_max() as f32;
        self.entries
            .iter()
            .map(|e| e.count as f32 / max * self.chart_width)
            .collect()
    }

    pub fn height(&self) -> f32 {
        self.entries.len() as f32 * (self.bar_height + self.row_gap)
    }
}

impl Render for BarChart {
    fn render(&self, state: &mut RenderState<'_>) -> Result<(), RenderError> {
        let palette = &state.config().palette;
        let (text_color, on_bar) = (palette.text, palette.white);
        let label_style = TextStyle::bold(10.0, text_color).width(self.gutter).align(TextAlign::Right);

        let top = state.y();
        let row_step = self.bar_height + self.row_gap;
        for (i, (entry, width)) in self.entries.iter().zip(self.bar_widths()).enumerate() {
            let row_y = top + i as f32 * row_step;
            let label_height = state.measure_height(&entry.label, self.label_x, label_style)?;
            let label_y = row_y + ((self.bar_height - label_height) / 2.0).max(0.0);
            state.text_at(&entry.label, self.label_x, label_y, label_style)?;

            state.rect(Rect::new(self.chart_x, row_y, width, self.bar_height), Paint::Fill(entry.color))?;

            let count = entry.count.to_string();
            let count_width = state.text_width(&count, TextStyle::regular(9.0, on_bar))?;
            let (count_x, count_color) = if width >= count_width + 10.0 {
                (self.chart_x + 5.0, on_bar)
            } else {
                (self.chart_x + width + 5.0, text_color)
            };
            state.text_at(&count, count_x, row_y + 5.0, TextStyle::regular(9.0, count_color))?;
        }
        state.advance_to(top + self.height());
        Ok(())
    }
}
