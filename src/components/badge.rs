// src/components/badge.rs
use super::Render;
use crate::layout::{RenderState, TextStyle};
use aadhaar_render_lopdf::{Paint, RenderError};
use aadhaar_types::{Color, Rect};

/// A small rounded label block with a centred caption.
#[derive(Debug, Clone, PartialEq)]
pub struct Badge<'a> {
    pub caption: &'a str,
    pub rect: Rect,
    pub radius: f32,
    pub fill: Color,
    pub stroke: Color,
    pub caption_color: Color,
    pub font_size: f32,
    /// Distance from the badge's top edge to the caption's top edge.
    pub caption_offset: f32,
}

impl<'a> Badge<'a> {
    /// A solid badge of the size used on finding cards.
    pub fn solid(caption: &'a str, x: f32, y: f32, color: Color, caption_color: Color) -> Self {
        Self {
            caption,
            rect: Rect::new(x, y, 60.0, 18.0),
            radius: 3.0,
            fill: color,
            stroke: color,
            caption_color,
            font_size: 8.0,
            caption_offset: 5.0,
        }
    }
}

impl Render for Badge<'_> {
    fn render(&self, state: &mut RenderState<'_>) -> Result<(), RenderError> {
        let paint = Paint::FillAndStroke { fill: self.fill, stroke: self.stroke };
        state.rounded_rect(self.rect, self.radius, paint)?;
        let style = TextStyle::bold(self.font_size, self.caption_color).centered(self.rect.width);
        state.text_at(self.caption, self.rect.x, self.rect.y + self.caption_offset, style)?;
        Ok(())
    }
}
