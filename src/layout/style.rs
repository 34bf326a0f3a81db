// src/layout/style.rs
//! Text styling applied to the canvas before a draw call.

use aadhaar_render_lopdf::{Font, TextOptions};
use aadhaar_types::{Color, TextAlign};

/// Font, size, colour and paragraph options for one text run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextStyle {
    pub font: Font,
    pub size: f32,
    pub color: Color,
    pub options: TextOptions,
}

impl TextStyle {
    pub fn new(font: Font, size: f32, color: Color) -> Self {
        Self { font, size, color, options: TextOptions::default() }
    }

    pub fn regular(size: f32, color: Color) -> Self {
        Self::new(Font::Helvetica, size, color)
    }

    pub fn bold(size: f32, color: Color) -> Self {
        Self::new(Font::HelveticaBold, size, color)
    }

    pub fn italic(size: f32, color: Color) -> Self {
        Self::new(Font::HelveticaOblique, size, color)
    }

    pub fn width(mut self, width: f32) -> Self {
        self.options.width = Some(width);
        self
    }

    pub fn align(mut self, align: TextAlign) -> Self {
        self.options.align = align;
        self
    }

    pub fn centered(self, width: f32) -> Self {
        self.width(width).align(TextAlign::Center)
    }

    pub fn line_gap(mut self, gap: f32) -> Self {
        self.options.line_gap = gap;
        self
    }
}
