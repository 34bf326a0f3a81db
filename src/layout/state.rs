// src/layout/state.rs
//! Per-invocation render state threaded through every component.

use super::cursor::LayoutCursor;
use super::style::TextStyle;
use crate::config::ReportConfig;
use crate::locale;
use aadhaar_render_lopdf::{Canvas, DocumentInfo, Paint, RenderError};
use aadhaar_types::{Color, Point, Rect};
use chrono::NaiveDateTime;

/// Owns the canvas and cursor for exactly one generation call.
///
/// Flowing text drawn through [`text`](Self::text) starts at the cursor and pushes it down by
/// the height consumed. Absolute placements ([`text_at`](Self::text_at), shapes, rules) never
/// move the cursor.
pub struct RenderState<'a> {
    canvas: Canvas,
    cursor: LayoutCursor,
    page_index: usize,
    config: &'a ReportConfig,
    generated_at: NaiveDateTime,
}

impl<'a> RenderState<'a> {
    pub fn new(config: &'a ReportConfig, info: DocumentInfo, generated_at: NaiveDateTime) -> Result<Self, RenderError> {
        let canvas = Canvas::new(config.page.size(), config.page.margin, info)?;
        Ok(Self {
            canvas,
            cursor: LayoutCursor::new(&config.page),
            page_index: 0,
            config,
            generated_at,
        })
    }

    pub fn config(&self) -> &'a ReportConfig {
        self.config
    }

    pub fn y(&self) -> f32 {
        self.cursor.y()
    }

    /// One-based index of the active page; zero before the first page.
    pub fn page_index(&self) -> usize {
        self.page_index
    }

    pub fn generated_date(&self) -> String {
        locale::format_date(&self.generated_at)
    }

    pub fn generated_time(&self) -> String {
        locale::format_time(&self.generated_at)
    }

    pub fn generated_date_time(&self) -> String {
        locale::format_date_time(&self.generated_at)
    }

    /// Allocates a page and resets the cursor. Pages with a header also get the shared
    /// header band and footer rule.
    pub fn begin_page(&mut self, with_header: bool) -> Result<(), RenderError> {
        self.canvas.new_page()?;
        self.page_index += 1;
        self.cursor.reset(with_header);
        log::debug!("Page {} allocated (header: {})", self.page_index, with_header);

        if with_header {
            self.draw_header()?;
            self.draw_footer()?;
        }
        Ok(())
    }

    /// Draws flowing text at the cursor and advances past it.
    pub fn text(&mut self, content: &str, x: f32, style: TextStyle) -> Result<f32, RenderError> {
        let height = self.text_at(content, x, self.cursor.y(), style)?;
        self.cursor.advance(height);
        Ok(height)
    }

    /// Draws text with its top edge at `y` without touching the cursor.
    pub fn text_at(&mut self, content: &str, x: f32, y: f32, style: TextStyle) -> Result<f32, RenderError> {
        self.apply(style)?;
        self.canvas.draw_text(content, x, y, &style.options)
    }

    /// Height `content` would take in `style`, starting at `x`.
    pub fn measure_height(&mut self, content: &str, x: f32, style: TextStyle) -> Result<f32, RenderError> {
        self.apply(style)?;
        Ok(self.canvas.text_height(content, x, &style.options))
    }

    pub fn text_width(&mut self, content: &str, style: TextStyle) -> Result<f32, RenderError> {
        self.apply(style)?;
        Ok(self.canvas.measure(content))
    }

    /// Moves the cursor down by `lines` lines of the most recently used font.
    pub fn move_down(&mut self, lines: f32) {
        self.cursor.advance(lines * self.canvas.line_height());
    }

    pub fn advance_to(&mut self, y: f32) {
        self.cursor.advance_to(y);
    }

    pub fn is_overflowing(&self) -> bool {
        self.cursor.is_overflowing()
    }

    pub fn rect(&mut self, rect: Rect, paint: Paint) -> Result<(), RenderError> {
        self.canvas.set_line_width(1.0)?;
        self.canvas.draw_rect(rect, paint)
    }

    pub fn rounded_rect(&mut self, rect: Rect, radius: f32, paint: Paint) -> Result<(), RenderError> {
        self.canvas.set_line_width(1.0)?;
        self.canvas.draw_rounded_rect(rect, radius, paint)
    }

    /// Horizontal rule at `y` from `from_x` to `to_x`.
    pub fn rule(&mut self, y: f32, from_x: f32, to_x: f32, width: f32, color: Color) -> Result<(), RenderError> {
        self.canvas.set_line_width(width)?;
        self.canvas.set_stroke_color(color)?;
        self.canvas.draw_line(Point::new(from_x, y), Point::new(to_x, y))
    }

    /// Closes the document and hands back the finished bytes.
    pub fn finish(mut self) -> Result<Vec<u8>, RenderError> {
        self.canvas.finalize()
    }

    fn apply(&mut self, style: TextStyle) -> Result<(), RenderError> {
        self.canvas.set_font(style.font, style.size)?;
        self.canvas.set_fill_color(style.color)
    }

    fn draw_header(&mut self) -> Result<(), RenderError> {
        let config = self.config;
        let page = &config.page;
        let style = TextStyle::regular(10.0, config.palette.text_light).width(page.content_width());
        self.text_at(&config.branding.system_name, page.margin, 40.0, style)?;
        self.rule(page.header_rule_y, page.margin, page.right_edge(), 0.5, config.palette.border)
    }

    fn draw_footer(&mut self) -> Result<(), RenderError> {
        let config = self.config;
        let page = &config.page;
        self.rule(page.footer_rule_y(), page.margin, page.right_edge(), 0.5, config.palette.border)
    }
}
