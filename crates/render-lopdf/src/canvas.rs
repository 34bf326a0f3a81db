use crate::encoding::encode_win_ansi;
use crate::error::RenderError;
use crate::font::{ASCENDER, Font, LINE_HEIGHT_FACTOR};
use crate::text::{TextLine, wrap_text};
use crate::writer::StreamingPdfWriter;
use aadhaar_types::{Color, Point, Rect, Size, TextAlign};
use chrono::NaiveDateTime;
use lopdf::content::{Content, Operation};
use lopdf::{Dictionary, Object, ObjectId, StringFormat, dictionary};
use std::io::Cursor;

/// Bezier control-point factor for approximating a quarter circle.
const KAPPA: f32 = 0.552_284_8;

/// Document-level metadata written to the `/Info` dictionary.
#[derive(Debug, Clone, Default)]
pub struct DocumentInfo {
    pub title: String,
    pub author: String,
    pub subject: String,
    pub producer: String,
    pub creation_date: Option<NaiveDateTime>,
}

impl DocumentInfo {
    fn to_dictionary(&self) -> Dictionary {
        let mut dict = dictionary! {
            "Title" => info_string(&self.title),
            "Author" => info_string(&self.author),
            "Subject" => info_string(&self.subject),
            "Producer" => info_string(&self.producer),
        };
        if let Some(created) = self.creation_date {
            let stamp = created.format("D:%Y%m%d%H%M%S").to_string();
            dict.set("CreationDate", info_string(&stamp));
        }
        dict
    }
}

/// Options for [`Canvas::draw_text`].
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TextOptions {
    /// Wrapping width; defaults to the distance from `x` to the right margin.
    pub width: Option<f32>,
    pub align: TextAlign,
    /// Extra space added below every line.
    pub line_gap: f32,
}

/// How a closed shape is painted.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Paint {
    Fill(Color),
    Stroke(Color),
    FillAndStroke { fill: Color, stroke: Color },
}

/// Graphics state already emitted into the active page's content stream.
#[derive(Default, Clone, PartialEq)]
struct EmittedState {
    font: Option<(Font, f32)>,
    fill_color: Option<Color>,
    stroke_color: Option<Color>,
    line_width: Option<f32>,
}

struct PageContext {
    content: Content,
    emitted: EmittedState,
}

impl PageContext {
    fn new() -> Self {
        Self { content: Content { operations: vec![] }, emitted: EmittedState::default() }
    }

    fn push(&mut self, operator: &str, operands: Vec<Object>) {
        self.content.operations.push(Operation::new(operator, operands));
    }

    fn set_fill_color(&mut self, color: Color) {
        if self.emitted.fill_color != Some(color) {
            let [r, g, b] = color.components();
            self.push("rg", vec![r.into(), g.into(), b.into()]);
            self.emitted.fill_color = Some(color);
        }
    }

    fn set_stroke_color(&mut self, color: Color) {
        if self.emitted.stroke_color != Some(color) {
            let [r, g, b] = color.components();
            self.push("RG", vec![r.into(), g.into(), b.into()]);
            self.emitted.stroke_color = Some(color);
        }
    }

    fn set_line_width(&mut self, width: f32) {
        if self.emitted.line_width != Some(width) {
            self.push("w", vec![width.into()]);
            self.emitted.line_width = Some(width);
        }
    }

    fn set_font(&mut self, font: Font, size: f32) {
        if self.emitted.font != Some((font, size)) {
            self.push("Tf", vec![Object::Name(font.resource_name().as_bytes().to_vec()), size.into()]);
            self.emitted.font = Some((font, size));
        }
    }

    /// Selects colours for `paint` and returns the painting operator.
    fn prepare_paint(&mut self, paint: Paint) -> &'static str {
        match paint {
            Paint::Fill(fill) => {
                self.set_fill_color(fill);
                "f"
            }
            Paint::Stroke(stroke) => {
                self.set_stroke_color(stroke);
                "S"
            }
            Paint::FillAndStroke { fill, stroke } => {
                self.set_fill_color(fill);
                self.set_stroke_color(stroke);
                "B"
            }
        }
    }
}

/// An immediate-mode drawing surface over a PDF being streamed into memory.
///
/// Coordinates are layout coordinates: origin at the top-left of the page, y growing
/// downwards. Every page is flushed to the output buffer when the next one starts, so
/// nothing drawn can be moved afterwards. After [`finalize`](Self::finalize) every drawing
/// call fails with [`RenderError::ClosedDocument`].
pub struct Canvas {
    writer: Option<StreamingPdfWriter<Cursor<Vec<u8>>>>,
    page: Option<PageContext>,
    page_ids: Vec<ObjectId>,
    page_size: Size,
    margin: f32,
    info: DocumentInfo,
    font: Font,
    font_size: f32,
    fill_color: Color,
    stroke_color: Color,
    line_width: f32,
}

impl Canvas {
    pub fn new(page_size: Size, margin: f32, info: DocumentInfo) -> Result<Self, RenderError> {
        let mut font_dict = Dictionary::new();
        for font in Font::ALL {
            let single_font_dict = dictionary! {
                "Type" => "Font", "Subtype" => "Type1", "BaseFont" => font.postscript_name(), "Encoding" => "WinAnsiEncoding",
            };
            font_dict.set(font.resource_name().as_bytes(), Object::Dictionary(single_font_dict));
        }

        let writer = StreamingPdfWriter::new(Cursor::new(Vec::new()), "1.7", font_dict)?;
        Ok(Self {
            writer: Some(writer),
            page: None,
            page_ids: Vec::new(),
            page_size,
            margin,
            info,
            font: Font::Helvetica,
            font_size: 12.0,
            fill_color: Color::BLACK,
            stroke_color: Color::BLACK,
            line_width: 1.0,
        })
    }

    pub fn page_size(&self) -> Size {
        self.page_size
    }

    /// Pages allocated so far, including the active one.
    pub fn page_count(&self) -> usize {
        self.page_ids.len() + usize::from(self.page.is_some())
    }

    pub fn is_closed(&self) -> bool {
        self.writer.is_none()
    }

    /// Closes the active page (if any) and starts a new one.
    pub fn new_page(&mut self) -> Result<(), RenderError> {
        let writer = self.writer.as_mut().ok_or(RenderError::ClosedDocument)?;
        if let Some(page) = self.page.take() {
            let page_id = flush_page(writer, page, self.page_size)?;
            self.page_ids.push(page_id);
        }
        self.page = Some(PageContext::new());
        log::debug!("Started page {}", self.page_ids.len() + 1);
        Ok(())
    }

    pub fn set_font(&mut self, font: Font, size: f32) -> Result<(), RenderError> {
        self.ensure_open()?;
        self.font = font;
        self.font_size = size;
        Ok(())
    }

    pub fn set_fill_color(&mut self, color: Color) -> Result<(), RenderError> {
        self.ensure_open()?;
        self.fill_color = color;
        Ok(())
    }

    pub fn set_stroke_color(&mut self, color: Color) -> Result<(), RenderError> {
        self.ensure_open()?;
        self.stroke_color = color;
        Ok(())
    }

    pub fn set_line_width(&mut self, width: f32) -> Result<(), RenderError> {
        self.ensure_open()?;
        self.line_width = width;
        Ok(())
    }

    /// Height of one line in the current font, without any caller line gap.
    pub fn line_height(&self) -> f32 {
        self.font_size * LINE_HEIGHT_FACTOR
    }

    pub fn measure(&self, text: &str) -> f32 {
        self.font.measure(text, self.font_size)
    }

    /// Lays out `text` as [`draw_text`](Self::draw_text) would, without drawing.
    pub fn layout_text(&self, text: &str, x: f32, options: &TextOptions) -> Vec<TextLine> {
        wrap_text(text, self.font, self.font_size, self.wrap_width(x, options))
    }

    /// Height [`draw_text`](Self::draw_text) would consume for `text`.
    pub fn text_height(&self, text: &str, x: f32, options: &TextOptions) -> f32 {
        let lines = self.layout_text(text, x, options).len();
        lines as f32 * (self.line_height() + options.line_gap)
    }

    /// Draws `text` with its first line's top edge at `y` and returns the height consumed.
    pub fn draw_text(&mut self, text: &str, x: f32, y: f32, options: &TextOptions) -> Result<f32, RenderError> {
        let lines = self.layout_text(text, x, options);
        let box_width = self.wrap_width(x, options);
        let (font, size, color) = (self.font, self.font_size, self.fill_color);
        let advance = self.line_height() + options.line_gap;
        let page_height = self.page_size.height;
        let page = self.active_page()?;

        for (i, line) in lines.iter().enumerate() {
            if line.text.is_empty() {
                continue;
            }
            let start_x = match options.align {
                TextAlign::Left | TextAlign::Justify => x,
                TextAlign::Center => x + (box_width - line.width) / 2.0,
                TextAlign::Right => x + box_width - line.width,
            };
            let word_spacing = if options.align == TextAlign::Justify && !line.ends_paragraph && line.spaces > 0 {
                ((box_width - line.width) / line.spaces as f32).max(0.0)
            } else {
                0.0
            };
            let baseline_y = y + i as f32 * advance + size * ASCENDER;

            page.push("BT", vec![]);
            page.set_font(font, size);
            page.set_fill_color(color);
            if word_spacing > 0.0 {
                page.push("Tw", vec![word_spacing.into()]);
            }
            page.push("Td", vec![start_x.into(), flip_y(baseline_y, page_height).into()]);
            page.push("Tj", vec![Object::String(encode_win_ansi(&line.text), StringFormat::Literal)]);
            if word_spacing > 0.0 {
                page.push("Tw", vec![0.0.into()]);
            }
            page.push("ET", vec![]);
        }
        Ok(lines.len() as f32 * advance)
    }

    pub fn draw_rect(&mut self, rect: Rect, paint: Paint) -> Result<(), RenderError> {
        let line_width = self.line_width;
        let page_height = self.page_size.height;
        let page = self.active_page()?;
        if rect.width <= 0.0 || rect.height <= 0.0 {
            return Ok(());
        }
        if !matches!(paint, Paint::Fill(_)) {
            page.set_line_width(line_width);
        }
        let op = page.prepare_paint(paint);
        page.push(
            "re",
            vec![
                rect.x.into(),
                flip_y(rect.bottom(), page_height).into(),
                rect.width.into(),
                rect.height.into(),
            ],
        );
        page.push(op, vec![]);
        Ok(())
    }

    pub fn draw_rounded_rect(&mut self, rect: Rect, radius: f32, paint: Paint) -> Result<(), RenderError> {
        let line_width = self.line_width;
        let page_height = self.page_size.height;
        let page = self.active_page()?;
        if rect.width <= 0.0 || rect.height <= 0.0 {
            return Ok(());
        }
        if !matches!(paint, Paint::Fill(_)) {
            page.set_line_width(line_width);
        }
        let op = page.prepare_paint(paint);

        let r = radius.min(rect.width / 2.0).min(rect.height / 2.0).max(0.0);
        let k = r * KAPPA;
        let (left, right) = (rect.x, rect.right());
        let bottom = flip_y(rect.bottom(), page_height);
        let top = flip_y(rect.y, page_height);

        page.push("m", vec![(left + r).into(), bottom.into()]);
        page.push("l", vec![(right - r).into(), bottom.into()]);
        page.push("c", curve(right - r + k, bottom, right, bottom + r - k, right, bottom + r));
        page.push("l", vec![right.into(), (top - r).into()]);
        page.push("c", curve(right, top - r + k, right - r + k, top, right - r, top));
        page.push("l", vec![(left + r).into(), top.into()]);
        page.push("c", curve(left + r - k, top, left, top - r + k, left, top - r));
        page.push("l", vec![left.into(), (bottom + r).into()]);
        page.push("c", curve(left, bottom + r - k, left + r - k, bottom, left + r, bottom));
        page.push("h", vec![]);
        page.push(op, vec![]);
        Ok(())
    }

    /// Strokes a straight line in the current stroke colour and line width.
    pub fn draw_line(&mut self, from: Point, to: Point) -> Result<(), RenderError> {
        let (color, width) = (self.stroke_color, self.line_width);
        let page_height = self.page_size.height;
        let page = self.active_page()?;
        page.set_line_width(width);
        page.set_stroke_color(color);
        page.push("m", vec![from.x.into(), flip_y(from.y, page_height).into()]);
        page.push("l", vec![to.x.into(), flip_y(to.y, page_height).into()]);
        page.push("S", vec![]);
        Ok(())
    }

    /// Flushes the active page, writes the document trailer and returns the PDF bytes.
    pub fn finalize(&mut self) -> Result<Vec<u8>, RenderError> {
        let mut writer = self.writer.take().ok_or(RenderError::ClosedDocument)?;
        if let Some(page) = self.page.take() {
            let page_id = flush_page(&mut writer, page, self.page_size)?;
            self.page_ids.push(page_id);
        }
        writer.set_page_ids(self.page_ids.clone());
        writer.set_info(self.info.to_dictionary());
        let bytes = writer.finish()?.into_inner();
        log::debug!("Finalized document: {} pages, {} bytes", self.page_ids.len(), bytes.len());
        Ok(bytes)
    }

    fn ensure_open(&self) -> Result<(), RenderError> {
        if self.writer.is_none() {
            return Err(RenderError::ClosedDocument);
        }
        Ok(())
    }

    fn active_page(&mut self) -> Result<&mut PageContext, RenderError> {
        self.ensure_open()?;
        self.page.as_mut().ok_or(RenderError::NoActivePage)
    }

    fn wrap_width(&self, x: f32, options: &TextOptions) -> f32 {
        options
            .width
            .unwrap_or(self.page_size.width - x - self.margin)
            .max(0.0)
    }
}

fn flush_page(
    writer: &mut StreamingPdfWriter<Cursor<Vec<u8>>>,
    page: PageContext,
    page_size: Size,
) -> Result<ObjectId, RenderError> {
    let content_id = writer.write_stream(page.content.encode()?)?;
    let page_dict = dictionary! {
        "Type" => "Page",
        "Parent" => writer.pages_id,
        "MediaBox" => vec![0.0.into(), 0.0.into(), page_size.width.into(), page_size.height.into()],
        "Contents" => Object::Reference(content_id),
        "Resources" => writer.resources_id,
    };
    Ok(writer.write_object(page_dict.into())?)
}

/// Convert layout Y coordinate to PDF Y coordinate (flip origin)
fn flip_y(y: f32, page_height: f32) -> f32 {
    page_height - y
}

fn curve(x1: f32, y1: f32, x2: f32, y2: f32, x3: f32, y3: f32) -> Vec<Object> {
    vec![x1.into(), y1.into(), x2.into(), y2.into(), x3.into(), y3.into()]
}

/// `/Info` text strings: literal when ASCII, UTF-16BE with a byte order mark otherwise.
fn info_string(s: &str) -> Object {
    lopdf::text_string(s)
}

#[cfg(test)]
mod tests {
    use super::*;
    use lopdf::Document;

    fn canvas() -> Canvas {
        Canvas::new(Size::a4(), 60.0, DocumentInfo::default()).unwrap()
    }

    fn page_operators(bytes: &[u8], page: u32) -> Vec<String> {
        let doc = Document::load_mem(bytes).unwrap();
        let page_id = doc.get_pages()[&page];
        let content = Content::decode(&doc.get_page_content(page_id).unwrap()).unwrap();
        content.operations.into_iter().map(|op| op.operator).collect()
    }

    #[test]
    fn page_count_grows_by_one_per_new_page() {
        let mut c = canvas();
        assert_eq!(c.page_count(), 0);
        c.new_page().unwrap();
        c.new_page().unwrap();
        c.new_page().unwrap();
        assert_eq!(c.page_count(), 3);
        let bytes = c.finalize().unwrap();
        assert_eq!(Document::load_mem(&bytes).unwrap().get_pages().len(), 3);
    }

    #[test]
    fn drawing_before_first_page_fails() {
        let mut c = canvas();
        let err = c.draw_rect(Rect::new(0.0, 0.0, 10.0, 10.0), Paint::Fill(Color::BLACK));
        assert!(matches!(err, Err(RenderError::NoActivePage)));
    }

    #[test]
    fn drawing_after_finalize_fails() {
        let mut c = canvas();
        c.new_page().unwrap();
        c.finalize().unwrap();
        assert!(c.is_closed());
        assert!(matches!(c.new_page(), Err(RenderError::ClosedDocument)));
        assert!(matches!(
            c.draw_text("late", 60.0, 100.0, &TextOptions::default()),
            Err(RenderError::ClosedDocument)
        ));
        assert!(matches!(c.set_font(Font::Helvetica, 10.0), Err(RenderError::ClosedDocument)));
        assert!(matches!(c.finalize(), Err(RenderError::ClosedDocument)));
    }

    #[test]
    fn pages_use_fixed_a4_media_box() {
        let mut c = canvas();
        assert_eq!(c.page_size(), Size::a4());
        c.new_page().unwrap();
        let bytes = c.finalize().unwrap();
        let doc = Document::load_mem(&bytes).unwrap();
        let page_id = doc.get_pages()[&1];
        let page = doc.get_dictionary(page_id).unwrap();
        let media_box = page.get(b"MediaBox").unwrap().as_array().unwrap();
        assert_eq!(media_box[2].as_f32().unwrap(), 595.0);
        assert_eq!(media_box[3].as_f32().unwrap(), 842.0);
    }

    #[test]
    fn text_height_counts_wrapped_lines() {
        let mut c = canvas();
        c.new_page().unwrap();
        c.set_font(Font::Helvetica, 10.0).unwrap();
        let options = TextOptions { width: Some(60.0), line_gap: 2.0, ..Default::default() };
        let height = c.draw_text("alpha beta gamma delta", 60.0, 100.0, &options).unwrap();
        let lines = c.layout_text("alpha beta gamma delta", 60.0, &options).len();
        assert!(lines > 1);
        assert!((height - lines as f32 * (10.0 * LINE_HEIGHT_FACTOR + 2.0)).abs() < 1e-3);
    }

    #[test]
    fn justify_sets_and_resets_word_spacing() {
        let mut c = canvas();
        c.new_page().unwrap();
        c.set_font(Font::Helvetica, 10.0).unwrap();
        let options = TextOptions { width: Some(120.0), align: TextAlign::Justify, ..Default::default() };
        c.draw_text("one two three four five six seven eight nine ten", 60.0, 100.0, &options)
            .unwrap();
        let bytes = c.finalize().unwrap();
        let ops = page_operators(&bytes, 1);
        let tw = ops.iter().filter(|op| op.as_str() == "Tw").count();
        assert!(tw >= 2 && tw % 2 == 0, "expected paired Tw operators, got {}", tw);
    }

    #[test]
    fn redundant_fill_colour_is_elided() {
        let mut c = canvas();
        c.new_page().unwrap();
        let red = Color::rgb(0xdc, 0x26, 0x26);
        c.draw_rect(Rect::new(10.0, 10.0, 5.0, 5.0), Paint::Fill(red)).unwrap();
        c.draw_rect(Rect::new(20.0, 10.0, 5.0, 5.0), Paint::Fill(red)).unwrap();
        let bytes = c.finalize().unwrap();
        let ops = page_operators(&bytes, 1);
        assert_eq!(ops.iter().filter(|op| op.as_str() == "rg").count(), 1);
        assert_eq!(ops.iter().filter(|op| op.as_str() == "re").count(), 2);
    }

    #[test]
    fn zero_width_rect_draws_nothing() {
        let mut c = canvas();
        c.new_page().unwrap();
        c.draw_rect(Rect::new(10.0, 10.0, 0.0, 20.0), Paint::Fill(Color::BLACK)).unwrap();
        let bytes = c.finalize().unwrap();
        assert!(page_operators(&bytes, 1).is_empty());
    }

    #[test]
    fn info_dictionary_carries_metadata() {
        let info = DocumentInfo {
            title: "Aadhaar Report - Delhi Central Delhi 2024-01".into(),
            author: "Aadhaar Intelligence System".into(),
            subject: "Policy Decision Support Report".into(),
            producer: "test".into(),
            creation_date: chrono::NaiveDate::from_ymd_opt(2024, 2, 3)
                .and_then(|d| d.and_hms_opt(4, 5, 6)),
        };
        let mut c = Canvas::new(Size::a4(), 60.0, info).unwrap();
        c.new_page().unwrap();
        let bytes = c.finalize().unwrap();
        let doc = Document::load_mem(&bytes).unwrap();
        let info_id = doc.trailer.get(b"Info").unwrap().as_reference().unwrap();
        let dict = doc.get_dictionary(info_id).unwrap();
        assert_eq!(
            dict.get(b"Title").unwrap().as_str().unwrap(),
            b"Aadhaar Report - Delhi Central Delhi 2024-01"
        );
        assert_eq!(dict.get(b"CreationDate").unwrap().as_str().unwrap(), b"D:20240203040506");
    }

    #[test]
    fn non_ascii_info_strings_are_utf16() {
        let info = DocumentInfo {
            title: "Aadhaar Report - \u{0926}\u{093F}\u{0932}\u{094D}\u{0932}\u{0940} Nort\u{2013}East 2024-01".into(),
            author: "Aadhaar Intelligence System".into(),
            ..Default::default()
        };
        let mut c = Canvas::new(Size::a4(), 60.0, info.clone()).unwrap();
        c.new_page().unwrap();
        let bytes = c.finalize().unwrap();
        let doc = Document::load_mem(&bytes).unwrap();
        let info_id = doc.trailer.get(b"Info").unwrap().as_reference().unwrap();
        let dict = doc.get_dictionary(info_id).unwrap();

        let title = dict.get(b"Title").unwrap();
        assert!(title.as_str().unwrap().starts_with(b"\xFE\xFF"));
        assert_eq!(lopdf::decode_text_string(title).unwrap(), info.title);
        // ASCII values stay plain literals.
        assert_eq!(dict.get(b"Author").unwrap().as_str().unwrap(), b"Aadhaar Intelligence System");
    }
}
