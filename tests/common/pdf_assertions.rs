use aadhaar_render_lopdf::encoding::decode_win_ansi;
use lopdf::Document as LopdfDocument;
use lopdf::content::Content;

/// Decode the `Tj` operands of one page's content stream, in drawing order
pub fn page_lines(doc: &LopdfDocument, page: u32) -> Vec<String> {
    let Some(page_id) = doc.get_pages().get(&page).copied() else {
        return Vec::new();
    };
    let Ok(data) = doc.get_page_content(page_id) else {
        return Vec::new();
    };
    let Ok(content) = Content::decode(&data) else {
        return Vec::new();
    };
    content
        .operations
        .iter()
        .filter(|op| op.operator == "Tj")
        .filter_map(|op| op.operands.first())
        .filter_map(|operand| operand.as_str().ok())
        .map(decode_win_ansi)
        .collect()
}

/// Extract all text content from a PDF document, one line per text run
pub fn extract_text(doc: &LopdfDocument) -> String {
    let mut text = String::new();
    for page in 1..=doc.get_pages().len() as u32 {
        for line in page_lines(doc, page) {
            text.push_str(&line);
            text.push('\n');
        }
    }
    text
}

/// Base fonts declared in any resource dictionary's `/Font` entry
pub fn extract_font_names(doc: &LopdfDocument) -> Vec<String> {
    let mut fonts = Vec::new();
    for (_, object) in doc.objects.iter() {
        let Ok(dict) = object.as_dict() else { continue };
        let Ok(font_dict) = dict.get(b"Font").and_then(|f| f.as_dict()) else { continue };
        for (_, font) in font_dict.iter() {
            let font = match font.as_reference() {
                Ok(id) => doc.get_dictionary(id).ok(),
                Err(_) => font.as_dict().ok(),
            };
            if let Some(name) = font.and_then(|f| f.get(b"BaseFont").ok()).and_then(|b| b.as_name().ok()) {
                fonts.push(String::from_utf8_lossy(name).to_string());
            }
        }
    }
    fonts.sort();
    fonts.dedup();
    fonts
}

/// Get page dimensions (width, height) in points
pub fn get_page_dimensions(doc: &LopdfDocument, page_num: u32) -> Option<(f32, f32)> {
    let page_id = *doc.get_pages().get(&page_num)?;
    let page_dict = doc.get_dictionary(page_id).ok()?;
    let arr = page_dict.get(b"MediaBox").ok()?.as_array().ok()?;
    if arr.len() < 4 {
        return None;
    }
    let width = arr[2].as_f32().ok()? - arr[0].as_f32().ok()?;
    let height = arr[3].as_f32().ok()? - arr[1].as_f32().ok()?;
    Some((width, height))
}

// ============================================================================
// Fluent Assertion Macros
// ============================================================================

/// Assert that PDF contains specific text
#[macro_export]
macro_rules! assert_pdf_contains_text {
    ($pdf:expr, $text:expr) => {
        let extracted = $crate::common::pdf_assertions::extract_text(&$pdf.doc);
        assert!(
            extracted.contains($text),
            "PDF should contain '{}', but extracted text was:\n{}",
            $text,
            extracted
        );
    };
}

/// Assert that PDF does NOT contain specific text
#[macro_export]
macro_rules! assert_pdf_not_contains_text {
    ($pdf:expr, $text:expr) => {
        let extracted = $crate::common::pdf_assertions::extract_text(&$pdf.doc);
        assert!(
            !extracted.contains($text),
            "PDF should NOT contain '{}', but it was found in:\n{}",
            $text,
            extracted
        );
    };
}

/// Assert that a page draws a text run exactly equal to `$line`
#[macro_export]
macro_rules! assert_page_has_line {
    ($pdf:expr, $page:expr, $line:expr) => {
        let lines = $pdf.page_lines($page);
        assert!(
            lines.iter().any(|l| l == $line),
            "Page {} should draw '{}', lines were:\n{:#?}",
            $page,
            $line,
            lines
        );
    };
}

/// Assert that a page draws no text run equal to `$line`
#[macro_export]
macro_rules! assert_page_lacks_line {
    ($pdf:expr, $page:expr, $line:expr) => {
        let lines = $pdf.page_lines($page);
        assert!(
            !lines.iter().any(|l| l == $line),
            "Page {} should NOT draw '{}', lines were:\n{:#?}",
            $page,
            $line,
            lines
        );
    };
}

/// Assert the number of pages in a PDF
#[macro_export]
macro_rules! assert_pdf_page_count {
    ($pdf:expr, $count:expr) => {
        assert_eq!(
            $pdf.page_count(),
            $count,
            "Expected {} pages, got {}",
            $count,
            $pdf.page_count()
        );
    };
}

/// Assert minimum number of pages
#[macro_export]
macro_rules! assert_pdf_min_pages {
    ($pdf:expr, $min:expr) => {
        assert!(
            $pdf.page_count() >= $min,
            "Expected at least {} pages, got {}",
            $min,
            $pdf.page_count()
        );
    };
}

/// Assert that PDF contains a font matching a pattern
#[macro_export]
macro_rules! assert_pdf_has_font {
    ($pdf:expr, $pattern:expr) => {
        let fonts = $crate::common::pdf_assertions::extract_font_names(&$pdf.doc);
        assert!(
            fonts.iter().any(|f| f.contains($pattern)),
            "PDF should contain font matching '{}', fonts found: {:?}",
            $pattern,
            fonts
        );
    };
}

/// Assert page dimensions within tolerance
#[macro_export]
macro_rules! assert_pdf_page_size {
    ($pdf:expr, $page:expr, $width:expr, $height:expr) => {
        let dims = $crate::common::pdf_assertions::get_page_dimensions(&$pdf.doc, $page);
        assert!(dims.is_some(), "Could not get dimensions for page {}", $page);
        let (w, h) = dims.unwrap();
        assert!((w - $width).abs() < 1.0, "Page {} width expected ~{}, got {}", $page, $width, w);
        assert!((h - $height).abs() < 1.0, "Page {} height expected ~{}, got {}", $page, $height, h);
    };
}
