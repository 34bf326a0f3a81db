//! Greedy line breaking against standard-font metrics.

use crate::encoding::encode_win_ansi;
use crate::font::Font;

/// One laid-out line of a text block.
#[derive(Debug, Clone, PartialEq)]
pub struct TextLine {
    pub text: String,
    /// Natural width of `text` in points.
    pub width: f32,
    /// Number of inter-word spaces, used to distribute justification slack.
    pub spaces: usize,
    /// True for the last line of a paragraph (never stretched when justifying).
    pub ends_paragraph: bool,
}

/// Breaks `text` into lines no wider than `max_width`.
///
/// Explicit `\n` starts a new paragraph; whitespace-only paragraphs produce an empty line so
/// the vertical rhythm of the source is kept. A single word wider than `max_width` occupies
/// a line of its own.
pub fn wrap_text(text: &str, font: Font, size: f32, max_width: f32) -> Vec<TextLine> {
    let mut lines = Vec::new();
    let space_width = font.measure_bytes(b" ", size);

    for paragraph in text.split('\n') {
        let paragraph = paragraph.trim_end_matches('\r');
        let mut current: Vec<&str> = Vec::new();
        let mut current_width = 0.0;

        for word in paragraph.split_whitespace() {
            let word_width = font.measure_bytes(&encode_win_ansi(word), size);
            let candidate = if current.is_empty() {
                word_width
            } else {
                current_width + space_width + word_width
            };

            if !current.is_empty() && candidate > max_width {
                lines.push(build_line(&current, current_width, false));
                current.clear();
                current_width = word_width;
            } else {
                current_width = candidate;
            }
            current.push(word);
        }

        lines.push(build_line(&current, current_width, true));
    }
    lines
}

fn build_line(words: &[&str], width: f32, ends_paragraph: bool) -> TextLine {
    TextLine {
        text: words.join(" "),
        width,
        spaces: words.len().saturating_sub(1),
        ends_paragraph,
    }
}
