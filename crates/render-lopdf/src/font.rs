//! The standard Type1 fonts the canvas registers, with their AFM advance widths.

/// Distance from the top of a line box to the baseline, as a fraction of the font size.
pub const ASCENDER: f32 = 0.718;

/// Line box height as a fraction of the font size (ascender - descender + line gap).
pub const LINE_HEIGHT_FACTOR: f32 = 1.156;

/// Advance width used for bytes outside the printable ASCII tables.
const FALLBACK_WIDTH: u16 = 556;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Font {
    #[default]
    Helvetica,
    HelveticaBold,
    HelveticaOblique,
}

impl Font {
    pub const ALL: [Font; 3] = [Font::Helvetica, Font::HelveticaBold, Font::HelveticaOblique];

    pub fn postscript_name(self) -> &'static str {
        match self {
            Font::Helvetica => "Helvetica",
            Font::HelveticaBold => "Helvetica-Bold",
            Font::HelveticaOblique => "Helvetica-Oblique",
        }
    }

    /// Name of the font inside the shared page resource dictionary.
    pub fn resource_name(self) -> &'static str {
        match self {
            Font::Helvetica => "F1",
            Font::HelveticaBold => "F2",
            Font::HelveticaOblique => "F3",
        }
    }

    /// Advance width of one WinAnsi-encoded byte, in 1/1000 em.
    pub fn glyph_width(self, byte: u8) -> u16 {
        let table = match self {
            Font::HelveticaBold => &HELVETICA_BOLD_WIDTHS,
            // The oblique cut shares the upright metrics.
            Font::Helvetica | Font::HelveticaOblique => &HELVETICA_WIDTHS,
        };
        match byte {
            32..=126 => table[(byte - 32) as usize],
            0x95 => 350,
            0x96 => 556,
            0x97 => 1000,
            0xA0 => 278,
            _ => FALLBACK_WIDTH,
        }
    }

    /// Width in points of already-encoded bytes at `size`.
    pub fn measure_bytes(self, bytes: &[u8], size: f32) -> f32 {
        let units: u32 = bytes.iter().map(|b| self.glyph_width(*b) as u32).sum();
        units as f32 * size / 1000.0
    }

    pub fn measure(self, text: &str, size: f32) -> f32 {
        self.measure_bytes(&crate::encoding::encode_win_ansi(text), size)
    }
}

#[rustfmt::skip]
const HELVETICA_WIDTHS: [u16; 95] = [
    278, 278, 355, 556, 556, 889, 667, 191, 333, 333, 389, 584, 278, 333, 278, 278,
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, 278, 278, 584, 584, 584, 556,
    1015, 667, 667, 722, 722, 667, 611, 778, 722, 278, 500, 667, 556, 833, 722, 778,
    667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, 278, 278, 278, 469, 556,
    333, 556, 556, 500, 556, 556, 278, 556, 556, 222, 222, 500, 222, 833, 556, 556,
    556, 556, 333, 500, 278, 556, 500, 722, 500, 500, 500, 334, 260, 334, 584,
];

#[rustfmt::skip]
const HELVETICA_BOLD_WIDTHS: [u16; 95] = [
    278, 333, 474, 556, 556, 889, 722, 238, 333, 333, 389, 584, 278, 333, 278, 278,
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, 333, 333, 584, 584, 584, 611,
    975, 722, 722, 722, 722, 667, 611, 778, 722, 278, 556, 722, 611, 833, 722, 778,
    667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, 333, 278, 333, 584, 556,
    333, 556, 611, 556, 611, 556, 333, 611, 611, 278, 278, 556, 278, 889, 611, 611,
    611, 611, 389, 556, 333, 611, 556, 778, 556, 556, 500, 389, 280, 389, 584,
];
