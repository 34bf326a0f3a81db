use serde::{Deserialize, Serialize};

/// Horizontal alignment of text within its box.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextAlign {
    #[default]
    Left,
    Center,
    Right,
    /// Stretch inter-word spacing so every line but the last of a paragraph fills the box.
    Justify,
}
