pub mod align;
pub mod color;
pub mod geometry;

pub use align::TextAlign;
pub use color::Color;
pub use geometry::{Point, Rect, Size};
