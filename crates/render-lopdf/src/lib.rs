//! Immediate-mode PDF canvas using lopdf.
//!
//! This crate provides the drawing surface the report composer paints on: page
//! allocation, text with wrapping and alignment, filled/stroked shapes and a streaming
//! object writer that appends every finished page to one in-memory buffer.

mod canvas;
pub mod encoding;
mod error;
mod font;
pub mod text;
mod writer;

pub use canvas::{Canvas, DocumentInfo, Paint, TextOptions};
pub use error::RenderError;
pub use font::{Font, ASCENDER, LINE_HEIGHT_FACTOR};
pub use writer::StreamingPdfWriter;
