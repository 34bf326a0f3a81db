// src/layout/mod.rs
//! Immediate-mode vertical flow: a forward-only cursor and the state that carries it.

mod cursor;
mod state;
mod style;

pub use cursor::LayoutCursor;
pub use state::RenderState;
pub use style::TextStyle;
