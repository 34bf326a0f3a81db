// src/layout/cursor.rs
//! The forward-only vertical draw position on the active page.

use crate::config::PageGeometry;

/// Tracks where the next block of flowing content starts.
///
/// The cursor only ever moves down within a page. Content placed above it is final; there is
/// no re-flow. Once it passes the overflow limit the composer starts a new page before the
/// next unit of content, but nothing already drawn is moved.
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutCursor {
    y: f32,
    overflow_limit: f32,
    header_top: f32,
    cover_top: f32,
}

impl LayoutCursor {
    pub fn new(geometry: &PageGeometry) -> Self {
        Self {
            y: geometry.cover_top,
            overflow_limit: geometry.overflow_limit,
            header_top: geometry.header_top,
            cover_top: geometry.cover_top,
        }
    }

    pub fn y(&self) -> f32 {
        self.y
    }

    /// Moves down by `delta`. Negative deltas are ignored.
    pub fn advance(&mut self, delta: f32) {
        self.y += delta.max(0.0);
    }

    /// Moves down to `y` unless the cursor is already below it.
    pub fn advance_to(&mut self, y: f32) {
        self.y = self.y.max(y);
    }

    pub fn is_overflowing(&self) -> bool {
        self.y > self.overflow_limit
    }

    /// Places the cursor at the top of a fresh page.
    pub fn reset(&mut self, with_header: bool) {
        self.y = if with_header { self.header_top } else { self.cover_top };
    }
}
