// src/components/mod.rs
//! Self-contained drawable blocks. Flowing blocks draw at the cursor of the [`RenderState`]
//! they are handed and leave it below what they drew; badges are placed absolutely.

mod badge;
mod chart;
mod finding;
mod table;

pub use badge::Badge;
pub use chart::{BarChart, BarEntry};
pub use finding::FindingCard;
pub use table::StatsTable;

use crate::layout::RenderState;
use aadhaar_render_lopdf::RenderError;

pub trait Render {
    fn render(&self, state: &mut RenderState<'_>) -> Result<(), RenderError>;
}
