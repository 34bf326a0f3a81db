// src/error.rs
use aadhaar_render_lopdf::RenderError;
use thiserror::Error;

/// Everything that can make a report generation fail.
///
/// A failed generation never yields a partial document.
#[derive(Error, Debug)]
pub enum ReportError {
    #[error("Rendering failed: {0}")]
    Render(#[from] RenderError),

    #[error("Invalid reporting period {year}-{month}: month must be between 1 and 12")]
    InvalidPeriod { year: i32, month: u32 },

    #[error("Configuration is invalid: {0}")]
    Config(#[from] serde_json::Error),
}
