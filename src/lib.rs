//! Paginated PDF intelligence reports.
//!
//! A [`ReportInput`] (findings plus producer-computed summary counters) is composed into a
//! cover page, an executive summary, detailed finding cards and a conclusion, and returned
//! as one finished PDF buffer.
//!
//! ```no_run
//! # fn run(input: &aadhaar_report::ReportInput) -> Result<(), aadhaar_report::ReportError> {
//! let pdf = aadhaar_report::generate(input)?;
//! assert!(pdf.starts_with(b"%PDF-"));
//! # Ok(())
//! # }
//! ```

pub mod components;
pub mod composer;
pub mod config;
pub mod error;
pub mod layout;
pub mod locale;
pub mod model;

pub use composer::{ReportGenerator, Section, generate};
pub use config::{Branding, DEFAULT_CONFIG, MetadataStrings, PageGeometry, Palette, ReportConfig};
pub use error::ReportError;
pub use model::{Finding, FindingMetrics, FindingType, ReportInput, ReportSummary, Severity};
