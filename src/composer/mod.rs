// src/composer/mod.rs
//! Drives the four report sections over one [`RenderState`].

mod conclusion;
mod cover;
mod findings;
mod summary;

use crate::config::{DEFAULT_CONFIG, ReportConfig};
use crate::error::ReportError;
use crate::layout::{RenderState, TextStyle};
use crate::locale;
use crate::model::ReportInput;
use aadhaar_render_lopdf::{DocumentInfo, RenderError};
use chrono::{Local, NaiveDateTime};

/// The fixed sections of a report, in render order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    Cover,
    ExecutiveSummary,
    DetailedFindings,
    Conclusion,
}

impl Section {
    pub const ORDER: [Section; 4] = [
        Section::Cover,
        Section::ExecutiveSummary,
        Section::DetailedFindings,
        Section::Conclusion,
    ];

    pub fn title(self) -> &'static str {
        match self {
            Section::Cover => "Cover",
            Section::ExecutiveSummary => "Executive Summary",
            Section::DetailedFindings => "Detailed Findings",
            Section::Conclusion => "Conclusion",
        }
    }

    fn render(self, state: &mut RenderState<'_>, ctx: &SectionContext<'_>) -> Result<(), RenderError> {
        match self {
            Section::Cover => cover::render(state, ctx),
            Section::ExecutiveSummary => summary::render(state, ctx),
            Section::DetailedFindings => findings::render(state, ctx),
            Section::Conclusion => conclusion::render(state, ctx),
        }
    }
}

/// Values derived once from the input and shared by every section.
pub(crate) struct SectionContext<'i> {
    pub input: &'i ReportInput,
    /// e.g. "January 2024"
    pub period: String,
}

/// Composes report documents from a fixed configuration.
///
/// A generator holds no per-report state, so one instance can serve concurrent calls.
#[derive(Debug, Clone, Default)]
pub struct ReportGenerator {
    config: ReportConfig,
}

impl ReportGenerator {
    pub fn new(config: ReportConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ReportConfig {
        &self.config
    }

    /// Generates a report stamped with the current local time.
    pub fn generate(&self, input: &ReportInput) -> Result<Vec<u8>, ReportError> {
        compose(&self.config, input, Local::now().naive_local())
    }

    /// Generates a report stamped with `generated_at`. Identical inputs give identical bytes.
    pub fn generate_at(&self, input: &ReportInput, generated_at: NaiveDateTime) -> Result<Vec<u8>, ReportError> {
        compose(&self.config, input, generated_at)
    }
}

/// Generates a report with the default configuration.
pub fn generate(input: &ReportInput) -> Result<Vec<u8>, ReportError> {
    compose(&DEFAULT_CONFIG, input, Local::now().naive_local())
}

fn compose(config: &ReportConfig, input: &ReportInput, generated_at: NaiveDateTime) -> Result<Vec<u8>, ReportError> {
    let period = locale::period_name(input.year, input.month).ok_or(ReportError::InvalidPeriod {
        year: input.year,
        month: input.month,
    })?;
    let report_id = input.report_id();
    log::info!("Generating report {} ({} findings)", report_id, input.findings.len());

    let metadata = &config.metadata;
    let info = DocumentInfo {
        title: input.document_title(&metadata.title_prefix),
        author: metadata.author.clone(),
        subject: metadata.subject.clone(),
        producer: metadata.producer.clone(),
        creation_date: Some(generated_at),
    };

    let mut state = RenderState::new(config, info, generated_at)?;
    let ctx = SectionContext { input, period };
    for section in Section::ORDER {
        log::debug!("Rendering section '{}' from page {}", section.title(), state.page_index() + 1);
        section.render(&mut state, &ctx)?;
    }

    let pages = state.page_index();
    let bytes = state.finish()?;
    log::info!("Finished report {}: {} pages, {} bytes", report_id, pages, bytes.len());
    Ok(bytes)
}

/// 20pt section heading at the cursor, optionally underlined with an accent rule ending at
/// `underline_to`.
fn section_heading(state: &mut RenderState<'_>, title: &str, underline_to: Option<f32>) -> Result<(), RenderError> {
    let config = state.config();
    let (palette, margin) = (&config.palette, config.page.margin);
    state.text(title, margin, TextStyle::bold(20.0, palette.primary))?;
    if let Some(end) = underline_to {
        state.rule(config.page.header_top + 30.0, margin, end, 2.0, palette.secondary)?;
    }
    Ok(())
}

/// 14pt sub-heading at the cursor followed by one blank line.
fn subheading(state: &mut RenderState<'_>, title: &str) -> Result<(), RenderError> {
    let config = state.config();
    state.text(title, config.page.margin, TextStyle::bold(14.0, config.palette.primary))?;
    state.move_down(1.0);
    Ok(())
}

/// Flowing list items at x = 70, half a line apart.
fn item_list<I, S>(state: &mut RenderState<'_>, items: I, style: TextStyle) -> Result<(), RenderError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    for item in items {
        state.text(item.as_ref(), 70.0, style)?;
        state.move_down(0.5);
    }
    Ok(())
}
