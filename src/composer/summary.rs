// src/composer/summary.rs
use super::{SectionContext, item_list, section_heading, subheading};
use crate::components::{BarChart, BarEntry, Render};
use crate::layout::{RenderState, TextStyle};
use crate::model::{ReportInput, Severity};
use aadhaar_render_lopdf::RenderError;
use aadhaar_types::TextAlign;

const NO_CRITICAL_FINDINGS: &str = "No critical findings identified in this reporting period.";

const KEY_FINDINGS_LIMIT: usize = 3;

const RECOMMENDED_ACTIONS: [&str; 3] = [
    "Review critical findings within 24 hours and initiate corrective measures",
    "Investigate root causes for high-severity anomalies and recurring patterns",
    "Plan resource allocation based on predictive indicators",
];

const METHODOLOGY_NOTE: &str = "This analysis combines anomaly detection, pattern recognition, trend analysis, and \
     predictive modeling. All findings include confidence scores to support informed decision-making.";

fn narrative(input: &ReportInput, period: &str) -> String {
    let s = &input.summary;
    format!(
        "This report analyzes Aadhaar enrolment and update patterns for {}, {} during {}. \
         The analysis identified {} key findings, comprising {} anomalies, {} patterns, {} trends, \
         and {} predictive indicators. All findings are categorized by severity and include \
         confidence scores for reliability assessment.",
        input.district, input.state, period, s.total_findings, s.anomalies, s.patterns, s.trends, s.predictions
    )
}

fn risk_chart(state: &RenderState<'_>, input: &ReportInput) -> BarChart {
    let palette = &state.config().palette;
    BarChart::new(
        Severity::ALL
            .into_iter()
            .map(|s| BarEntry::new(s.display_name(), input.summary.severity_count(s), s.color(palette)))
            .collect(),
    )
}

pub(super) fn render(state: &mut RenderState<'_>, ctx: &SectionContext<'_>) -> Result<(), RenderError> {
    state.begin_page(true)?;
    let config = state.config();
    let (palette, page) = (&config.palette, &config.page);
    let input = ctx.input;

    section_heading(state, "Executive Summary", Some(250.0))?;

    state.advance_to(page.header_top + 50.0);
    let body = TextStyle::regular(11.0, palette.text)
        .width(page.content_width())
        .align(TextAlign::Justify)
        .line_gap(4.0);
    state.text(&narrative(input, &ctx.period), page.margin, body)?;
    state.move_down(2.0);

    subheading(state, "Risk Distribution")?;
    risk_chart(state, input).render(state)?;
    state.move_down(2.0);

    subheading(state, "Key Findings")?;
    let critical = input.leading_critical_findings(KEY_FINDINGS_LIMIT);
    if critical.is_empty() {
        state.text(NO_CRITICAL_FINDINGS, 70.0, TextStyle::italic(10.0, palette.text_light))?;
    } else {
        let items = critical.iter().enumerate().map(|(i, f)| format!("{}. {}", i + 1, f.title));
        item_list(state, items, TextStyle::regular(10.0, palette.text).width(page.width - 130.0))?;
    }
    state.move_down(2.0);

    subheading(state, "Recommended Actions")?;
    let items = RECOMMENDED_ACTIONS.iter().enumerate().map(|(i, a)| format!("{}. {}", i + 1, a));
    item_list(state, items, TextStyle::regular(10.0, palette.text).width(page.width - 130.0))?;
    state.move_down(2.0);

    let note = TextStyle::italic(9.0, palette.text_light)
        .width(page.content_width())
        .align(TextAlign::Justify);
    state.text(METHODOLOGY_NOTE, page.margin, note)?;
    Ok(())
}
