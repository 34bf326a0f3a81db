// src/composer/cover.rs
use super::SectionContext;
use crate::layout::{RenderState, TextStyle};
use crate::model::Severity;
use aadhaar_render_lopdf::{Paint, RenderError};
use aadhaar_types::Rect;

const BAND_HEIGHT: f32 = 200.0;
const DETAILS_TOP: f32 = 250.0;
const DETAIL_ROWS_TOP: f32 = 285.0;
const DETAIL_ROW_STEP: f32 = 20.0;
const SUMMARY_BOX_TOP: f32 = 530.0;
const SUMMARY_BOX_HEIGHT: f32 = 110.0;

/// Label/value rows of the "Report Details" block, in display order.
fn detail_rows(ctx: &SectionContext<'_>, state: &RenderState<'_>) -> Vec<(&'static str, String)> {
    let input = ctx.input;
    vec![
        ("Report ID:", input.report_id()),
        ("Period:", ctx.period.clone()),
        ("Location:", input.location()),
        ("Metric:", input.metric_label().to_string()),
        ("Generated:", state.generated_date()),
        ("Time:", state.generated_time()),
        ("Total Findings:", input.summary.total_findings.to_string()),
    ]
}

pub(super) fn render(state: &mut RenderState<'_>, ctx: &SectionContext<'_>) -> Result<(), RenderError> {
    state.begin_page(false)?;
    let config = state.config();
    let (palette, page, branding) = (&config.palette, &config.page, &config.branding);
    let content_width = page.content_width();

    state.rect(Rect::new(0.0, 0.0, page.width, BAND_HEIGHT), Paint::Fill(palette.primary))?;
    state.text_at(
        &branding.cover_title,
        page.margin,
        page.cover_top,
        TextStyle::bold(32.0, palette.white).centered(content_width),
    )?;
    state.text_at(
        &branding.cover_subtitle,
        page.margin,
        110.0,
        TextStyle::bold(18.0, palette.subtitle).centered(content_width),
    )?;

    state.text_at("Report Details", page.margin, DETAILS_TOP, TextStyle::bold(15.0, palette.primary))?;
    let label_style = TextStyle::bold(10.0, palette.text_light);
    let value_style = TextStyle::regular(10.0, palette.text);
    for (i, (label, value)) in detail_rows(ctx, state).iter().enumerate() {
        let y = DETAIL_ROWS_TOP + i as f32 * DETAIL_ROW_STEP;
        state.text_at(label, 80.0, y, label_style)?;
        state.text_at(value, 180.0, y, value_style)?;
    }

    let summary_box = Rect::new(page.margin, SUMMARY_BOX_TOP, content_width, SUMMARY_BOX_HEIGHT);
    state.rounded_rect(summary_box, 8.0, Paint::FillAndStroke { fill: palette.background, stroke: palette.border })?;
    state.text_at("Summary", 80.0, SUMMARY_BOX_TOP + 12.0, TextStyle::bold(13.0, palette.primary))?;

    let slot = (content_width - 40.0) / Severity::ALL.len() as f32;
    let tile_width = slot - 10.0;
    for (i, severity) in Severity::ALL.into_iter().enumerate() {
        let x = page.margin + 10.0 + i as f32 * slot;
        let color = severity.color(palette);
        let tile = Rect::new(x, SUMMARY_BOX_TOP + 42.0, tile_width, 50.0);
        state.rounded_rect(tile, 5.0, Paint::FillAndStroke { fill: severity.tint(palette), stroke: color })?;

        let count = ctx.input.summary.severity_count(severity).to_string();
        state.text_at(&count, x, SUMMARY_BOX_TOP + 48.0, TextStyle::bold(22.0, color).centered(tile_width))?;
        state.text_at(
            severity.display_name(),
            x,
            SUMMARY_BOX_TOP + 75.0,
            TextStyle::regular(8.0, palette.text).centered(tile_width),
        )?;
    }

    state.text_at(
        &branding.confidentiality_notice,
        page.margin,
        page.height - 75.0,
        TextStyle::regular(7.0, palette.text_light).centered(content_width),
    )?;
    state.rule(page.footer_rule_y(), page.margin, page.right_edge(), 0.5, palette.border)
}
