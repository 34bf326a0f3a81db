// src/composer/conclusion.rs
use super::{SectionContext, item_list, section_heading, subheading};
use crate::components::{Render, StatsTable};
use crate::layout::{RenderState, TextStyle};
use crate::model::ReportSummary;
use aadhaar_render_lopdf::RenderError;

const NEXT_STEPS: [&str; 4] = [
    "Review critical findings within 24 hours",
    "Investigate root causes for recurring patterns",
    "Plan interventions based on predictions",
    "Monitor progress after policy implementation",
];

fn statistics_table(summary: &ReportSummary) -> StatsTable {
    StatsTable::new(
        ["Metric", "Count"],
        vec![
            ("Total Anomalies".to_string(), summary.anomalies),
            ("Total Patterns".to_string(), summary.patterns),
            ("Total Trends".to_string(), summary.trends),
            ("Total Predictions".to_string(), summary.predictions),
        ],
    )
}

pub(super) fn render(state: &mut RenderState<'_>, ctx: &SectionContext<'_>) -> Result<(), RenderError> {
    state.begin_page(true)?;
    let config = state.config();
    let (palette, page, branding) = (&config.palette, &config.page, &config.branding);

    section_heading(state, "Conclusion", Some(180.0))?;
    state.move_down(2.0);

    subheading(state, "Summary Statistics")?;
    statistics_table(&ctx.input.summary).render(state)?;
    state.move_down(3.0);

    subheading(state, "Next Steps")?;
    let bullets = NEXT_STEPS.iter().map(|step| format!("\u{2022} {}", step));
    item_list(state, bullets, TextStyle::regular(10.0, palette.text))?;
    state.move_down(3.0);

    let attribution = format!(
        "Generated by: {}\nReport Date: {}\nFor Questions: Contact {}",
        branding.system_name,
        state.generated_date_time(),
        branding.support_contact
    );
    let centered = page.content_width();
    state.text(&attribution, page.margin, TextStyle::regular(9.0, palette.text_light).centered(centered))?;
    state.move_down(2.0);

    state.text(
        &branding.confidentiality_notice,
        page.margin,
        TextStyle::regular(7.0, palette.text_light).centered(centered),
    )?;
    Ok(())
}
