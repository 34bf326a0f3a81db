// src/composer/findings.rs
use super::{SectionContext, section_heading};
use crate::components::{FindingCard, Render};
use crate::layout::{RenderState, TextStyle};
use aadhaar_render_lopdf::RenderError;

const NO_FINDINGS: &str = "No findings identified for this reporting period.";

/// Renders one card per finding, in input order.
///
/// Page breaks are decided only between cards: when the cursor has passed the overflow
/// limit a fresh page is started before the next card. A card is never split, so a long one
/// may run past the footer rule.
pub(super) fn render(state: &mut RenderState<'_>, ctx: &SectionContext<'_>) -> Result<(), RenderError> {
    state.begin_page(true)?;
    let config = state.config();
    let (palette, page) = (&config.palette, &config.page);

    section_heading(state, "Detailed Findings", None)?;

    if ctx.input.findings.is_empty() {
        state.advance_to(page.header_top + 50.0);
        state.text(NO_FINDINGS, page.margin, TextStyle::italic(11.0, palette.text_light))?;
        return Ok(());
    }

    state.move_down(2.0);
    for (i, finding) in ctx.input.findings.iter().enumerate() {
        let number = i + 1;
        if state.is_overflowing() {
            log::debug!("Cursor at {:.1} past limit, starting page for finding {}", state.y(), number);
            state.begin_page(true)?;
        }

        FindingCard::new(finding, number).render(state)?;

        if state.y() > page.footer_rule_y() {
            log::warn!(
                "Finding {} ('{}') ends at {:.1}, below the usable bottom {:.1} of page {}",
                number,
                finding.id,
                state.y(),
                page.footer_rule_y(),
                state.page_index()
            );
        }
        state.move_down(1.5);
    }
    Ok(())
}
