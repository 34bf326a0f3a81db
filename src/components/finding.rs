// src/components/finding.rs
use super::{Badge, Render};
use crate::layout::{RenderState, TextStyle};
use crate::locale;
use crate::model::Finding;
use aadhaar_render_lopdf::RenderError;
use aadhaar_types::TextAlign;

/// One finding drawn as a self-contained card at the cursor.
///
/// The card's height is not measured up front; each block advances the cursor as it is drawn.
/// Optional blocks with nothing to show are skipped entirely, heading included.
#[derive(Debug, Clone, Copy)]
pub struct FindingCard<'f> {
    pub finding: &'f Finding,
    /// One-based position in the report.
    pub number: usize,
}

impl<'f> FindingCard<'f> {
    pub fn new(finding: &'f Finding, number: usize) -> Self {
        Self { finding, number }
    }

    pub fn heading(&self) -> String {
        format!("{}. {}", self.number, self.finding.title)
    }

    /// Bulleted metric lines followed by the confidence line, or nothing when no metric
    /// value is present.
    pub fn metric_lines(&self) -> Vec<String> {
        let pairs = self.finding.metrics.pairs();
        if pairs.is_empty() {
            return Vec::new();
        }
        pairs
            .into_iter()
            .map(|(label, value)| format!("\u{2022} {}: {}", label, locale::format_metric(value)))
            .chain(std::iter::once(format!(
                "\u{2022} Confidence: {}",
                locale::format_percent(self.finding.confidence)
            )))
            .collect()
    }

    /// Recommendation lines numbered contiguously from 1.
    pub fn recommendation_items(&self) -> Vec<String> {
        self.finding
            .recommendation_lines()
            .into_iter()
            .enumerate()
            .map(|(i, line)| format!("{}. {}", i + 1, line))
            .collect()
    }

    /// Severity and type badges plus the detection date. The date is the UTC calendar
    /// day of `detected_at`, independent of the host's time zone.
    fn render_badges(&self, state: &mut RenderState<'_>) -> Result<(), RenderError> {
        let palette = &state.config().palette;
        let top = state.y();
        let severity = self.finding.severity;

        Badge::solid(severity.badge_label(), 70.0, top, severity.color(palette), palette.white).render(state)?;
        Badge::solid(self.finding.finding_type.badge_label(), 135.0, top, palette.secondary, palette.white)
            .render(state)?;

        let detected = format!("Detected: {}", locale::format_date(&self.finding.detected_at));
        state.text_at(&detected, 200.0, top + 5.0, TextStyle::regular(8.0, palette.text_light))?;

        state.advance_to(top + 18.0);
        state.move_down(1.5);
        Ok(())
    }

    fn render_list(
        &self,
        state: &mut RenderState<'_>,
        heading: &str,
        items: &[String],
        item_style: TextStyle,
    ) -> Result<(), RenderError> {
        let text = state.config().palette.text;
        state.text(heading, 70.0, TextStyle::bold(10.0, text))?;
        state.move_down(0.3);
        for item in items {
            state.text(item, 80.0, item_style)?;
            state.move_down(0.3);
        }
        Ok(())
    }
}

impl Render for FindingCard<'_> {
    fn render(&self, state: &mut RenderState<'_>) -> Result<(), RenderError> {
        let config = state.config();
        let (palette, page) = (&config.palette, &config.page);

        let title_style = TextStyle::bold(12.0, palette.primary).width(page.content_width());
        state.text(&self.heading(), page.margin, title_style)?;
        state.move_down(0.5);

        self.render_badges(state)?;

        state.text("Description:", 70.0, TextStyle::bold(10.0, palette.text))?;
        state.move_down(0.3);
        let body_style = TextStyle::regular(10.0, palette.text)
            .width(page.width - 130.0)
            .align(TextAlign::Justify);
        state.text(&self.finding.description, 70.0, body_style)?;
        state.move_down(1.0);

        let metrics = self.metric_lines();
        if !metrics.is_empty() {
            self.render_list(state, "Key Metrics:", &metrics, TextStyle::regular(9.0, palette.text))?;
            state.move_down(0.5);
        }

        let recommendations = self.recommendation_items();
        if !recommendations.is_empty() {
            let style = TextStyle::regular(9.0, palette.text).width(page.width - 140.0);
            self.render_list(state, "Recommendations:", &recommendations, style)?;
        }

        state.move_down(0.5);
        let y = state.y();
        state.rule(y, page.margin, page.right_edge(), 0.5, palette.border)
    }
}
