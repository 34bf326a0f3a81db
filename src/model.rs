// src/model.rs
//! The input record handed to the generator by the report-assembly collaborator.

use crate::config::Palette;
use aadhaar_types::Color;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FindingType {
    Anomaly,
    Pattern,
    Trend,
    Prediction,
}

impl FindingType {
    /// Text shown inside the type badge.
    pub fn badge_label(self) -> &'static str {
        match self {
            FindingType::Anomaly => "ANOMALY",
            FindingType::Pattern => "PATTERN",
            FindingType::Trend => "TREND",
            FindingType::Prediction => "PREDICTION",
        }
    }
}

/// Ordinal risk bucket, declared from most to least severe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Critical,
    High,
    Medium,
    Low,
}

impl Severity {
    /// Display order used by the cover badges and the risk chart.
    pub const ALL: [Severity; 4] = [Severity::Critical, Severity::High, Severity::Medium, Severity::Low];

    pub fn display_name(self) -> &'static str {
        match self {
            Severity::Critical => "Critical",
            Severity::High => "High",
            Severity::Medium => "Medium",
            Severity::Low => "Low",
        }
    }

    pub fn badge_label(self) -> &'static str {
        match self {
            Severity::Critical => "CRITICAL",
            Severity::High => "HIGH",
            Severity::Medium => "MEDIUM",
            Severity::Low => "LOW",
        }
    }

    pub fn color(self, palette: &Palette) -> Color {
        match self {
            Severity::Critical => palette.critical,
            Severity::High => palette.high,
            Severity::Medium => palette.medium,
            Severity::Low => palette.low,
        }
    }

    /// Light background used behind the severity colour on the cover.
    pub fn tint(self, palette: &Palette) -> Color {
        match self {
            Severity::Critical => palette.critical_tint,
            Severity::High => palette.high_tint,
            Severity::Medium => palette.medium_tint,
            Severity::Low => palette.low_tint,
        }
    }
}

/// Up to three optional labelled values attached to a finding.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FindingMetrics {
    pub value1: Option<f64>,
    pub value2: Option<f64>,
    pub value3: Option<f64>,
    pub label1: Option<String>,
    pub label2: Option<String>,
    pub label3: Option<String>,
}

impl FindingMetrics {
    /// The present `(label, value)` pairs in slot order. A value without a label is
    /// reported as "Value N"; a label without a value is dropped.
    pub fn pairs(&self) -> Vec<(String, f64)> {
        [
            (&self.label1, self.value1),
            (&self.label2, self.value2),
            (&self.label3, self.value3),
        ]
        .into_iter()
        .enumerate()
        .filter_map(|(i, (label, value))| {
            let value = value?;
            let label = label.clone().unwrap_or_else(|| format!("Value {}", i + 1));
            Some((label, value))
        })
        .collect()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Finding {
    pub id: String,
    pub finding_type: FindingType,
    pub severity: Severity,
    pub title: String,
    pub description: String,
    /// Conceptually in `0..=1`; rendered as a percentage.
    pub confidence: f64,
    /// Free text, one recommendation per line. May be empty.
    #[serde(default)]
    pub recommendation: String,
    pub detected_at: DateTime<Utc>,
    #[serde(default)]
    pub metrics: FindingMetrics,
}

impl Finding {
    /// Non-blank recommendation lines, trimmed, in source order.
    pub fn recommendation_lines(&self) -> Vec<&str> {
        self.recommendation
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect()
    }
}

/// Aggregate counters computed by the producer. Rendered verbatim, never re-derived.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportSummary {
    pub total_findings: u32,
    pub anomalies: u32,
    pub patterns: u32,
    pub trends: u32,
    pub predictions: u32,
    pub critical: u32,
    pub high: u32,
    pub medium: u32,
    pub low: u32,
}

impl ReportSummary {
    pub fn severity_count(&self, severity: Severity) -> u32 {
        match severity {
            Severity::Critical => self.critical,
            Severity::High => self.high,
            Severity::Medium => self.medium,
            Severity::Low => self.low,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportInput {
    pub year: i32,
    /// Calendar month, `1..=12`.
    pub month: u32,
    pub state: String,
    pub district: String,
    #[serde(default)]
    pub metric_category: Option<String>,
    /// Order is preserved; cards are numbered by position.
    #[serde(default)]
    pub findings: Vec<Finding>,
    pub summary: ReportSummary,
}

impl ReportInput {
    /// `{year}-{MM}-{state}-{district}`
    pub fn report_id(&self) -> String {
        format!("{}-{:02}-{}-{}", self.year, self.month, self.state, self.district)
    }

    /// `district, state`
    pub fn location(&self) -> String {
        format!("{}, {}", self.district, self.state)
    }

    pub fn metric_label(&self) -> &str {
        self.metric_category.as_deref().unwrap_or("All Metrics")
    }

    pub fn document_title(&self, prefix: &str) -> String {
        format!("{} - {} {} {}-{:02}", prefix, self.state, self.district, self.year, self.month)
    }

    /// The first `limit` critical findings, in input order.
    pub fn leading_critical_findings(&self, limit: usize) -> Vec<&Finding> {
        self.findings
            .iter()
            .filter(|f| f.severity == Severity::Critical)
            .take(limit)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn finding(severity: Severity, title: &str) -> Finding {
        Finding {
            id: title.to_lowercase(),
            finding_type: FindingType::Anomaly,
            severity,
            title: title.to_string(),
            description: String::new(),
            confidence: 0.5,
            recommendation: String::new(),
            detected_at: DateTime::<Utc>::default(),
            metrics: FindingMetrics::default(),
        }
    }

    fn input() -> ReportInput {
        ReportInput {
            year: 2024,
            month: 1,
            state: "Delhi".into(),
            district: "Central Delhi".into(),
            metric_category: None,
            findings: vec![],
            summary: ReportSummary::default(),
        }
    }

    #[test]
    fn report_id_zero_pads_month() {
        assert_eq!(input().report_id(), "2024-01-Delhi-Central Delhi");
    }

    #[test]
    fn document_title_uses_prefix() {
        assert_eq!(
            input().document_title("Aadhaar Report"),
            "Aadhaar Report - Delhi Central Delhi 2024-01"
        );
    }

    #[test]
    fn missing_metric_category_falls_back_to_sentinel() {
        let mut report = input();
        assert_eq!(report.metric_label(), "All Metrics");
        report.metric_category = Some("Biometric Updates".into());
        assert_eq!(report.metric_label(), "Biometric Updates");
    }

    #[test]
    fn metric_pairs_skip_absent_values_and_default_labels() {
        let metrics = FindingMetrics {
            value1: None,
            value2: Some(12.5),
            value3: Some(3.0),
            label1: Some("Ignored".into()),
            label2: None,
            label3: Some("Growth".into()),
        };
        assert_eq!(
            metrics.pairs(),
            vec![("Value 2".to_string(), 12.5), ("Growth".to_string(), 3.0)]
        );
        assert!(FindingMetrics::default().pairs().is_empty());
    }

    #[test]
    fn recommendation_lines_drop_blank_lines() {
        let mut f = finding(Severity::Low, "x");
        f.recommendation = "  First step  \n\n   \nSecond step\r\n\t\nThird".into();
        assert_eq!(f.recommendation_lines(), vec!["First step", "Second step", "Third"]);
        f.recommendation.clear();
        assert!(f.recommendation_lines().is_empty());
    }

    #[test]
    fn leading_critical_findings_keep_order_and_limit() {
        let mut report = input();
        report.findings = vec![
            finding(Severity::Critical, "A"),
            finding(Severity::Low, "B"),
            finding(Severity::Critical, "C"),
            finding(Severity::Critical, "D"),
            finding(Severity::Critical, "E"),
        ];
        let titles: Vec<_> = report
            .leading_critical_findings(3)
            .into_iter()
            .map(|f| f.title.as_str())
            .collect();
        assert_eq!(titles, vec!["A", "C", "D"]);
    }

    #[test]
    fn deserializes_producer_json() {
        let json = r#"{
            "year": 2024, "month": 3, "state": "Kerala", "district": "Ernakulam",
            "findings": [{
                "id": "f-1", "findingType": "trend", "severity": "high",
                "title": "Rising updates", "description": "Updates grew.",
                "confidence": 0.82, "recommendation": "Add counters",
                "detectedAt": "2024-03-05T10:00:00Z",
                "metrics": { "value1": 42.0, "label1": "Growth %" }
            }],
            "summary": { "totalFindings": 1, "anomalies": 0, "patterns": 0, "trends": 1,
                         "predictions": 0, "critical": 0, "high": 1, "medium": 0, "low": 0 }
        }"#;
        let report: ReportInput = serde_json::from_str(json).unwrap();
        assert_eq!(report.metric_category, None);
        assert_eq!(report.findings[0].finding_type, FindingType::Trend);
        assert_eq!(report.findings[0].severity, Severity::High);
        assert_eq!(report.findings[0].metrics.pairs(), vec![("Growth %".to_string(), 42.0)]);
    }

    #[test]
    fn unknown_severity_is_rejected_at_the_boundary() {
        let result: Result<Severity, _> = serde_json::from_str("\"severe\"");
        assert!(result.is_err());
    }
}
