use aadhaar_report::{Finding, FindingMetrics, FindingType, ReportInput, ReportSummary, Severity};
use chrono::{NaiveDate, NaiveDateTime, TimeZone, Utc};

/// 1 February 2024, 3:45:12 pm
pub fn generated_at() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 2, 1)
        .and_then(|d| d.and_hms_opt(15, 45, 12))
        .expect("valid fixture timestamp")
}

/// A finding with one short description line and no optional blocks
pub fn finding(title: &str, severity: Severity) -> Finding {
    Finding {
        id: title.to_lowercase().replace(' ', "-"),
        finding_type: FindingType::Anomaly,
        severity,
        title: title.to_string(),
        description: "Enrolment volume deviated from the district baseline.".to_string(),
        confidence: 0.8,
        recommendation: String::new(),
        detected_at: Utc.with_ymd_and_hms(2024, 1, 15, 9, 30, 0).unwrap(),
        metrics: FindingMetrics::default(),
    }
}

/// A finding with every optional block populated
pub fn rich_finding(title: &str, severity: Severity) -> Finding {
    Finding {
        finding_type: FindingType::Trend,
        confidence: 0.915,
        recommendation: "Deploy mobile enrolment units\n\n   \nExtend weekend hours\n".to_string(),
        metrics: FindingMetrics {
            value1: Some(1250.0),
            label1: Some("Monthly enrolments".to_string()),
            value2: Some(12.5),
            label2: None,
            value3: None,
            label3: Some("Unused".to_string()),
        },
        ..finding(title, severity)
    }
}

/// Summary counters consistent with `findings`
pub fn summary_for(findings: &[Finding]) -> ReportSummary {
    let count_type = |t: FindingType| findings.iter().filter(|f| f.finding_type == t).count() as u32;
    let count_severity = |s: Severity| findings.iter().filter(|f| f.severity == s).count() as u32;
    ReportSummary {
        total_findings: findings.len() as u32,
        anomalies: count_type(FindingType::Anomaly),
        patterns: count_type(FindingType::Pattern),
        trends: count_type(FindingType::Trend),
        predictions: count_type(FindingType::Prediction),
        critical: count_severity(Severity::Critical),
        high: count_severity(Severity::High),
        medium: count_severity(Severity::Medium),
        low: count_severity(Severity::Low),
    }
}

/// Delhi / Central Delhi, January 2024, with a consistent summary
pub fn report(findings: Vec<Finding>) -> ReportInput {
    ReportInput {
        year: 2024,
        month: 1,
        state: "Delhi".to_string(),
        district: "Central Delhi".to_string(),
        metric_category: None,
        summary: summary_for(&findings),
        findings,
    }
}

/// `count` findings titled "Finding 1".."Finding count", cycling through severities
pub fn numbered_findings(count: usize) -> Vec<Finding> {
    (1..=count)
        .map(|i| finding(&format!("Finding {}", i), Severity::ALL[i % Severity::ALL.len()]))
        .collect()
}
