use std::fs;
use std::path::Path;

use chrono::Utc;

use crate::core::error::ScanError;
use crate::core::types::ScanReport;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportFormat {
    Json,
    Jsonl,
    Markdown,
}

pub fn write_reports(
    reports: &[ScanReport],
    format: ReportFormat,
    path: &Path,
) -> Result<(), ScanError> {
    match format {
        ReportFormat::Json => write_json(reports, path),
        ReportFormat::Jsonl => write_jsonl(reports, path),
        ReportFormat::Markdown => write_markdown(reports, path),
    }
}

fn write_json(reports: &[ScanReport], path: &Path) -> Result<(), ScanError> {
    let json = serde_json::to_string_pretty(reports).map_err(|_| ScanError::Unknown)?;
    fs::write(path, json).map_err(|e| ScanError::Config(e.to_string()))
}

fn write_jsonl(reports: &[ScanReport], path: &Path) -> Result<(), ScanError> {
    let mut lines = String::new();
    for report in reports {
        let json = serde_json::to_string(report).map_err(|_| ScanError::Unknown)?;
        lines.push_str(&json);
        lines.push('\n');
    }
    fs::write(path, lines).map_err(|e| ScanError::Config(e.to_string()))
}

fn write_markdown(reports: &[ScanReport], path: &Path) -> Result<(), ScanError> {
    let mut out = String::new();
    out.push_str("# Scamshield Reports\n\n");
    out.push_str(&format!("Generated: {}\n\n", Utc::now().to_rfc3339()));
    if reports.is_empty() {
        out.push_str("_No reports generated._\n");
    }
    for report in reports {
        out.push_str(&format!(
            "## {} — {}\n",
            report.assessment.status.as_str(),
            report.original_message
        ));
        out.push_str(&format!(
            "- Scam type: {}\n- Emotion: {}\n- Urgency: {}\n- Confidence: {}\n- Explanation: {}\n",
            report.assessment.scam_type,
            report.assessment.emotion_detected.as_str(),
            report.assessment.urgency_score,
            report.assessment.confidence,
            report.assessment.explanation
        ));
        if report.translated_message != report.original_message {
            out.push_str(&format!("- Translated: {}\n", report.translated_message));
        }
        match (
            report.brand_impersonation.is_fake,
            &report.brand_impersonation.pretending_to_be,
        ) {
            (true, Some(brand)) => {
                out.push_str(&format!("- Impersonates: {brand}\n"));
            }
            _ => out.push_str("- Impersonates: none\n"),
        }
        if report.redirect_chain.is_empty() {
            out.push_str("- Redirects: none\n\n");
        } else {
            out.push_str("- Redirects:\n");
            for hop in &report.redirect_chain {
                out.push_str(&format!("  - {hop}\n"));
            }
            out.push('\n');
        }
    }
    fs::write(path, out).map_err(|e| ScanError::Config(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::ScanReport;

    #[test]
    fn jsonl_writes_one_line_per_report() {
        let reports = vec![
            ScanReport::inconclusive("a"),
            ScanReport::inconclusive("b"),
        ];
        let path = std::env::temp_dir().join("scamshield_output_test.jsonl");
        write_reports(&reports, ReportFormat::Jsonl, &path).unwrap();
        let written = std::fs::read_to_string(&path).unwrap();
        let _ = std::fs::remove_file(&path);
        assert_eq!(written.lines().count(), 2);
        assert!(written.lines().all(|l| l.contains("originalMessage")));
    }

    #[test]
    fn markdown_lists_redirect_hops() {
        let mut report = ScanReport::inconclusive("http://a.com");
        report.redirect_chain = vec!["http://a.com".into(), "http://b.com".into()];
        let path = std::env::temp_dir().join("scamshield_output_test.md");
        write_reports(&[report], ReportFormat::Markdown, &path).unwrap();
        let written = std::fs::read_to_string(&path).unwrap();
        let _ = std::fs::remove_file(&path);
        assert!(written.contains("- Redirects:"));
        assert!(written.contains("  - http://b.com"));
    }
}
