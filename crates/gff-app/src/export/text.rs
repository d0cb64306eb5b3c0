//! Plain-text report files

use std::path::Path;

use chrono::NaiveDateTime;
use gff_domain::model::CostReport;
use gff_domain::service::{parse_text_report, render_text_report, ParsedReport};
use gff_types::Result;

/// File name for a batch's text report, e.g. `GFF-B-001_report.txt`
pub fn default_report_file_name(batch_no: &str) -> String {
    let stem: String = batch_no
        .trim()
        .chars()
        .map(|c| if c.is_alphanumeric() || c == '-' || c == '_' { c } else { '_' })
        .collect();
    if stem.is_empty() {
        "batch_report.txt".to_string()
    } else {
        format!("{}_report.txt", stem)
    }
}

pub fn write_text_report(report: &CostReport, path: &Path, generated_at: NaiveDateTime) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    std::fs::write(path, render_text_report(report, generated_at))?;
    Ok(())
}

pub fn read_text_report(path: &Path) -> Result<ParsedReport> {
    let content = std::fs::read_to_string(path)?;
    parse_text_report(&content)
}
