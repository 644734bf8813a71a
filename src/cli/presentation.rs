//! Presentation: run report formatters (text table, JSON).

use crate::error::IndexError;
use crate::readme::WriteMode;
use crate::run::{PathReport, PathStatus, RunReport};
use comfy_table::Table;
use owo_colors::OwoColorize;

/// Human-readable report: a table of every path that was not skipped,
/// followed by failures with their OS error and a one-line summary.
pub fn format_report_text(report: &RunReport, color: bool) -> String {
    let rows: Vec<&PathReport> = report
        .directories
        .iter()
        .chain(std::iter::once(&report.root_readme))
        .filter(|r| !matches!(r.status, PathStatus::Skipped | PathStatus::Disabled))
        .collect();

    let mut out = String::new();
    if rows.is_empty() {
        out.push_str("No README files to update.");
    } else {
        let mut table = Table::new();
        table.load_preset(comfy_table::presets::UTF8_FULL);
        table.set_header(vec!["Path", "Status"]);
        for r in &rows {
            table.add_row(vec![r.path.as_str(), r.status.label()]);
        }
        out.push_str(&table.to_string());
    }

    let failures = report.failures();
    if !failures.is_empty() {
        let header = format!("Failures ({}):", failures.len());
        if color {
            out.push_str(&format!("\n\n{}", header.red().bold()));
        } else {
            out.push_str(&format!("\n\n{}", header));
        }
        for f in &failures {
            if let PathStatus::Failed { error, .. } = &f.status {
                out.push_str(&format!("\n  - {}: {}", f.path, error));
            }
        }
    }

    out.push_str("\n\n");
    let summary = summary_line(report);
    if !color {
        out.push_str(&summary);
    } else if report.is_clean() {
        out.push_str(&summary.green().to_string());
    } else {
        out.push_str(&summary.yellow().to_string());
    }
    out
}

/// Machine-readable report.
pub fn format_report_json(report: &RunReport) -> Result<String, IndexError> {
    serde_json::to_string_pretty(report).map_err(|e| IndexError::Config(e.to_string()))
}

fn summary_line(report: &RunReport) -> String {
    let changed = report.changed().len();
    let failed = report.failures().len();
    let verb = match report.mode {
        WriteMode::Write => "updated",
        WriteMode::Check => "stale",
    };
    format!(
        "{} directories scanned, {} {}, {} failed ({} ms)",
        report.directories.len(),
        changed,
        verb,
        failed,
        report.duration_ms
    )
}
