//! Artifact emission for the computed summary tables.
//!
//! Supports per-table CSV files and a combined pretty-printed JSON report.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;
use tracing::debug;

use crate::report::DashboardReport;

/// Writes a table of rows to a CSV file with headers, replacing any
/// existing file at `path`.
pub fn write_table_csv<T: Serialize>(path: &Path, rows: &[T]) -> Result<()> {
    debug!(path = %path.display(), rows = rows.len(), "Writing CSV table");

    let mut writer = csv::Writer::from_path(path)
        .with_context(|| format!("failed to create {}", path.display()))?;

    for row in rows {
        writer.serialize(row)?;
    }
    writer.flush()?;

    Ok(())
}

/// Writes the full report as pretty-printed JSON.
pub fn write_report_json(path: &Path, report: &DashboardReport) -> Result<()> {
    debug!(path = %path.display(), "Writing report JSON");

    let json = serde_json::to_string_pretty(report)?;
    fs::write(path, json).with_context(|| format!("failed to write {}", path.display()))?;

    Ok(())
}

/// Renders the full report as pretty-printed JSON on stdout.
pub fn print_report_json(report: &DashboardReport) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(report)?);
    Ok(())
}
