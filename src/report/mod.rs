//! CSV report writing
//!
//! The report is a UTF-8 comma-delimited file with a fixed 24-column
//! schema: one header row, then one row per successfully audited page, in
//! the order the pages appeared in the sitemap.

use crate::audit::AuditRecord;
use std::path::Path;
use thiserror::Error;

/// Errors that can occur while writing the report
#[derive(Debug, Error)]
pub enum ReportError {
    #[error("Failed to write report: {0}")]
    Csv(#[from] csv::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// The fixed report schema, in column order
pub const REPORT_COLUMNS: [&str; 24] = [
    "URL",
    "Title",
    "Meta Description",
    "H1",
    "Image Alt",
    "Meta Keywords",
    "Canonical Tag",
    "Structured Data",
    "Robots Meta Tag",
    "Open Graph Tags",
    "Twitter Card Tags",
    "Mobile Friendliness",
    "Page Load Time",
    "Internal Links",
    "External Links",
    "Broken External Links Count",
    "Broken External Links",
    "Heading Structure",
    "Keyword Density",
    "404 Error Page",
    "HTTPS Usage",
    "XML Sitemap",
    "Language Declaration",
    "Viewport Meta Tag",
];

/// Writes the audit report to the given path
///
/// Creates or truncates the destination file, writes the header row, then
/// one row per record in the order given.
///
/// # Arguments
///
/// * `path` - Report destination
/// * `records` - Audit records, in production order
pub fn write_report(path: &Path, records: &[AuditRecord]) -> Result<(), ReportError> {
    let mut writer = csv::Writer::from_path(path)?;

    writer.write_record(REPORT_COLUMNS)?;
    for record in records {
        writer.write_record(record.to_row())?;
    }
    writer.flush()?;

    Ok(())
}
