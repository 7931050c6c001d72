//! Audit run orchestration
//!
//! Wires the pipeline together: fetch the sitemap, extract its URLs, audit
//! each page in order, write the report. Only a sitemap fetch failure is
//! fatal; everything downstream degrades (empty URL list, skipped pages)
//! and still produces a report file.

use crate::audit::fetcher::build_http_client;
use crate::audit::page::audit_page;
use crate::audit::AuditOutcome;
use crate::config::Config;
use crate::report::write_report;
use crate::sitemap::{extract_urls, fetch_sitemap};
use crate::AuditError;
use std::path::Path;
use std::time::Instant;

/// Counters for a completed audit run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    /// URLs listed in the sitemap
    pub urls_listed: usize,

    /// Pages that produced a report row
    pub pages_audited: usize,

    /// Pages that were skipped with a diagnostic
    pub pages_skipped: usize,
}

/// Runs a full sitemap audit and writes the CSV report
///
/// # Failure semantics
///
/// * Sitemap fetch failure is fatal: the error is returned and no report
///   file is produced.
/// * A sitemap that parses to zero URLs still produces a header-only
///   report.
/// * Per-page failures are logged and skipped; the run continues.
///
/// # Arguments
///
/// * `config` - Client and audit configuration
/// * `sitemap_url` - The sitemap to crawl
/// * `output` - Report destination; created or truncated, parent
///   directories created when missing
pub async fn run_audit(
    config: &Config,
    sitemap_url: &str,
    output: &Path,
) -> Result<RunSummary, AuditError> {
    let client = build_http_client(&config.client)?;
    let start = Instant::now();

    tracing::info!("Fetching sitemap: {}", sitemap_url);
    let sitemap = fetch_sitemap(&client, sitemap_url)
        .await
        .ok_or_else(|| AuditError::SitemapFetch {
            url: sitemap_url.to_string(),
        })?;

    let urls = extract_urls(&sitemap);
    if urls.is_empty() {
        tracing::warn!("Sitemap yielded no URLs; the report will contain only the header row");
    } else {
        tracing::info!("Sitemap lists {} URLs", urls.len());
    }

    let mut records = Vec::new();
    let mut pages_skipped = 0;

    for url in &urls {
        match audit_page(&client, url, config.audit.probe_concurrency).await {
            AuditOutcome::Audited(record) => {
                tracing::info!("SEO audit passed for URL: {}", url);
                records.push(*record);
            }
            AuditOutcome::Skipped { url, reason } => {
                tracing::warn!("Skipping URL {}: {}", url, reason);
                pages_skipped += 1;
            }
        }
    }

    if let Some(parent) = output.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    write_report(output, &records)?;

    let summary = RunSummary {
        urls_listed: urls.len(),
        pages_audited: records.len(),
        pages_skipped,
    };

    tracing::info!(
        "Audit complete: {}/{} pages audited ({} skipped) in {:?}",
        summary.pages_audited,
        summary.urls_listed,
        summary.pages_skipped,
        start.elapsed()
    );

    Ok(summary)
}
