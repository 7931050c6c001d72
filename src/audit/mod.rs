//! Page auditing - the core SEO signal extraction
//!
//! This module turns one page URL into one [`AuditRecord`], covering:
//! - Fetching the page and resolving its final URL
//! - Extracting singleton signals (title, meta tags, canonical, markers)
//! - Classifying anchors as internal or external
//! - Probing every external link's liveness with HEAD requests
//! - Timing an independent re-fetch of the page
//!
//! A page that cannot be audited produces an [`AuditOutcome::Skipped`] with
//! a reason instead of a record; the run continues with the next URL.

mod fetcher;
mod links;
mod page;
mod record;
mod runner;
mod signals;

pub use fetcher::{build_http_client, fetch_page, measure_load_time, FetchedPage};
pub use links::{
    classify_links, is_internal_href, page_authority, probe_external_links, BrokenLinks,
    LinkCounts,
};
pub use page::audit_page;
pub use record::AuditRecord;
pub use runner::{run_audit, RunSummary};
pub use signals::{classify_error_page, ErrorPageClass};

/// Result of auditing a single page
///
/// Replaces the original catch-log-continue flow with an explicit value:
/// callers aggregate `Audited` records in order and log `Skipped` entries.
#[derive(Debug)]
pub enum AuditOutcome {
    /// The page was fetched and a full record was produced
    Audited(Box<AuditRecord>),

    /// The page contributed no record
    Skipped { url: String, reason: SkipReason },
}

/// Why a page produced no audit record
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    /// The page fetch returned a status other than 200
    HttpStatus(u16),

    /// The page fetch failed at the transport level
    Transport(String),

    /// The page has no title element, which the 404-page classification
    /// requires; such pages are dropped rather than half-filled
    MissingTitle,
}

impl std::fmt::Display for SkipReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SkipReason::HttpStatus(status) => write!(f, "HTTP status {}", status),
            SkipReason::Transport(error) => write!(f, "transport error: {}", error),
            SkipReason::MissingTitle => write!(f, "page has no title element"),
        }
    }
}
