//! Sitegrade: a sitemap-driven SEO report generator
//!
//! This crate fetches a site's XML sitemap, audits every listed page for a
//! fixed set of on-page SEO signals (titles, meta tags, headings, link
//! counts, broken external links, load time), and writes the results to a
//! 24-column CSV report.

pub mod audit;
pub mod config;
pub mod report;
pub mod sitemap;

use thiserror::Error;

/// Main error type for Sitegrade operations
#[derive(Debug, Error)]
pub enum AuditError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Failed to fetch sitemap from {url}")]
    SitemapFetch { url: String },

    #[error("Report error: {0}")]
    Report(#[from] report::ReportError),

    #[error("HTTP client error: {0}")]
    Reqwest(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Configuration-specific errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation error: {0}")]
    Validation(String),
}

/// Result type alias for Sitegrade operations
pub type Result<T> = std::result::Result<T, AuditError>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

// Re-export commonly used types
pub use audit::{audit_page, run_audit, AuditOutcome, AuditRecord, RunSummary, SkipReason};
pub use config::Config;
pub use report::{write_report, REPORT_COLUMNS};
pub use sitemap::{extract_urls, fetch_sitemap};
