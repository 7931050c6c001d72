//! Sitemap retrieval and URL extraction
//!
//! The sitemap is the sole source of page URLs for an audit run. Fetching
//! and parsing never propagate errors: a failed fetch yields `None` with a
//! logged diagnostic, and unparseable content yields an empty URL list.

mod extract;
mod fetcher;

pub use extract::extract_urls;
pub use fetcher::fetch_sitemap;
