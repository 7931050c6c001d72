//! Anchor classification and external-link liveness probing
//!
//! Classification is a literal prefix test against the page's own
//! authority (`host[:port]` of the resolved response URL), not URL
//! normalization. Relative hrefs without a leading `/` and
//! protocol-relative `//host/path` hrefs therefore land in the external
//! bucket; the report schema is defined around exactly this test, so it
//! must not be "fixed".

use futures::{stream, StreamExt};
use reqwest::{Client, StatusCode};
use scraper::{Html, Selector};
use url::Url;

/// Anchors of one page, split by the internal/external test
#[derive(Debug, Default, PartialEq, Eq)]
pub struct LinkCounts {
    /// Number of anchors classified as internal
    pub internal: usize,

    /// Hrefs of anchors classified as external, in document order.
    /// Empty hrefs are counted here but never probed.
    pub external_hrefs: Vec<String>,
}

/// Aggregate result of probing a page's external links
#[derive(Debug, Default, PartialEq, Eq)]
pub struct BrokenLinks {
    /// Number of probes that returned non-200 or errored
    pub count: usize,

    /// The broken hrefs, in document order
    pub urls: Vec<String>,
}

/// Derives the authority string used for link classification
///
/// Returns `host` or `host:port` of the resolved response URL; `None` for
/// URLs without a host.
pub fn page_authority(url: &Url) -> Option<String> {
    let host = url.host_str()?;
    Some(match url.port() {
        Some(port) => format!("{}:{}", host, port),
        None => host.to_string(),
    })
}

/// Tests whether an href counts as internal to the given authority
///
/// Internal means: starts with a single `/`, or with
/// `http://<authority>` / `https://<authority>`. Everything else is
/// external.
pub fn is_internal_href(href: &str, authority: &str) -> bool {
    if let Some(rest) = href.strip_prefix('/') {
        return !rest.starts_with('/');
    }

    for scheme in ["https://", "http://"] {
        if let Some(rest) = href.strip_prefix(scheme) {
            if rest.starts_with(authority) {
                return true;
            }
        }
    }

    false
}

/// Classifies every anchor carrying an href attribute
///
/// Anchors without an href are ignored entirely, matching the original
/// report's counting.
pub fn classify_links(document: &Html, authority: &str) -> LinkCounts {
    let selector = match Selector::parse("a[href]") {
        Ok(s) => s,
        Err(_) => return LinkCounts::default(),
    };

    let mut counts = LinkCounts::default();
    for anchor in document.select(&selector) {
        let href = anchor.value().attr("href").unwrap_or("");
        if is_internal_href(href, authority) {
            counts.internal += 1;
        } else {
            counts.external_hrefs.push(href.to_string());
        }
    }

    counts
}

/// Probes every non-empty external href with a HEAD request
///
/// A probe counts as broken on any non-200 status or transport error; one
/// failing probe never aborts the rest. Probes run through an ordered pool
/// of `concurrency` requests, so the broken list keeps document order
/// regardless of completion order.
pub async fn probe_external_links(
    client: &Client,
    hrefs: &[String],
    concurrency: usize,
) -> BrokenLinks {
    let probes = hrefs
        .iter()
        .filter(|href| !href.is_empty())
        .cloned()
        .map(|href| {
            let client = client.clone();
            async move {
                let alive = match client.head(&href).send().await {
                    Ok(response) => response.status() == StatusCode::OK,
                    Err(e) => {
                        tracing::debug!("Probe failed for {}: {}", href, e);
                        false
                    }
                };
                (href, alive)
            }
        });

    let results: Vec<(String, bool)> = stream::iter(probes)
        .buffered(concurrency.max(1))
        .collect()
        .await;

    let mut broken = BrokenLinks::default();
    for (href, alive) in results {
        if !alive {
            broken.count += 1;
            broken.urls.push(href);
        }
    }

    broken
}
