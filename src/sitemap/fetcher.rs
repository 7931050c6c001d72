//! HTTP fetcher for sitemap documents

use reqwest::{Client, StatusCode};

/// Fetches the raw sitemap content from the given URL
///
/// Performs a single GET request. The body is returned only on a 200
/// response; any other status or transport failure is logged and converted
/// to `None`. This function never propagates an error to the caller.
///
/// # Arguments
///
/// * `client` - The HTTP client to use
/// * `url` - The sitemap URL
///
/// # Returns
///
/// * `Some(String)` - The sitemap body
/// * `None` - The sitemap could not be fetched
pub async fn fetch_sitemap(client: &Client, url: &str) -> Option<String> {
    let response = match client.get(url).send().await {
        Ok(response) => response,
        Err(e) => {
            tracing::error!("Error fetching sitemap {}: {}", url, e);
            return None;
        }
    };

    let status = response.status();
    if status != StatusCode::OK {
        tracing::error!("Failed to fetch sitemap {}. Status code: {}", url, status);
        return None;
    }

    match response.text().await {
        Ok(body) => Some(body),
        Err(e) => {
            tracing::error!("Error reading sitemap body from {}: {}", url, e);
            None
        }
    }
}
