//! HTTP fetching for page audits
//!
//! This module builds the shared HTTP client and performs the two kinds of
//! page-level GET the audit needs: the main fetch whose body is parsed, and
//! the independent timed re-fetch behind the Page Load Time column. The
//! re-fetch duplicates work on purpose; the column measures a cold request,
//! not a cache hit.

use crate::audit::SkipReason;
use crate::config::ClientConfig;
use reqwest::{Client, StatusCode};
use std::time::{Duration, Instant};
use url::Url;

/// A successfully fetched page, ready for parsing
#[derive(Debug)]
pub struct FetchedPage {
    /// Final URL after redirects
    pub final_url: Url,

    /// Page body content
    pub body: String,
}

/// Builds the HTTP client used for all audit requests
///
/// Redirects are followed with the default policy. No timeout is applied
/// unless the configuration sets one, so an unresponsive host can stall a
/// run indefinitely.
///
/// # Arguments
///
/// * `config` - The client configuration
///
/// # Returns
///
/// * `Ok(Client)` - Successfully built HTTP client
/// * `Err(reqwest::Error)` - Failed to build client
pub fn build_http_client(config: &ClientConfig) -> Result<Client, reqwest::Error> {
    let mut builder = Client::builder().gzip(true).brotli(true);

    if let Some(agent) = &config.user_agent {
        builder = builder.user_agent(agent.clone());
    }

    if let Some(secs) = config.request_timeout_secs {
        builder = builder.timeout(Duration::from_secs(secs));
    }

    builder.build()
}

/// Fetches a page for auditing
///
/// Only a 200 response yields a page; any other status or transport error
/// becomes a [`SkipReason`] for the caller to log.
///
/// # Arguments
///
/// * `client` - The HTTP client to use
/// * `url` - The page URL to fetch
pub async fn fetch_page(client: &Client, url: &str) -> Result<FetchedPage, SkipReason> {
    let response = match client.get(url).send().await {
        Ok(response) => response,
        Err(e) => return Err(SkipReason::Transport(e.to_string())),
    };

    let status = response.status();
    if status != StatusCode::OK {
        return Err(SkipReason::HttpStatus(status.as_u16()));
    }

    let final_url = response.url().clone();

    match response.text().await {
        Ok(body) => Ok(FetchedPage { final_url, body }),
        Err(e) => Err(SkipReason::Transport(e.to_string())),
    }
}

/// Measures the page load time with an independent re-fetch
///
/// Issues a fresh GET for the same URL, reads the full body, and returns
/// the wall-clock duration in seconds rounded to two decimal places.
/// Returns `None` when the fetch errors or returns a non-200 status.
pub async fn measure_load_time(client: &Client, url: &str) -> Option<f64> {
    let start = Instant::now();

    let response = match client.get(url).send().await {
        Ok(response) => response,
        Err(e) => {
            tracing::warn!("Error calculating page load time for URL {}: {}", url, e);
            return None;
        }
    };

    let status = response.status();
    if status != StatusCode::OK {
        return None;
    }

    if let Err(e) = response.bytes().await {
        tracing::warn!("Error calculating page load time for URL {}: {}", url, e);
        return None;
    }

    Some(round_to_hundredths(start.elapsed().as_secs_f64()))
}

fn round_to_hundredths(seconds: f64) -> f64 {
    (seconds * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[test]
    fn test_build_http_client_defaults() {
        let client = build_http_client(&ClientConfig::default());
        assert!(client.is_ok());
    }

    #[test]
    fn test_build_http_client_with_options() {
        let config = ClientConfig {
            user_agent: Some("sitegrade-test/0.1".to_string()),
            request_timeout_secs: Some(5),
        };
        assert!(build_http_client(&config).is_ok());
    }

    #[test]
    fn test_round_to_hundredths() {
        assert_eq!(round_to_hundredths(1.23456), 1.23);
        assert_eq!(round_to_hundredths(1.235), 1.24);
        assert_eq!(round_to_hundredths(0.5), 0.5);
        assert_eq!(round_to_hundredths(0.0), 0.0);
    }

    #[tokio::test]
    async fn test_fetch_page_non_200_is_skip() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/missing"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;

        let client = Client::new();
        let result = fetch_page(&client, &format!("{}/missing", server.uri())).await;
        assert_eq!(result.unwrap_err(), SkipReason::HttpStatus(404));
    }

    #[tokio::test]
    async fn test_fetch_page_transport_error_is_skip() {
        let client = Client::new();
        let result = fetch_page(&client, "http://127.0.0.1:1/").await;
        assert!(matches!(result.unwrap_err(), SkipReason::Transport(_)));
    }

    #[tokio::test]
    async fn test_measure_load_time_only_on_200() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/ok"))
            .respond_with(ResponseTemplate::new(200).set_body_string("body"))
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/gone"))
            .respond_with(ResponseTemplate::new(410))
            .mount(&server)
            .await;

        let client = Client::new();
        let timed = measure_load_time(&client, &format!("{}/ok", server.uri())).await;
        assert!(timed.is_some());
        assert!(timed.unwrap() >= 0.0);

        let timed = measure_load_time(&client, &format!("{}/gone", server.uri())).await;
        assert!(timed.is_none());
    }
}
