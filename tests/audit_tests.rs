//! Integration tests for the audit pipeline
//!
//! These tests use wiremock to stand in for the audited site (and a second
//! server for external links) and run the full
//! sitemap -> audit -> report cycle end-to-end.

use sitegrade::config::Config;
use sitegrade::{run_audit, AuditError, REPORT_COLUMNS};
use std::path::Path;
use tempfile::TempDir;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn read_rows(path: &Path) -> Vec<Vec<String>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .from_path(path)
        .unwrap();
    reader
        .records()
        .map(|r| r.unwrap().iter().map(str::to_string).collect())
        .collect()
}

fn column(name: &str) -> usize {
    REPORT_COLUMNS.iter().position(|c| *c == name).unwrap()
}

async fn mount_sitemap(server: &MockServer, urls: &[String]) {
    let entries: Vec<String> = urls
        .iter()
        .map(|u| format!("<url><loc>{}</loc></url>", u))
        .collect();
    let body = format!(
        r#"<?xml version="1.0" encoding="UTF-8"?><urlset>{}</urlset>"#,
        entries.join("")
    );
    Mock::given(method("GET"))
        .and(path("/sitemap.xml"))
        .respond_with(ResponseTemplate::new(200).set_body_string(body))
        .mount(server)
        .await;
}

async fn mount_page(server: &MockServer, route: &str, body: String) {
    Mock::given(method("GET"))
        .and(path(route.to_string()))
        .respond_with(ResponseTemplate::new(200).set_body_string(body))
        .mount(server)
        .await;
}

#[tokio::test]
async fn test_full_run_produces_ordered_rows() {
    let site = MockServer::start().await;
    let external = MockServer::start().await;

    // One live and one dead external target
    Mock::given(method("HEAD"))
        .and(path("/alive"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&external)
        .await;
    Mock::given(method("HEAD"))
        .and(path("/dead"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&external)
        .await;

    mount_page(
        &site,
        "/first",
        format!(
            r#"<html lang="en"><head><title>First Page</title>
            <meta name="description" content="The first page.">
            <meta name="viewport" content="width=device-width">
            </head><body>
            <h1>First</h1>
            <img src="a.png" alt="logo"><img src="b.png">
            <a href="/about">About</a>
            <a href="{site}/contact">Contact</a>
            <a href="{ext}/alive">Partner</a>
            <a href="{ext}/dead">Gone</a>
            </body></html>"#,
            site = site.uri(),
            ext = external.uri()
        ),
    )
    .await;

    mount_page(
        &site,
        "/second",
        "<html><head><title>Second Page</title></head><body><p>plain</p></body></html>"
            .to_string(),
    )
    .await;

    mount_sitemap(
        &site,
        &[
            format!("{}/first", site.uri()),
            format!("{}/second", site.uri()),
        ],
    )
    .await;

    let dir = TempDir::new().unwrap();
    let out = dir.path().join("report.csv");

    let summary = run_audit(
        &Config::default(),
        &format!("{}/sitemap.xml", site.uri()),
        &out,
    )
    .await
    .unwrap();

    assert_eq!(summary.urls_listed, 2);
    assert_eq!(summary.pages_audited, 2);
    assert_eq!(summary.pages_skipped, 0);

    let rows = read_rows(&out);
    assert_eq!(rows.len(), 3);
    assert_eq!(rows[0], REPORT_COLUMNS.to_vec());

    // Sitemap order is preserved
    assert_eq!(rows[1][column("URL")], format!("{}/first", site.uri()));
    assert_eq!(rows[2][column("URL")], format!("{}/second", site.uri()));

    let first = &rows[1];
    assert_eq!(first[column("Title")], "First Page");
    assert_eq!(first[column("Meta Description")], "The first page.");
    assert_eq!(first[column("H1")], "First");
    assert_eq!(first[column("Image Alt")], "logo, ");
    assert_eq!(first[column("Internal Links")], "2");
    assert_eq!(first[column("External Links")], "2");
    assert_eq!(first[column("Broken External Links Count")], "1");
    assert_eq!(
        first[column("Broken External Links")],
        format!("{}/dead", external.uri())
    );
    assert_eq!(first[column("Heading Structure")], "Valid");
    assert_eq!(first[column("Keyword Density")], "Optimal");
    assert_eq!(first[column("404 Error Page")], "Not Found");
    assert_eq!(first[column("Mobile Friendliness")], "");
    assert_eq!(first[column("HTTPS Usage")], "");
    assert_eq!(first[column("Language Declaration")], "Declared");
    assert_eq!(first[column("Viewport Meta Tag")], "Implemented");
    assert!(!first[column("Page Load Time")].is_empty());

    let second = &rows[2];
    assert_eq!(second[column("Heading Structure")], "");
    assert_eq!(second[column("Internal Links")], "0");
    assert_eq!(second[column("Image Alt")], "");
}

#[tokio::test]
async fn test_failed_page_contributes_no_row() {
    let site = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/broken"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&site)
        .await;
    mount_page(
        &site,
        "/ok",
        "<html><head><title>OK</title></head><body></body></html>".to_string(),
    )
    .await;

    mount_sitemap(
        &site,
        &[
            format!("{}/broken", site.uri()),
            format!("{}/ok", site.uri()),
        ],
    )
    .await;

    let dir = TempDir::new().unwrap();
    let out = dir.path().join("report.csv");

    let summary = run_audit(
        &Config::default(),
        &format!("{}/sitemap.xml", site.uri()),
        &out,
    )
    .await
    .unwrap();

    assert_eq!(summary.urls_listed, 2);
    assert_eq!(summary.pages_audited, 1);
    assert_eq!(summary.pages_skipped, 1);

    let rows = read_rows(&out);
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[1][column("URL")], format!("{}/ok", site.uri()));
}

#[tokio::test]
async fn test_single_500_page_yields_header_only_report() {
    let site = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/only"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&site)
        .await;
    mount_sitemap(&site, &[format!("{}/only", site.uri())]).await;

    let dir = TempDir::new().unwrap();
    let out = dir.path().join("report.csv");

    let summary = run_audit(
        &Config::default(),
        &format!("{}/sitemap.xml", site.uri()),
        &out,
    )
    .await
    .unwrap();

    assert_eq!(summary.pages_audited, 0);

    let rows = read_rows(&out);
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0], REPORT_COLUMNS.to_vec());
}

#[tokio::test]
async fn test_sitemap_fetch_failure_is_fatal_and_writes_nothing() {
    let site = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/sitemap.xml"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&site)
        .await;

    let dir = TempDir::new().unwrap();
    let out = dir.path().join("report.csv");

    let result = run_audit(
        &Config::default(),
        &format!("{}/sitemap.xml", site.uri()),
        &out,
    )
    .await;

    assert!(matches!(result, Err(AuditError::SitemapFetch { .. })));
    assert!(!out.exists());
}

#[tokio::test]
async fn test_unparseable_sitemap_degrades_to_header_only() {
    let site = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/sitemap.xml"))
        .respond_with(ResponseTemplate::new(200).set_body_string("totally not a sitemap"))
        .mount(&site)
        .await;

    let dir = TempDir::new().unwrap();
    let out = dir.path().join("report.csv");

    let summary = run_audit(
        &Config::default(),
        &format!("{}/sitemap.xml", site.uri()),
        &out,
    )
    .await
    .unwrap();

    assert_eq!(summary.urls_listed, 0);
    assert_eq!(read_rows(&out).len(), 1);
}

#[tokio::test]
async fn test_titleless_page_is_skipped() {
    let site = MockServer::start().await;

    mount_page(
        &site,
        "/untitled",
        "<html><head></head><body><h1>Heading only</h1></body></html>".to_string(),
    )
    .await;
    mount_sitemap(&site, &[format!("{}/untitled", site.uri())]).await;

    let dir = TempDir::new().unwrap();
    let out = dir.path().join("report.csv");

    let summary = run_audit(
        &Config::default(),
        &format!("{}/sitemap.xml", site.uri()),
        &out,
    )
    .await
    .unwrap();

    assert_eq!(summary.pages_audited, 0);
    assert_eq!(summary.pages_skipped, 1);
    assert_eq!(read_rows(&out).len(), 1);
}

#[tokio::test]
async fn test_empty_loc_entry_counts_as_listed_and_skipped() {
    let site = MockServer::start().await;

    mount_page(
        &site,
        "/page",
        "<html><head><title>Page</title></head><body></body></html>".to_string(),
    )
    .await;
    mount_sitemap(&site, &[String::new(), format!("{}/page", site.uri())]).await;

    let dir = TempDir::new().unwrap();
    let out = dir.path().join("report.csv");

    let summary = run_audit(
        &Config::default(),
        &format!("{}/sitemap.xml", site.uri()),
        &out,
    )
    .await
    .unwrap();

    // The empty entry is listed, fails its fetch, and is skipped
    assert_eq!(summary.urls_listed, 2);
    assert_eq!(summary.pages_audited, 1);
    assert_eq!(summary.pages_skipped, 1);

    let rows = read_rows(&out);
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[1][column("URL")], format!("{}/page", site.uri()));
}

#[tokio::test]
async fn test_report_parent_directory_is_created() {
    let site = MockServer::start().await;

    mount_page(
        &site,
        "/page",
        "<html><head><title>Page</title></head><body></body></html>".to_string(),
    )
    .await;
    mount_sitemap(&site, &[format!("{}/page", site.uri())]).await;

    let dir = TempDir::new().unwrap();
    let out = dir.path().join("reports").join("seo_results.csv");

    run_audit(
        &Config::default(),
        &format!("{}/sitemap.xml", site.uri()),
        &out,
    )
    .await
    .unwrap();

    assert!(out.exists());
}
