//! Singleton SEO signal extraction
//!
//! Every function here inspects an already-parsed document and returns one
//! signal. Presence-based signals return booleans; the auditor maps them to
//! the fixed marker strings the report schema uses. A signal tag that is
//! present but missing its value attribute counts as absent.

use scraper::{Html, Selector};

/// Classification of a page by the title-based 404 check
///
/// The check runs for every audited page, not only actual 404s: a page is
/// "User-friendly" exactly when its title reads "404 not found". `Unknown`
/// stands in for the title-less case, which the auditor turns into a page
/// skip instead of a crash.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorPageClass {
    /// Title equals "404 not found" (case-insensitive, trimmed)
    UserFriendly,
    /// Any other title
    NotFound,
    /// No title element exists, so the check cannot run
    Unknown,
}

impl ErrorPageClass {
    /// The report cell value, if the classification could be computed
    pub fn label(&self) -> Option<&'static str> {
        match self {
            ErrorPageClass::UserFriendly => Some("User-friendly"),
            ErrorPageClass::NotFound => Some("Not Found"),
            ErrorPageClass::Unknown => None,
        }
    }
}

/// Classifies a page's 404-friendliness from its title
pub fn classify_error_page(title: Option<&str>) -> ErrorPageClass {
    match title {
        Some(text) => {
            if text.trim().to_lowercase() == "404 not found" {
                ErrorPageClass::UserFriendly
            } else {
                ErrorPageClass::NotFound
            }
        }
        None => ErrorPageClass::Unknown,
    }
}

/// Extracts the first title element's trimmed text
///
/// Returns `Some("")` for a present-but-empty title; only a missing title
/// element yields `None`.
pub fn extract_title(document: &Html) -> Option<String> {
    select_first(document, "title").map(|element| collect_text(&element))
}

/// Extracts the first h1 element's trimmed text
pub fn extract_h1(document: &Html) -> Option<String> {
    select_first(document, "h1").map(|element| collect_text(&element))
}

/// Extracts the trimmed content of a named meta tag
pub fn extract_meta_content(document: &Html, name: &str) -> Option<String> {
    let selector = format!("meta[name='{}']", name);
    select_first(document, &selector)
        .and_then(|element| element.value().attr("content"))
        .map(|content| content.trim().to_string())
}

/// Extracts the trimmed href of the canonical link
pub fn extract_canonical(document: &Html) -> Option<String> {
    select_first(document, "link[rel~='canonical']")
        .and_then(|element| element.value().attr("href"))
        .map(|href| href.trim().to_string())
}

/// Collects every img element's alt text, joined with ", "
///
/// Images without an alt attribute contribute an empty entry, so a page
/// with alts "logo" and "" (or a missing alt) yields "logo, ". Alt text
/// containing the separator itself garbles the field; the schema accepts
/// that.
pub fn extract_image_alts(document: &Html) -> String {
    let selector = match Selector::parse("img") {
        Ok(s) => s,
        Err(_) => return String::new(),
    };

    document
        .select(&selector)
        .map(|img| img.value().attr("alt").unwrap_or("").to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

/// True when a JSON-LD structured-data script is present
pub fn has_structured_data(document: &Html) -> bool {
    select_first(document, "script[type='application/ld+json']").is_some()
}

/// True when an Open-Graph title meta is present
pub fn has_open_graph_title(document: &Html) -> bool {
    select_first(document, "meta[property='og:title']").is_some()
}

/// True when a Twitter-card title meta is present
pub fn has_twitter_card_title(document: &Html) -> bool {
    select_first(document, "meta[name='twitter:title']").is_some()
}

/// True when a sitemap-relation link is present
pub fn has_sitemap_link(document: &Html) -> bool {
    select_first(document, "link[rel~='sitemap']").is_some()
}

/// True when a viewport meta is present
pub fn has_viewport_meta(document: &Html) -> bool {
    select_first(document, "meta[name='viewport']").is_some()
}

/// True when any h1..h6 element is present
pub fn has_any_heading(document: &Html) -> bool {
    select_first(document, "h1, h2, h3, h4, h5, h6").is_some()
}

/// True when the html root declares a non-empty lang attribute
pub fn language_declared(document: &Html) -> bool {
    select_first(document, "html")
        .and_then(|element| element.value().attr("lang"))
        .map(|lang| !lang.is_empty())
        .unwrap_or(false)
}

fn select_first<'a>(document: &'a Html, selector: &str) -> Option<scraper::ElementRef<'a>> {
    let selector = Selector::parse(selector).ok()?;
    document.select(&selector).next()
}

fn collect_text(element: &scraper::ElementRef<'_>) -> String {
    element.text().collect::<String>().trim().to_string()
}
