//! URL extraction from sitemap markup
//!
//! Sitemaps are parsed as tag soup rather than strict XML: the document is
//! handed to the HTML parser and every `<loc>` element's text is collected.
//! This tolerates namespace prefixes, stray declarations, and truncated
//! documents, at the cost of never reporting a parse error.

use scraper::{Html, Selector};

/// Extracts page URLs from sitemap content, preserving document order
///
/// Collects the trimmed text content of every `<loc>` element, one string
/// per element — an empty `<loc>` contributes an empty string, whose fetch
/// later fails and is skipped with a diagnostic. Content that yields no
/// `<loc>` elements (including outright garbage) produces an empty vector.
///
/// # Example
///
/// ```
/// use sitegrade::sitemap::extract_urls;
///
/// let sitemap = r#"<urlset>
///     <url><loc>https://example.com/</loc></url>
///     <url><loc>https://example.com/about</loc></url>
/// </urlset>"#;
/// let urls = extract_urls(sitemap);
/// assert_eq!(urls, vec!["https://example.com/", "https://example.com/about"]);
/// ```
pub fn extract_urls(sitemap_content: &str) -> Vec<String> {
    let document = Html::parse_document(sitemap_content);

    let loc_selector = match Selector::parse("loc") {
        Ok(s) => s,
        Err(_) => return Vec::new(),
    };

    document
        .select(&loc_selector)
        .map(|element| element.text().collect::<String>().trim().to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_urls_in_document_order() {
        let sitemap = r#"<?xml version="1.0" encoding="UTF-8"?>
<urlset xmlns="http://www.sitemaps.org/schemas/sitemap/0.9">
    <url><loc>https://example.com/</loc><lastmod>2024-01-01</lastmod></url>
    <url><loc>https://example.com/blog</loc></url>
    <url><loc>https://example.com/contact</loc></url>
</urlset>"#;

        let urls = extract_urls(sitemap);
        assert_eq!(
            urls,
            vec![
                "https://example.com/",
                "https://example.com/blog",
                "https://example.com/contact",
            ]
        );
    }

    #[test]
    fn test_extract_urls_counts_every_loc() {
        let entries: Vec<String> = (0..50)
            .map(|i| format!("<url><loc>https://example.com/page{}</loc></url>", i))
            .collect();
        let sitemap = format!("<urlset>{}</urlset>", entries.join(""));

        let urls = extract_urls(&sitemap);
        assert_eq!(urls.len(), 50);
        assert_eq!(urls[49], "https://example.com/page49");
    }

    #[test]
    fn test_extract_urls_trims_whitespace() {
        let sitemap = "<urlset><url><loc>\n  https://example.com/  \n</loc></url></urlset>";
        let urls = extract_urls(sitemap);
        assert_eq!(urls, vec!["https://example.com/"]);
    }

    #[test]
    fn test_garbage_input_yields_empty_list() {
        assert!(extract_urls("not markup at all %%%").is_empty());
        assert!(extract_urls("").is_empty());
    }

    #[test]
    fn test_loc_without_text_yields_empty_string() {
        let sitemap = "<urlset><url><loc></loc></url><url><loc>https://example.com/a</loc></url></urlset>";
        let urls = extract_urls(sitemap);
        assert_eq!(urls, vec!["", "https://example.com/a"]);
    }
}
