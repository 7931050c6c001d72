//! The per-page audit record

/// One row of computed SEO signals for a single page
///
/// Field order mirrors the report column order. Optional fields serialize
/// as empty cells when absent; marker fields hold fixed strings such as
/// "Implemented" or "Present" only when the signal was detected.
#[derive(Debug, Clone, Default)]
pub struct AuditRecord {
    /// The audited page URL, as listed in the sitemap
    pub url: String,

    /// First title element's trimmed text
    pub title: Option<String>,

    /// Content of `<meta name="description">`
    pub meta_description: Option<String>,

    /// First h1 element's trimmed text
    pub h1: Option<String>,

    /// Every img element's alt text, joined with ", " (missing alt
    /// attributes contribute an empty entry)
    pub image_alt: String,

    /// Content of `<meta name="keywords">`
    pub meta_keywords: Option<String>,

    /// Href of `<link rel="canonical">`
    pub canonical_tag: Option<String>,

    /// "Implemented" when a JSON-LD script is present
    pub structured_data: Option<String>,

    /// Content of `<meta name="robots">`
    pub robots_meta_tag: Option<String>,

    /// "Implemented" when an og:title meta is present
    pub open_graph_tags: Option<String>,

    /// "Implemented" when a twitter:title meta is present
    pub twitter_card_tags: Option<String>,

    /// Always absent; no real mobile-friendliness check exists
    pub mobile_friendliness: Option<String>,

    /// Wall-clock seconds for an independent re-fetch, rounded to two
    /// decimals; absent when that fetch failed or returned non-200
    pub page_load_time: Option<f64>,

    /// Count of anchors classified as internal
    pub internal_links: usize,

    /// Count of anchors classified as external
    pub external_links: usize,

    /// Count of external anchors whose liveness probe failed
    pub broken_external_links_count: usize,

    /// Hrefs of broken external links, in document order
    pub broken_external_links: Vec<String>,

    /// "Valid" when any h1..h6 element is present
    pub heading_structure: Option<String>,

    /// Constant placeholder; no density computation is performed
    pub keyword_density: String,

    /// "User-friendly" or "Not Found" per the title-based 404 check
    pub error_404_page: String,

    /// "Implemented" when the resolved URL uses https
    pub https_usage: Option<String>,

    /// "Present" when a sitemap-relation link is present
    pub xml_sitemap: Option<String>,

    /// "Declared" when the html root carries a non-empty lang attribute
    pub language_declaration: Option<String>,

    /// "Implemented" when a viewport meta is present
    pub viewport_meta_tag: Option<String>,
}

impl AuditRecord {
    /// Serializes the record into the 24 report cells, in column order
    pub fn to_row(&self) -> Vec<String> {
        fn cell(value: &Option<String>) -> String {
            value.clone().unwrap_or_default()
        }

        vec![
            self.url.clone(),
            cell(&self.title),
            cell(&self.meta_description),
            cell(&self.h1),
            self.image_alt.clone(),
            cell(&self.meta_keywords),
            cell(&self.canonical_tag),
            cell(&self.structured_data),
            cell(&self.robots_meta_tag),
            cell(&self.open_graph_tags),
            cell(&self.twitter_card_tags),
            cell(&self.mobile_friendliness),
            self.page_load_time.map(|t| t.to_string()).unwrap_or_default(),
            self.internal_links.to_string(),
            self.external_links.to_string(),
            self.broken_external_links_count.to_string(),
            self.broken_external_links.join(", "),
            cell(&self.heading_structure),
            self.keyword_density.clone(),
            self.error_404_page.clone(),
            cell(&self.https_usage),
            cell(&self.xml_sitemap),
            cell(&self.language_declaration),
            cell(&self.viewport_meta_tag),
        ]
    }
}
