//! Sitemap entry output types.
//!
//! Field names are an external compatibility surface: `loc`,
//! `alternatives[].hreflang`, `alternatives[].href` and the `_sitemap`
//! partition tag are consumed verbatim by sitemap-index generators.

use serde::Serialize;

use crate::core::UrlPath;

/// One alternate-language link for a sitemap entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Alternative {
    /// Locale tag (`cs-CZ`, `en-US`) or `x-default`.
    pub hreflang: &'static str,
    /// Site-root path of the alternate document.
    pub href: UrlPath,
}

impl Alternative {
    pub fn new(hreflang: &'static str, href: UrlPath) -> Self {
        Self { hreflang, href }
    }
}

/// One sitemap entry: a canonical location plus its translations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SitemapEntry {
    /// Canonical site-root path of the document.
    pub loc: UrlPath,
    /// Sibling-language links, then an optional `x-default`.
    pub alternatives: Vec<Alternative>,
    /// Per-locale sitemap file this entry belongs to.
    #[serde(rename = "_sitemap")]
    pub partition: &'static str,
    /// W3C date from the frontmatter `date`, if present and valid.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lastmod: Option<String>,
}
