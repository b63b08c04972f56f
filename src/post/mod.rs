//! Post types: metadata, frontmatter extraction, and parsed records.

pub mod frontmatter;
mod meta;

pub use meta::PostMeta;

use crate::core::{Lang, UrlPath};
use crate::utils::date::DateTimeUtc;

/// A JSON object map for storing arbitrary metadata fields.
pub type JsonMap = serde_json::Map<String, serde_json::Value>;

/// One parsed document from the content store.
///
/// `slug` is stored without the `.md` extension; `translation_key` is
/// guaranteed present (records without one never get this far).
#[derive(Debug, Clone)]
pub struct PostRecord {
    pub lang: Lang,
    pub slug: String,
    pub translation_key: String,
    pub meta: PostMeta,
}

impl PostRecord {
    /// Canonical site-root path for this record.
    pub fn url_path(&self) -> UrlPath {
        UrlPath::for_post(self.lang, &self.slug)
    }

    /// Store key this record was parsed from, for diagnostics.
    pub fn source_label(&self) -> String {
        format!("{}:{}.md", self.lang, self.slug)
    }

    /// Last-modified date for sitemap output, from the frontmatter `date`.
    ///
    /// Unparseable dates are dropped here; the `check` command reports them.
    pub fn lastmod(&self) -> Option<String> {
        let date = self.meta.date.as_deref()?;
        DateTimeUtc::parse(date).map(DateTimeUtc::to_lastmod)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(lang: Lang, slug: &str, key: &str) -> PostRecord {
        PostRecord {
            lang,
            slug: slug.to_string(),
            translation_key: key.to_string(),
            meta: PostMeta::default(),
        }
    }

    #[test]
    fn test_url_path_per_language() {
        assert_eq!(
            record(Lang::Cs, "hello-world", "k1").url_path(),
            "/blog/hello-world"
        );
        assert_eq!(
            record(Lang::En, "hello-world", "k1").url_path(),
            "/en/blog/hello-world"
        );
    }

    #[test]
    fn test_lastmod_from_date() {
        let mut rec = record(Lang::Cs, "a", "k1");
        rec.meta.date = Some("2025-01-03".to_string());
        assert_eq!(rec.lastmod().as_deref(), Some("2025-01-03"));
    }

    #[test]
    fn test_lastmod_invalid_date_dropped() {
        let mut rec = record(Lang::Cs, "a", "k1");
        rec.meta.date = Some("3.1.2025".to_string());
        assert_eq!(rec.lastmod(), None);
    }

    #[test]
    fn test_lastmod_absent_date() {
        assert_eq!(record(Lang::Cs, "a", "k1").lastmod(), None);
    }

    #[test]
    fn test_source_label() {
        assert_eq!(
            record(Lang::En, "hello-world", "k1").source_label(),
            "en:hello-world.md"
        );
    }
}
