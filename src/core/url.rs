//! Site-root URL paths.
//!
//! Paths stay decoded (human-readable, Czech diacritics intact) inside
//! the pipeline and are percent-encoded only at the XML boundary.

use std::borrow::Borrow;
use std::sync::Arc;

use percent_encoding::{AsciiSet, CONTROLS, utf8_percent_encode};
use serde::Serialize;

use super::Lang;

/// Characters the sitemap protocol cannot carry raw. `/` is absent on
/// purpose so whole paths encode in one pass; hyphens and dots stay
/// readable.
const XML_UNSAFE: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'<')
    .add(b'>')
    .add(b'`')
    .add(b'#')
    .add(b'?')
    .add(b'%')
    .add(b'&');

/// Decoded site-root URL path.
///
/// Always starts with `/` and never ends with one (except the root
/// itself). Cheap to clone; the same path is shared between an entry's
/// `loc` and its siblings' alternate lists.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct UrlPath(Arc<str>);

impl UrlPath {
    /// Canonical path for a post in the given language.
    ///
    /// Strips a trailing `.md` from the slug if present, then applies the
    /// language prefix: `/blog/<slug>` for Czech, `/en/blog/<slug>` for
    /// English.
    pub fn for_post(lang: Lang, slug: &str) -> Self {
        let slug = slug.strip_suffix(".md").unwrap_or(slug);
        Self(Arc::from(format!("{}/{}", lang.url_prefix(), slug)))
    }

    /// Build from an already-decoded string, normalizing slashes at both
    /// ends.
    pub fn from_path(decoded: &str) -> Self {
        let trimmed = decoded.trim().trim_end_matches('/');
        if trimmed.is_empty() {
            Self(Arc::from("/"))
        } else if trimmed.starts_with('/') {
            Self(Arc::from(trimmed))
        } else {
            Self(Arc::from(format!("/{trimmed}")))
        }
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Percent-encode for XML output.
    pub fn to_encoded(&self) -> String {
        utf8_percent_encode(&self.0, XML_UNSAFE).to_string()
    }

    /// Join onto a base site URL, producing an absolute encoded URL.
    pub fn to_absolute(&self, base_url: &str) -> String {
        format!("{}{}", base_url.trim_end_matches('/'), self.to_encoded())
    }

    #[inline]
    pub fn starts_with(&self, prefix: &str) -> bool {
        self.0.starts_with(prefix)
    }
}

impl std::fmt::Display for UrlPath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

// Lets FxHashSet<UrlPath> answer contains() for plain &str keys.
impl Borrow<str> for UrlPath {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl PartialEq<&str> for UrlPath {
    fn eq(&self, other: &&str) -> bool {
        self.0.as_ref() == *other
    }
}

impl Serialize for UrlPath {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_post_paths_per_language() {
        assert_eq!(UrlPath::for_post(Lang::Cs, "hello-world"), "/blog/hello-world");
        assert_eq!(
            UrlPath::for_post(Lang::En, "hello-world"),
            "/en/blog/hello-world"
        );
    }

    #[test]
    fn test_post_path_strips_md_extension() {
        assert_eq!(UrlPath::for_post(Lang::Cs, "hello-world.md"), "/blog/hello-world");
        // Only the extension goes, inner dots survive
        assert_eq!(UrlPath::for_post(Lang::Cs, "v2.0-release"), "/blog/v2.0-release");
    }

    #[test]
    fn test_from_path_normalizes_slashes() {
        assert_eq!(UrlPath::from_path("blog/post"), "/blog/post");
        assert_eq!(UrlPath::from_path("/blog/post/"), "/blog/post");
        assert_eq!(UrlPath::from_path("/"), "/");
        assert_eq!(UrlPath::from_path(""), "/");
    }

    #[test]
    fn test_encoding_czech_diacritics() {
        let url = UrlPath::for_post(Lang::Cs, "žluťoučký-kůň");
        assert_eq!(
            url.to_encoded(),
            "/blog/%C5%BElu%C5%A5ou%C4%8Dk%C3%BD-k%C5%AF%C5%88"
        );
    }

    #[test]
    fn test_encoding_leaves_ascii_alone() {
        let url = UrlPath::for_post(Lang::En, "hello-world");
        assert_eq!(url.to_encoded(), "/en/blog/hello-world");
    }

    #[test]
    fn test_encoding_space() {
        assert_eq!(
            UrlPath::from_path("/blog/hello world").to_encoded(),
            "/blog/hello%20world"
        );
    }

    #[test]
    fn test_to_absolute() {
        let url = UrlPath::for_post(Lang::Cs, "hello-world");
        assert_eq!(
            url.to_absolute("https://example.com"),
            "https://example.com/blog/hello-world"
        );
        // Trailing slash on the base never doubles
        assert_eq!(
            url.to_absolute("https://example.com/"),
            "https://example.com/blog/hello-world"
        );
    }

    #[test]
    fn test_equality_across_constructors() {
        let built = UrlPath::for_post(Lang::Cs, "hello");
        let parsed = UrlPath::from_path("/blog/hello");
        assert_eq!(built, parsed);
    }

    #[test]
    fn test_set_lookup_by_str() {
        use rustc_hash::FxHashSet;

        let mut set = FxHashSet::default();
        set.insert(UrlPath::for_post(Lang::Cs, "hello"));
        set.insert(UrlPath::for_post(Lang::Cs, "hello"));

        assert_eq!(set.len(), 1);
        assert!(set.contains("/blog/hello"));
        assert!(!set.contains("/en/blog/hello"));
    }

    #[test]
    fn test_serializes_as_plain_string() {
        let url = UrlPath::for_post(Lang::En, "post");
        assert_eq!(serde_json::to_string(&url).unwrap(), r#""/en/blog/post""#);
    }

    #[test]
    fn test_display() {
        let url = UrlPath::for_post(Lang::Cs, "hello");
        assert_eq!(url.to_string(), "/blog/hello");
    }

    #[test]
    fn test_prefix_matching() {
        let url = UrlPath::for_post(Lang::En, "hello");
        assert!(url.starts_with("/en/blog"));
        assert!(!url.starts_with("/blog"));
    }
}
