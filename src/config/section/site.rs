//! The `[site]` table: the title and the base URL that absolute sitemap
//! locs are built from.

use serde::{Deserialize, Serialize};

use crate::config::error::{KeyPath, ValidationReport};

const URL_HINT: &str = "expected a form like https://example.com";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteSectionConfig {
    /// Site title.
    pub title: String,

    /// Site base URL (e.g., "https://example.com"). Locs in written
    /// sitemaps are absolute, so `build` refuses to run without it;
    /// `check` and `query` work on paths alone.
    pub url: Option<String>,
}

impl SiteSectionConfig {
    const URL: KeyPath = KeyPath::new("site.url");

    /// When `url` is present it must parse as an http(s) URL with a
    /// host; when `url_required` it must be present at all.
    pub fn validate(&self, url_required: bool, report: &mut ValidationReport) {
        let Some(raw) = self.url.as_deref() else {
            if url_required {
                report.push_with_hint(
                    Self::URL,
                    "build writes absolute locs but site.url is not configured",
                    "set site.url, e.g.: \"https://example.com\"",
                );
            }
            return;
        };

        let parsed = match url::Url::parse(raw) {
            Ok(parsed) => parsed,
            Err(e) => {
                report.push_with_hint(Self::URL, format!("not a parseable URL: {e}"), URL_HINT);
                return;
            }
        };

        if !matches!(parsed.scheme(), "http" | "https") {
            report.push_with_hint(
                Self::URL,
                format!("unsupported scheme `{}`", parsed.scheme()),
                URL_HINT,
            );
        }
        if parsed.host_str().is_none() {
            report.push_with_hint(Self::URL, "URL is missing a host", URL_HINT);
        }
    }

    /// Base URL with any trailing slash removed.
    pub fn base_url(&self) -> Option<&str> {
        self.url.as_deref().map(|url| url.trim_end_matches('/'))
    }
}
