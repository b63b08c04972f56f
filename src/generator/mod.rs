//! Output generators for the sitemap build.
//!
//! Consumes the entry list produced by the builder and writes:
//!
//! - **Sitemap**: one urlset per locale partition plus a sitemap index
//! - **Robots**: `robots.txt` pointing crawlers at the index
//!
//! All files go through `write_if_changed`, so byte-identical output
//! leaves existing files (and their mtimes) untouched.

pub mod robots;
pub mod sitemap;

use std::borrow::Cow;

/// Collapse indentation and blank lines when minify is on.
pub fn minify_xml(content: &[u8], enabled: bool) -> Cow<'_, [u8]> {
    if !enabled {
        return Cow::Borrowed(content);
    }

    let text = std::str::from_utf8(content).unwrap_or("");
    let mut out = String::with_capacity(text.len());
    for line in text.lines() {
        out.push_str(line.trim());
    }
    Cow::Owned(out.into_bytes())
}
