//! Sitemap XML generation.
//!
//! Writes one urlset per locale partition (`sitemap-cs-CZ.xml`,
//! `sitemap-en-US.xml`) plus an index referencing them.
//!
//! # Urlset Format
//!
//! ```xml
//! <?xml version="1.0" encoding="UTF-8"?>
//! <urlset xmlns="http://www.sitemaps.org/schemas/sitemap/0.9"
//!         xmlns:xhtml="http://www.w3.org/1999/xhtml">
//!   <url>
//!     <loc>https://example.com/en/blog/hello-world</loc>
//!     <lastmod>2025-01-01</lastmod>
//!     <xhtml:link rel="alternate" hreflang="cs-CZ" href="https://example.com/blog/hello-world"/>
//!     <xhtml:link rel="alternate" hreflang="x-default" href="https://example.com/blog/hello-world"/>
//!   </url>
//! </urlset>
//! ```

use crate::config::SiteConfig;
use crate::core::Lang;
use crate::generator::minify_xml;
use crate::sitemap::SitemapEntry;
use crate::utils::hash::write_if_changed;
use crate::{debug, log};
use anyhow::{Context, Result};
use std::borrow::Cow;
use std::fmt;
use std::path::Path;

const SITEMAP_NS: &str = "http://www.sitemaps.org/schemas/sitemap/0.9";
const XHTML_NS: &str = "http://www.w3.org/1999/xhtml";
const XML_DECL: &str = "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n";

/// Write per-locale sitemap files and the index referencing them.
pub fn write_sitemaps(config: &SiteConfig, entries: &[SitemapEntry]) -> Result<()> {
    let base_url = config.base_url()?;

    let mut written = Vec::new();
    for lang in Lang::ALL {
        let tag = lang.locale_tag();
        let urlset = Urlset::collect(tag, base_url, entries);
        if urlset.is_empty() {
            continue;
        }

        let filename = format!("sitemap-{tag}.xml");
        write_xml(config, Path::new(&filename), &urlset.to_string())?;
        written.push(filename);
    }

    let index = SitemapIndex {
        base_url,
        files: written,
    };
    write_xml(config, &config.build.sitemap.index, &index.to_string())?;
    Ok(())
}

/// Minify and write an XML file into the output directory, skipping the
/// write when the content is unchanged.
fn write_xml(config: &SiteConfig, rel_path: &Path, xml: &str) -> Result<()> {
    let path = config.build.output.join(rel_path);
    let bytes = minify_xml(xml.as_bytes(), config.build.minify);

    let written = write_if_changed(&path, &bytes)
        .with_context(|| format!("while writing sitemap `{}`", rel_path.display()))?;

    let name = path.file_name().unwrap_or_default().to_string_lossy();
    if written {
        log!("sitemap"; "{}", name);
    } else {
        debug!("sitemap"; "{} unchanged", name);
    }
    Ok(())
}

/// Entries belonging to one locale partition.
struct Urlset<'a> {
    base_url: &'a str,
    entries: Vec<&'a SitemapEntry>,
}

impl<'a> Urlset<'a> {
    fn collect(tag: &str, base_url: &'a str, entries: &'a [SitemapEntry]) -> Self {
        Self {
            base_url,
            entries: entries.iter().filter(|e| e.partition == tag).collect(),
        }
    }

    fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl fmt::Display for Urlset<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(XML_DECL)?;
        writeln!(f, "<urlset xmlns=\"{SITEMAP_NS}\" xmlns:xhtml=\"{XHTML_NS}\">")?;

        for entry in &self.entries {
            let abs = entry.loc.to_absolute(self.base_url);
            let loc = escape_xml(&abs);
            writeln!(f, "  <url>")?;
            writeln!(f, "    <loc>{loc}</loc>")?;
            // Schema order: loc, lastmod, then extension elements
            if let Some(lastmod) = &entry.lastmod {
                writeln!(f, "    <lastmod>{lastmod}</lastmod>")?;
            }
            for alt in &entry.alternatives {
                let abs = alt.href.to_absolute(self.base_url);
                let href = escape_xml(&abs);
                writeln!(
                    f,
                    "    <xhtml:link rel=\"alternate\" hreflang=\"{}\" href=\"{href}\"/>",
                    alt.hreflang
                )?;
            }
            writeln!(f, "  </url>")?;
        }

        f.write_str("</urlset>\n")
    }
}

/// Index file referencing each written partition.
struct SitemapIndex<'a> {
    base_url: &'a str,
    files: Vec<String>,
}

impl fmt::Display for SitemapIndex<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(XML_DECL)?;
        writeln!(f, "<sitemapindex xmlns=\"{SITEMAP_NS}\">")?;

        for file in &self.files {
            let abs = format!("{}/{file}", self.base_url);
            let loc = escape_xml(&abs);
            writeln!(f, "  <sitemap>")?;
            writeln!(f, "    <loc>{loc}</loc>")?;
            writeln!(f, "  </sitemap>")?;
        }

        f.write_str("</sitemapindex>\n")
    }
}

/// Escape the five XML-special characters, borrowing clean input.
fn escape_xml(s: &str) -> Cow<'_, str> {
    const SPECIAL: [char; 5] = ['&', '<', '>', '"', '\''];

    let Some(first) = s.find(SPECIAL) else {
        return Cow::Borrowed(s);
    };

    let mut out = String::with_capacity(s.len() + 8);
    out.push_str(&s[..first]);
    for c in s[first..].chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            other => out.push(other),
        }
    }
    Cow::Owned(out)
}
