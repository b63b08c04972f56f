//! The `[build]` table: store location and output settings.
//!
//! # Example
//!
//! ```toml
//! [build]
//! content = "content"         # Markdown store root (content/cs, content/en)
//! output = "public"           # Output directory for generated files
//! minify = true               # Collapse whitespace in written XML
//!
//! [build.sitemap]
//! index = "sitemap_index.xml" # Index filename; partitions are sitemap-<tag>.xml
//!
//! [build.robots]
//! enable = true               # Write robots.txt pointing at the index
//! path = "robots.txt"
//! ```

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::config::error::{KeyPath, ValidationReport};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BuildSectionConfig {
    /// Content source directory with one subdirectory per language.
    pub content: PathBuf,

    /// Where generated files land.
    pub output: PathBuf,

    /// Minify written XML.
    pub minify: bool,

    /// Sitemap output settings.
    pub sitemap: SitemapConfig,

    /// robots.txt settings.
    pub robots: RobotsConfig,
}

impl Default for BuildSectionConfig {
    fn default() -> Self {
        Self {
            content: PathBuf::from("content"),
            output: PathBuf::from("public"),
            minify: true,
            sitemap: SitemapConfig::default(),
            robots: RobotsConfig::default(),
        }
    }
}

impl BuildSectionConfig {
    const CONTENT: KeyPath = KeyPath::new("build.content");

    /// Every command except `init` reads the store, so the content
    /// directory must exist.
    pub fn validate(&self, report: &mut ValidationReport) {
        if !self.content.is_dir() {
            report.push_with_hint(
                Self::CONTENT,
                format!("directory '{}' not found", self.content.display()),
                "create it or point build.content at the markdown store",
            );
        }
    }
}

/// Sitemap output settings.
///
/// The index is resolved against the output directory at write time;
/// partition files land alongside it.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SitemapConfig {
    /// Sitemap index filename.
    pub index: PathBuf,
}

impl Default for SitemapConfig {
    fn default() -> Self {
        Self {
            index: PathBuf::from("sitemap_index.xml"),
        }
    }
}

/// robots.txt generation settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RobotsConfig {
    /// Write robots.txt during build.
    pub enable: bool,
    /// Output path for robots.txt.
    pub path: PathBuf,
}

impl Default for RobotsConfig {
    fn default() -> Self {
        Self {
            enable: false,
            path: PathBuf::from("robots.txt"),
        }
    }
}
