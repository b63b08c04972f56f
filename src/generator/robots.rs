//! robots.txt generation.
//!
//! Crawlers discover the sitemap index through the `Sitemap:` line, so
//! the file is written alongside the XML output when enabled.

use crate::config::SiteConfig;
use crate::utils::hash::write_if_changed;
use crate::{debug, log};
use anyhow::{Context, Result};

/// Write robots.txt if enabled.
pub fn write_robots(config: &SiteConfig) -> Result<()> {
    if !config.build.robots.enable {
        return Ok(());
    }

    let base_url = config.base_url()?;
    let index = config.build.sitemap.index.to_string_lossy();
    let content = robots_txt(base_url, &index);

    let path = config.build.output.join(&config.build.robots.path);
    let written = write_if_changed(&path, content.as_bytes())
        .with_context(|| format!("while writing robots.txt to `{}`", path.display()))?;

    let name = path.file_name().unwrap_or_default().to_string_lossy();
    if written {
        log!("robots"; "{}", name);
    } else {
        debug!("robots"; "{} unchanged", name);
    }
    Ok(())
}

/// Allow-everything policy plus a pointer at the sitemap index.
fn robots_txt(base_url: &str, index: &str) -> String {
    format!("User-agent: *\nDisallow:\n\nSitemap: {base_url}/{index}\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_robots_txt_content() {
        let content = robots_txt("https://example.com", "sitemap_index.xml");

        assert!(content.starts_with("User-agent: *\n"));
        assert!(content.contains("Sitemap: https://example.com/sitemap_index.xml\n"));
    }

    #[test]
    fn test_write_robots_disabled_is_noop() {
        let temp = tempfile::TempDir::new().unwrap();
        let mut config = SiteConfig::default();
        config.build.output = temp.path().to_path_buf();

        // robots.enable defaults to false
        write_robots(&config).unwrap();
        assert!(!temp.path().join("robots.txt").exists());
    }

    #[test]
    fn test_write_robots_enabled() {
        let temp = tempfile::TempDir::new().unwrap();
        let mut config = SiteConfig::default();
        config.site.url = Some("https://example.com".to_string());
        config.build.output = temp.path().to_path_buf();
        config.build.robots.enable = true;

        write_robots(&config).unwrap();

        let content = std::fs::read_to_string(temp.path().join("robots.txt")).unwrap();
        assert!(content.contains("Sitemap: https://example.com/sitemap_index.xml"));
    }
}
