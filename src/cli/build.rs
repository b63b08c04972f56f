//! Build command: run the sitemap builder and write the XML outputs.

use anyhow::Result;

use crate::config::SiteConfig;
use crate::generator::{robots::write_robots, sitemap::write_sitemaps};
use crate::log;
use crate::sitemap::build_entries;
use crate::store::FsStore;
use crate::utils::counted;

/// Build sitemap outputs from the content store.
///
/// Pipeline: read store -> build entries -> write urlsets + index -> robots.txt
pub fn build_site(config: &SiteConfig) -> Result<()> {
    let store = FsStore::new(&config.build.content);
    let entries = build_entries(&store)?;

    if entries.is_empty() {
        log!(
            "warn";
            "no posts found, check if {} has cs/*.md or en/*.md files",
            config.root_relative(&config.build.content).display()
        );
        return Ok(());
    }

    log!("build"; "collected {}", counted(entries.len(), "post"));

    write_sitemaps(config, &entries)?;
    write_robots(config)?;

    log!("build"; "done");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn write_post(root: &std::path::Path, rel: &str, translation_key: &str) {
        let path = root.join(rel);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(
            &path,
            format!("---\ntitle: T\ntranslationKey: {translation_key}\n---\nbody\n"),
        )
        .unwrap();
    }

    fn build_config(content: &std::path::Path, output: &std::path::Path) -> SiteConfig {
        let mut config = SiteConfig::default();
        config.site.url = Some("https://example.com".to_string());
        config.build.content = content.to_path_buf();
        config.build.output = output.to_path_buf();
        config.build.robots.enable = true;
        config
    }

    #[test]
    fn test_build_site_writes_all_outputs() {
        let temp = TempDir::new().unwrap();
        let content = temp.path().join("content");
        let output = temp.path().join("public");
        write_post(&content, "cs/ahoj.md", "hello");
        write_post(&content, "en/hello.md", "hello");

        build_site(&build_config(&content, &output)).unwrap();

        assert!(output.join("sitemap-cs-CZ.xml").exists());
        assert!(output.join("sitemap-en-US.xml").exists());
        assert!(output.join("sitemap_index.xml").exists());
        assert!(output.join("robots.txt").exists());

        let en = fs::read_to_string(output.join("sitemap-en-US.xml")).unwrap();
        assert!(en.contains("https://example.com/en/blog/hello"));
        assert!(en.contains(r#"hreflang="x-default" href="https://example.com/blog/ahoj""#));
    }

    #[test]
    fn test_build_site_empty_store_writes_nothing() {
        let temp = TempDir::new().unwrap();
        let content = temp.path().join("content");
        let output = temp.path().join("public");
        fs::create_dir_all(&content).unwrap();

        build_site(&build_config(&content, &output)).unwrap();

        assert!(!output.join("sitemap_index.xml").exists());
        assert!(!output.join("robots.txt").exists());
    }

    #[test]
    fn test_build_site_fails_on_bad_store() {
        let temp = TempDir::new().unwrap();
        let content = temp.path().join("content");
        let output = temp.path().join("public");
        write_post(&content, "fr/bonjour.md", "hello");

        let err = build_site(&build_config(&content, &output)).unwrap_err();
        assert!(err.to_string().contains("unsupported language"));
        // No partial output on failure
        assert!(!output.join("sitemap_index.xml").exists());
    }
}
