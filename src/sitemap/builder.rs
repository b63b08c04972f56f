//! The sitemap entry builder: parse, group, emit.
//!
//! Transforms the full content store into a cross-linked entry list in one
//! pass. Any parse failure aborts the whole build; there is no partial
//! sitemap output from an invalid store.

use anyhow::{Context, Result};
use rayon::prelude::*;

use crate::core::{Lang, UrlPath, X_DEFAULT};
use crate::post::{PostRecord, frontmatter};
use crate::store::ContentStore;

use super::{Alternative, SitemapEntry, SitemapError, TranslationGroups};

/// Build the full entry list from a content store.
///
/// Entries come out ordered by `(lang, slug)`, so repeated runs against an
/// unchanged store yield an identical sequence.
pub fn build_entries<S: ContentStore + Sync>(store: &S) -> Result<Vec<SitemapEntry>> {
    let records = parse_records(store)?;
    let groups = TranslationGroups::collect(&records)?;
    Ok(emit(&records, &groups))
}

/// Parse stage: read every key into a `PostRecord`, fail-fast.
///
/// Reads are independent, so they fan out on the rayon pool and collect
/// back into a single `Result`.
pub fn parse_records<S: ContentStore + Sync>(store: &S) -> Result<Vec<PostRecord>> {
    let keys = store.keys()?;

    let mut records = keys
        .par_iter()
        .map(|key| parse_record(store, key))
        .collect::<Result<Vec<_>>>()?;

    // Store enumeration order is unspecified; sort so downstream stages
    // are deterministic
    records.sort_by(|a, b| (a.lang, a.slug.as_str()).cmp(&(b.lang, b.slug.as_str())));
    Ok(records)
}

/// Parse one stored document.
fn parse_record<S: ContentStore>(store: &S, key: &str) -> Result<PostRecord> {
    let (lang, slug) = parse_key(key)?;

    let bytes = store.read(key)?;
    let content = std::str::from_utf8(&bytes)
        .with_context(|| format!("`{key}` is not valid UTF-8"))?;

    let meta = frontmatter::extract(content)
        .with_context(|| format!("Failed to parse frontmatter of `{key}`"))?
        .map(|(meta, _body)| meta)
        .unwrap_or_default();

    let translation_key = meta
        .translation_key
        .clone()
        .ok_or_else(|| SitemapError::MissingTranslationKey {
            key: key.to_string(),
        })?;

    Ok(PostRecord {
        lang,
        slug,
        translation_key,
        meta,
    })
}

/// Split a store key into `(lang, slug)`, stripping a trailing `.md`.
fn parse_key(key: &str) -> Result<(Lang, String), SitemapError> {
    let mut parts = key.split(':');
    let (Some(lang_part), Some(slug_part), None) = (parts.next(), parts.next(), parts.next())
    else {
        return Err(SitemapError::MalformedKey {
            key: key.to_string(),
        });
    };

    let lang = Lang::parse(lang_part).ok_or_else(|| SitemapError::UnsupportedLanguage {
        key: key.to_string(),
        lang: lang_part.to_string(),
    })?;

    let slug = slug_part.strip_suffix(".md").unwrap_or(slug_part).to_string();
    Ok((lang, slug))
}

/// Emit stage: one entry per record, with alternates from its group.
fn emit(records: &[PostRecord], groups: &TranslationGroups) -> Vec<SitemapEntry> {
    records
        .iter()
        .map(|record| {
            // Every record was itself folded into the groups, so the lookup
            // cannot miss; a miss here is a builder bug
            let group = groups
                .get(&record.translation_key)
                .expect("record's translation group exists by construction");

            let mut alternatives: Vec<Alternative> = group
                .iter()
                .filter(|(lang, _)| **lang != record.lang)
                .map(|(lang, slug)| {
                    Alternative::new(lang.locale_tag(), UrlPath::for_post(*lang, slug))
                })
                .collect();

            // Czech is the canonical locale: only English pages point
            // x-default back at their Czech sibling, never the reverse
            if !record.lang.is_default()
                && let Some(cs_slug) = group.get(&Lang::Cs)
            {
                alternatives.push(Alternative::new(
                    X_DEFAULT,
                    UrlPath::for_post(Lang::Cs, cs_slug),
                ));
            }

            SitemapEntry {
                loc: record.url_path(),
                alternatives,
                partition: record.lang.locale_tag(),
                lastmod: record.lastmod(),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemStore;

    fn post(translation_key: &str) -> String {
        format!("---\ntitle: Post\ntranslationKey: {translation_key}\n---\n\nBody\n")
    }

    fn paired_store() -> MemStore {
        let mut store = MemStore::new();
        store.insert("cs:hello-world.md", post("k1"));
        store.insert("en:hello-world.md", post("k1"));
        store
    }

    fn downcast(err: &anyhow::Error) -> &SitemapError {
        err.downcast_ref::<SitemapError>().expect("typed error")
    }

    #[test]
    fn test_translated_pair() {
        let entries = build_entries(&paired_store()).unwrap();
        assert_eq!(entries.len(), 2);

        let cs = &entries[0];
        assert_eq!(cs.loc, "/blog/hello-world");
        assert_eq!(cs.partition, "cs-CZ");
        assert_eq!(
            cs.alternatives,
            vec![Alternative::new(
                "en-US",
                UrlPath::for_post(Lang::En, "hello-world")
            )]
        );

        let en = &entries[1];
        assert_eq!(en.loc, "/en/blog/hello-world");
        assert_eq!(en.partition, "en-US");
        assert_eq!(
            en.alternatives,
            vec![
                Alternative::new("cs-CZ", UrlPath::for_post(Lang::Cs, "hello-world")),
                Alternative::new("x-default", UrlPath::for_post(Lang::Cs, "hello-world")),
            ]
        );
    }

    #[test]
    fn test_czech_only_post_has_no_alternatives() {
        let mut store = MemStore::new();
        store.insert("cs:osamely.md", post("solo"));

        let entries = build_entries(&store).unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].loc, "/blog/osamely");
        assert!(entries[0].alternatives.is_empty());
    }

    #[test]
    fn test_english_only_post_has_no_x_default() {
        // x-default points at the Czech sibling; without one there is
        // nothing to point at
        let mut store = MemStore::new();
        store.insert("en:english-only.md", post("solo"));

        let entries = build_entries(&store).unwrap();
        assert_eq!(entries.len(), 1);
        assert!(entries[0].alternatives.is_empty());
    }

    #[test]
    fn test_unsupported_language_aborts() {
        let mut store = paired_store();
        store.insert("fr:post.md", post("k2"));

        let err = build_entries(&store).unwrap_err();
        assert_eq!(
            *downcast(&err),
            SitemapError::UnsupportedLanguage {
                key: "fr:post.md".to_string(),
                lang: "fr".to_string(),
            }
        );
    }

    #[test]
    fn test_malformed_key_aborts() {
        let mut store = paired_store();
        store.insert("csblog.md", post("k2"));

        let err = build_entries(&store).unwrap_err();
        assert_eq!(
            *downcast(&err),
            SitemapError::MalformedKey {
                key: "csblog.md".to_string(),
            }
        );
    }

    #[test]
    fn test_multi_colon_key_aborts() {
        let mut store = MemStore::new();
        store.insert("cs:drafts:wip.md", post("k1"));

        let err = build_entries(&store).unwrap_err();
        assert!(matches!(downcast(&err), SitemapError::MalformedKey { .. }));
    }

    #[test]
    fn test_missing_translation_key_aborts() {
        let mut store = MemStore::new();
        store.insert("cs:bez-klice.md", "---\ntitle: Missing\n---\n");

        let err = build_entries(&store).unwrap_err();
        assert_eq!(
            *downcast(&err),
            SitemapError::MissingTranslationKey {
                key: "cs:bez-klice.md".to_string(),
            }
        );
    }

    #[test]
    fn test_no_frontmatter_aborts() {
        let mut store = MemStore::new();
        store.insert("cs:plain.md", "# Just markdown");

        let err = build_entries(&store).unwrap_err();
        assert!(matches!(
            downcast(&err),
            SitemapError::MissingTranslationKey { .. }
        ));
    }

    #[test]
    fn test_duplicate_translation_aborts() {
        let mut store = MemStore::new();
        store.insert("cs:prvni.md", post("k1"));
        store.insert("cs:druhy.md", post("k1"));

        let err = build_entries(&store).unwrap_err();
        assert!(matches!(
            downcast(&err),
            SitemapError::DuplicateTranslation { .. }
        ));
    }

    #[test]
    fn test_completeness() {
        let mut store = MemStore::new();
        store.insert("cs:a.md", post("k1"));
        store.insert("en:a.md", post("k1"));
        store.insert("cs:b.md", post("k2"));
        store.insert("en:c.md", post("k3"));

        let entries = build_entries(&store).unwrap();
        assert_eq!(entries.len(), 4);

        let locs: Vec<&str> = entries.iter().map(|e| e.loc.as_str()).collect();
        assert_eq!(
            locs,
            vec!["/blog/a", "/blog/b", "/en/blog/a", "/en/blog/c"]
        );
    }

    #[test]
    fn test_symmetry_of_alternates() {
        let entries = build_entries(&paired_store()).unwrap();
        let cs = entries.iter().find(|e| e.partition == "cs-CZ").unwrap();
        let en = entries.iter().find(|e| e.partition == "en-US").unwrap();

        assert!(cs.alternatives.iter().any(|a| a.href == en.loc));
        assert!(en.alternatives.iter().any(|a| a.href == cs.loc));
    }

    #[test]
    fn test_x_default_asymmetry() {
        let entries = build_entries(&paired_store()).unwrap();
        let cs = entries.iter().find(|e| e.partition == "cs-CZ").unwrap();
        let en = entries.iter().find(|e| e.partition == "en-US").unwrap();

        let en_defaults: Vec<_> = en
            .alternatives
            .iter()
            .filter(|a| a.hreflang == X_DEFAULT)
            .collect();
        assert_eq!(en_defaults.len(), 1);
        assert_eq!(en_defaults[0].href, cs.loc);

        assert!(cs.alternatives.iter().all(|a| a.hreflang != X_DEFAULT));
    }

    #[test]
    fn test_no_self_alternate() {
        let entries = build_entries(&paired_store()).unwrap();
        for entry in &entries {
            assert!(
                entry
                    .alternatives
                    .iter()
                    .all(|a| a.hreflang != entry.partition),
                "{} lists its own language",
                entry.loc
            );
        }
    }

    #[test]
    fn test_idempotence() {
        let store = paired_store();
        let first = build_entries(&store).unwrap();
        let second = build_entries(&store).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_differing_sibling_slugs() {
        // Translations do not need to share a slug; hrefs follow the
        // sibling's own slug
        let mut store = MemStore::new();
        store.insert("cs:ahoj-svete.md", post("k1"));
        store.insert("en:hello-world.md", post("k1"));

        let entries = build_entries(&store).unwrap();
        let cs = entries.iter().find(|e| e.partition == "cs-CZ").unwrap();
        let en = entries.iter().find(|e| e.partition == "en-US").unwrap();

        assert_eq!(cs.loc, "/blog/ahoj-svete");
        assert_eq!(cs.alternatives[0].href, "/en/blog/hello-world");
        assert_eq!(en.alternatives[0].href, "/blog/ahoj-svete");
        assert_eq!(en.alternatives[1].href, "/blog/ahoj-svete");
    }

    #[test]
    fn test_lastmod_from_frontmatter_date() {
        let mut store = MemStore::new();
        store.insert(
            "cs:datovany.md",
            "---\ntranslationKey: k1\ndate: 2025-01-03\n---\n",
        );

        let entries = build_entries(&store).unwrap();
        assert_eq!(entries[0].lastmod.as_deref(), Some("2025-01-03"));
    }

    #[test]
    fn test_toml_frontmatter_accepted() {
        let mut store = MemStore::new();
        store.insert("cs:toml.md", "+++\ntranslationKey = \"k1\"\n+++\n");

        let entries = build_entries(&store).unwrap();
        assert_eq!(entries[0].loc, "/blog/toml");
    }

    #[test]
    fn test_invalid_utf8_aborts() {
        let mut store = MemStore::new();
        store.insert("cs:binarni.md", vec![0xff, 0xfe, 0x00]);

        let err = build_entries(&store).unwrap_err();
        assert!(err.to_string().contains("UTF-8"));
    }

    #[test]
    fn test_empty_store_yields_empty_list() {
        let entries = build_entries(&MemStore::new()).unwrap();
        assert!(entries.is_empty());
    }

    #[test]
    fn test_parse_key_strips_md_only_as_suffix() {
        let (_, slug) = parse_key("cs:notes.md.md").unwrap();
        assert_eq!(slug, "notes.md");

        let (_, slug) = parse_key("cs:no-extension").unwrap();
        assert_eq!(slug, "no-extension");
    }
}
