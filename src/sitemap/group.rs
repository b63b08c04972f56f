//! Translation grouping: `translation_key -> (lang -> slug)`.

use std::collections::BTreeMap;

use rustc_hash::FxHashMap;

use crate::core::Lang;
use crate::post::PostRecord;

use super::SitemapError;

/// All documents folded by their `translationKey`.
///
/// Invariant: within a group, at most one slug per language. The fold is
/// commutative over records; only an occupied `(translation_key, lang)` cell
/// makes it fail, regardless of visitation order.
#[derive(Debug, Default)]
pub struct TranslationGroups {
    groups: FxHashMap<String, BTreeMap<Lang, String>>,
}

impl TranslationGroups {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold a record list into groups. Fails on the first duplicate
    /// `(translation_key, lang)` pair.
    pub fn collect(records: &[PostRecord]) -> Result<Self, SitemapError> {
        let mut groups = Self::new();
        for record in records {
            groups.insert(record)?;
        }
        Ok(groups)
    }

    /// Add one record to its group.
    pub fn insert(&mut self, record: &PostRecord) -> Result<(), SitemapError> {
        let group = self
            .groups
            .entry(record.translation_key.clone())
            .or_default();

        if let Some(existing) = group.get(&record.lang) {
            return Err(SitemapError::DuplicateTranslation {
                translation_key: record.translation_key.clone(),
                lang: record.lang,
                slug: record.slug.clone(),
                existing: existing.clone(),
            });
        }
        group.insert(record.lang, record.slug.clone());
        Ok(())
    }

    /// Look up the `lang -> slug` map for a translation key.
    ///
    /// Iteration order follows `Lang` declaration order (cs before en).
    pub fn get(&self, translation_key: &str) -> Option<&BTreeMap<Lang, String>> {
        self.groups.get(translation_key)
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}
