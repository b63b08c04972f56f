//! Sitemap build error types.
//!
//! All variants are data-integrity errors: any one of them aborts the whole
//! build. The builder never emits a partial entry list from an invalid
//! content store.

use thiserror::Error;

use crate::core::Lang;

/// Content-store integrity errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SitemapError {
    #[error("malformed content key `{key}`: expected `<lang>:<slug>`")]
    MalformedKey { key: String },

    #[error("unsupported language `{lang}` in key `{key}` (supported: cs, en)")]
    UnsupportedLanguage { key: String, lang: String },

    #[error("`{key}`: frontmatter is missing `translationKey`")]
    MissingTranslationKey { key: String },

    #[error(
        "duplicate translation `{translation_key}` for language `{lang}`: \
         `{slug}` collides with `{existing}`"
    )]
    DuplicateTranslation {
        translation_key: String,
        lang: Lang,
        slug: String,
        existing: String,
    },
}
