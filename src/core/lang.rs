//! Supported content languages and their locale tags.
//!
//! The content store carries exactly two languages: Czech (the default
//! locale, unprefixed URLs) and English (prefixed with `/en`). Anything
//! else in a store key is a data-integrity error, not a soft skip.

use std::fmt;

use serde::{Deserialize, Serialize};

/// The `hreflang` value marking the fallback URL for unmatched locales.
pub const X_DEFAULT: &str = "x-default";

/// A supported content language.
///
/// Declaration order is the canonical emission order: Czech first (it is
/// the site's default locale), then English.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Lang {
    /// Czech - default locale, posts live under `/blog`.
    Cs,
    /// English - posts live under `/en/blog`.
    En,
}

impl Lang {
    /// All supported languages, in canonical order.
    pub const ALL: [Lang; 2] = [Lang::Cs, Lang::En];

    /// Parse a language code as it appears in store keys.
    ///
    /// Returns `None` for anything outside the supported set; the caller
    /// decides how fatal that is (the sitemap builder treats it as fatal).
    pub fn parse(code: &str) -> Option<Self> {
        match code {
            "cs" => Some(Lang::Cs),
            "en" => Some(Lang::En),
            _ => None,
        }
    }

    /// Two-letter language code used in store keys and directory names.
    pub const fn code(self) -> &'static str {
        match self {
            Lang::Cs => "cs",
            Lang::En => "en",
        }
    }

    /// Locale-region tag used both as `hreflang` for alternates and as the
    /// sitemap partition name.
    pub const fn locale_tag(self) -> &'static str {
        match self {
            Lang::Cs => "cs-CZ",
            Lang::En => "en-US",
        }
    }

    /// URL prefix for blog posts in this language.
    ///
    /// Czech is the default locale and stays unprefixed
    /// (`prefix_except_default` strategy).
    pub const fn url_prefix(self) -> &'static str {
        match self {
            Lang::Cs => "/blog",
            Lang::En => "/en/blog",
        }
    }

    /// Homepage path for this language.
    pub const fn site_root(self) -> &'static str {
        match self {
            Lang::Cs => "/",
            Lang::En => "/en",
        }
    }

    /// The language whose path backs `x-default` alternates.
    pub const fn is_default(self) -> bool {
        matches!(self, Lang::Cs)
    }
}

impl fmt::Display for Lang {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}
