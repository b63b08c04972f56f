//! Syntactic link classification for body scanning.

/// What a markdown link destination looks like, before any resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkKind<'a> {
    /// Carries a URL scheme: `https://`, `mailto:`, `tel:` and friends.
    External(&'a str),
    /// Anchor on the current page, `#` stripped.
    Fragment(&'a str),
    /// Starts at the site root: `/blog/ahoj`, `/en`.
    SiteRoot(&'a str),
    /// Relative to the containing file: `./jiny-prispevek`, `../hello`.
    FileRelative(&'a str),
}

impl<'a> LinkKind<'a> {
    #[inline]
    pub fn parse(link: &'a str) -> Self {
        if has_scheme(link) {
            return Self::External(link);
        }
        // `./#x` is the same anchor as `#x`
        if let Some(anchor) = link.strip_prefix('#').or_else(|| link.strip_prefix("./#")) {
            return Self::Fragment(anchor);
        }
        if link.starts_with('/') {
            Self::SiteRoot(link)
        } else {
            Self::FileRelative(link)
        }
    }
}

/// RFC 3986 scheme check: alphanumerics, `+`, `-` or `.` before the
/// first colon.
fn has_scheme(link: &str) -> bool {
    match link.split_once(':') {
        Some((scheme, _)) if !scheme.is_empty() => scheme
            .bytes()
            .all(|b| b.is_ascii_alphanumeric() || matches!(b, b'+' | b'-' | b'.')),
        _ => false,
    }
}
