//! Post body scanning for the check command.

use pulldown_cmark::{Event, Parser, Tag};

use crate::core::LinkKind;

/// A link extracted from a post body
#[derive(Debug, Clone)]
pub struct ScannedLink {
    /// Link destination as written.
    pub dest: String,
}

impl ScannedLink {
    /// Classify this link.
    #[inline]
    pub fn kind(&self) -> LinkKind<'_> {
        LinkKind::parse(&self.dest)
    }
}

/// Extract link destinations from a markdown body.
///
/// Only `[text](dest)` links count (reference links included, since the
/// parser resolves them). Images are assets, not pages; they are skipped.
pub fn scan_body(body: &str) -> Vec<ScannedLink> {
    Parser::new(body)
        .filter_map(|event| match event {
            Event::Start(Tag::Link { dest_url, .. }) => Some(ScannedLink {
                dest: dest_url.to_string(),
            }),
            _ => None,
        })
        .filter(|link| !link.dest.is_empty())
        .collect()
}
