//! Translation-aware sitemap entry building.
//!
//! Three sequential stages over the content store:
//! 1. parse - every key becomes a `PostRecord` (fail-fast, concurrent reads)
//! 2. group - records fold into `translation_key -> (lang -> slug)`
//! 3. emit  - one `SitemapEntry` per record, alternates from its group

mod builder;
mod entry;
mod error;
mod group;

pub use builder::{build_entries, parse_records};
pub use entry::{Alternative, SitemapEntry};
pub use error::SitemapError;
pub use group::TranslationGroups;
