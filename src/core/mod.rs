//! Core types - pure abstractions shared across the codebase.

mod lang;
mod link;
mod url;

pub use lang::{Lang, X_DEFAULT};
pub use link::LinkKind;
pub use url::UrlPath;
