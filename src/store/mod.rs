//! Content store boundary: key-value access to the markdown documents.
//!
//! Keys encode language and slug as `"<lang>:<slug>"` (path separators map
//! to `:`), so `content/cs/hello.md` is addressed as `cs:hello.md`. The
//! sitemap builder treats the store as read-only and assumes nothing about
//! key enumeration order.

mod fs;
mod memory;

pub use fs::FsStore;
pub use memory::MemStore;

use anyhow::Result;

/// Read-only key-value access to stored documents.
pub trait ContentStore {
    /// Enumerate all keys in the store.
    fn keys(&self) -> Result<Vec<String>>;

    /// Fetch the raw bytes for one key.
    fn read(&self, key: &str) -> Result<Vec<u8>>;
}
