//! blake3-backed output freshness.
//!
//! Output files are rewritten only when their rendered bytes actually
//! changed, keeping mtimes stable for deploy tooling that rsyncs on
//! timestamp.

use std::fs::{self, File};
use std::io::{self, BufReader};
use std::path::Path;

use anyhow::{Context, Result};

/// A 256-bit blake3 digest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ContentHash([u8; 32]);

impl ContentHash {
    #[inline]
    pub const fn new(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    pub fn to_hex(self) -> String {
        hex::encode(self.0)
    }
}

impl std::fmt::Display for ContentHash {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // First 16 hex chars are plenty for log lines
        f.write_str(&self.to_hex()[..16])
    }
}

#[inline]
pub fn hash_bytes(content: &[u8]) -> ContentHash {
    ContentHash::new(*blake3::hash(content).as_bytes())
}

/// Hash a file's contents, streaming rather than slurping. `None` when
/// the file is missing or unreadable.
pub fn hash_file(path: &Path) -> Option<ContentHash> {
    let file = File::open(path).ok()?;
    let mut hasher = blake3::Hasher::new();
    io::copy(&mut BufReader::new(file), &mut hasher).ok()?;
    Some(ContentHash::new(*hasher.finalize().as_bytes()))
}

/// Write `content` to `path` unless the file already holds identical bytes.
///
/// Returns `true` if the file was written, `false` if it was already fresh.
pub fn write_if_changed(path: &Path, content: &[u8]) -> Result<bool> {
    if hash_file(path) == Some(hash_bytes(content)) {
        return Ok(false);
    }

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("cannot create directory `{}`", parent.display()))?;
    }
    fs::write(path, content).with_context(|| format!("cannot write `{}`", path.display()))?;
    Ok(true)
}
