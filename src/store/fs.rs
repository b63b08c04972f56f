//! Filesystem-backed content store.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use jwalk::WalkDir;

use super::ContentStore;

const IGNORED_FILES: &[&str] = &[".DS_Store"];

/// Content store over a directory of markdown files.
///
/// Relative path separators map to `:` in keys, so `<root>/cs/hello.md`
/// enumerates as `cs:hello.md`. Only `*.md` files are considered; hidden
/// files and OS junk are skipped.
pub struct FsStore {
    root: PathBuf,
}

impl FsStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Map a relative file path to its store key.
    fn path_to_key(rel: &Path) -> Option<String> {
        let mut parts = Vec::new();
        for component in rel.components() {
            let name = component.as_os_str().to_str()?;
            parts.push(name);
        }
        Some(parts.join(":"))
    }

    fn is_content_file(path: &Path) -> bool {
        let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
            return false;
        };
        if name.starts_with('.') || IGNORED_FILES.contains(&name) {
            return false;
        }
        path.extension().is_some_and(|ext| ext == "md")
    }
}

impl ContentStore for FsStore {
    fn keys(&self) -> Result<Vec<String>> {
        if !self.root.is_dir() {
            bail!("content directory not found: {}", self.root.display());
        }

        let mut keys: Vec<String> = WalkDir::new(&self.root)
            .into_iter()
            .filter_map(Result::ok)
            .filter(|e| e.file_type().is_file())
            .map(|e| e.path())
            .filter(|p| Self::is_content_file(p))
            .filter_map(|p| {
                let rel = p.strip_prefix(&self.root).ok()?;
                Self::path_to_key(rel)
            })
            .collect();

        // jwalk enumerates in parallel; sort for stable logs and output
        keys.sort();
        Ok(keys)
    }

    fn read(&self, key: &str) -> Result<Vec<u8>> {
        let mut path = self.root.clone();
        for part in key.split(':') {
            path.push(part);
        }
        fs::read(&path).with_context(|| format!("Failed to read `{key}` ({})", path.display()))
    }
}
