//! Path normalization.

use std::path::{Path, PathBuf};

/// Best-effort absolute form of a path.
///
/// `canonicalize()` handles the common case (and resolves symlinks and
/// dot segments); paths that do not exist yet fall back to joining onto
/// the current directory.
#[inline]
pub fn normalize_path(path: &Path) -> PathBuf {
    if let Ok(resolved) = path.canonicalize() {
        return resolved;
    }
    if path.is_absolute() {
        return path.to_path_buf();
    }
    match std::env::current_dir() {
        Ok(cwd) => cwd.join(path),
        Err(_) => path.to_path_buf(),
    }
}
