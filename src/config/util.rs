//! Config file discovery helpers.

use std::path::{Path, PathBuf};

/// Locate the config file, walking up from the current directory.
///
/// Running `altmap` from `content/cs/` still finds the `altmap.toml`
/// sitting at the project root. Absolute paths are taken as-is.
pub fn find_config_file(config_name: &Path) -> Option<PathBuf> {
    if config_name.is_absolute() {
        return config_name.exists().then(|| config_name.to_path_buf());
    }

    let cwd = std::env::current_dir().ok()?;
    cwd.ancestors()
        .map(|dir| dir.join(config_name))
        .find(|candidate| candidate.exists())
}

/// Expand a leading `~` to the user's home directory. Anything else,
/// including non-UTF-8 paths, comes back unchanged.
pub fn expand_tilde(path: &Path) -> PathBuf {
    match path.to_str() {
        Some(s) => PathBuf::from(shellexpand::tilde(s).into_owned()),
        None => path.to_path_buf(),
    }
}
