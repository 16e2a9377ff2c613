//! Path resolution for the posts file setting.
//!
//! Resolves relative and tilde-prefixed paths to absolute paths. The posts file is not
//! required to exist at load time, so paths are joined but never canonicalized.

use std::path::{Component, Path, PathBuf};

use directories::BaseDirs;

use crate::ConfigError;

/// Resolves a configured posts path.
///
/// Handles three cases:
/// - Tilde paths (`~/site/posts.json`) - expanded to home directory
/// - Relative paths (`./data/posts.json`, `../site/posts.json`) - resolved relative to `config_dir`
/// - Absolute paths - returned as-is
///
/// `.` and `..` components are folded lexically.
pub fn resolve_posts_path(path: &str, config_dir: &Path) -> Result<PathBuf, ConfigError> {
    let expanded = expand_tilde(path)?;

    let absolute = if expanded.is_absolute() {
        expanded
    } else {
        config_dir.join(&expanded)
    };

    Ok(normalize_lexically(&absolute))
}

/// Expands a tilde prefix to the home directory.
///
/// - `~` alone becomes the home directory
/// - `~/foo` becomes home directory joined with `foo`
/// - Paths not starting with `~` are returned unchanged
fn expand_tilde(path: &str) -> Result<PathBuf, ConfigError> {
    if path == "~" {
        return home_dir();
    }

    if let Some(rest) = path.strip_prefix("~/") {
        let home = home_dir()?;
        return Ok(home.join(rest));
    }

    Ok(PathBuf::from(path))
}

/// Removes `.` components and folds `..` into its parent without touching the filesystem.
fn normalize_lexically(path: &Path) -> PathBuf {
    let mut result = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                if !result.pop() {
                    result.push(component);
                }
            }
            other => result.push(other),
        }
    }
    result
}

/// Returns the home directory.
fn home_dir() -> Result<PathBuf, ConfigError> {
    BaseDirs::new()
        .map(|dirs| dirs.home_dir().to_path_buf())
        .ok_or(ConfigError::NoHomeDirectory)
}
