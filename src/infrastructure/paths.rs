//! Path manipulation utilities.
//!
//! This module provides lexical path normalization (no filesystem access, so
//! symlinks are not resolved), tilde expansion for configured base paths and the
//! location of the trace data directory.

use std::io;
use std::path::{Component, Path, PathBuf};

/// Directory name used under the platform data directory.
const APP_DIR_NAME: &str = "dirpicker";

/// Returns the data directory used for trace files.
///
/// Resolves to `$XDG_DATA_HOME/dirpicker` (usually `~/.local/share/dirpicker`) on
/// Linux and the platform equivalent elsewhere. `None` when no home directory can
/// be determined.
#[must_use]
pub fn data_dir() -> Option<PathBuf> {
    dirs::data_local_dir().map(|dir| dir.join(APP_DIR_NAME))
}

/// Expands a leading `~` to the user's home directory.
///
/// Paths without a leading tilde, and every path when the home directory is
/// unknown, are returned unchanged.
///
/// # Examples
///
/// ```
/// use dirpicker::infrastructure::expand_tilde;
/// use std::path::PathBuf;
///
/// assert_eq!(expand_tilde("/absolute/path"), PathBuf::from("/absolute/path"));
/// if let Some(home) = dirs::home_dir() {
///     assert_eq!(expand_tilde("~/projects"), home.join("projects"));
/// }
/// ```
#[must_use]
pub fn expand_tilde(path: &str) -> PathBuf {
    let Some(home) = dirs::home_dir() else {
        return PathBuf::from(path);
    };

    if path == "~" {
        home
    } else if let Some(rest) = path.strip_prefix("~/") {
        home.join(rest)
    } else {
        PathBuf::from(path)
    }
}

/// Lexically normalizes a path.
///
/// Removes `.` components, folds `..` into the preceding normal component and
/// drops trailing separators. `..` directly under the root is discarded.
///
/// # Examples
///
/// ```
/// use dirpicker::infrastructure::normalize;
/// use std::path::{Path, PathBuf};
///
/// assert_eq!(normalize(Path::new("/a/./b/../c/")), PathBuf::from("/a/c"));
/// assert_eq!(normalize(Path::new("/..")), PathBuf::from("/"));
/// assert_eq!(normalize(Path::new("../x")), PathBuf::from("../x"));
/// ```
#[must_use]
pub fn normalize(path: &Path) -> PathBuf {
    let mut normalized = PathBuf::new();

    for component in path.components() {
        match component {
            Component::Prefix(_) | Component::RootDir => normalized.push(component.as_os_str()),
            Component::CurDir => {}
            Component::ParentDir => {
                let last_is_normal =
                    matches!(normalized.components().next_back(), Some(Component::Normal(_)));
                if last_is_normal {
                    normalized.pop();
                } else if !normalized.has_root() {
                    normalized.push("..");
                }
            }
            Component::Normal(part) => normalized.push(part),
        }
    }

    if normalized.as_os_str().is_empty() {
        normalized.push(".");
    }

    normalized
}

/// Resolves `path` against the process working directory and normalizes it.
///
/// # Errors
///
/// Fails only when `path` is relative and the working directory is unavailable.
pub fn absolutize(path: &Path) -> io::Result<PathBuf> {
    if path.is_absolute() {
        Ok(normalize(path))
    } else {
        Ok(normalize(&std::env::current_dir()?.join(path)))
    }
}
