//! Directory listing for the choice list.
//!
//! [`DirectoryLister::list`] turns a path into the sorted names shown to the
//! user. It never fails: an unreadable directory is logged and rendered as empty,
//! so a permission problem deep in the tree cannot end the session.
//!
//! # Filtering Rules
//!
//! Applied to every entry, in order:
//!
//! 1. Symlinks are excluded (checked with `symlink_metadata`, not followed)
//! 2. Names starting with `.` are excluded
//! 3. Non-directories are excluded unless `include_files` is set
//! 4. The user filter, if any, must accept the entry's absolute path
//!
//! # Single-File Listing
//!
//! Listing a regular file with `include_files` set yields the file's own path as
//! the only element. This lets navigation land on a file and still offer it for
//! selection.

use crate::domain::{DirpickerError, Result};
use std::fmt;
use std::fs;
use std::path::Path;
use std::sync::Arc;

/// User-supplied predicate over absolute entry paths.
///
/// Cheap to clone; the closure is shared.
///
/// ```
/// use dirpicker::ItemFilter;
/// use std::path::Path;
///
/// let filter = ItemFilter::new(|path| !path.ends_with("target"));
/// assert!(filter.accepts(Path::new("/repo/src")));
/// assert!(!filter.accepts(Path::new("/repo/target")));
/// ```
#[derive(Clone)]
pub struct ItemFilter(Arc<dyn Fn(&Path) -> bool + Send + Sync>);

impl ItemFilter {
    pub fn new<F>(predicate: F) -> Self
    where
        F: Fn(&Path) -> bool + Send + Sync + 'static,
    {
        Self(Arc::new(predicate))
    }

    #[must_use]
    pub fn accepts(&self, path: &Path) -> bool {
        (self.0)(path)
    }
}

impl fmt::Debug for ItemFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ItemFilter").finish_non_exhaustive()
    }
}

/// Options controlling which entries are listed.
#[derive(Debug, Clone, Default)]
pub struct ListOptions {
    /// List regular files as well as directories.
    pub include_files: bool,
    /// Applied last, on the entry's absolute path.
    pub filter: Option<ItemFilter>,
}

/// Produces sorted, filtered directory listings.
#[derive(Debug, Clone, Default)]
pub struct DirectoryLister {
    options: ListOptions,
}

impl DirectoryLister {
    #[must_use]
    pub const fn new(options: ListOptions) -> Self {
        Self { options }
    }

    #[must_use]
    pub const fn options(&self) -> &ListOptions {
        &self.options
    }

    /// Lists the entry names of `path`.
    ///
    /// Returns `[path]` when `path` is a regular file and files are included, and
    /// an empty list when the directory cannot be read.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use dirpicker::infrastructure::{DirectoryLister, ListOptions};
    /// use std::path::Path;
    ///
    /// let lister = DirectoryLister::new(ListOptions::default());
    /// for name in lister.list(Path::new("/usr")) {
    ///     println!("{name}");
    /// }
    /// ```
    #[must_use]
    pub fn list(&self, path: &Path) -> Vec<String> {
        let _span = tracing::debug_span!("list_directory", path = %path.display()).entered();

        match self.read_entries(path) {
            Ok(names) => {
                tracing::debug!(count = names.len(), "directory listed");
                names
            }
            Err(err) => {
                if self.options.include_files && is_regular_file(path) {
                    tracing::debug!("path is a file, listing it on its own");
                    return vec![path.to_string_lossy().into_owned()];
                }
                tracing::warn!(error = %err, "directory listing failed, showing it as empty");
                Vec::new()
            }
        }
    }

    fn read_entries(&self, path: &Path) -> Result<Vec<String>> {
        let listing_error = |source| DirpickerError::Listing {
            path: path.to_path_buf(),
            source,
        };

        let mut names = Vec::new();

        for entry in fs::read_dir(path).map_err(listing_error)? {
            let entry = entry.map_err(listing_error)?;

            let Ok(name) = entry.file_name().into_string() else {
                tracing::debug!(entry = ?entry.file_name(), "skipping entry with non UTF-8 name");
                continue;
            };

            if name.starts_with('.') {
                continue;
            }

            let absolute = path.join(&name);
            let metadata = match fs::symlink_metadata(&absolute) {
                Ok(metadata) => metadata,
                Err(err) => {
                    tracing::debug!(entry = %name, error = %err, "skipping unreadable entry");
                    continue;
                }
            };

            let file_type = metadata.file_type();
            if file_type.is_symlink() {
                continue;
            }
            if !self.options.include_files && !file_type.is_dir() {
                continue;
            }
            if let Some(filter) = &self.options.filter {
                if !filter.accepts(&absolute) {
                    continue;
                }
            }

            names.push(name);
        }

        names.sort();
        Ok(names)
    }
}

/// Whether `path` is a regular file, following symlinks.
#[must_use]
pub fn is_regular_file(path: &Path) -> bool {
    fs::metadata(path).is_ok_and(|metadata| metadata.is_file())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn fixture() -> TempDir {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir_all(dir.path().join("folder1/folder1-1")).unwrap();
        fs::create_dir(dir.path().join("zfolder2")).unwrap();
        fs::create_dir(dir.path().join(".git")).unwrap();
        fs::write(dir.path().join("some.png"), [8, 6, 7, 5, 3, 0, 9]).unwrap();
        fs::write(dir.path().join(".hidden"), "x").unwrap();
        dir
    }

    #[test]
    fn lists_only_directories_by_default() {
        let dir = fixture();
        let lister = DirectoryLister::default();
        assert_eq!(lister.list(dir.path()), vec!["folder1", "zfolder2"]);
    }

    #[test]
    fn includes_files_when_asked() {
        let dir = fixture();
        let lister = DirectoryLister::new(ListOptions {
            include_files: true,
            filter: None,
        });
        assert_eq!(lister.list(dir.path()), vec!["folder1", "some.png", "zfolder2"]);
    }

    #[test]
    fn user_filter_applies_to_absolute_paths() {
        let dir = fixture();
        let root = dir.path().to_path_buf();
        let lister = DirectoryLister::new(ListOptions {
            include_files: true,
            filter: Some(ItemFilter::new(move |path| {
                path.starts_with(&root) && path.extension().is_none()
            })),
        });
        assert_eq!(lister.list(dir.path()), vec!["folder1", "zfolder2"]);
    }

    #[test]
    fn file_path_lists_itself_when_files_included() {
        let dir = fixture();
        let file = dir.path().join("some.png");
        let with_files = DirectoryLister::new(ListOptions {
            include_files: true,
            filter: None,
        });
        assert_eq!(with_files.list(&file), vec![file.to_string_lossy().into_owned()]);
        assert!(DirectoryLister::default().list(&file).is_empty());
    }

    #[test]
    fn missing_directory_lists_empty() {
        let dir = fixture();
        assert!(DirectoryLister::default().list(&dir.path().join("nope")).is_empty());
    }

    #[cfg(unix)]
    #[test]
    fn symlinks_are_never_listed() {
        let dir = fixture();
        let link = |target: &str, name: &str| {
            std::os::unix::fs::symlink(dir.path().join(target), dir.path().join(name)).unwrap();
        };
        link("folder1", "a-symlink");
        link("some.png", "b-link");

        let with_files = DirectoryLister::new(ListOptions {
            include_files: true,
            filter: None,
        });
        let names = with_files.list(dir.path());
        assert!(!names.iter().any(|name| name == "a-symlink" || name == "b-link"));
        let dirs_only = DirectoryLister::default().list(dir.path());
        assert!(!dirs_only.iter().any(|name| name == "a-symlink"));
    }
}
