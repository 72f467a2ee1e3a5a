//! Selectable list entries.
//!
//! An [`Entry`] is one selectable row of the choice list. Its [`EntryValue`] is
//! either a path (a name relative to the current directory, or an absolute path
//! for the single-file listing) or one of the two action sentinels used by the
//! guided layout.

use std::path::{Path, PathBuf};

/// Display name of the [`EntryValue::ChooseCurrent`] sentinel.
pub const CHOOSE_CURRENT_LABEL: &str = "choose this directory";

/// Display name of the [`EntryValue::GoBack`] sentinel.
pub const GO_BACK_LABEL: &str = "go back a directory";

/// What selecting an entry refers to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntryValue {
    /// A path segment, resolved against the current directory.
    ///
    /// Absolute values pass through resolution unchanged.
    Segment(PathBuf),
    /// Confirm the current directory.
    ChooseCurrent,
    /// Navigate to the parent directory.
    GoBack,
}

/// A selectable row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub name: String,
    pub value: EntryValue,
}

impl Entry {
    /// Creates an entry whose value is its own name.
    #[must_use]
    pub fn segment(name: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            value: EntryValue::Segment(PathBuf::from(&name)),
            name,
        }
    }

    #[must_use]
    pub fn choose_current() -> Self {
        Self {
            name: CHOOSE_CURRENT_LABEL.to_string(),
            value: EntryValue::ChooseCurrent,
        }
    }

    #[must_use]
    pub fn go_back() -> Self {
        Self {
            name: GO_BACK_LABEL.to_string(),
            value: EntryValue::GoBack,
        }
    }

    /// Resolves a [`EntryValue::Segment`] against `current`.
    ///
    /// Returns `None` for the sentinels, which do not name a path.
    ///
    /// ```
    /// use dirpicker::domain::Entry;
    /// use std::path::Path;
    ///
    /// let entry = Entry::segment("src");
    /// assert_eq!(entry.resolve(Path::new("/repo")).unwrap(), Path::new("/repo/src"));
    /// assert!(Entry::go_back().resolve(Path::new("/repo")).is_none());
    /// ```
    #[must_use]
    pub fn resolve(&self, current: &Path) -> Option<PathBuf> {
        match &self.value {
            EntryValue::Segment(segment) if segment.is_absolute() => Some(segment.clone()),
            EntryValue::Segment(segment) => Some(current.join(segment)),
            EntryValue::ChooseCurrent | EntryValue::GoBack => None,
        }
    }
}

/// One row of a choice list: a selectable entry or a visual separator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Choice {
    Entry(Entry),
    Separator,
}

impl Choice {
    #[must_use]
    pub const fn is_separator(&self) -> bool {
        matches!(self, Self::Separator)
    }

    #[must_use]
    pub const fn as_entry(&self) -> Option<&Entry> {
        match self {
            Self::Entry(entry) => Some(entry),
            Self::Separator => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absolute_segment_passes_through() {
        let entry = Entry::segment("/etc/hosts");
        assert_eq!(entry.resolve(Path::new("/home/me")).unwrap(), Path::new("/etc/hosts"));
    }

    #[test]
    fn sentinels_carry_their_labels() {
        assert_eq!(Entry::choose_current().name, CHOOSE_CURRENT_LABEL);
        assert_eq!(Entry::go_back().value, EntryValue::GoBack);
        assert!(Entry::choose_current().resolve(Path::new("/")).is_none());
    }

    #[test]
    fn separator_has_no_entry() {
        assert!(Choice::Separator.is_separator());
        assert!(Choice::Separator.as_entry().is_none());
        assert_eq!(Choice::Entry(Entry::segment("a")).as_entry().unwrap().name, "a");
    }
}
