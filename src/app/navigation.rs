//! Directory navigation state machine.
//!
//! [`NavigationState`] owns the current directory, the cursor and the choice list
//! built for that directory. The states are implicit in `(current_path, depth)`;
//! the transitions are:
//!
//! - **move up / down**: circular cursor movement over the selectable entries
//! - **drill in**: enter the selected entry
//! - **go back**: enter the parent directory, bounded by the root unless
//!   navigation above it is allowed
//!
//! Leaving a directory records the cursor position for it, and entering a
//! directory restores the recorded position (or the first entry). Going into a
//! folder and straight back therefore lands on the same row.

use crate::domain::{ChoiceLayout, ChoiceSet, Entry, EntryValue};
use crate::infrastructure::{is_regular_file, normalize, DirectoryLister};
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// What submitting the current selection means.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitTarget {
    /// Candidate answer, still subject to validation.
    Path(PathBuf),
    /// Guided layout: the selection is a directory to enter.
    DrillIn,
    /// Guided layout: the selection is the "go back" entry.
    GoBack,
}

/// Per-session navigation state.
#[derive(Debug, Clone)]
pub struct NavigationState {
    root_path: PathBuf,
    current_path: PathBuf,
    /// Real index into `choices`.
    selected: usize,
    /// Last cursor position per visited directory.
    path_index: HashMap<PathBuf, usize>,
    depth: usize,
    choices: ChoiceSet,
    lister: DirectoryLister,
    layout: ChoiceLayout,
    allow_above_root: bool,
}

impl NavigationState {
    /// Creates the state rooted at `root_path` and lists it.
    ///
    /// `root_path` should be absolute; it is normalized here.
    #[must_use]
    pub fn new(
        root_path: &Path,
        lister: DirectoryLister,
        layout: ChoiceLayout,
        allow_above_root: bool,
    ) -> Self {
        let root_path = normalize(root_path);
        let mut state = Self {
            current_path: root_path.clone(),
            root_path,
            selected: 0,
            path_index: HashMap::new(),
            depth: 0,
            choices: ChoiceSet::default(),
            lister,
            layout,
            allow_above_root,
        };
        state.rebuild();
        state
    }

    #[must_use]
    pub fn root_path(&self) -> &Path {
        &self.root_path
    }

    #[must_use]
    pub fn current_path(&self) -> &Path {
        &self.current_path
    }

    /// Real index of the cursor. Meaningless when the list is empty.
    #[must_use]
    pub const fn selected(&self) -> usize {
        self.selected
    }

    #[must_use]
    pub const fn depth(&self) -> usize {
        self.depth
    }

    #[must_use]
    pub const fn choices(&self) -> &ChoiceSet {
        &self.choices
    }

    #[must_use]
    pub const fn layout(&self) -> ChoiceLayout {
        self.layout
    }

    #[must_use]
    pub fn selected_entry(&self) -> Option<&Entry> {
        self.choices.get_real(self.selected)
    }

    /// Moves the cursor to `index`. Out-of-range indices are ignored.
    pub fn select(&mut self, index: usize) -> bool {
        if index < self.choices.real_len() {
            self.selected = index;
            true
        } else {
            false
        }
    }

    /// Moves selection up by one position, wrapping to the bottom.
    ///
    /// No-op if the list is empty.
    pub fn move_up(&mut self) {
        let len = self.choices.real_len();
        if len == 0 {
            return;
        }
        self.selected = (self.selected + len - 1) % len;
    }

    /// Moves selection down by one position, wrapping to the top.
    ///
    /// No-op if the list is empty.
    pub fn move_down(&mut self) {
        let len = self.choices.real_len();
        if len == 0 {
            return;
        }
        self.selected = (self.selected + 1) % len;
    }

    /// Whether [`Self::go_back`] would change directory.
    #[must_use]
    pub fn can_go_back(&self) -> bool {
        self.current_path.parent().is_some()
            && (self.allow_above_root || self.current_path != self.root_path)
    }

    /// Enters the selected entry.
    ///
    /// A regular file is entered too: with files included its listing is the
    /// file itself. Returns whether the directory changed.
    pub fn drill_in(&mut self) -> bool {
        let (is_go_back, target) = match self.selected_entry() {
            Some(entry) => (
                entry.value == EntryValue::GoBack,
                entry.resolve(&self.current_path),
            ),
            None => return false,
        };

        if is_go_back {
            return self.go_back();
        }

        let Some(target) = target.map(|path| normalize(&path)) else {
            return false;
        };
        if target == self.current_path {
            return false;
        }

        tracing::debug!(from = %self.current_path.display(), to = %target.display(), "drilling in");
        self.remember_selection();
        self.depth += 1;
        self.enter(target);
        true
    }

    /// Enters the parent directory.
    ///
    /// No-op at the root when navigation above it is not allowed, and at the
    /// filesystem root. Returns whether the directory changed.
    pub fn go_back(&mut self) -> bool {
        if !self.can_go_back() {
            tracing::debug!(
                path = %self.current_path.display(),
                "already at the top, not going back"
            );
            return false;
        }
        let Some(parent) = self.current_path.parent().map(Path::to_path_buf) else {
            return false;
        };

        tracing::debug!(from = %self.current_path.display(), to = %parent.display(), "going back");
        self.remember_selection();
        self.depth = self.depth.saturating_sub(1);
        self.enter(parent);
        true
    }

    /// Absolute, normalized path of the selected entry.
    ///
    /// `None` for an empty list and for the action sentinels.
    #[must_use]
    pub fn resolve_selected(&self) -> Option<PathBuf> {
        self.selected_entry()
            .and_then(|entry| entry.resolve(&self.current_path))
            .map(|path| normalize(&path))
    }

    /// Interprets a submission of the current selection.
    ///
    /// In the plain layout the selection is always the candidate, or the current
    /// directory when the list is empty. In the guided layout directories are
    /// entered rather than submitted, and only files and "choose this directory"
    /// produce a candidate.
    #[must_use]
    pub fn submit_target(&self) -> SubmitTarget {
        match self.layout {
            ChoiceLayout::Plain => SubmitTarget::Path(
                self.resolve_selected()
                    .unwrap_or_else(|| self.current_path.clone()),
            ),
            ChoiceLayout::Guided => match self.selected_entry().map(|entry| &entry.value) {
                Some(EntryValue::GoBack) => SubmitTarget::GoBack,
                Some(EntryValue::Segment(_)) => match self.resolve_selected() {
                    Some(path) if is_regular_file(&path) => SubmitTarget::Path(path),
                    _ => SubmitTarget::DrillIn,
                },
                Some(EntryValue::ChooseCurrent) | None => {
                    SubmitTarget::Path(self.current_path.clone())
                }
            },
        }
    }

    fn remember_selection(&mut self) {
        self.path_index
            .insert(self.current_path.clone(), self.selected);
    }

    fn enter(&mut self, path: PathBuf) {
        self.current_path = path;
        self.rebuild();

        let remembered = self.path_index.get(&self.current_path).copied().unwrap_or(0);
        self.selected = remembered.min(self.choices.real_len().saturating_sub(1));
    }

    fn rebuild(&mut self) {
        let names = self.lister.list(&self.current_path);
        self.choices = ChoiceSet::build(names, self.layout, self.can_go_back());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::ListOptions;
    use std::fs;
    use tempfile::TempDir;

    fn fixture() -> TempDir {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir_all(dir.path().join("folder1/folder1-1")).unwrap();
        fs::create_dir_all(dir.path().join("folder1/folder1-2")).unwrap();
        fs::create_dir(dir.path().join("zfolder2")).unwrap();
        fs::write(dir.path().join("readme.txt"), "hello").unwrap();
        dir
    }

    fn plain(dir: &TempDir) -> NavigationState {
        NavigationState::new(dir.path(), DirectoryLister::default(), ChoiceLayout::Plain, false)
    }

    #[test]
    fn movement_wraps_both_ways() {
        let dir = fixture();
        let mut nav = plain(&dir);
        assert_eq!(nav.choices().real_len(), 2);

        nav.move_up();
        assert_eq!(nav.selected(), 1);
        nav.move_down();
        assert_eq!(nav.selected(), 0);
    }

    #[test]
    fn movement_on_empty_list_is_inert() {
        let dir = tempfile::tempdir().unwrap();
        let mut nav = NavigationState::new(
            dir.path(),
            DirectoryLister::default(),
            ChoiceLayout::Plain,
            false,
        );
        nav.move_down();
        nav.move_up();
        assert_eq!(nav.selected(), 0);
        assert!(nav.selected_entry().is_none());
    }

    #[test]
    fn drill_in_then_back_restores_cursor() {
        let dir = fixture();
        let mut nav = plain(&dir);
        nav.move_down();
        nav.move_up();
        assert!(nav.drill_in());
        assert_eq!(nav.current_path(), dir.path().join("folder1"));
        assert_eq!(nav.depth(), 1);

        nav.move_down();
        assert!(nav.go_back());
        assert_eq!(nav.current_path(), dir.path());
        assert_eq!(nav.selected(), 0);
        assert_eq!(nav.depth(), 0);

        assert!(nav.drill_in());
        assert_eq!(nav.selected(), 1, "cursor inside folder1 is remembered too");
    }

    #[test]
    fn go_back_is_bounded_by_root() {
        let dir = fixture();
        let mut nav = plain(&dir);
        nav.move_down();
        assert!(!nav.go_back());
        assert_eq!(nav.current_path(), dir.path());
        assert_eq!(nav.selected(), 1);
        assert_eq!(nav.depth(), 0);
    }

    #[test]
    fn go_back_above_root_when_allowed() {
        let dir = fixture();
        let start = dir.path().join("folder1");
        let mut nav = NavigationState::new(
            &start,
            DirectoryLister::default(),
            ChoiceLayout::Plain,
            true,
        );
        assert!(nav.go_back());
        assert_eq!(nav.current_path(), dir.path());
        assert_eq!(nav.depth(), 0);
        assert!(nav.choices().real_entries().any(|entry| entry.name == "zfolder2"));
    }

    #[test]
    fn drilling_into_a_file_lists_the_file() {
        let dir = fixture();
        let lister = DirectoryLister::new(ListOptions {
            include_files: true,
            filter: None,
        });
        let mut nav = NavigationState::new(dir.path(), lister, ChoiceLayout::Plain, false);
        assert!(nav.select(1));
        assert_eq!(nav.selected_entry().unwrap().name, "readme.txt");

        assert!(nav.drill_in());
        let file = dir.path().join("readme.txt");
        assert_eq!(nav.current_path(), file);
        assert_eq!(nav.resolve_selected().unwrap(), file);
        assert!(!nav.drill_in(), "the file's own entry points at the current path");
    }

    #[test]
    fn guided_layout_offers_go_back_below_root_only() {
        let dir = fixture();
        let mut nav = NavigationState::new(
            dir.path(),
            DirectoryLister::default(),
            ChoiceLayout::Guided,
            false,
        );
        assert!(nav.choices().real_entries().all(|entry| entry.value != EntryValue::GoBack));

        assert_eq!(nav.submit_target(), SubmitTarget::DrillIn);
        assert!(nav.drill_in());
        let go_back = nav
            .choices()
            .real_entries()
            .position(|entry| entry.value == EntryValue::GoBack)
            .unwrap();
        nav.select(go_back);
        assert_eq!(nav.submit_target(), SubmitTarget::GoBack);
        assert!(nav.drill_in());
        assert_eq!(nav.current_path(), dir.path());
    }

    #[test]
    fn guided_choose_current_submits_directory() {
        let dir = fixture();
        let mut nav = NavigationState::new(
            dir.path(),
            DirectoryLister::default(),
            ChoiceLayout::Guided,
            false,
        );
        nav.select(2);
        assert_eq!(nav.selected_entry().unwrap().value, EntryValue::ChooseCurrent);
        assert_eq!(nav.submit_target(), SubmitTarget::Path(dir.path().to_path_buf()));
    }

    #[test]
    fn plain_submit_on_empty_directory_targets_current() {
        let dir = fixture();
        let mut nav = plain(&dir);
        nav.drill_in();
        nav.drill_in();
        assert_eq!(nav.choices().real_len(), 0);
        assert_eq!(
            nav.submit_target(),
            SubmitTarget::Path(dir.path().join("folder1/folder1-1"))
        );
    }
}
