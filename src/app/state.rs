//! Application state management and view model computation.
//!
//! This module defines [`AppState`], the per-session state container, along with
//! the search-match, validation and view model methods the handler and the
//! renderer rely on. It is the single source of truth for a running picker.
//!
//! # State Components
//!
//! - **Navigation**: current directory, cursor and choice list
//! - **Search**: incremental query and the strategy used to match it
//! - **Status**: pending, answered or aborted
//! - **Message**: one-frame validation feedback
//! - **Presentation**: question, page size, theme and first-render flag
//!
//! # Example
//!
//! ```rust,no_run
//! use dirpicker::app::{AppState, NavigationState};
//! use dirpicker::domain::ChoiceLayout;
//! use dirpicker::infrastructure::DirectoryLister;
//! use dirpicker::ui::theme::Theme;
//! use std::path::Path;
//!
//! let navigation = NavigationState::new(
//!     Path::new("/tmp"),
//!     DirectoryLister::default(),
//!     ChoiceLayout::Plain,
//!     false,
//! );
//! let state = AppState::new(navigation, Theme::default());
//! let viewmodel = state.compute_viewmodel();
//! ```

use super::modes::{InputMode, SessionStatus};
use super::navigation::NavigationState;
use super::search::{MatchStrategy, SearchState};
use crate::domain::error::{DirpickerError, Result, FILE_REQUIRED_MESSAGE};
use crate::domain::Choice;
use crate::infrastructure::is_regular_file;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{
    DisplayItem, EmptyState, FooterInfo, HeaderInfo, SearchBarInfo, UIViewModel,
};
use std::path::{Path, MAIN_SEPARATOR};

/// Question shown when none is configured.
pub const DEFAULT_QUESTION: &str = "Select a directory";

/// Rows of the choice list shown at once.
pub const DEFAULT_PAGE_SIZE: usize = 7;

const FIRST_RENDER_HINT: &str = "(Use arrow keys)";
const SEARCH_HINT: &str = "(Use '/' key to search this directory)";
const EMPTY_MESSAGE: &str = "(empty directory)";

/// Per-session application state.
///
/// Mutated by the event handler in response to key input. View models are
/// computed on demand from state snapshots.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Current directory, cursor and choice list.
    pub navigation: NavigationState,

    /// Incremental search state.
    pub search: SearchState,

    /// How search queries are matched against entry names.
    pub search_strategy: MatchStrategy,

    /// Whether the session still accepts input.
    pub status: SessionStatus,

    /// Validation message for the next frame only.
    ///
    /// Cleared by the handler at the start of every event.
    pub message: Option<String>,

    /// Prompt question.
    pub question: String,

    /// Require the final selection to be a regular file.
    pub only_one_file: bool,

    /// Rows of the choice list shown at once.
    pub page_size: usize,

    /// Color scheme for UI rendering.
    pub theme: Theme,

    /// Whether no frame has been drawn yet.
    pub first_render: bool,
}

impl AppState {
    /// Creates a pending session over `navigation` with default presentation.
    #[must_use]
    pub fn new(navigation: NavigationState, theme: Theme) -> Self {
        Self {
            navigation,
            search: SearchState::default(),
            search_strategy: MatchStrategy::default(),
            status: SessionStatus::Pending,
            message: None,
            question: DEFAULT_QUESTION.to_string(),
            only_one_file: false,
            page_size: DEFAULT_PAGE_SIZE,
            theme,
            first_render: true,
        }
    }

    /// Input mode derived from the search state.
    #[must_use]
    pub const fn input_mode(&self) -> InputMode {
        if self.search.is_active() {
            InputMode::Search
        } else {
            InputMode::Normal
        }
    }

    /// Moves the cursor to the entry matching the current query, if any.
    ///
    /// Selection is left unchanged when nothing matches.
    pub fn apply_search_match(&mut self) {
        let found = self
            .search_strategy
            .find(self.search.query(), self.navigation.choices().real_entries());

        if let Some(index) = found {
            self.navigation.select(index);
        }

        tracing::debug!(
            query = %self.search.query(),
            matched = ?found,
            "search match applied"
        );
    }

    /// Checks a submission candidate against the session rules.
    ///
    /// # Errors
    ///
    /// Returns [`DirpickerError::Validation`] when a file is required and
    /// `path` is not a regular file.
    pub fn validate_target(&self, path: &Path) -> Result<()> {
        if self.only_one_file && !is_regular_file(path) {
            return Err(DirpickerError::Validation(FILE_REQUIRED_MESSAGE.to_string()));
        }
        Ok(())
    }

    /// Records that a frame was drawn, dropping the first-render hint.
    pub fn mark_rendered(&mut self) {
        self.first_render = false;
    }

    /// Computes a renderable view model from the current state.
    ///
    /// # Windowing Algorithm
    ///
    /// Separators count as rows, so the window is computed over visible
    /// positions rather than real indices:
    ///
    /// 1. Center the window of `page_size` rows on the selected row
    /// 2. Shift it back if it runs past the end of a long enough list
    /// 3. Mark the model as paginated when the list exceeds the window
    #[must_use]
    pub fn compute_viewmodel(&self) -> UIViewModel {
        let question = self.question.clone();
        let hint = (self.first_render && self.status.is_pending())
            .then(|| FIRST_RENDER_HINT.to_string());
        let header = self.compute_header();
        let footer = FooterInfo {
            hint: SEARCH_HINT.to_string(),
        };

        if let SessionStatus::Answered(path) = &self.status {
            return UIViewModel {
                question,
                hint: None,
                answer: Some(path.display().to_string()),
                header,
                display_items: vec![],
                paginated: false,
                search_bar: None,
                footer,
                message: None,
                empty_state: None,
            };
        }

        let choices = self.navigation.choices();
        let search_bar = self.search.is_active().then(|| SearchBarInfo {
            query: self.search.query().to_string(),
        });

        if choices.real_len() == 0 {
            return UIViewModel {
                question,
                hint,
                answer: None,
                header,
                display_items: vec![],
                paginated: false,
                search_bar,
                footer,
                message: self.message.clone(),
                empty_state: Some(EmptyState {
                    message: EMPTY_MESSAGE.to_string(),
                }),
            };
        }

        let total = choices.len();
        let page_size = self.page_size.max(1);
        let selected_row = choices
            .visible_position(self.navigation.selected())
            .unwrap_or(0);

        let mut visible_start = selected_row.saturating_sub(page_size / 2);
        let visible_end = (visible_start + page_size).min(total);

        let actual_count = visible_end - visible_start;
        if actual_count < page_size && total >= page_size {
            visible_start = visible_end.saturating_sub(page_size);
        }

        let query = self.search.query();
        let display_items = (visible_start..visible_end)
            .filter_map(|row| choices.get(row).map(|choice| (row, choice)))
            .map(|(row, choice)| match choice {
                Choice::Separator => DisplayItem::Separator,
                Choice::Entry(entry) => DisplayItem::Entry {
                    name: entry.name.clone(),
                    is_selected: row == selected_row,
                    highlight_ranges: self.search_strategy.highlight_ranges(&entry.name, query),
                },
            })
            .collect();

        UIViewModel {
            question,
            hint,
            answer: None,
            header,
            display_items,
            paginated: total > page_size,
            search_bar,
            footer,
            message: self.message.clone(),
            empty_state: None,
        }
    }

    fn compute_header(&self) -> HeaderInfo {
        let current = self.navigation.current_path();
        let name = current
            .file_name()
            .map_or_else(|| current.display().to_string(), |n| n.to_string_lossy().into_owned());
        let parent = current
            .parent()
            .map(|p| {
                let mut parent = p.display().to_string();
                if !parent.ends_with(MAIN_SEPARATOR) {
                    parent.push(MAIN_SEPARATOR);
                }
                parent
            })
            .unwrap_or_default();

        HeaderInfo { parent, name }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ChoiceLayout;
    use crate::infrastructure::DirectoryLister;
    use std::fs;
    use tempfile::TempDir;

    fn tree(count: usize) -> TempDir {
        let dir = tempfile::tempdir().unwrap();
        for i in 0..count {
            fs::create_dir(dir.path().join(format!("dir{i:02}"))).unwrap();
        }
        dir
    }

    fn state(dir: &TempDir, layout: ChoiceLayout) -> AppState {
        let navigation = NavigationState::new(
            dir.path(),
            DirectoryLister::default(),
            layout,
            false,
        );
        AppState::new(navigation, Theme::default())
    }

    fn names(vm: &UIViewModel) -> Vec<String> {
        vm.display_items
            .iter()
            .filter_map(|item| match item {
                DisplayItem::Entry { name, .. } => Some(name.clone()),
                DisplayItem::Separator => None,
            })
            .collect()
    }

    fn selected(vm: &UIViewModel) -> Option<String> {
        vm.display_items.iter().find_map(|item| match item {
            DisplayItem::Entry { name, is_selected: true, .. } => Some(name.clone()),
            _ => None,
        })
    }

    #[test]
    fn short_list_is_not_paginated() {
        let dir = tree(3);
        let state = state(&dir, ChoiceLayout::Plain);
        let vm = state.compute_viewmodel();
        assert!(!vm.paginated);
        assert_eq!(names(&vm), vec!["dir00", "dir01", "dir02"]);
        assert_eq!(selected(&vm).as_deref(), Some("dir00"));
        assert_eq!(vm.hint.as_deref(), Some(FIRST_RENDER_HINT));
    }

    #[test]
    fn window_follows_selection() {
        let dir = tree(20);
        let mut state = state(&dir, ChoiceLayout::Plain);
        state.mark_rendered();

        let vm = state.compute_viewmodel();
        assert!(vm.paginated);
        assert!(vm.hint.is_none());
        assert_eq!(names(&vm).first().map(String::as_str), Some("dir00"));
        assert_eq!(vm.display_items.len(), DEFAULT_PAGE_SIZE);

        state.navigation.select(10);
        let vm = state.compute_viewmodel();
        assert_eq!(names(&vm), vec!["dir07", "dir08", "dir09", "dir10", "dir11", "dir12", "dir13"]);
        assert_eq!(selected(&vm).as_deref(), Some("dir10"));

        state.navigation.select(19);
        let vm = state.compute_viewmodel();
        assert_eq!(names(&vm).last().map(String::as_str), Some("dir19"));
        assert_eq!(vm.display_items.len(), DEFAULT_PAGE_SIZE);
    }

    #[test]
    fn guided_rows_include_separators() {
        let dir = tree(1);
        let state = state(&dir, ChoiceLayout::Guided);
        let vm = state.compute_viewmodel();
        assert_eq!(vm.display_items.len(), 3);
        assert_eq!(vm.display_items[1], DisplayItem::Separator);
    }

    #[test]
    fn empty_directory_has_empty_state() {
        let dir = tree(0);
        let state = state(&dir, ChoiceLayout::Plain);
        let vm = state.compute_viewmodel();
        assert!(vm.display_items.is_empty());
        assert!(vm.empty_state.is_some());
    }

    #[test]
    fn header_splits_parent_and_name() {
        let dir = tree(0);
        let state = state(&dir, ChoiceLayout::Plain);
        let vm = state.compute_viewmodel();
        let expected_name = dir.path().file_name().unwrap().to_string_lossy().into_owned();
        assert_eq!(vm.header.name, expected_name);
        assert!(vm.header.parent.ends_with(MAIN_SEPARATOR));
    }

    #[test]
    fn answered_frame_shows_path() {
        let dir = tree(1);
        let mut state = state(&dir, ChoiceLayout::Plain);
        let path = dir.path().join("dir00");
        state.status = SessionStatus::Answered(path.clone());
        let vm = state.compute_viewmodel();
        assert_eq!(vm.answer, Some(path.display().to_string()));
        assert!(vm.display_items.is_empty());
    }

    #[test]
    fn validation_requires_file_only_when_configured() {
        let dir = tree(1);
        let mut state = state(&dir, ChoiceLayout::Plain);
        let target = dir.path().join("dir00");
        assert!(state.validate_target(&target).is_ok());

        state.only_one_file = true;
        let err = state.validate_target(&target).unwrap_err();
        assert_eq!(err.to_string(), FILE_REQUIRED_MESSAGE);
    }
}
