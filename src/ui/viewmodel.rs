//! View model types representing renderable UI state.
//!
//! View models are computed from application state by
//! `AppState::compute_viewmodel()` and consumed by the renderer. They contain no
//! business logic, only display-ready data: the visible window of the choice
//! list, highlight ranges for search matches and the optional prompt chrome.
//!
//! # Example
//!
//! ```rust
//! use dirpicker::ui::viewmodel::{DisplayItem, FooterInfo, HeaderInfo, UIViewModel};
//!
//! let vm = UIViewModel {
//!     question: "Select a directory".to_string(),
//!     hint: Some("(Use arrow keys)".to_string()),
//!     answer: None,
//!     header: HeaderInfo { parent: "/home/".to_string(), name: "user".to_string() },
//!     display_items: vec![DisplayItem::Entry {
//!         name: "code".to_string(),
//!         is_selected: true,
//!         highlight_ranges: vec![],
//!     }],
//!     paginated: false,
//!     search_bar: None,
//!     footer: FooterInfo { hint: "(Use '/' key to search this directory)".to_string() },
//!     message: None,
//!     empty_state: None,
//! };
//! assert_eq!(vm.display_items.len(), 1);
//! ```

/// Complete UI view model for one frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UIViewModel {
    /// Prompt question.
    pub question: String,

    /// Dim hint after the question, only on the first frame.
    pub hint: Option<String>,

    /// Chosen path once the session is answered.
    ///
    /// When set, the renderer draws only the question and the answer.
    pub answer: Option<String>,

    /// Current directory line.
    pub header: HeaderInfo,

    /// Rows of the visible window of the choice list.
    pub display_items: Vec<DisplayItem>,

    /// Whether the list is longer than the window.
    pub paginated: bool,

    /// Search line, present while searching.
    pub search_bar: Option<SearchBarInfo>,

    /// Help line, shown when not searching.
    pub footer: FooterInfo,

    /// Inline validation message.
    pub message: Option<String>,

    /// Shown instead of the list when the directory has no entries.
    pub empty_state: Option<EmptyState>,
}

/// One row of the choice list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DisplayItem {
    Entry {
        name: String,
        is_selected: bool,
        /// Character ranges to highlight for the active search query.
        ///
        /// Each tuple is `(start_index, end_index)` in UTF-8 character indices.
        highlight_ranges: Vec<(usize, usize)>,
    },
    Separator,
}

/// Current directory, split for styling.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderInfo {
    /// Parent directory with a trailing separator, or empty at the filesystem root.
    pub parent: String,
    /// Final component of the current directory.
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FooterInfo {
    pub hint: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmptyState {
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchBarInfo {
    /// Current search query text.
    pub query: String,
}
