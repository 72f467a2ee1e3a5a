//! Input mode and session status types.
//!
//! This module defines the state machine enums that control how input is
//! interpreted and whether the session is still accepting it.
//!
//! # State Machine
//!
//! While a session is pending it is in one of two input modes:
//! - **Normal**: navigation keys move the cursor and change directory
//! - **Search**: characters build a query that jumps the cursor to a match
//!
//! ```text
//!            "/"                      backspace to empty,
//!   Normal ───────▶ Search ─────────▶ Enter, Esc ───▶ Normal
//! ```
//!
//! Submission or abort moves the session out of `Pending` for good.

use std::path::PathBuf;

/// Current input handling mode.
///
/// Selects which handler set [`crate::app::keymap::translate`] routes key
/// presses to.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum InputMode {
    /// Default navigation mode.
    ///
    /// Available keys: arrows, j/k, Ctrl+n/p, left/right, `/` (search), Enter
    /// (submit).
    #[default]
    Normal,

    /// Incremental search mode.
    ///
    /// Word characters, `.` and `-` extend the query, backspace shortens it,
    /// Enter and Esc leave the mode. Arrow keys keep navigating.
    Search,
}

/// Lifecycle of a picker session.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SessionStatus {
    /// Accepting input.
    #[default]
    Pending,
    /// Completed with the chosen absolute path.
    Answered(PathBuf),
    /// Cancelled by the user or by the input source closing.
    Aborted,
}

impl SessionStatus {
    #[must_use]
    pub const fn is_pending(&self) -> bool {
        matches!(self, Self::Pending)
    }
}
