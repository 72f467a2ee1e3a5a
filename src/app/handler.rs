//! Event handling and state transition logic.
//!
//! This module implements the event handler that processes translated key input,
//! turning it into state changes and action sequences. It is the single place
//! where the picker's navigation and search rules are applied.
//!
//! # Architecture
//!
//! The handler follows a unidirectional data flow pattern:
//! 1. Raw keys arrive from the terminal harness as [`KeyInput`]
//! 2. [`crate::app::keymap::translate`] maps them to an [`Event`] for the current mode
//! 3. [`handle_event`] mutates `AppState` through navigation and search methods
//! 4. Actions are collected and returned for the session loop to execute
//!
//! # Event Types
//!
//! - **Navigation**: `KeyUp`, `KeyDown`, `KeyLeft`, `KeyRight`
//! - **Search**: `SearchMode`, `Char`, `Backspace`, `Escape`
//! - **Completion**: `Submit`, `Abort`

use crate::app::keymap::{translate, KeyInput};
use crate::app::modes::SessionStatus;
use crate::app::navigation::SubmitTarget;
use crate::app::{Action, AppState};
use crate::domain::error::{DirpickerError, Result};

/// Events produced by the key map.
///
/// Each event is a discrete occurrence processed to completion before the next
/// one is read, which keeps state transitions deterministic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Moves selection cursor up by one position (wraps to bottom).
    KeyUp,
    /// Moves selection cursor down by one position (wraps to top).
    KeyDown,
    /// Goes back to the parent directory.
    KeyLeft,
    /// Drills into the selected entry.
    KeyRight,
    /// Enters search mode with an empty query.
    SearchMode,
    /// Appends a character to the search query.
    Char(char),
    /// Removes the last character from the search query.
    Backspace,
    /// Leaves search mode.
    Escape,
    /// Line submission.
    Submit,
    /// Cancels the session.
    Abort,
}

/// Processes an event, mutates application state, and returns actions to execute.
///
/// The inline validation message only lives for one frame: it is cleared before
/// the event is applied. Events arriving after the session resolved are ignored.
///
/// # Parameters
///
/// * `state` - Mutable reference to application state
/// * `event` - Event to process
///
/// # Returns
///
/// `(should_render, actions)`. The actions vector is empty unless the session
/// completed or was aborted.
///
/// # Errors
///
/// Propagates unexpected errors from target validation. A rejected target is not
/// an error; it becomes the inline message.
pub fn handle_event(state: &mut AppState, event: &Event) -> Result<(bool, Vec<Action>)> {
    let _span = tracing::debug_span!("handle_event", event_type = ?event).entered();

    if !state.status.is_pending() {
        tracing::debug!("session already resolved, ignoring event");
        return Ok((false, vec![]));
    }

    let had_message = state.message.take().is_some();

    match event {
        Event::KeyUp => {
            state.navigation.move_up();
            Ok((true, vec![]))
        }
        Event::KeyDown => {
            state.navigation.move_down();
            Ok((true, vec![]))
        }
        Event::KeyLeft => {
            let moved = state.navigation.go_back();
            Ok((moved || had_message, vec![]))
        }
        Event::KeyRight => {
            let moved = state.navigation.drill_in();
            Ok((moved || had_message, vec![]))
        }
        Event::SearchMode => {
            if state.search.enter() {
                tracing::debug!("entering search mode");
                return Ok((true, vec![]));
            }
            Ok((had_message, vec![]))
        }
        Event::Char(c) => {
            if !state.search.push(*c) {
                return Ok((had_message, vec![]));
            }
            tracing::trace!(query = %state.search.query(), char = %c, "search query updated");
            state.apply_search_match();
            Ok((true, vec![]))
        }
        Event::Backspace => {
            if !state.search.is_active() {
                return Ok((had_message, vec![]));
            }
            state.search.pop();
            if state.search.query().is_empty() {
                tracing::debug!("query emptied, exiting search mode");
                state.search.exit();
            } else {
                state.apply_search_match();
            }
            Ok((true, vec![]))
        }
        Event::Escape => {
            if !state.search.is_active() {
                return Ok((had_message, vec![]));
            }
            tracing::debug!(query = %state.search.query(), "exiting search mode");
            state.search.exit();
            Ok((true, vec![]))
        }
        Event::Submit => submit(state),
        Event::Abort => {
            tracing::debug!(path = %state.navigation.current_path().display(), "session aborted");
            state.status = SessionStatus::Aborted;
            Ok((false, vec![Action::Abort]))
        }
    }
}

/// Translates raw key input for the current mode and handles the result.
///
/// Keys with no meaning in the current mode leave the state untouched.
///
/// # Errors
///
/// Same as [`handle_event`].
pub fn dispatch(state: &mut AppState, input: &KeyInput) -> Result<(bool, Vec<Action>)> {
    match translate(state.input_mode(), input) {
        Some(event) => handle_event(state, &event),
        None => {
            tracing::trace!(input = ?input, "key ignored");
            Ok((false, vec![]))
        }
    }
}

fn submit(state: &mut AppState) -> Result<(bool, Vec<Action>)> {
    if state.search.is_active() {
        tracing::debug!("line submitted while searching, exiting search mode");
        state.search.exit();
        return Ok((true, vec![]));
    }

    match state.navigation.submit_target() {
        SubmitTarget::DrillIn => {
            state.navigation.drill_in();
            Ok((true, vec![]))
        }
        SubmitTarget::GoBack => {
            state.navigation.go_back();
            Ok((true, vec![]))
        }
        SubmitTarget::Path(path) => match state.validate_target(&path) {
            Ok(()) => {
                tracing::debug!(path = %path.display(), "selection submitted");
                state.status = SessionStatus::Answered(path.clone());
                Ok((true, vec![Action::Complete { path }]))
            }
            Err(DirpickerError::Validation(message)) => {
                tracing::debug!(path = %path.display(), "selection rejected");
                state.message = Some(message);
                Ok((true, vec![]))
            }
            Err(e) => Err(e),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::navigation::NavigationState;
    use crate::domain::error::FILE_REQUIRED_MESSAGE;
    use crate::domain::ChoiceLayout;
    use crate::infrastructure::{DirectoryLister, ListOptions};
    use crate::ui::theme::Theme;
    use std::fs;
    use tempfile::TempDir;

    fn fixture() -> TempDir {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir_all(dir.path().join("folder1/folder1-1")).unwrap();
        fs::create_dir(dir.path().join("zfolder2")).unwrap();
        fs::write(dir.path().join("notes.md"), "").unwrap();
        dir
    }

    fn state(dir: &TempDir, include_files: bool) -> AppState {
        let lister = DirectoryLister::new(ListOptions {
            include_files,
            filter: None,
        });
        let navigation = NavigationState::new(dir.path(), lister, ChoiceLayout::Plain, false);
        AppState::new(navigation, Theme::default())
    }

    fn selected_name(state: &AppState) -> String {
        state.navigation.selected_entry().unwrap().name.clone()
    }

    #[test]
    fn search_jumps_and_backspace_exits() {
        let dir = fixture();
        let mut state = state(&dir, false);

        handle_event(&mut state, &Event::SearchMode).unwrap();
        handle_event(&mut state, &Event::Char('z')).unwrap();
        handle_event(&mut state, &Event::Char('f')).unwrap();
        assert_eq!(selected_name(&state), "zfolder2");

        handle_event(&mut state, &Event::Backspace).unwrap();
        assert!(state.search.is_active());
        handle_event(&mut state, &Event::Backspace).unwrap();
        assert!(!state.search.is_active());
        assert_eq!(selected_name(&state), "zfolder2");
    }

    #[test]
    fn submit_while_searching_only_exits_search() {
        let dir = fixture();
        let mut state = state(&dir, false);
        handle_event(&mut state, &Event::SearchMode).unwrap();
        handle_event(&mut state, &Event::Char('z')).unwrap();

        let (render, actions) = handle_event(&mut state, &Event::Submit).unwrap();
        assert!(render);
        assert!(actions.is_empty());
        assert!(state.status.is_pending());
        assert!(!state.search.is_active());
    }

    #[test]
    fn submit_completes_with_absolute_path() {
        let dir = fixture();
        let mut state = state(&dir, false);
        handle_event(&mut state, &Event::KeyDown).unwrap();

        let (_, actions) = handle_event(&mut state, &Event::Submit).unwrap();
        let expected = dir.path().join("zfolder2");
        assert_eq!(actions, vec![Action::Complete { path: expected.clone() }]);
        assert_eq!(state.status, SessionStatus::Answered(expected));

        let (render, actions) = handle_event(&mut state, &Event::KeyDown).unwrap();
        assert!(!render);
        assert!(actions.is_empty());
    }

    #[test]
    fn only_one_file_rejects_directories_until_next_event() {
        let dir = fixture();
        let mut state = state(&dir, true);
        state.only_one_file = true;

        let (_, actions) = handle_event(&mut state, &Event::Submit).unwrap();
        assert!(actions.is_empty());
        assert_eq!(state.message.as_deref(), Some(FILE_REQUIRED_MESSAGE));

        handle_event(&mut state, &Event::KeyDown).unwrap();
        assert!(state.message.is_none());
        assert_eq!(selected_name(&state), "notes.md");

        let (_, actions) = handle_event(&mut state, &Event::Submit).unwrap();
        assert_eq!(actions, vec![Action::Complete { path: dir.path().join("notes.md") }]);
    }

    #[test]
    fn abort_resolves_session() {
        let dir = fixture();
        let mut state = state(&dir, false);
        let (render, actions) = handle_event(&mut state, &Event::Abort).unwrap();
        assert!(!render);
        assert_eq!(actions, vec![Action::Abort]);
        assert_eq!(state.status, SessionStatus::Aborted);
    }

    #[test]
    fn left_at_root_does_not_render() {
        let dir = fixture();
        let mut state = state(&dir, false);
        let (render, _) = handle_event(&mut state, &Event::KeyLeft).unwrap();
        assert!(!render);
    }

    #[test]
    fn dispatch_routes_by_mode() {
        let dir = fixture();
        let mut state = state(&dir, false);

        dispatch(&mut state, &KeyInput::Press(crate::app::keymap::KeyPress::char('j'))).unwrap();
        assert_eq!(selected_name(&state), "zfolder2");

        dispatch(&mut state, &KeyInput::Press(crate::app::keymap::KeyPress::char('/'))).unwrap();
        dispatch(&mut state, &KeyInput::Press(crate::app::keymap::KeyPress::char('f'))).unwrap();
        assert_eq!(state.search.query(), "f");
        assert_eq!(selected_name(&state), "folder1");
    }
}
