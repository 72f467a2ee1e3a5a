//! Mode-aware translation of raw key input into handler events.
//!
//! The terminal harness reports keys as [`KeyInput`] values, independent of the
//! terminal library. [`translate`] picks the handler set for the current
//! [`InputMode`]: in normal mode `j`, `k` and `/` are commands, while in search
//! mode the same characters extend the query.

use crate::app::handler::Event;
use crate::app::modes::InputMode;

/// Key that starts incremental search.
pub const SEARCH_TRIGGER: char = '/';

/// A single key press as seen by the picker.
///
/// `name` is `up`, `down`, `left`, `right`, `backspace`, `escape`, `tab`, or
/// the character itself for printable keys.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyPress {
    pub name: String,
    /// Printable character carried by the key, if any.
    pub value: Option<char>,
    /// Whether Ctrl was held.
    pub ctrl: bool,
}

impl KeyPress {
    /// A named key without a character, like `up` or `backspace`.
    #[must_use]
    pub fn named(name: &str) -> Self {
        Self {
            name: name.to_string(),
            value: None,
            ctrl: false,
        }
    }

    /// A printable character key.
    #[must_use]
    pub fn char(c: char) -> Self {
        Self {
            name: c.to_string(),
            value: Some(c),
            ctrl: false,
        }
    }

    /// A character key pressed together with Ctrl.
    #[must_use]
    pub fn ctrl(c: char) -> Self {
        Self {
            ctrl: true,
            ..Self::char(c)
        }
    }
}

/// Input delivered by an event source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyInput {
    Press(KeyPress),
    /// Line submission (Enter).
    Line,
}

/// Maps `input` to a handler event for the given mode.
///
/// Returns `None` for keys that have no meaning in `mode`.
///
/// # Example
///
/// ```rust
/// use dirpicker::app::keymap::{translate, KeyInput, KeyPress};
/// use dirpicker::app::{Event, InputMode};
///
/// let j = KeyInput::Press(KeyPress::char('j'));
/// assert_eq!(translate(InputMode::Normal, &j), Some(Event::KeyDown));
/// assert_eq!(translate(InputMode::Search, &j), Some(Event::Char('j')));
/// ```
#[must_use]
pub fn translate(mode: InputMode, input: &KeyInput) -> Option<Event> {
    let key = match input {
        KeyInput::Line => return Some(Event::Submit),
        KeyInput::Press(key) => key,
    };

    if key.ctrl {
        return match key.value {
            Some('c') => Some(Event::Abort),
            Some('n') => Some(Event::KeyDown),
            Some('p') => Some(Event::KeyUp),
            _ => None,
        };
    }

    match key.name.as_str() {
        "up" => return Some(Event::KeyUp),
        "down" => return Some(Event::KeyDown),
        "left" => return Some(Event::KeyLeft),
        "right" => return Some(Event::KeyRight),
        _ => {}
    }

    match mode {
        InputMode::Normal => match key.value {
            Some(SEARCH_TRIGGER) => Some(Event::SearchMode),
            Some('j') => Some(Event::KeyDown),
            Some('k') => Some(Event::KeyUp),
            _ => None,
        },
        InputMode::Search => match key.name.as_str() {
            "backspace" => Some(Event::Backspace),
            "escape" => Some(Event::Escape),
            _ => key
                .value
                .filter(|c| *c != SEARCH_TRIGGER)
                .map(Event::Char),
        },
    }
}
