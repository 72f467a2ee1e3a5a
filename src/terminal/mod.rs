//! Terminal harness driving a picker session.
//!
//! The core never talks to the terminal directly. A session is driven through
//! two narrow interfaces:
//!
//! - [`EventSource`]: yields key input, independent of the terminal library
//! - [`Screen`]: repaints the inline prompt region
//!
//! [`backend`] implements both on top of `crossterm`; tests substitute scripted
//! sources and recording screens.

pub mod backend;
pub mod session;

pub use backend::{CrosstermEvents, InlineScreen, RawModeGuard};
pub use session::run_session;

use crate::app::KeyInput;
use crate::domain::error::Result;

/// Source of key input for a session.
pub trait EventSource {
    /// Blocks until the next input.
    ///
    /// `Ok(None)` means the source is exhausted; the session treats it as an
    /// abort.
    ///
    /// # Errors
    ///
    /// Returns [`crate::DirpickerError::Io`] if reading input fails.
    fn next_input(&mut self) -> Result<Option<KeyInput>>;
}

/// Output surface for prompt frames.
pub trait Screen {
    /// Replaces the previously drawn frame with `frame`.
    ///
    /// # Errors
    ///
    /// Returns [`crate::DirpickerError::Io`] on write failures.
    fn render(&mut self, frame: &str) -> Result<()>;

    /// Hides the cursor for the duration of the session.
    ///
    /// # Errors
    ///
    /// Returns [`crate::DirpickerError::Io`] on write failures.
    fn hide_cursor(&mut self) -> Result<()>;

    /// Restores the cursor.
    ///
    /// # Errors
    ///
    /// Returns [`crate::DirpickerError::Io`] on write failures.
    fn show_cursor(&mut self) -> Result<()>;

    /// Leaves the last frame in the scrollback and moves below it.
    ///
    /// # Errors
    ///
    /// Returns [`crate::DirpickerError::Io`] on write failures.
    fn done(&mut self) -> Result<()>;
}
