//! Actions representing side effects to be executed by the session driver.
//!
//! This module defines the [`Action`] type, which represents commands produced
//! by the event handler after processing user input. Actions bridge pure state
//! transformations and effectful operations like ending the terminal session.
//!
//! # Architecture
//!
//! The event handler returns a `Vec<Action>` after processing each event. The
//! session loop in [`crate::terminal`] executes them in order; rendering itself is
//! signalled separately by the handler's `should_render` flag.
//!
//! # Example
//!
//! ```rust
//! use dirpicker::Action;
//! use std::path::PathBuf;
//!
//! let actions = vec![Action::Complete { path: PathBuf::from("/tmp") }];
//! assert_eq!(actions.len(), 1);
//! ```

use std::path::PathBuf;

/// Commands representing side effects to be executed by the session driver.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// The user confirmed a valid target.
    ///
    /// The driver renders the answered frame, restores the terminal and returns
    /// `path` to the caller.
    Complete {
        /// Absolute path of the chosen directory or file.
        path: PathBuf,
    },

    /// The session was cancelled.
    ///
    /// The driver restores the terminal and returns no answer.
    Abort,
}
