//! Application layer coordinating state, events, and actions.
//!
//! This module holds the picker's core logic, sitting between the terminal
//! harness and the domain/infrastructure layers. It implements the event-driven
//! state machine that powers the interactive prompt.
//!
//! # Architecture
//!
//! The application layer follows a unidirectional data flow pattern:
//!
//! ```text
//! Key Input → keymap → Events → Event Handler → State Mutations → Actions
//!                                                    ↓
//!                                              View Model → Renderer
//! ```
//!
//! # Modules
//!
//! - [`actions`]: Side effect commands emitted by the event handler
//! - [`handler`]: Event processing logic and state transition coordinator
//! - [`keymap`]: Mode-aware translation of key presses into events
//! - [`modes`]: Input mode and session status types
//! - [`navigation`]: Directory navigation state machine
//! - [`search`]: Incremental search state and match strategies
//! - [`state`]: Per-session state container and view model computation

pub mod actions;
pub mod handler;
pub mod keymap;
pub mod modes;
pub mod navigation;
pub mod search;
pub mod state;

pub use actions::Action;
pub use handler::{dispatch, handle_event, Event};
pub use keymap::{KeyInput, KeyPress};
pub use modes::{InputMode, SessionStatus};
pub use navigation::{NavigationState, SubmitTarget};
pub use search::{MatchStrategy, SearchState};
pub use state::AppState;
