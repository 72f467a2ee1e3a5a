//! Domain layer for the directory picker.
//!
//! This module contains the core domain types, independent of the terminal and
//! of the filesystem. It follows domain-driven design principles by keeping the
//! list model isolated from infrastructure concerns.
//!
//! # Organization
//!
//! - [`error`]: Error types and result aliases
//! - [`entry`]: Selectable entries and the action sentinels
//! - [`choices`]: Choice lists with separator-aware indexing
//!
//! # Examples
//!
//! ```
//! use dirpicker::domain::{ChoiceLayout, ChoiceSet};
//!
//! let set = ChoiceSet::build(vec!["src".to_string()], ChoiceLayout::Plain, false);
//! assert_eq!(set.get_real(0).unwrap().name, "src");
//! ```

pub mod choices;
pub mod entry;
pub mod error;

pub use choices::{ChoiceLayout, ChoiceSet};
pub use entry::{Choice, Entry, EntryValue};
pub use error::{DirpickerError, Result};
