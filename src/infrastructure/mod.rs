//! Infrastructure layer for filesystem and environment interactions.
//!
//! This module holds everything that touches the real filesystem: directory
//! listings for the choice list, lexical path normalization and the platform data
//! directory used for trace output.

pub mod lister;
pub mod paths;

pub use lister::{is_regular_file, DirectoryLister, ItemFilter, ListOptions};
pub use paths::{absolutize, data_dir, expand_tilde, normalize};
