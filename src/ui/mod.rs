//! User interface rendering layer with component-based architecture.
//!
//! This module turns application state into ANSI-styled prompt frames through
//! composable rendering components. It provides theme support and search match
//! highlighting; painting the frames is left to [`crate::terminal`].
//!
//! # Architecture
//!
//! ```text
//! AppState → compute_viewmodel → UIViewModel → components → String
//! ```
//!
//! # Modules
//!
//! - [`viewmodel`]: View model types representing renderable UI state
//! - [`renderer`]: Top-level rendering coordinator
//! - [`components`]: Composable UI component renderers
//! - [`helpers`]: Shared rendering utilities (highlighting)
//! - [`theme`]: Color scheme definitions and ANSI escape sequence generation

pub mod components;
pub mod helpers;
pub mod renderer;
pub mod theme;
pub mod viewmodel;

pub use renderer::render;
pub use theme::Theme;
pub use viewmodel::{DisplayItem, EmptyState, FooterInfo, HeaderInfo, SearchBarInfo, UIViewModel};
