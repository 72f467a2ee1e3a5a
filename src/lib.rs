//! dirpicker: an interactive terminal prompt for picking a directory or file.
//!
//! The picker renders inline below the cursor as a scrollable, searchable list.
//! The user walks the tree with the arrow keys and submits a choice, which is
//! returned as an absolute path:
//! - `up`/`down` (or `k`/`j`, `Ctrl+p`/`Ctrl+n`) move the cursor, wrapping around
//! - `right` enters the selected directory and `left` goes back to the parent
//! - `/` starts an incremental search that jumps the cursor to the first match
//! - `Enter` submits and `Ctrl+c` aborts

#![allow(clippy::multiple_crate_versions)]

//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  CLI (main.rs) / prompt()                           │  ← Entry points
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Terminal Harness (terminal/)                       │  ← crossterm I/O
//! │  - EventSource / Screen traits                      │
//! │  - Session loop                                     │
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │  ← State machine
//! │  - Key map and event handling                       │
//! │  - Navigation and incremental search                │
//! │  - View model computation                           │
//! └─────────────────────────────────────────────────────┘
//!         │                                      │
//! ┌───────────────────────┐        ┌──────────────────────────┐
//! │ UI Layer (ui/)        │        │ Infrastructure           │
//! │ - Rendering           │        │ (infrastructure/)        │
//! │ - Theming             │        │ - Directory listing      │
//! │ - Components          │        │ - Path normalization     │
//! └───────────────────────┘        └──────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Domain (domain/): entries, choice sets, errors     │
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Observability (observability/)                     │  ← Optional
//! │  - OpenTelemetry tracing to a JSON Lines file       │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`app`]: Picker state machine with event/action model
//! - [`domain`]: Entries, choice sets and errors
//! - [`infrastructure`]: Directory listing and path utilities
//! - [`terminal`]: Event source, screen and session loop
//! - [`ui`]: Frame rendering with theme support
//! - [`observability`]: OpenTelemetry tracing to a local file
//!
//! # Configuration
//!
//! [`Config`] can be built in code or read from TOML:
//!
//! ```toml
//! base_path = "~/code"
//! message = "Where to?"
//! include_files = false
//! page_size = 10
//! layout = "guided"
//! search_strategy = "fuzzy"
//! theme_name = "catppuccin-latte"
//! ```
//!
//! # Examples
//!
//! ## Driving a session by hand
//!
//! ```rust,no_run
//! use dirpicker::{handle_event, initialize, Action, Config, Event};
//!
//! let config = Config {
//!     base_path: Some("/tmp".into()),
//!     ..Default::default()
//! };
//! let mut state = initialize(&config)?;
//!
//! for event in [Event::KeyDown, Event::Submit] {
//!     let (_render, actions) = handle_event(&mut state, &event)?;
//!     for action in actions {
//!         if let Action::Complete { path } = action {
//!             println!("{}", path.display());
//!         }
//!     }
//! }
//! # Ok::<(), dirpicker::DirpickerError>(())
//! ```
//!
//! ## Interactive prompt
//!
//! ```rust,no_run
//! let config = dirpicker::Config {
//!     base_path: Some("~".into()),
//!     ..Default::default()
//! };
//! if let Some(path) = dirpicker::prompt(&config)? {
//!     println!("{}", path.display());
//! }
//! # Ok::<(), dirpicker::DirpickerError>(())
//! ```

pub mod app;
pub mod domain;
pub mod infrastructure;
pub mod terminal;

pub mod ui;

pub mod observability;

pub use app::{
    dispatch, handle_event, Action, AppState, Event, InputMode, KeyInput, KeyPress,
    MatchStrategy, SessionStatus,
};
pub use domain::{ChoiceLayout, DirpickerError, Result};
pub use infrastructure::ItemFilter;
pub use terminal::run_session;
pub use ui::{render, Theme};

use app::navigation::NavigationState;
use app::state::{DEFAULT_PAGE_SIZE, DEFAULT_QUESTION};
use infrastructure::{absolutize, expand_tilde, DirectoryLister, ListOptions};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Picker configuration.
///
/// Keys are snake_case; kebab-case and camelCase aliases are accepted when
/// reading TOML.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Root of navigation. Required.
    ///
    /// A leading `~` is expanded and relative paths are resolved against the
    /// working directory.
    #[serde(alias = "basePath", alias = "base-path")]
    pub base_path: Option<PathBuf>,

    /// Question shown above the list. Default: `"Select a directory"`
    pub message: String,

    /// List regular files as well as directories.
    #[serde(alias = "includeFiles", alias = "include-files")]
    pub include_files: bool,

    /// Only accept a regular file as the final answer.
    #[serde(alias = "onlyOneFile", alias = "only-one-file")]
    pub only_one_file: bool,

    /// Allow going back past `base_path`.
    #[serde(
        alias = "allowNavigationAboveBaseDir",
        alias = "allow-navigation-above-base-dir"
    )]
    pub allow_navigation_above_base_dir: bool,

    /// Predicate on absolute entry paths. Code only.
    #[serde(skip)]
    pub filter_items: Option<ItemFilter>,

    /// Visible rows of the list. Default: 7
    #[serde(alias = "pageSize", alias = "page-size")]
    pub page_size: usize,

    /// `plain` (default) or `guided`.
    pub layout: ChoiceLayout,

    /// `prefix` (default) or `fuzzy`.
    #[serde(alias = "searchStrategy", alias = "search-strategy")]
    pub search_strategy: MatchStrategy,

    /// Built-in theme name. Ignored if `theme_file` is set.
    #[serde(alias = "theme", alias = "theme-name")]
    pub theme_name: Option<String>,

    /// Path to a custom TOML theme file. See [`ui::theme`] for format.
    #[serde(alias = "theme-file")]
    pub theme_file: Option<PathBuf>,

    /// Tracing filter, e.g. `debug`. Default: `"info"`
    #[serde(alias = "trace-level")]
    pub trace_level: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_path: None,
            message: DEFAULT_QUESTION.to_string(),
            include_files: false,
            only_one_file: false,
            allow_navigation_above_base_dir: false,
            filter_items: None,
            page_size: DEFAULT_PAGE_SIZE,
            layout: ChoiceLayout::default(),
            search_strategy: MatchStrategy::default(),
            theme_name: None,
            theme_file: None,
            trace_level: None,
        }
    }
}

impl Config {
    /// Parses a configuration from TOML text.
    ///
    /// # Errors
    ///
    /// Returns [`DirpickerError::Config`] if the text is not valid TOML or a
    /// value has the wrong type.
    ///
    /// # Example
    ///
    /// ```rust
    /// use dirpicker::{ChoiceLayout, Config};
    ///
    /// let config = Config::from_toml_str("base-path = \"/srv\"\nlayout = \"guided\"")?;
    /// assert_eq!(config.layout, ChoiceLayout::Guided);
    /// assert_eq!(config.page_size, 7);
    /// # Ok::<(), dirpicker::DirpickerError>(())
    /// ```
    pub fn from_toml_str(text: &str) -> Result<Self> {
        toml::from_str(text).map_err(|e| DirpickerError::Config(format!("invalid config: {e}")))
    }

    /// Reads a configuration file.
    ///
    /// # Errors
    ///
    /// Returns [`DirpickerError::Config`] if the file cannot be read or parsed.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|e| {
            DirpickerError::Config(format!("cannot read {}: {e}", path.display()))
        })?;
        Self::from_toml_str(&text)
    }
}

/// Builds the session state for `config`.
///
/// Resolves the base path, lists it and loads the theme (falling back to the
/// default theme on failure).
///
/// # Errors
///
/// Returns [`DirpickerError::Config`] if `base_path` is missing or cannot be
/// made absolute.
pub fn initialize(config: &Config) -> Result<AppState> {
    let base_path = config.base_path.as_ref().ok_or_else(|| {
        DirpickerError::Config("missing required parameter `basePath`".to_string())
    })?;

    let expanded = base_path.to_str().map_or_else(|| base_path.clone(), expand_tilde);
    let root = absolutize(&expanded).map_err(|e| {
        DirpickerError::Config(format!("cannot resolve {}: {e}", expanded.display()))
    })?;

    tracing::debug!(
        root = %root.display(),
        include_files = config.include_files,
        layout = ?config.layout,
        "initializing picker"
    );

    let lister = DirectoryLister::new(ListOptions {
        include_files: config.include_files,
        filter: config.filter_items.clone(),
    });
    let navigation = NavigationState::new(
        &root,
        lister,
        config.layout,
        config.allow_navigation_above_base_dir,
    );
    let theme = Theme::resolve(config.theme_name.as_deref(), config.theme_file.as_deref());

    let mut state = AppState::new(navigation, theme);
    state.question.clone_from(&config.message);
    state.only_one_file = config.only_one_file;
    state.page_size = config.page_size;
    state.search_strategy = config.search_strategy;
    Ok(state)
}

/// Runs an interactive picker on the controlling terminal.
///
/// Frames are drawn on stderr so stdout stays free for the answer. Raw mode is
/// enabled for the duration of the session and always restored.
///
/// # Returns
///
/// The chosen absolute path, or `None` if the user aborted.
///
/// # Errors
///
/// Returns [`DirpickerError::Config`] for an invalid configuration and
/// [`DirpickerError::Io`] for terminal failures.
pub fn prompt(config: &Config) -> Result<Option<PathBuf>> {
    let mut state = initialize(config)?;

    let _raw = terminal::RawModeGuard::new()?;
    let mut events = terminal::CrosstermEvents;
    let mut screen = terminal::InlineScreen::new(std::io::stderr());

    run_session(&mut state, &mut events, &mut screen)
}
