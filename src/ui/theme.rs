//! Theme management and ANSI escape sequence generation.
//!
//! This module defines the color scheme system for the prompt, supporting both
//! built-in themes (Catppuccin variants) and custom themes loaded from TOML files.
//! It provides utilities for converting hex colors to ANSI escape sequences.
//!
//! # Built-in Themes
//!
//! - `catppuccin-mocha`: Dark theme with warm tones (default)
//! - `catppuccin-latte`: Light theme with soft pastels
//!
//! # TOML Format
//!
//! ```toml
//! name = "my-theme"
//!
//! [colors]
//! prefix_fg = "#a6e3a1"
//! header_fg = "#cdd6f4"
//! parent_fg = "#6c7086"
//! current_dir_fg = "#cba6f7"
//! selection_fg = "#89dceb"
//! text_normal = "#cdd6f4"
//! text_dim = "#6c7086"
//! separator = "#45475a"
//! match_highlight_fg = "#1e1e2e"
//! match_highlight_bg = "#f9e2af"
//! search_fg = "#f5c2e7"
//! answer_fg = "#cba6f7"
//! message_fg = "#f38ba8"
//! empty_state_fg = "#89b4fa"
//! ```
//!
//! # Example
//!
//! ```rust
//! use dirpicker::ui::theme::Theme;
//!
//! let theme = Theme::from_name("catppuccin-mocha").unwrap();
//! println!("{}", Theme::fg(&theme.colors.header_fg));
//! println!("{}Bold Text{}", Theme::bold(), Theme::reset());
//! ```

use crate::domain::error::{DirpickerError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Name of the theme used when none is configured.
pub const DEFAULT_THEME: &str = "catppuccin-mocha";

/// Color scheme configuration for UI rendering.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Theme {
    /// Human-readable theme name.
    pub name: String,
    /// Color palette for all UI elements.
    pub colors: ThemeColors,
}

/// Color definitions for all UI elements.
///
/// All colors are specified as hex strings (e.g., "#cdd6f4").
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ThemeColors {
    /// The `?` before the question.
    pub prefix_fg: String,
    /// "Current directory:" label.
    pub header_fg: String,
    /// Parent part of the current directory.
    pub parent_fg: String,
    /// Final component of the current directory.
    pub current_dir_fg: String,

    /// Pointer and name of the selected row.
    pub selection_fg: String,

    /// Normal text color.
    pub text_normal: String,
    /// Dimmed text color (hints, footer).
    pub text_dim: String,

    /// Separator rows of the guided layout.
    pub separator: String,

    /// Search match highlight foreground.
    pub match_highlight_fg: String,
    /// Search match highlight background.
    pub match_highlight_bg: String,

    /// Search line.
    pub search_fg: String,
    /// Chosen path on the answered frame.
    pub answer_fg: String,
    /// Inline validation message.
    pub message_fg: String,
    /// Empty directory message.
    pub empty_state_fg: String,
}

impl Theme {
    /// Loads a built-in theme by name.
    ///
    /// Supported names: `catppuccin-mocha`, `catppuccin-latte`.
    ///
    /// # Returns
    ///
    /// - `Some(Theme)` if the theme name is recognized
    /// - `None` if the theme name is unknown
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        let toml_str = match name {
            "catppuccin-mocha" => include_str!("../../themes/catppuccin-mocha.toml"),
            "catppuccin-latte" => include_str!("../../themes/catppuccin-latte.toml"),
            _ => return None,
        };

        toml::from_str(toml_str).ok()
    }

    /// Loads a theme from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`DirpickerError::Theme`] if the file cannot be read or its TOML
    /// content cannot be parsed (invalid syntax, missing fields, type mismatches).
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .map_err(|e| DirpickerError::Theme(format!("Failed to read theme file: {e}")))?;

        toml::from_str(&contents)
            .map_err(|e| DirpickerError::Theme(format!("Failed to parse theme TOML: {e}")))
    }

    /// Picks the session theme: a theme file wins over a name.
    ///
    /// Falls back to the default theme when loading fails.
    #[must_use]
    pub fn resolve(name: Option<&str>, file: Option<&Path>) -> Self {
        let loaded = match (file, name) {
            (Some(path), _) => Self::from_file(path),
            (None, Some(name)) => Self::from_name(name)
                .ok_or_else(|| DirpickerError::Theme(format!("unknown theme `{name}`"))),
            (None, None) => return Self::default(),
        };

        loaded.unwrap_or_else(|e| {
            tracing::debug!(error = %e, "falling back to default theme");
            Self::default()
        })
    }

    /// Converts a hex color to RGB tuple.
    ///
    /// Returns `(255, 255, 255)` (white) on parse errors.
    fn hex_to_rgb(hex: &str) -> (u8, u8, u8) {
        let hex = hex.trim_start_matches('#').trim();

        if hex.len() != 6 || !hex.is_ascii() {
            return (255, 255, 255);
        }

        let r = u8::from_str_radix(&hex[0..2], 16).unwrap_or(255);
        let g = u8::from_str_radix(&hex[2..4], 16).unwrap_or(255);
        let b = u8::from_str_radix(&hex[4..6], 16).unwrap_or(255);

        (r, g, b)
    }

    /// Generates an ANSI 24-bit foreground color escape sequence.
    ///
    /// # Example
    ///
    /// ```rust
    /// use dirpicker::ui::theme::Theme;
    ///
    /// assert_eq!(Theme::fg("#cdd6f4"), "\u{1b}[38;2;205;214;244m");
    /// ```
    #[must_use]
    pub fn fg(hex: &str) -> String {
        let (r, g, b) = Self::hex_to_rgb(hex);
        format!("\u{001b}[38;2;{r};{g};{b}m")
    }

    /// Generates an ANSI 24-bit background color escape sequence.
    #[must_use]
    pub fn bg(hex: &str) -> String {
        let (r, g, b) = Self::hex_to_rgb(hex);
        format!("\u{001b}[48;2;{r};{g};{b}m")
    }

    /// Returns the ANSI bold escape sequence (`\x1b[1m`).
    #[must_use]
    pub const fn bold() -> &'static str {
        "\u{001b}[1m"
    }

    /// Returns the ANSI dim escape sequence (`\x1b[2m`).
    #[must_use]
    pub const fn dim() -> &'static str {
        "\u{001b}[2m"
    }

    /// Returns the ANSI reset escape sequence (`\x1b[0m`).
    #[must_use]
    pub const fn reset() -> &'static str {
        "\u{001b}[0m"
    }
}

impl Default for Theme {
    /// Returns the default theme (Catppuccin Mocha).
    ///
    /// # Panics
    ///
    /// Panics if the built-in theme fails to parse (should never occur).
    fn default() -> Self {
        Self::from_name(DEFAULT_THEME)
            .expect("Built-in catppuccin-mocha theme should always parse")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_themes_parse() {
        assert_eq!(Theme::from_name("catppuccin-mocha").unwrap().name, "catppuccin-mocha");
        assert_eq!(Theme::from_name("catppuccin-latte").unwrap().name, "catppuccin-latte");
        assert!(Theme::from_name("solarized").is_none());
    }

    #[test]
    fn invalid_hex_falls_back_to_white() {
        assert_eq!(Theme::fg("nope"), "\u{1b}[38;2;255;255;255m");
        assert_eq!(Theme::bg("#000000"), "\u{1b}[48;2;0;0;0m");
    }

    #[test]
    fn theme_file_wins_over_name() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("custom.toml");
        let latte = Theme::from_name("catppuccin-latte").unwrap();
        let mut custom = latte.clone();
        custom.name = "custom".to_string();
        fs::write(&path, toml::to_string(&custom).unwrap()).unwrap();

        let theme = Theme::resolve(Some("catppuccin-latte"), Some(path.as_path()));
        assert_eq!(theme.name, "custom");
        assert_eq!(theme.colors, latte.colors);
    }

    #[test]
    fn broken_theme_falls_back_to_default() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.toml");
        fs::write(&path, "name = 3").unwrap();

        assert!(matches!(Theme::from_file(&path), Err(DirpickerError::Theme(_))));
        assert_eq!(Theme::resolve(None, Some(path.as_path())), Theme::default());
        assert_eq!(Theme::resolve(Some("unknown"), None), Theme::default());
    }
}
