//! Shared rendering utilities and helpers.
//!
//! Handles text rendering tasks shared by several components, mainly search
//! match highlighting with proper ANSI escape sequence management.
//!
//! # Example
//!
//! ```rust
//! use dirpicker::ui::helpers::render_highlighted_text;
//! use dirpicker::ui::Theme;
//!
//! let theme = Theme::default();
//! let mut line = String::new();
//! render_highlighted_text(&mut line, "zfolder2", &[(0, 2)], &theme);
//! assert!(line.ends_with("older2"));
//! ```

use crate::ui::theme::Theme;

/// Appends `text` to `out` with the given character ranges highlighted.
///
/// Ranges are `(start, end)` character indices, inclusive start and exclusive
/// end. Out-of-range ends are clamped to the text length.
pub fn render_highlighted_text(
    out: &mut String,
    text: &str,
    ranges: &[(usize, usize)],
    theme: &Theme,
) {
    if ranges.is_empty() {
        out.push_str(text);
        return;
    }

    let chars: Vec<char> = text.chars().collect();
    let mut current_pos = 0;

    for &(start, end) in ranges {
        let start = start.min(chars.len());
        let end = end.min(chars.len());
        if start < current_pos || start >= end {
            continue;
        }

        out.extend(&chars[current_pos..start]);

        out.push_str(&Theme::fg(&theme.colors.match_highlight_fg));
        out.push_str(&Theme::bg(&theme.colors.match_highlight_bg));
        out.extend(&chars[start..end]);
        out.push_str(Theme::reset());
        out.push_str(&Theme::fg(&theme.colors.text_normal));

        current_pos = end;
    }

    if current_pos < chars.len() {
        out.extend(&chars[current_pos..]);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_without_ranges_is_unchanged() {
        let theme = Theme::default();
        let mut out = String::new();
        render_highlighted_text(&mut out, "folder1", &[], &theme);
        assert_eq!(out, "folder1");
    }

    #[test]
    fn highlight_wraps_ranges() {
        let theme = Theme::default();
        let mut out = String::new();
        render_highlighted_text(&mut out, "abcdef", &[(1, 2), (4, 10)], &theme);

        let highlight = format!(
            "{}{}",
            Theme::fg(&theme.colors.match_highlight_fg),
            Theme::bg(&theme.colors.match_highlight_bg)
        );
        assert!(out.starts_with(&format!("a{highlight}b")));
        assert!(out.contains(&format!("{highlight}ef{}", Theme::reset())));
        assert_eq!(out.matches(&highlight).count(), 2);
    }
}
