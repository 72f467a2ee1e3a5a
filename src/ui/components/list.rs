//! Choice list component renderer.
//!
//! Renders the visible window of the choice list, one row per entry or
//! separator, with the pointer on the selected row.

use crate::ui::helpers;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::DisplayItem;

/// Marker in front of the selected row.
pub const POINTER: &str = "\u{276f}";

/// Text of a separator row.
pub const SEPARATOR: &str = "──────────────";

const PAGINATION_HINT: &str = "(Move up and down to reveal more choices)";

/// Renders all rows, followed by the pagination hint when `paginated`.
///
/// # Layout
///
/// ```text
/// ❯ folder1
///   zfolder2
///   ──────────────
///   choose this directory
/// ```
///
/// # Styling Precedence
///
/// 1. Selection color (pointer and name)
/// 2. Search match highlights (unless selected)
/// 3. Normal text color
pub fn render_list(lines: &mut Vec<String>, items: &[DisplayItem], paginated: bool, theme: &Theme) {
    for item in items {
        lines.push(render_row(item, theme));
    }

    if paginated {
        lines.push(format!(
            "{}{}{PAGINATION_HINT}{}",
            Theme::dim(),
            Theme::fg(&theme.colors.text_dim),
            Theme::reset()
        ));
    }
}

fn render_row(item: &DisplayItem, theme: &Theme) -> String {
    match item {
        DisplayItem::Separator => format!(
            "  {}{SEPARATOR}{}",
            Theme::fg(&theme.colors.separator),
            Theme::reset()
        ),
        DisplayItem::Entry {
            name,
            is_selected: true,
            ..
        } => format!(
            "{}{POINTER} {name}{}",
            Theme::fg(&theme.colors.selection_fg),
            Theme::reset()
        ),
        DisplayItem::Entry {
            name,
            is_selected: false,
            highlight_ranges,
        } => {
            let mut line = format!("  {}", Theme::fg(&theme.colors.text_normal));
            helpers::render_highlighted_text(&mut line, name, highlight_ranges, theme);
            line.push_str(Theme::reset());
            line
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn highlight(theme: &Theme) -> String {
        Theme::bg(&theme.colors.match_highlight_bg)
    }

    #[test]
    fn only_unselected_rows_show_matches() {
        let theme = Theme::default();
        let row = |is_selected| DisplayItem::Entry {
            name: "zfolder2".to_string(),
            is_selected,
            highlight_ranges: vec![(0, 2)],
        };

        let selected = render_row(&row(true), &theme);
        assert!(selected.contains(&format!("{POINTER} zfolder2")));
        assert!(!selected.contains(&highlight(&theme)));

        let unselected = render_row(&row(false), &theme);
        assert!(unselected.starts_with("  "));
        assert!(unselected.contains(&highlight(&theme)));
    }
}
