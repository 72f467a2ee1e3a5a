//! Search line component renderer.

use crate::ui::theme::Theme;
use crate::ui::viewmodel::SearchBarInfo;

/// Renders the search line shown while a query is being typed.
///
/// # Layout
///
/// ```text
///  => Search: zf
/// ```
pub fn render_search_bar(lines: &mut Vec<String>, search: &SearchBarInfo, theme: &Theme) {
    lines.push(format!(
        "{} => Search: {}{}{}",
        Theme::fg(&theme.colors.search_fg),
        Theme::fg(&theme.colors.text_normal),
        search.query,
        Theme::reset()
    ));
}
