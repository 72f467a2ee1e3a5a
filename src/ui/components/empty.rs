//! Empty state component renderer.
//!
//! Renders the message displayed in place of the choice list when the current
//! directory has nothing to show: no subdirectories, everything filtered out, or
//! an unreadable directory.

use crate::ui::theme::Theme;
use crate::ui::viewmodel::EmptyState;

/// Renders the empty state message, indented like a list row.
pub fn render_empty_state(lines: &mut Vec<String>, empty: &EmptyState, theme: &Theme) {
    lines.push(format!(
        "  {}{}{}",
        Theme::fg(&theme.colors.empty_state_fg),
        empty.message,
        Theme::reset()
    ));
}
