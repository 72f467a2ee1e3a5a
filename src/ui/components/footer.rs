//! Footer component renderer.
//!
//! Renders the help line and the inline validation message at the bottom of
//! the prompt.

use crate::ui::theme::Theme;
use crate::ui::viewmodel::FooterInfo;

/// Renders the dimmed help line.
///
/// # Layout
///
/// ```text
///  (Use '/' key to search this directory)
/// ```
pub fn render_footer(lines: &mut Vec<String>, footer: &FooterInfo, theme: &Theme) {
    lines.push(format!(
        "{} {}{}",
        Theme::fg(&theme.colors.text_dim),
        footer.hint,
        Theme::reset()
    ));
}

/// Renders a validation message in the message color.
pub fn render_message(lines: &mut Vec<String>, message: &str, theme: &Theme) {
    lines.push(format!(
        "{} {message}{}",
        Theme::fg(&theme.colors.message_fg),
        Theme::reset()
    ));
}
