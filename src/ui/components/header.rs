//! Header component renderer.
//!
//! Renders the question line and the current directory line at the top of the
//! prompt.

use crate::ui::theme::Theme;
use crate::ui::viewmodel::HeaderInfo;

/// Question prefix.
const PREFIX: &str = "?";

/// Renders the question line.
///
/// The optional `hint` follows the question in dim style; on the answered frame
/// `answer` follows it in the answer color instead.
///
/// # Layout
///
/// ```text
/// ? Select a directory (Use arrow keys)
/// ```
pub fn render_question(
    lines: &mut Vec<String>,
    question: &str,
    hint: Option<&str>,
    answer: Option<&str>,
    theme: &Theme,
) {
    let mut line = format!(
        "{}{PREFIX}{} {}{question}{} ",
        Theme::fg(&theme.colors.prefix_fg),
        Theme::reset(),
        Theme::bold(),
        Theme::reset(),
    );

    if let Some(answer) = answer {
        line.push_str(&Theme::fg(&theme.colors.answer_fg));
        line.push_str(answer);
        line.push_str(Theme::reset());
    } else if let Some(hint) = hint {
        line.push_str(Theme::dim());
        line.push_str(hint);
        line.push_str(Theme::reset());
    }

    lines.push(line);
}

/// Renders the current directory line.
///
/// # Layout
///
/// ```text
///  Current directory: /home/user/code
/// ```
///
/// The parent part is drawn in `parent_fg` and the last component in
/// `current_dir_fg`.
pub fn render_header(lines: &mut Vec<String>, header: &HeaderInfo, theme: &Theme) {
    lines.push(format!(
        "{}{} Current directory: {}{}{}{}{}{}",
        Theme::bold(),
        Theme::fg(&theme.colors.header_fg),
        Theme::reset(),
        Theme::fg(&theme.colors.parent_fg),
        header.parent,
        Theme::fg(&theme.colors.current_dir_fg),
        header.name,
        Theme::reset(),
    ));
}
