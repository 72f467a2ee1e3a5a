//! Composable UI component renderers.
//!
//! Each component appends the lines for one part of the prompt to a shared
//! line buffer. The layout functions below decide which components make up a
//! frame.
//!
//! # Components
//!
//! - [`header`]: Question line and current directory line
//! - [`list`]: Choice rows and pagination hint
//! - [`search`]: Search line
//! - [`footer`]: Help line and validation message
//! - [`empty`]: Empty directory message
//!
//! # Layout Modes
//!
//! - [`render_prompt`]: Question + Header + List + Search line or Footer
//! - [`render_answered`]: Question + Answer

mod empty;
mod footer;
mod header;
mod list;
mod search;

pub use list::{POINTER, SEPARATOR};

use crate::ui::theme::Theme;
use crate::ui::viewmodel::UIViewModel;

use empty::render_empty_state;
use footer::{render_footer, render_message};
use header::{render_header, render_question};
use list::render_list;
use search::render_search_bar;

/// Renders the interactive prompt layout.
///
/// Layout structure:
/// ```text
/// [Question + hint]
/// [blank line]
/// [Current directory]
/// [blank line]
/// [List rows or empty state]
/// [Pagination hint]
/// [blank line]
/// [Search line or footer]
/// [Validation message]
/// ```
#[must_use]
pub fn render_prompt(vm: &UIViewModel, theme: &Theme) -> Vec<String> {
    let mut lines = Vec::new();

    render_question(&mut lines, &vm.question, vm.hint.as_deref(), None, theme);
    lines.push(String::new());
    render_header(&mut lines, &vm.header, theme);
    lines.push(String::new());

    if let Some(empty) = &vm.empty_state {
        render_empty_state(&mut lines, empty, theme);
    } else {
        render_list(&mut lines, &vm.display_items, vm.paginated, theme);
    }
    lines.push(String::new());

    if let Some(search) = &vm.search_bar {
        render_search_bar(&mut lines, search, theme);
    } else {
        render_footer(&mut lines, &vm.footer, theme);
    }

    if let Some(message) = &vm.message {
        render_message(&mut lines, message, theme);
    }

    lines
}

/// Renders the final frame left in the scrollback after completion.
#[must_use]
pub fn render_answered(vm: &UIViewModel, answer: &str, theme: &Theme) -> Vec<String> {
    let mut lines = Vec::new();
    render_question(&mut lines, &vm.question, None, Some(answer), theme);
    lines
}
