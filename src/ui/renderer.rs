//! Top-level rendering coordinator.
//!
//! This module provides the main rendering entry point, coordinating view model
//! computation and delegation to UI components. Rendering is pure: it returns
//! the frame as a string and leaves painting to the terminal harness.
//!
//! # Architecture
//!
//! The renderer follows a two-step process:
//!
//! 1. **View Model Computation**: Transform `AppState` into `UIViewModel`
//! 2. **Component Rendering**: Delegate to specialized component renderers

use crate::app::AppState;
use crate::ui::components;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::UIViewModel;

/// Renders the current frame of the prompt.
///
/// Lines are separated by `\n` without a trailing newline. The first-render
/// hint is included while `state.first_render` is set; the caller clears it
/// with [`AppState::mark_rendered`] once the frame is on screen.
#[must_use]
pub fn render(state: &AppState) -> String {
    let viewmodel = state.compute_viewmodel();
    render_viewmodel(&viewmodel, &state.theme).join("\n")
}

/// Chooses the layout for a view model: answered or interactive.
fn render_viewmodel(vm: &UIViewModel, theme: &Theme) -> Vec<String> {
    match &vm.answer {
        Some(answer) => components::render_answered(vm, answer, theme),
        None => components::render_prompt(vm, theme),
    }
}
