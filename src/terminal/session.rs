//! Session loop: input → handler → render until the prompt resolves.

use super::{EventSource, Screen};
use crate::app::{dispatch, handle_event, Action, AppState, Event};
use crate::domain::error::Result;
use crate::ui::render;
use std::path::PathBuf;

/// Drives `state` to completion.
///
/// Each input is processed fully (translate, mutate, render) before the next
/// one is read. The cursor is hidden for the duration of the session and
/// restored even when the loop fails.
///
/// # Returns
///
/// - `Ok(Some(path))` with the absolute path of the submitted selection
/// - `Ok(None)` when the session was aborted or the source ran out of input
///
/// # Errors
///
/// Returns [`crate::DirpickerError::Io`] when reading input or writing frames
/// fails.
pub fn run_session<E, S>(
    state: &mut AppState,
    events: &mut E,
    screen: &mut S,
) -> Result<Option<PathBuf>>
where
    E: EventSource,
    S: Screen,
{
    let _span = tracing::debug_span!(
        "run_session",
        root = %state.navigation.root_path().display()
    )
    .entered();

    screen.hide_cursor()?;
    let outcome = drive(state, events, screen);
    let restored = screen.show_cursor();

    let answer = outcome?;
    restored?;

    tracing::debug!(answered = answer.is_some(), "session finished");
    Ok(answer)
}

fn drive<E, S>(state: &mut AppState, events: &mut E, screen: &mut S) -> Result<Option<PathBuf>>
where
    E: EventSource,
    S: Screen,
{
    paint(state, screen)?;

    loop {
        let Some(input) = events.next_input()? else {
            tracing::debug!("input exhausted");
            handle_event(state, &Event::Abort)?;
            screen.done()?;
            return Ok(None);
        };

        let (should_render, actions) = dispatch(state, &input)?;
        if should_render {
            paint(state, screen)?;
        }

        for action in actions {
            match action {
                Action::Complete { path } => {
                    screen.done()?;
                    return Ok(Some(path));
                }
                Action::Abort => {
                    screen.done()?;
                    return Ok(None);
                }
            }
        }
    }
}

fn paint<S: Screen>(state: &mut AppState, screen: &mut S) -> Result<()> {
    screen.render(&render(state))?;
    state.mark_rendered();
    Ok(())
}
