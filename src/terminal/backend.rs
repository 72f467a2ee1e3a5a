//! `crossterm` implementations of the harness interfaces.

use super::{EventSource, Screen};
use crate::app::{KeyInput, KeyPress};
use crate::domain::error::Result;
use crossterm::cursor::{Hide, MoveToColumn, MoveUp, Show};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::terminal::{self, Clear, ClearType};
use crossterm::{execute, queue};
use std::io::{self, Write};
use unicode_width::UnicodeWidthChar;

/// Reads key presses from the terminal.
///
/// Requires raw mode, see [`RawModeGuard`]. Release and repeat events, mouse
/// and resize events are skipped.
#[derive(Debug, Default)]
pub struct CrosstermEvents;

impl EventSource for CrosstermEvents {
    fn next_input(&mut self) -> Result<Option<KeyInput>> {
        loop {
            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                if let Some(input) = map_key_event(key) {
                    return Ok(Some(input));
                }
            }
        }
    }
}

fn map_key_event(key: KeyEvent) -> Option<KeyInput> {
    let press = match key.code {
        KeyCode::Enter => return Some(KeyInput::Line),
        KeyCode::Up => KeyPress::named("up"),
        KeyCode::Down => KeyPress::named("down"),
        KeyCode::Left => KeyPress::named("left"),
        KeyCode::Right => KeyPress::named("right"),
        KeyCode::Backspace => KeyPress::named("backspace"),
        KeyCode::Esc => KeyPress::named("escape"),
        KeyCode::Tab => KeyPress::named("tab"),
        KeyCode::Char(c) if key.modifiers.contains(KeyModifiers::CONTROL) => KeyPress::ctrl(c),
        KeyCode::Char(c) => KeyPress::char(c),
        _ => return None,
    };
    Some(KeyInput::Press(press))
}

/// Draws frames inline below the cursor, erasing the previous frame first.
///
/// Lines are written with `\r\n` since raw mode disables output newline
/// translation. Lines wider than the terminal soft-wrap, so the erase step
/// counts physical rows at the terminal width instead of `\n`-separated lines.
#[derive(Debug)]
pub struct InlineScreen<W: Write> {
    out: W,
    /// Fixed width; `None` queries the terminal on every frame.
    columns: Option<u16>,
    /// Physical rows of the frame currently on screen.
    drawn_rows: usize,
}

impl<W: Write> InlineScreen<W> {
    pub const fn new(out: W) -> Self {
        Self {
            out,
            columns: None,
            drawn_rows: 0,
        }
    }

    /// Creates a screen that wraps at `columns` instead of the terminal width.
    pub const fn with_columns(out: W, columns: u16) -> Self {
        Self {
            out,
            columns: Some(columns),
            drawn_rows: 0,
        }
    }

    /// Consumes the screen, returning the writer.
    pub fn into_inner(self) -> W {
        self.out
    }

    fn columns(&self) -> usize {
        self.columns
            .or_else(|| terminal::size().ok().map(|(cols, _)| cols))
            .map_or(0, usize::from)
    }

    fn erase(&mut self) -> io::Result<()> {
        if self.drawn_rows == 0 {
            return Ok(());
        }
        queue!(self.out, MoveToColumn(0))?;
        if self.drawn_rows > 1 {
            let up = u16::try_from(self.drawn_rows - 1).unwrap_or(u16::MAX);
            queue!(self.out, MoveUp(up))?;
        }
        queue!(self.out, Clear(ClearType::FromCursorDown))
    }
}

/// Terminal rows taken by `line` at `columns` width, ignoring ANSI escapes.
///
/// A zero width (unknown terminal size) counts every line as one row.
fn physical_rows(line: &str, columns: usize) -> usize {
    let width = display_width(line);
    if columns == 0 || width == 0 {
        return 1;
    }
    width.div_ceil(columns)
}

/// Display width of `line` with CSI escape sequences skipped.
fn display_width(line: &str) -> usize {
    let mut width = 0;
    let mut chars = line.chars();
    while let Some(c) = chars.next() {
        if c == '\u{1b}' {
            for c in chars.by_ref() {
                if c.is_ascii_alphabetic() {
                    break;
                }
            }
        } else {
            width += c.width().unwrap_or(0);
        }
    }
    width
}

impl<W: Write> Screen for InlineScreen<W> {
    fn render(&mut self, frame: &str) -> Result<()> {
        self.erase()?;
        let columns = self.columns();
        let lines: Vec<&str> = frame.split('\n').collect();
        self.out.write_all(lines.join("\r\n").as_bytes())?;
        self.out.flush()?;
        self.drawn_rows = lines.iter().map(|line| physical_rows(line, columns)).sum();
        Ok(())
    }

    fn hide_cursor(&mut self) -> Result<()> {
        execute!(self.out, Hide)?;
        Ok(())
    }

    fn show_cursor(&mut self) -> Result<()> {
        execute!(self.out, Show)?;
        Ok(())
    }

    fn done(&mut self) -> Result<()> {
        self.out.write_all(b"\r\n")?;
        self.out.flush()?;
        self.drawn_rows = 0;
        Ok(())
    }
}

/// Keeps the terminal in raw mode while alive.
///
/// Dropping the guard disables raw mode and shows the cursor on stderr, also
/// when the session ends with an error or a panic unwinds through it.
#[derive(Debug)]
pub struct RawModeGuard {
    _private: (),
}

impl RawModeGuard {
    /// Enables raw mode.
    ///
    /// # Errors
    ///
    /// Returns [`crate::DirpickerError::Io`] if the terminal refuses raw mode.
    pub fn new() -> Result<Self> {
        terminal::enable_raw_mode()?;
        tracing::debug!("raw mode enabled");
        Ok(Self { _private: () })
    }
}

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        let _ = execute!(io::stderr(), Show);
        let _ = terminal::disable_raw_mode();
        tracing::debug!("raw mode disabled");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent::new(code, modifiers)
    }

    #[test]
    fn maps_keys_to_names() {
        assert_eq!(map_key_event(key(KeyCode::Enter, KeyModifiers::NONE)), Some(KeyInput::Line));
        assert_eq!(
            map_key_event(key(KeyCode::Esc, KeyModifiers::NONE)),
            Some(KeyInput::Press(KeyPress::named("escape")))
        );
        assert_eq!(
            map_key_event(key(KeyCode::Char('z'), KeyModifiers::SHIFT)),
            Some(KeyInput::Press(KeyPress::char('z')))
        );
        assert_eq!(
            map_key_event(key(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            Some(KeyInput::Press(KeyPress::ctrl('c')))
        );
        assert_eq!(map_key_event(key(KeyCode::F(1), KeyModifiers::NONE)), None);
    }

    #[test]
    fn second_frame_erases_the_first() {
        let mut screen = InlineScreen::with_columns(Vec::new(), 80);
        screen.render("one\ntwo\nthree").unwrap();
        screen.render("four").unwrap();
        screen.done().unwrap();

        let output = String::from_utf8(screen.into_inner()).unwrap();
        assert!(output.starts_with("one\r\ntwo\r\nthree"));
        assert!(output.contains("\u{1b}[2A"), "cursor moves up to the first line");
        assert!(output.ends_with("four\r\n"));
    }

    #[test]
    fn wrapped_lines_are_erased_too() {
        let mut screen = InlineScreen::with_columns(Vec::new(), 80);
        screen.render(&format!("question\n{}", "x".repeat(210))).unwrap();
        screen.render("next").unwrap();

        let output = String::from_utf8(screen.into_inner()).unwrap();
        assert!(output.ends_with("\u{1b}[1G\u{1b}[3A\u{1b}[Jnext"));
    }

    #[test]
    fn escapes_and_wide_chars_in_row_count() {
        let colored = format!("\u{1b}[38;2;1;2;3m{}\u{1b}[0m", "a".repeat(80));
        assert_eq!(physical_rows(&colored, 80), 1);
        assert_eq!(physical_rows(&"a".repeat(81), 80), 2);
        assert_eq!(physical_rows("", 80), 1);
        assert_eq!(physical_rows(&"\u{4e2d}".repeat(41), 80), 2);
        assert_eq!(physical_rows(&"a".repeat(500), 0), 1);
    }
}
