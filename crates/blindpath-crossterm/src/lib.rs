//! Crossterm terminal driver for blindpath.
//!
//! Provides a [`CrosstermDriver`] that puts the terminal into raw mode on the
//! alternate screen, flushes [`FrameCell`] diffs computed from a [`Canvas`],
//! and polls key presses for playback control.

mod canvas;
mod style;

use std::io::{self, Write};
use std::time::Duration;

use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind},
    queue,
    style::{Attribute, Color as CtColor, SetAttribute, SetBackgroundColor, SetForegroundColor},
    terminal::{self, ClearType},
};

pub use canvas::{Canvas, Cell, FrameCell};
pub use style::{AttrMask, Color, Style};

fn to_ct_color(c: Color) -> CtColor {
    match c {
        Color::Reset => CtColor::Reset,
        Color::Rgb { r, g, b } => CtColor::Rgb { r, g, b },
    }
}

/// Keys the playback loop reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Char(char),
    Escape,
    ArrowLeft,
    ArrowRight,
}

/// Maps a crossterm [`KeyCode`] to a [`Key`].
fn to_key(code: KeyCode) -> Option<Key> {
    match code {
        KeyCode::Char(c) => Some(Key::Char(c)),
        KeyCode::Esc => Some(Key::Escape),
        KeyCode::Left => Some(Key::ArrowLeft),
        KeyCode::Right => Some(Key::ArrowRight),
        _ => None,
    }
}

/// A terminal back-end using crossterm.
///
/// The terminal is restored by [`close`](Self::close), or on drop if
/// `close` was never called.
#[derive(Debug, Default)]
pub struct CrosstermDriver {
    active: bool,
}

impl CrosstermDriver {
    /// Create a new driver. The terminal is untouched until
    /// [`init`](Self::init).
    pub fn new() -> Self {
        Self::default()
    }

    /// Enter raw mode and the alternate screen, hide the cursor.
    pub fn init(&mut self) -> io::Result<()> {
        terminal::enable_raw_mode()?;
        self.active = true;
        let mut stdout = io::stdout();
        queue!(
            stdout,
            terminal::EnterAlternateScreen,
            cursor::Hide,
            terminal::Clear(ClearType::All)
        )?;
        stdout.flush()?;
        log::debug!("terminal initialised");
        Ok(())
    }

    /// Current terminal size as (columns, rows).
    pub fn size(&self) -> io::Result<(u16, u16)> {
        terminal::size()
    }

    /// Draw the changed cells and flush stdout. Colours and attributes are
    /// only re-sent when they differ from the previous cell's.
    pub fn flush(&mut self, cells: &[FrameCell]) -> io::Result<()> {
        let mut stdout = io::stdout().lock();
        let mut last: Option<Style> = None;

        for fc in cells {
            queue!(stdout, cursor::MoveTo(fc.x, fc.y))?;
            let style = fc.cell.style;
            if last != Some(style) {
                queue!(
                    stdout,
                    SetAttribute(Attribute::Reset),
                    SetForegroundColor(to_ct_color(style.fg)),
                    SetBackgroundColor(to_ct_color(style.bg))
                )?;
                if style.attrs.contains(AttrMask::BOLD) {
                    queue!(stdout, SetAttribute(Attribute::Bold))?;
                }
                if style.attrs.contains(AttrMask::UNDERLINE) {
                    queue!(stdout, SetAttribute(Attribute::Underlined))?;
                }
                last = Some(style);
            }
            write!(stdout, "{}", fc.cell.ch)?;
        }

        queue!(stdout, SetAttribute(Attribute::Reset))?;
        log::trace!("flushed {} cells", cells.len());
        stdout.flush()
    }

    /// Wait up to `timeout` for a key press. Key releases and non-key events
    /// return `None`.
    pub fn poll_key(&mut self, timeout: Duration) -> io::Result<Option<Key>> {
        if !event::poll(timeout)? {
            return Ok(None);
        }
        match event::read()? {
            Event::Key(KeyEvent {
                code,
                kind: KeyEventKind::Press,
                ..
            }) => Ok(to_key(code)),
            _ => Ok(None),
        }
    }

    /// Restore the terminal.
    pub fn close(&mut self) {
        if !self.active {
            return;
        }
        self.active = false;
        let mut stdout = io::stdout();
        let _ = queue!(
            stdout,
            SetAttribute(Attribute::Reset),
            cursor::Show,
            terminal::LeaveAlternateScreen
        );
        let _ = stdout.flush();
        let _ = terminal::disable_raw_mode();
        log::debug!("terminal restored");
    }
}

impl Drop for CrosstermDriver {
    fn drop(&mut self) {
        self.close();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_colour_resets() {
        assert_eq!(to_ct_color(Color::Reset), CtColor::Reset);
        assert_eq!(
            to_ct_color(Color::from_rgb(1, 2, 3)),
            CtColor::Rgb { r: 1, g: 2, b: 3 }
        );
    }

    #[test]
    fn keys_map() {
        assert_eq!(to_key(KeyCode::Char('q')), Some(Key::Char('q')));
        assert_eq!(to_key(KeyCode::Esc), Some(Key::Escape));
        assert_eq!(to_key(KeyCode::Right), Some(Key::ArrowRight));
        assert_eq!(to_key(KeyCode::F(1)), None);
    }

    #[test]
    fn close_without_init_is_noop() {
        let mut d = CrosstermDriver::new();
        d.close();
        assert!(!d.active);
    }
}
