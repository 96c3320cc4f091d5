//! Terminal access for the menu.
//!
//! The menu never talks to stdout directly. Everything it needs from the
//! terminal (reading keys, cursor bookkeeping, colors, writing lines) goes
//! through the [`Terminal`] trait, and [`CrosstermTerminal`] is the real
//! implementation on top of crossterm.

use std::io::{stdin, stdout, IsTerminal, Stdout, Write};

use crossterm::cursor::{self, MoveTo};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::queue;
use crossterm::style::{Color, Print, ResetColor, SetForegroundColor};
use crossterm::terminal::{disable_raw_mode, enable_raw_mode};
use log::debug;

use crate::error::{Error, Result};

/// The keys the menu distinguishes between.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MenuKey {
    Up,
    Down,
    Enter,
    /// Ctrl-C. Raw mode swallows the signal, so it arrives as a key.
    Interrupt,
    /// Anything else. Ignored by the menu.
    Other,
}

impl From<KeyEvent> for MenuKey {
    fn from(key_event: KeyEvent) -> Self {
        match key_event.code {
            KeyCode::Char('c') if key_event.modifiers.contains(KeyModifiers::CONTROL) => {
                MenuKey::Interrupt
            }
            KeyCode::Up => MenuKey::Up,
            KeyCode::Down => MenuKey::Down,
            KeyCode::Enter => MenuKey::Enter,
            _ => MenuKey::Other,
        }
    }
}

/// Primitives the menu needs from an interactive terminal.
///
/// Coordinates are `(column, row)`, zero based, absolute.
pub trait Terminal {
    /// Blocks until a key is pressed. The key is not echoed.
    fn read_key(&mut self) -> Result<MenuKey>;

    fn cursor_position(&mut self) -> Result<(u16, u16)>;

    fn move_cursor(&mut self, column: u16, row: u16) -> Result<()>;

    fn set_cursor_visible(&mut self, visible: bool) -> Result<()>;

    fn set_foreground(&mut self, color: Color) -> Result<()>;

    fn reset_color(&mut self) -> Result<()>;

    /// Writes `text` at the cursor, then moves to column 0 of the next line.
    fn write_line(&mut self, text: &str) -> Result<()>;

    fn flush(&mut self) -> Result<()>;
}

/// [`Terminal`] backed by stdout and crossterm.
///
/// Raw mode is enabled for the lifetime of the value, so key presses are
/// delivered one at a time and are not echoed.
pub struct CrosstermTerminal {
    stdout: Stdout,
}

impl CrosstermTerminal {
    /// Takes over the current terminal.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotInteractive`] when stdin or stdout is not a TTY (for
    /// example when output is piped), since absolute cursor positioning would
    /// not mean anything there.
    pub fn open() -> Result<Self> {
        if !stdin().is_terminal() {
            return Err(Error::NotInteractive("stdin".to_string()));
        }

        if !stdout().is_terminal() {
            return Err(Error::NotInteractive("stdout".to_string()));
        }

        enable_raw_mode()?;
        debug!("Raw mode enabled");

        Ok(Self { stdout: stdout() })
    }
}

impl Drop for CrosstermTerminal {
    fn drop(&mut self) {
        let _ = self.stdout.flush();
        let _ = disable_raw_mode();
    }
}

impl Terminal for CrosstermTerminal {
    fn read_key(&mut self) -> Result<MenuKey> {
        loop {
            // Releases and repeats are reported on some platforms, only count presses
            if let Event::Key(key_event) = event::read()? {
                if key_event.kind == KeyEventKind::Press {
                    return Ok(MenuKey::from(key_event));
                }
            }
        }
    }

    fn cursor_position(&mut self) -> Result<(u16, u16)> {
        self.stdout.flush()?;
        Ok(cursor::position()?)
    }

    fn move_cursor(&mut self, column: u16, row: u16) -> Result<()> {
        queue!(self.stdout, MoveTo(column, row))?;
        Ok(())
    }

    fn set_cursor_visible(&mut self, visible: bool) -> Result<()> {
        if visible {
            queue!(self.stdout, cursor::Show)?;
        } else {
            queue!(self.stdout, cursor::Hide)?;
        }
        Ok(())
    }

    fn set_foreground(&mut self, color: Color) -> Result<()> {
        queue!(self.stdout, SetForegroundColor(color))?;
        Ok(())
    }

    fn reset_color(&mut self) -> Result<()> {
        queue!(self.stdout, ResetColor)?;
        Ok(())
    }

    fn write_line(&mut self, text: &str) -> Result<()> {
        // Raw mode does not translate `\n`, so return the carriage explicitly
        queue!(self.stdout, Print(text), Print("\r\n"))?;
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        self.stdout.flush()?;
        Ok(())
    }
}

/// A scripted terminal for tests. It replays a fixed list of keys, keeps a
/// model of the screen and records every call made to it.
#[cfg(test)]
pub(crate) mod testing {
    use std::collections::{HashMap, VecDeque};
    use std::io;

    use crossterm::style::Color;

    use super::{MenuKey, Terminal};
    use crate::error::Result;

    #[derive(Clone, Debug, PartialEq, Eq)]
    pub enum Call {
        ReadKey,
        CursorPosition,
        MoveCursor(u16, u16),
        SetCursorVisible(bool),
        SetForeground(Color),
        ResetColor,
        WriteLine(String),
        Flush,
    }

    pub struct ScriptedTerminal {
        keys: VecDeque<MenuKey>,
        pub calls: Vec<Call>,
        pub column: u16,
        pub row: u16,
        pub color: Option<Color>,
        pub cursor_visible: bool,
        /// Last text and color written on each row
        pub screen: HashMap<u16, (String, Option<Color>)>,
        /// Rows on screen. Writing past the last one scrolls.
        height: u16,
    }

    impl ScriptedTerminal {
        pub fn new(keys: &[MenuKey]) -> Self {
            Self::starting_at(keys, 0)
        }

        pub fn starting_at(keys: &[MenuKey], row: u16) -> Self {
            Self::with_height(keys, row, u16::MAX)
        }

        pub fn with_height(keys: &[MenuKey], row: u16, height: u16) -> Self {
            Self {
                keys: keys.iter().copied().collect(),
                calls: Vec::new(),
                column: 0,
                row,
                color: None,
                cursor_visible: true,
                screen: HashMap::new(),
                height,
            }
        }

        fn scroll_up(&mut self) {
            self.screen = self
                .screen
                .drain()
                .filter(|(row, _)| *row > 0)
                .map(|(row, line)| (row - 1, line))
                .collect();
        }

        /// Rows whose text carries the selected prefix
        pub fn selected_rows(&self) -> Vec<u16> {
            let mut rows: Vec<u16> = self
                .screen
                .iter()
                .filter(|(_, (text, _))| text.starts_with("* "))
                .map(|(row, _)| *row)
                .collect();
            rows.sort_unstable();
            rows
        }

        /// Lines written after the call at `start`
        pub fn lines_written_since(&self, start: usize) -> Vec<String> {
            self.calls[start..]
                .iter()
                .filter_map(|call| match call {
                    Call::WriteLine(text) => Some(text.clone()),
                    _ => None,
                })
                .collect()
        }
    }

    impl Terminal for ScriptedTerminal {
        fn read_key(&mut self) -> Result<MenuKey> {
            self.calls.push(Call::ReadKey);
            self.keys.pop_front().ok_or_else(|| {
                io::Error::new(io::ErrorKind::UnexpectedEof, "no more scripted keys").into()
            })
        }

        fn cursor_position(&mut self) -> Result<(u16, u16)> {
            self.calls.push(Call::CursorPosition);
            Ok((self.column, self.row))
        }

        fn move_cursor(&mut self, column: u16, row: u16) -> Result<()> {
            self.calls.push(Call::MoveCursor(column, row));
            self.column = column;
            self.row = row.min(self.height - 1);
            Ok(())
        }

        fn set_cursor_visible(&mut self, visible: bool) -> Result<()> {
            self.calls.push(Call::SetCursorVisible(visible));
            self.cursor_visible = visible;
            Ok(())
        }

        fn set_foreground(&mut self, color: Color) -> Result<()> {
            self.calls.push(Call::SetForeground(color));
            self.color = Some(color);
            Ok(())
        }

        fn reset_color(&mut self) -> Result<()> {
            self.calls.push(Call::ResetColor);
            self.color = None;
            Ok(())
        }

        fn write_line(&mut self, text: &str) -> Result<()> {
            self.calls.push(Call::WriteLine(text.to_string()));
            self.screen.insert(self.row, (text.to_string(), self.color));
            self.column = 0;
            if self.row >= self.height - 1 {
                self.scroll_up();
            } else {
                self.row += 1;
            }
            Ok(())
        }

        fn flush(&mut self) -> Result<()> {
            self.calls.push(Call::Flush);
            Ok(())
        }
    }
}
