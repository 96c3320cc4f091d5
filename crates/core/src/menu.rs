//! The interactive menu.
//!
//! A [`Menu`] prints its prompt and options once, then keeps the highlighted
//! option, the stored selection and the terminal cursor row in step while the
//! user moves up and down. Only the two lines affected by a move are redrawn.

use std::ops::{Deref, DerefMut};

use crossterm::style::Color;
use log::debug;

use crate::error::{Error, Result};
use crate::terminal::{CrosstermTerminal, MenuKey, Terminal};

/// Direction of a single navigation step.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Next,
    Previous,
}

/// Colors used to draw the options.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MenuStyle {
    pub selected: Color,
    pub unselected: Color,
}

impl Default for MenuStyle {
    fn default() -> Self {
        Self {
            selected: Color::Green,
            unselected: Color::Grey,
        }
    }
}

/// Formats an option line with its selection prefix.
///
/// The prefix is always two characters wide so that repainting a line never
/// leaves stray characters behind.
pub fn option_line(is_selected: bool, option: &str) -> String {
    if is_selected {
        format!("* << {option} >>")
    } else {
        format!("  << {option} >>")
    }
}

/// Puts the terminal back to its default color with a visible cursor when
/// dropped, unless the menu already did so on its way out.
struct RestoreGuard<'a, T: Terminal> {
    terminal: &'a mut T,
    armed: bool,
}

impl<'a, T: Terminal> RestoreGuard<'a, T> {
    fn new(terminal: &'a mut T) -> Self {
        Self {
            terminal,
            armed: true,
        }
    }

    fn disarm(&mut self) {
        self.armed = false;
    }
}

impl<T: Terminal> Deref for RestoreGuard<'_, T> {
    type Target = T;

    fn deref(&self) -> &T {
        &*self.terminal
    }
}

impl<T: Terminal> DerefMut for RestoreGuard<'_, T> {
    fn deref_mut(&mut self) -> &mut T {
        &mut *self.terminal
    }
}

impl<T: Terminal> Drop for RestoreGuard<'_, T> {
    fn drop(&mut self) {
        if self.armed {
            let _ = self.terminal.reset_color();
            let _ = self.terminal.set_cursor_visible(true);
            let _ = self.terminal.flush();
        }
    }
}

/// A prompt with a list of options to choose from.
#[derive(Debug)]
pub struct Menu {
    prompt: String,
    options: Vec<String>,
    selected_index: usize,
    cursor_column: u16,
    cursor_row: u16,
    style: MenuStyle,
}

impl Menu {
    /// Creates a menu with the first option selected.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyOptions`] if `options` is empty.
    pub fn new(prompt: impl Into<String>, options: Vec<String>) -> Result<Self> {
        if options.is_empty() {
            return Err(Error::EmptyOptions);
        }

        Ok(Self {
            prompt: prompt.into(),
            options,
            selected_index: 0,
            cursor_column: 0,
            cursor_row: 0,
            style: MenuStyle::default(),
        })
    }

    #[must_use]
    pub fn with_style(mut self, style: MenuStyle) -> Self {
        self.style = style;
        self
    }

    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    pub fn options(&self) -> &[String] {
        &self.options
    }

    pub fn selected_index(&self) -> usize {
        self.selected_index
    }

    pub fn style(&self) -> MenuStyle {
        self.style
    }

    /// Runs the menu on the current terminal and returns the index of the
    /// option confirmed with Enter.
    ///
    /// # Errors
    ///
    /// Fails if the terminal is not interactive or if terminal I/O fails.
    pub fn run(self) -> Result<usize> {
        let mut terminal = CrosstermTerminal::open()?;
        self.run_with(&mut terminal)
    }

    /// Same as [`Menu::run`], drawing on and reading keys from `terminal`.
    ///
    /// Arrow keys move the selection, Enter confirms, Ctrl-C fails with
    /// [`Error::Interrupted`] and every other key is ignored. Whatever happens,
    /// the cursor is visible and the color reset once this returns.
    pub fn run_with<T: Terminal>(mut self, terminal: &mut T) -> Result<usize> {
        let mut terminal = RestoreGuard::new(terminal);

        terminal.set_cursor_visible(false)?;
        self.display_options(&mut *terminal)?;

        loop {
            match terminal.read_key()? {
                MenuKey::Down => {
                    if self.can_navigate_next() {
                        self.navigate(&mut *terminal, Direction::Next)?;
                    }
                }
                MenuKey::Up => {
                    if self.can_navigate_previous() {
                        self.navigate(&mut *terminal, Direction::Previous)?;
                    }
                }
                MenuKey::Enter => break,
                MenuKey::Interrupt => {
                    debug!("Interrupted at option {}", self.selected_index);
                    // Leave the list intact for whatever is printed next
                    self.move_cursor_bottom(&mut *terminal)?;
                    return Err(Error::Interrupted);
                }
                MenuKey::Other => {}
            }
        }

        debug!(
            "Confirmed option {}: `{}`",
            self.selected_index, self.options[self.selected_index]
        );

        self.move_cursor_bottom(&mut *terminal)?;
        terminal.reset_color()?;
        terminal.set_cursor_visible(true)?;
        terminal.flush()?;
        terminal.disarm();

        Ok(self.selected_index)
    }

    fn write_option<T: Terminal>(
        &self,
        terminal: &mut T,
        is_selected: bool,
        option: &str,
    ) -> Result<()> {
        let color = if is_selected {
            self.style.selected
        } else {
            self.style.unselected
        };

        terminal.set_foreground(color)?;
        terminal.write_line(&option_line(is_selected, option))
    }

    /// Prints the prompt and every option, then parks the cursor on the
    /// first option line.
    fn display_options<T: Terminal>(&mut self, terminal: &mut T) -> Result<()> {
        terminal.write_line(&self.prompt)?;

        for (i, option) in self.options.iter().enumerate() {
            self.write_option(terminal, self.selected_index == i, option)?;
        }

        let (column, row) = terminal.cursor_position()?;
        self.cursor_column = column;
        self.cursor_row = row.saturating_sub(self.option_count());

        terminal.move_cursor(self.cursor_column, self.cursor_row)?;
        terminal.flush()
    }

    fn can_navigate_previous(&self) -> bool {
        self.selected_index > 0
    }

    fn can_navigate_next(&self) -> bool {
        self.selected_index < self.options.len() - 1
    }

    /// Moves the selection one step, repainting the old and the new line.
    fn navigate<T: Terminal>(&mut self, terminal: &mut T, direction: Direction) -> Result<()> {
        terminal.move_cursor(self.cursor_column, self.cursor_row)?;
        self.write_option(terminal, false, &self.options[self.selected_index])?;

        match direction {
            Direction::Next => {
                self.selected_index += 1;
                self.cursor_row += 1;
            }
            Direction::Previous => {
                self.selected_index -= 1;
                self.cursor_row -= 1;
            }
        }

        terminal.move_cursor(self.cursor_column, self.cursor_row)?;
        self.write_option(terminal, true, &self.options[self.selected_index])?;

        self.cursor_column = 0;
        terminal.move_cursor(self.cursor_column, self.cursor_row)?;

        debug!("Selection moved {:?} to {}", direction, self.selected_index);

        terminal.flush()
    }

    /// Moves the cursor to the line below the last option.
    fn move_cursor_bottom<T: Terminal>(&mut self, terminal: &mut T) -> Result<()> {
        let remaining = self.options.len() - self.selected_index;

        self.cursor_column = 0;
        self.cursor_row = self
            .cursor_row
            .saturating_add(u16::try_from(remaining).unwrap_or(u16::MAX));

        terminal.move_cursor(self.cursor_column, self.cursor_row)
    }

    fn option_count(&self) -> u16 {
        u16::try_from(self.options.len()).unwrap_or(u16::MAX)
    }
}
