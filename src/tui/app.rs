//! Terminal lifecycle for TUI
//!
//! Owns raw mode, the alternate screen and the event thread.

use std::io::{self, Stdout};
use std::time::Duration;

use anyhow::Result;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use super::event::{Event, EventHandler};

/// TUI Application wrapper
///
/// Sets the terminal up on creation and restores it on drop.
pub struct App {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    events: EventHandler,
}

impl App {
    /// Create a new App instance.
    ///
    /// Sets up the terminal for TUI mode (raw mode, alternate screen).
    /// Uses explicit rollback to ensure terminal is restored on error.
    pub fn new(tick_rate: Duration) -> Result<Self> {
        enable_raw_mode()?;

        let mut stdout = io::stdout();
        if let Err(e) = execute!(stdout, EnterAlternateScreen) {
            let _ = disable_raw_mode();
            return Err(e.into());
        }

        let backend = CrosstermBackend::new(stdout);
        let mut terminal = match Terminal::new(backend) {
            Ok(t) => t,
            Err(e) => {
                let mut stdout = io::stdout();
                let _ = execute!(stdout, LeaveAlternateScreen);
                let _ = disable_raw_mode();
                return Err(e.into());
            }
        };
        // Pixels are drawn as cells; the hardware cursor only gets in the way.
        let _ = terminal.hide_cursor();

        let events = EventHandler::new(tick_rate);

        Ok(Self { terminal, events })
    }

    /// Get terminal size (width, height).
    pub fn size(&self) -> Result<(u16, u16)> {
        let size = self.terminal.size()?;
        Ok((size.width, size.height))
    }

    /// Get the next event from the event handler.
    pub fn next_event(&self) -> Result<Event> {
        self.events.next()
    }

    /// Draw a frame using the provided closure.
    pub fn draw<F>(&mut self, f: F) -> Result<()>
    where
        F: FnOnce(&mut ratatui::Frame),
    {
        self.terminal.draw(f)?;
        Ok(())
    }
}

impl Drop for App {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(self.terminal.backend_mut(), LeaveAlternateScreen);
        let _ = self.terminal.show_cursor();
    }
}
