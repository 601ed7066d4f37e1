//! Interactive editor session
//!
//! Drives an [`EditorState`] from terminal events until it asks to quit.

use std::time::Duration;

use anyhow::{Context, Result};
use tracing::{debug, error};

use super::app::App;
use super::event::Event;
use super::keybindings::classify;
use super::theme::Theme;
use super::ui;
use crate::editor::{Command, EditorState, Flow, ImageSink, Outcome};

const TICK_RATE: Duration = Duration::from_millis(250);

/// The editor bound to a live terminal.
pub struct EditorApp {
    app: App,
    state: EditorState,
    theme: Theme,
}

impl EditorApp {
    /// Take over the terminal and fit `state` to its size.
    pub fn new(mut state: EditorState, theme: Theme) -> Result<Self> {
        let app = App::new(TICK_RATE)?;
        let (width, height) = app.size()?;
        state.on_resize(width, height);
        Ok(Self { app, state, theme })
    }

    pub fn state(&self) -> &EditorState {
        &self.state
    }

    /// Run until the editor quits. A confirmed exit saves through `sink`.
    ///
    /// A failed save ends the session with an error. Edits stay in memory
    /// until the app is dropped.
    pub fn run<S>(&mut self, sink: &mut S) -> Result<()>
    where
        S: ImageSink + ?Sized,
    {
        self.draw()?;
        loop {
            let command = match self.app.next_event()? {
                Event::Key(key) => classify(self.state.mode(), key),
                Event::Resize(width, height) => Some(Command::Resize { width, height }),
                Event::Tick => None,
            };
            let Some(command) = command else {
                continue;
            };

            let outcome = apply_command(&mut self.state, command, sink)?;
            if outcome.flow == Flow::Quit {
                return Ok(());
            }
            if outcome.redraw.is_needed() {
                self.draw()?;
            }
        }
    }

    fn draw(&mut self) -> Result<()> {
        let state = &self.state;
        let theme = &self.theme;
        self.app.draw(|frame| ui::render(frame, state, theme))
    }
}

/// Apply one command. Any editor error, a failed save included, is fatal.
fn apply_command<S>(state: &mut EditorState, command: Command, sink: &mut S) -> Result<Outcome>
where
    S: ImageSink + ?Sized,
{
    debug!(?command, "command");
    state
        .apply(command, sink)
        .map_err(|e| {
            error!(error = ?e, "editor stopped");
            e
        })
        .with_context(|| format!("Editing {} failed", state.identifier()))
}
