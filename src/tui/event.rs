//! Event handling for TUI
//!
//! Polls crossterm on a helper thread and forwards key presses, resizes and
//! ticks over a channel. The editor itself stays on the main thread.

use anyhow::Result;
use crossterm::event::{self, Event as CrosstermEvent, KeyEvent, KeyEventKind};
use std::sync::mpsc;
use std::thread;
use std::time::Duration;

/// Application events
#[derive(Debug, Clone)]
pub enum Event {
    /// Terminal was resized
    Resize(u16, u16),
    /// Key was pressed
    Key(KeyEvent),
    /// Nothing happened within the tick rate
    Tick,
}

/// Translate a raw crossterm event. Key releases and repeats are dropped.
pub fn translate(event: CrosstermEvent) -> Option<Event> {
    match event {
        CrosstermEvent::Key(key) if key.kind == KeyEventKind::Press => Some(Event::Key(key)),
        CrosstermEvent::Resize(width, height) => Some(Event::Resize(width, height)),
        _ => None,
    }
}

/// Event handler that runs in a separate thread
pub struct EventHandler {
    rx: mpsc::Receiver<Event>,
    _handle: thread::JoinHandle<()>,
}

impl EventHandler {
    /// Create a new event handler with the given tick rate.
    pub fn new(tick_rate: Duration) -> Self {
        let (tx, rx) = mpsc::channel();

        let handle = thread::spawn(move || loop {
            let event = match event::poll(tick_rate) {
                Ok(true) => match event::read() {
                    Ok(raw) => match translate(raw) {
                        Some(event) => event,
                        None => continue,
                    },
                    Err(_) => break,
                },
                Ok(false) => Event::Tick,
                Err(_) => break,
            };
            // Receiver gone: the app has shut down.
            if tx.send(event).is_err() {
                break;
            }
        });

        Self {
            rx,
            _handle: handle,
        }
    }

    /// Get the next event, blocking until one is available.
    pub fn next(&self) -> Result<Event> {
        self.rx
            .recv()
            .map_err(|e| anyhow::anyhow!("Event channel closed: {}", e))
    }
}
