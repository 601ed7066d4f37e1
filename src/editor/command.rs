//! Commands, outcomes and the mode transition function.

use super::Mode;
use crate::color::{Axis, Direction};
use crate::geometry::Point;

/// A classified user action or geometry notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Move the cursor, wrapping at the image edges.
    MoveCursor { dx: i32, dy: i32 },
    /// Paint the cursor cell with the pen colour.
    Paint,
    /// Remove the last stroke.
    Undo,
    /// Flood fill from the cursor with the pen colour.
    FloodFill,
    /// Step one palette sample along an HSV axis.
    ChangeColor(Axis, Direction),
    /// Move the visible window, wrapping at the image edges.
    Pan { dx: i32, dy: i32 },
    RequestExit,
    ConfirmExit,
    CancelExit,
    /// The terminal changed size.
    Resize { width: u16, height: u16 },
}

/// Whether the event loop keeps going.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// What the render layer has to repaint.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Redraw {
    #[default]
    Nothing,
    /// Only these image pixels changed.
    Points(Vec<Point>),
    /// The pen colour and palettes changed.
    Palette,
    /// Layout, pan offset or mode changed.
    Full,
}

impl Redraw {
    fn from_points(points: Vec<Point>) -> Self {
        if points.is_empty() {
            Redraw::Nothing
        } else {
            Redraw::Points(points)
        }
    }

    /// Combine two requests into one that covers both.
    pub fn merge(self, other: Redraw) -> Redraw {
        match (self, other) {
            (Redraw::Nothing, r) | (r, Redraw::Nothing) => r,
            (Redraw::Points(mut a), Redraw::Points(b)) => {
                a.extend(b);
                Redraw::Points(a)
            }
            (Redraw::Palette, Redraw::Palette) => Redraw::Palette,
            _ => Redraw::Full,
        }
    }

    pub fn is_needed(&self) -> bool {
        *self != Redraw::Nothing
    }
}

/// Result of applying one command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
    pub flow: Flow,
    pub redraw: Redraw,
}

impl Outcome {
    pub fn unchanged() -> Self {
        Self {
            flow: Flow::Continue,
            redraw: Redraw::Nothing,
        }
    }

    pub fn redraw(redraw: Redraw) -> Self {
        Self {
            flow: Flow::Continue,
            redraw,
        }
    }

    pub(super) fn points(points: Vec<Point>) -> Self {
        Self::redraw(Redraw::from_points(points))
    }

    pub fn quit() -> Self {
        Self {
            flow: Flow::Quit,
            redraw: Redraw::Nothing,
        }
    }
}

/// Decision of the state machine for one command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// Run the command against the editor.
    Apply,
    /// Drop the command.
    Ignore,
    /// Switch to another mode.
    Enter(Mode),
    /// Terminate without saving.
    Quit,
    /// Save through the sink, then terminate.
    SaveAndQuit,
}

/// The mode transition function.
///
/// Resize is geometry rather than a user action and applies in every mode.
/// In `ConfirmExit` only confirm and cancel are accepted.
pub fn step(mode: Mode, command: &Command, pending_changes: bool) -> Step {
    match (mode, command) {
        (_, Command::Resize { .. }) => Step::Apply,
        (Mode::Drawing, Command::RequestExit) => {
            if pending_changes {
                Step::Enter(Mode::ConfirmExit)
            } else {
                Step::Quit
            }
        }
        (Mode::Drawing, Command::ConfirmExit | Command::CancelExit) => Step::Ignore,
        (Mode::Drawing, _) => Step::Apply,
        (Mode::ConfirmExit, Command::ConfirmExit) => Step::SaveAndQuit,
        (Mode::ConfirmExit, Command::CancelExit) => Step::Enter(Mode::Drawing),
        (Mode::ConfirmExit, _) => Step::Ignore,
    }
}
