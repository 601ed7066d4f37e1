//! Editor state machine.
//!
//! Composes the layered image, history, pen colour and viewport behind a
//! command API. The input layer classifies raw events into [`Command`]s;
//! [`EditorState::apply`] runs one command to completion and reports what
//! needs redrawing; the render layer reads the state back through the query
//! methods.
//!
//! # Usage
//!
//! ```
//! use image::{Rgba, RgbaImage};
//! use pxl::editor::{Command, EditorState, Flow};
//!
//! let base = RgbaImage::from_pixel(5, 5, Rgba([0, 0, 0, 255]));
//! let mut editor = EditorState::new("art.png", base, 11).unwrap();
//! let mut saves = 0;
//! let mut sink = |_: &str, _: &RgbaImage| -> Result<(), std::io::Error> {
//!     saves += 1;
//!     Ok(())
//! };
//!
//! editor.apply(Command::Paint, &mut sink).unwrap();
//! editor.apply(Command::RequestExit, &mut sink).unwrap();
//! let outcome = editor.apply(Command::ConfirmExit, &mut sink).unwrap();
//! assert_eq!(outcome.flow, Flow::Quit);
//! assert_eq!(saves, 1);
//! ```

mod command;
mod state;

pub use command::{step, Command, Flow, Outcome, Redraw, Step};
pub use state::{EditorOptions, EditorState};

use image::RgbaImage;

/// Which commands the editor accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// Normal editing.
    #[default]
    Drawing,
    /// Exit requested with unsaved edits; waiting for confirm or cancel.
    ConfirmExit,
}

/// Persistence collaborator invoked once on confirmed exit.
///
/// Implemented for any `FnMut(&str, &RgbaImage) -> Result<(), E>`.
pub trait ImageSink {
    type Error: Into<Box<dyn std::error::Error + Send + Sync>>;

    fn save(&mut self, identifier: &str, image: &RgbaImage) -> Result<(), Self::Error>;
}

impl<F, E> ImageSink for F
where
    F: FnMut(&str, &RgbaImage) -> Result<(), E>,
    E: Into<Box<dyn std::error::Error + Send + Sync>>,
{
    type Error = E;

    fn save(&mut self, identifier: &str, image: &RgbaImage) -> Result<(), E> {
        self(identifier, image)
    }
}
