//! pxl library
//!
//! A terminal pixel art editor: a layered image with undo history, HSV
//! palette navigation, a viewport over the terminal and an editor state
//! machine, plus the terminal UI and file collaborators around them.

pub mod cli;
pub mod codec;
pub mod color;
pub mod config;
pub mod editor;
pub mod error;
pub mod geometry;
pub mod history;
pub mod layered_image;
pub mod logging;
pub mod tui;
pub mod viewport;

pub use color::{Color, PenColor};
pub use config::Config;
pub use editor::{Command, EditorState, Mode};
pub use error::EditorError;
pub use geometry::{DrawBox, Point};
pub use history::History;
pub use layered_image::LayeredImage;
pub use viewport::Viewport;
