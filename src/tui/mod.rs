//! TUI (Text User Interface) module for pxl
//!
//! Terminal-side collaborator of the editor: terminal lifecycle, input
//! polling, key classification and rendering, using ratatui/crossterm.

pub mod app;
pub mod editor_app;
pub mod event;
pub mod keybindings;
pub mod theme;
pub mod ui;

pub use editor_app::EditorApp;
pub use theme::{current_theme, Theme};
