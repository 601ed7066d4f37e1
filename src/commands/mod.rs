//! Command handlers for the pxl CLI.
//!
//! Each submodule handles a specific CLI command or command group.
//! The main dispatch logic remains in main.rs.

pub mod completions;
pub mod config;
pub mod edit;
