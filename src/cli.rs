//! CLI definitions for pxl
//!
//! This module contains the clap CLI structure definitions, separated from main.rs
//! so they can be accessed by xtask for man page generation.

use std::path::PathBuf;

use clap::builder::styling::{AnsiColor, Effects, Styles};
use clap::{Parser, Subcommand};
use clap_complete::Shell as CompletionShell;

/// Build clap styles using our theme colors.
///
/// - Green: headers, usage, command names (accent color)
/// - White: descriptions, placeholders (renders as light gray on dark terminals)
pub fn build_cli_styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::Green.on_default() | Effects::BOLD)
        .usage(AnsiColor::Green.on_default() | Effects::BOLD)
        .literal(AnsiColor::Green.on_default())
        .placeholder(AnsiColor::White.on_default())
        .valid(AnsiColor::White.on_default())
        .invalid(AnsiColor::Red.on_default())
        .error(AnsiColor::Red.on_default() | Effects::BOLD)
}

#[derive(Parser)]
#[command(name = "pxl")]
#[command(about = "[ pxl ] - edit pixel art in your terminal")]
#[command(
    long_about = "pxl - a keyboard-driven pixel art editor for the terminal.

Each image pixel is drawn as two terminal cells. Colours are picked by
stepping through hue, saturation and value palettes. Edits live in an
overlay on top of the original image until you confirm saving on exit.

QUICK START:
    pxl edit sprite.png                 Edit an existing image
    pxl edit new.png --size 16,16       Create a 16x16 image
    pxl config init                     Write the default config file"
)]
#[command(version)]
#[command(styles = build_cli_styles())]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Open an image in the editor
    #[command(long_about = "Open an image in the interactive editor.

If FILE exists it is loaded; otherwise a new image of --size is created
and filled with canvas.new_image_fill. The image is written back to FILE
as PNG when you confirm the exit prompt.

KEYS:
    w a s d        Move the cursor (wraps at the edges)
    e / space      Paint the cursor pixel
    f              Flood fill from the cursor
    z              Undo the last paint or fill
    u/j i/k o/l    Hue, saturation, value down/up
    arrows         Pan the view
    x / Esc        Exit (asks to save when there are edits)

EXAMPLES:
    pxl edit sprite.png
    pxl edit tile.png --size 8,8
    pxl edit tile.png --palette-size 21")]
    Edit {
        /// Image file to open or create
        #[arg(help = "Image file to open or create")]
        file: PathBuf,

        /// Size of a new image as WIDTH,HEIGHT
        #[arg(long, short, value_name = "W,H", help = "Size of a new image as WIDTH,HEIGHT")]
        size: Option<String>,

        /// Swatches per palette (overrides editor.palette_size)
        #[arg(long, short, help = "Swatches per palette (overrides config)")]
        palette_size: Option<usize>,
    },

    /// Configuration management
    #[command(
        subcommand,
        long_about = "View and create the pxl configuration file.

Configuration is stored in ~/.config/pxl/config.toml and holds the
palette size, initial pen colour, new image fill, layout and logging.

EXAMPLES:
    pxl config show          Display current configuration
    pxl config path          Print the config file location
    pxl config init          Write defaults if no config exists"
    )]
    Config(ConfigCommands),

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: CompletionShell,
    },
}

#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Show current configuration as TOML
    Show,
    /// Print the configuration file path
    Path,
    /// Write the default configuration file
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}
