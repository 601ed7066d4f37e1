//! pxl - CLI entry point

mod commands;

use anyhow::Result;
use clap::Parser;

use pxl::cli::{Cli, Commands, ConfigCommands};

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Edit {
            file,
            size,
            palette_size,
        } => commands::edit::handle(&file, size.as_deref(), palette_size),
        Commands::Config(cmd) => match cmd {
            ConfigCommands::Show => commands::config::handle_show(),
            ConfigCommands::Path => commands::config::handle_path(),
            ConfigCommands::Init { force } => commands::config::handle_init(force),
        },
        Commands::Completions { shell } => commands::completions::handle::<Cli>(shell),
    }
}
