//! xtask - Build tasks for pxl
//!
//! Run with: cargo xtask <command>
//!
//! Commands:
//! - gen-docs: Generate man pages from the CLI definitions

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Command, CommandFactory, Parser, Subcommand};
use clap_mangen::Man;

use pxl::cli::Cli;

#[derive(Parser)]
#[command(name = "xtask")]
#[command(about = "Build tasks for pxl")]
struct Xtask {
    #[command(subcommand)]
    command: XtaskCommand,
}

#[derive(Subcommand)]
enum XtaskCommand {
    /// Generate man pages from CLI definitions
    #[command(name = "gen-docs")]
    GenDocs {
        /// Output directory (default: docs/)
        #[arg(long, short, default_value = "docs")]
        output: PathBuf,
    },
}

fn main() -> Result<()> {
    let args = Xtask::parse();

    match args.command {
        XtaskCommand::GenDocs { output } => generate_man_pages(&output)?,
    }

    Ok(())
}

/// Generate `pxl.1` plus one page per visible subcommand, recursively.
fn generate_man_pages(output: &Path) -> Result<()> {
    let man_dir = output.join("man");
    fs::create_dir_all(&man_dir).context("Failed to create man directory")?;

    let cmd = Cli::command();
    let count = render_tree(&cmd, "pxl", &man_dir)?;

    println!("{} man pages generated in {}", count, man_dir.display());
    Ok(())
}

/// Render `cmd` as `<page>.1` and recurse into its subcommands.
fn render_tree(cmd: &Command, page: &str, dir: &Path) -> Result<usize> {
    let path = dir.join(format!("{}.1", page));
    let mut buffer = Vec::new();
    Man::new(cmd.clone()).render(&mut buffer)?;
    fs::write(&path, buffer).with_context(|| format!("Failed to write {}", path.display()))?;
    println!("Generated: {}", path.display());

    let mut count = 1;
    for sub in cmd.get_subcommands().filter(|s| !s.is_hide_set()) {
        let name = format!("{}-{}", page, sub.get_name());
        count += render_tree(sub, &name, dir)?;
    }
    Ok(count)
}
