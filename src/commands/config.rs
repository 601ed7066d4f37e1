//! Config subcommands handler

use anyhow::Result;
use std::path::Path;

use pxl::tui::current_theme;
use pxl::Config;

/// Show current configuration as TOML.
#[cfg(not(tarpaulin_include))]
pub fn handle_show() -> Result<()> {
    let config = Config::load()?;
    let toml_str = toml::to_string_pretty(&config)?;
    let theme = current_theme();
    println!("{}", theme.primary_text(&toml_str));
    Ok(())
}

/// Print the config file location.
#[cfg(not(tarpaulin_include))]
pub fn handle_path() -> Result<()> {
    println!("{}", Config::config_path()?.display());
    Ok(())
}

/// Write the default configuration unless one already exists.
#[cfg(not(tarpaulin_include))]
pub fn handle_init(force: bool) -> Result<()> {
    let path = Config::config_path()?;
    let theme = current_theme();
    if init_at(&path, force)? {
        println!("{}", theme.accent_text(&format!("Wrote {}", path.display())));
    } else {
        println!(
            "{}",
            theme.primary_text(&format!(
                "{} already exists (use --force to overwrite)",
                path.display()
            ))
        );
    }
    Ok(())
}

/// Write defaults to `path`. Returns false if the file exists and `force` is off.
pub(crate) fn init_at(path: &Path, force: bool) -> Result<bool> {
    if path.exists() && !force {
        return Ok(false);
    }
    Config::default().save_to(path)?;
    Ok(true)
}
