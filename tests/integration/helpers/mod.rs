//! Test helper utilities

#![allow(dead_code)]

use assert_cmd::Command;
use std::path::Path;

/// The pxl binary with `home` as its home directory and colours off.
pub fn pxl(home: &Path) -> Command {
    let mut cmd = Command::cargo_bin("pxl").expect("pxl binary is built");
    cmd.env("HOME", home)
        .env("NO_COLOR", "1")
        .env_remove("PXL_LOG");
    cmd
}

/// Captured stdout as a string.
pub fn stdout_of(output: &std::process::Output) -> String {
    String::from_utf8_lossy(&output.stdout).to_string()
}
