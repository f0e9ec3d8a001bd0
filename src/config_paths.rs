//! Where splitdeck keeps its files
//!
//! Everything lives under one directory: `$XDG_CONFIG_HOME/splitdeck`,
//! falling back to `~/.config/splitdeck` (`%APPDATA%\splitdeck` on Windows).

use std::{env, fs, path::PathBuf};

use anyhow::{Context, Result};

const APP_DIR: &str = "splitdeck";

/// Base config directory, if the platform provides one
pub fn config_dir() -> Option<PathBuf> {
    platform_base().map(|base| base.join(APP_DIR))
}

#[cfg(target_os = "windows")]
fn platform_base() -> Option<PathBuf> {
    env::var_os("APPDATA").map(PathBuf::from)
}

#[cfg(not(target_os = "windows"))]
fn platform_base() -> Option<PathBuf> {
    env::var_os("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .or_else(|| dirs::home_dir().map(|home| home.join(".config")))
}

/// `<config dir>/config.yaml`
pub fn config_file() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join("config.yaml"))
}

/// `<config dir>/panels/`, one `<panel-type>.html` template per file
pub fn panels_dir() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join("panels"))
}

/// Create `<config dir>/logs/` if needed and return it
pub fn ensure_logs_dir() -> Result<PathBuf> {
    let logs = config_dir()
        .context("No config directory available")?
        .join("logs");
    fs::create_dir_all(&logs)
        .with_context(|| format!("Failed to create {}", logs.display()))?;
    Ok(logs)
}
