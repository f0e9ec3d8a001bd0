//! Command-line argument parsing
//!
//! Supports:
//! - Replaying a session script
//! - An explicit config file
//! - Viewport overrides
//! - HTML and JSON output of the final state

use clap::Parser;
use std::path::PathBuf;

use crate::config::AppConfig;

/// A split-window tab workspace
#[derive(Parser, Debug)]
#[command(
    name = "splitdeck",
    version,
    about = "A split-window tab workspace with drag-and-drop tabs"
)]
pub struct CliArgs {
    /// Session script (YAML) to replay
    #[arg(value_name = "SCRIPT")]
    pub script: Option<PathBuf>,

    /// Config file to use instead of the default location
    #[arg(short = 'c', long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Page width in pixels
    #[arg(long, value_name = "N")]
    pub width: Option<u32>,

    /// Page height in pixels
    #[arg(long, value_name = "N")]
    pub height: Option<u32>,

    /// Write the rendered page to PATH instead of stdout
    #[arg(long, value_name = "PATH")]
    pub html: Option<PathBuf>,

    /// Print the final state as JSON
    #[arg(long)]
    pub json: bool,

    /// Seconds to wait for background requests before rendering
    #[arg(long, value_name = "SECS", default_value_t = 10)]
    pub wait: u64,
}

/// Configuration derived from CLI arguments
#[derive(Debug, Clone, PartialEq)]
pub struct StartupConfig {
    pub script: Option<PathBuf>,
    pub config_path: Option<PathBuf>,
    /// Viewport overrides (width, height)
    pub width: Option<u32>,
    pub height: Option<u32>,
    pub html_out: Option<PathBuf>,
    pub json: bool,
    pub wait_secs: u64,
}

impl CliArgs {
    /// Convert parsed CLI args into startup configuration
    pub fn into_config(self) -> Result<StartupConfig, String> {
        if self.width == Some(0) {
            return Err("--width must be greater than 0".to_string());
        }
        if self.height == Some(0) {
            return Err("--height must be greater than 0".to_string());
        }

        Ok(StartupConfig {
            script: self.script,
            config_path: self.config,
            width: self.width,
            height: self.height,
            html_out: self.html,
            json: self.json,
            wait_secs: self.wait,
        })
    }
}

impl StartupConfig {
    /// Load the app config and apply command-line overrides.
    ///
    /// An explicit `--config` path must load; the default location falls
    /// back to defaults on error.
    pub fn load_app_config(&self) -> anyhow::Result<AppConfig> {
        let mut config = match &self.config_path {
            Some(path) => AppConfig::load_from(path)?,
            None => AppConfig::load(),
        };
        if let Some(width) = self.width {
            config.viewport.width = width;
        }
        if let Some(height) = self.height {
            config.viewport.height = height;
        }
        Ok(config)
    }

    /// Whether the rendered page goes to stdout
    pub fn prints_html(&self) -> bool {
        self.html_out.is_none() && !self.json
    }
}
