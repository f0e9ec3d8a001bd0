//! Application configuration
//!
//! Stored in `~/.config/splitdeck/config.yaml`. Every field has a default, so a
//! partial (or missing) file is fine.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::model::ui::DEFAULT_DEBUG_LOG_LIMIT;
use crate::model::{PanelRegistry, PanelType};

/// Initial page size in pixels
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewportConfig {
    pub width: u32,
    pub height: u32,
}

impl Default for ViewportConfig {
    fn default() -> Self {
        Self {
            width: 1280,
            height: 800,
        }
    }
}

/// Tab bar metrics used for layout and hit-testing (pixels)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TabBarMetrics {
    /// Height of the tab bar strip at the top of each window
    pub height: f32,
    /// Width of one tab, including its close glyph
    pub tab_width: f32,
    /// Width of the close glyph at the right edge of each tab
    pub close_width: f32,
    /// Width of each trailing control button
    pub control_width: f32,
}

impl Default for TabBarMetrics {
    fn default() -> Self {
        Self {
            height: 32.0,
            tab_width: 120.0,
            close_width: 20.0,
            control_width: 32.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PanelsConfig {
    /// Directory of `<panel-type>.html` templates
    pub dir: Option<PathBuf>,
    /// Inline templates keyed by panel type
    pub templates: BTreeMap<String, String>,
    /// Panel types opened in the primary window at startup
    pub initial_tabs: Vec<String>,
}

impl Default for PanelsConfig {
    fn default() -> Self {
        Self {
            dir: None,
            templates: BTreeMap::new(),
            initial_tabs: vec!["chat".to_string(), "challenges".to_string()],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChatConfig {
    /// POST endpoint accepting `{"query": ...}` and answering `{"answer": ...}`
    pub endpoint: Option<String>,
    pub timeout_secs: u64,
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            endpoint: None,
            timeout_secs: 30,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChallengeConfig {
    /// File path or http(s) URL of the challenge document
    pub source: Option<String>,
}

fn default_debug_log_limit() -> usize {
    DEFAULT_DEBUG_LOG_LIMIT
}

/// Application configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub viewport: ViewportConfig,
    #[serde(default)]
    pub tab_bar: TabBarMetrics,
    #[serde(default)]
    pub panels: PanelsConfig,
    #[serde(default)]
    pub chat: ChatConfig,
    #[serde(default)]
    pub challenges: ChallengeConfig,
    /// Maximum number of lines kept in the debug-info log
    #[serde(default = "default_debug_log_limit")]
    pub debug_log_limit: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            viewport: ViewportConfig::default(),
            tab_bar: TabBarMetrics::default(),
            panels: PanelsConfig::default(),
            chat: ChatConfig::default(),
            challenges: ChallengeConfig::default(),
            debug_log_limit: default_debug_log_limit(),
        }
    }
}

impl AppConfig {
    /// Load config from the default location, or return defaults if not found
    pub fn load() -> Self {
        let Some(path) = crate::config_paths::config_file() else {
            tracing::debug!("No config directory available, using defaults");
            return Self::default();
        };

        if !path.exists() {
            tracing::debug!(
                "Config file not found at {}, using defaults",
                path.display()
            );
            return Self::default();
        }

        match Self::load_from(&path) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!("{:#}, using defaults", e);
                Self::default()
            }
        }
    }

    /// Load config from an explicit path
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config at {}", path.display()))?;
        let config = serde_yaml::from_str(&content)
            .with_context(|| format!("Failed to parse config at {}", path.display()))?;
        tracing::info!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Save config to disk
    ///
    /// Creates the parent directory if it doesn't exist.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory {}", parent.display())
            })?;
        }

        let content = serde_yaml::to_string(self).context("Failed to serialize config")?;
        std::fs::write(path, content)
            .with_context(|| format!("Failed to write config to {}", path.display()))?;

        tracing::info!("Saved config to {}", path.display());
        Ok(())
    }

    /// Build the panel registry: built-ins, then inline templates, then the
    /// template directory. Later sources override earlier ones.
    pub fn build_registry(&self) -> PanelRegistry {
        let mut registry = PanelRegistry::with_builtins();

        for (name, template) in &self.panels.templates {
            registry.register(PanelType::new(name.clone()), template.clone());
        }

        let dir = self
            .panels
            .dir
            .clone()
            .or_else(crate::config_paths::panels_dir)
            .filter(|dir| dir.is_dir());
        if let Some(dir) = dir {
            match registry.load_dir(&dir) {
                Ok(count) => tracing::info!("Loaded {} panel templates from {}", count, dir.display()),
                Err(e) => tracing::warn!("{:#}", e),
            }
        }

        registry
    }
}
