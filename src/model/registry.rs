//! Panel registry - canonical content templates keyed by panel type
//!
//! Templates are read-only once the registry is built. Every new panel gets a
//! copy of its type's template.

use std::collections::BTreeMap;
use std::fmt;
use std::path::Path;

use anyhow::{Context, Result};

/// Name of a content template (e.g. "chat", "challenges")
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PanelType(pub String);

impl PanelType {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PanelType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for PanelType {
    fn from(name: &str) -> Self {
        Self(name.to_string())
    }
}

/// Slot replaced with the chat transcript when a panel is rendered
pub const CHAT_SLOT: &str = "{{chat}}";
/// Slot replaced with the current challenge when a panel is rendered
pub const CHALLENGE_SLOT: &str = "{{challenge}}";

/// Built-in templates, used when no config or template directory overrides them
const BUILTIN_TEMPLATES: &[(&str, &str)] = &[
    (
        "chat",
        "<div class=\"chat-messages\">{{chat}}</div>\n<div class=\"chat-input\"><input type=\"text\" class=\"user-input\" placeholder=\"Ask a question...\"></div>",
    ),
    (
        "challenges",
        "<div class=\"challenges\">{{challenge}}</div>",
    ),
    ("notes", "<textarea class=\"notes\" rows=\"20\"></textarea>"),
];

/// Registry of panel templates
#[derive(Debug, Clone, Default)]
pub struct PanelRegistry {
    templates: BTreeMap<PanelType, String>,
}

impl PanelRegistry {
    /// Empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry seeded with the built-in templates
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        for (name, template) in BUILTIN_TEMPLATES {
            registry.register(PanelType::from(*name), *template);
        }
        registry
    }

    /// Register (or replace) a template
    pub fn register(&mut self, panel_type: PanelType, template: impl Into<String>) {
        self.templates.insert(panel_type, template.into());
    }

    /// Load every `*.html` file in a directory; the file stem is the panel type.
    ///
    /// Returns the number of templates loaded.
    pub fn load_dir(&mut self, dir: &Path) -> Result<usize> {
        let entries = std::fs::read_dir(dir)
            .with_context(|| format!("Failed to read panel directory {}", dir.display()))?;

        let mut loaded = 0;
        for entry in entries {
            let path = entry?.path();
            if path.extension().and_then(|e| e.to_str()) != Some("html") {
                continue;
            }
            let Some(stem) = path.file_stem().and_then(|s| s.to_str()) else {
                continue;
            };
            let template = std::fs::read_to_string(&path)
                .with_context(|| format!("Failed to read template {}", path.display()))?;
            tracing::debug!("Loaded panel template '{}' from {}", stem, path.display());
            self.register(PanelType::from(stem), template);
            loaded += 1;
        }
        Ok(loaded)
    }

    pub fn contains(&self, panel_type: &PanelType) -> bool {
        self.templates.contains_key(panel_type)
    }

    pub fn template(&self, panel_type: &PanelType) -> Option<&str> {
        self.templates.get(panel_type).map(String::as_str)
    }

    /// Create the content for a new panel of the given type
    pub fn instantiate(&self, panel_type: &PanelType) -> Option<String> {
        self.template(panel_type).map(str::to_owned)
    }

    /// Tab label for a panel type ("chat" → "Chat")
    pub fn label(&self, panel_type: &PanelType) -> String {
        let mut chars = panel_type.as_str().chars();
        match chars.next() {
            Some(first) => first.to_uppercase().chain(chars).collect(),
            None => String::new(),
        }
    }

    /// All registered panel types, sorted by name
    pub fn panel_types(&self) -> Vec<PanelType> {
        self.templates.keys().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.templates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }
}
