//! Configuration system tests
//!
//! Tests for config paths, config loading and panel registry sources.

use splitdeck::config::AppConfig;
use splitdeck::config_paths;
use splitdeck::model::PanelType;

// ========================================================================
// Config Paths Tests
// ========================================================================

#[test]
fn test_config_dir_contains_app_name() {
    if let Some(dir) = config_paths::config_dir() {
        assert!(dir.to_string_lossy().contains("splitdeck"));
    }
}

#[test]
fn test_config_file_ends_with_yaml() {
    if let Some(path) = config_paths::config_file() {
        assert!(path.to_string_lossy().ends_with("config.yaml"));
    }
}

#[test]
fn test_panels_dir_is_inside_config_dir() {
    if let (Some(dir), Some(panels)) = (config_paths::config_dir(), config_paths::panels_dir()) {
        assert!(panels.starts_with(dir));
    }
}

// ========================================================================
// AppConfig Tests
// ========================================================================

#[test]
fn test_defaults() {
    let config = AppConfig::default();
    assert_eq!(config.viewport.width, 1280);
    assert_eq!(config.panels.initial_tabs, vec!["chat", "challenges"]);
    assert!(config.chat.endpoint.is_none());
    assert_eq!(config.chat.timeout_secs, 30);
}

#[test]
fn test_partial_yaml_keeps_other_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.yaml");
    std::fs::write(
        &path,
        "chat:\n  endpoint: http://localhost:5000/chat\ntab_bar:\n  tab_width: 150\n",
    )
    .unwrap();

    let config = AppConfig::load_from(&path).unwrap();

    assert_eq!(
        config.chat.endpoint.as_deref(),
        Some("http://localhost:5000/chat")
    );
    assert_eq!(config.chat.timeout_secs, 30);
    assert_eq!(config.tab_bar.tab_width, 150.0);
    assert_eq!(config.tab_bar.height, 32.0);
    assert_eq!(config.viewport.height, 800);
}

#[test]
fn test_malformed_yaml_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.yaml");
    std::fs::write(&path, "viewport: [not, a, map]\n").unwrap();
    assert!(AppConfig::load_from(&path).is_err());
}

#[test]
fn test_save_then_load() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("config.yaml");

    let mut config = AppConfig::default();
    config.debug_log_limit = 5;
    config.panels.initial_tabs = vec!["notes".to_string()];
    config.save_to(&path).unwrap();

    assert_eq!(AppConfig::load_from(&path).unwrap(), config);
}

// ========================================================================
// Panel Registry Sources
// ========================================================================

#[test]
fn test_inline_templates_override_builtins() {
    let mut config = AppConfig::default();
    config
        .panels
        .templates
        .insert("notes".to_string(), "<p>custom</p>".to_string());
    config
        .panels
        .templates
        .insert("links".to_string(), "<ul></ul>".to_string());
    config.panels.dir = Some(std::path::PathBuf::from("/nonexistent/panels"));

    let registry = config.build_registry();

    assert_eq!(registry.template(&PanelType::from("notes")), Some("<p>custom</p>"));
    assert!(registry.contains(&PanelType::from("links")));
    assert!(registry.contains(&PanelType::from("chat")));
}

#[test]
fn test_template_dir_overrides_inline_templates() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("notes.html"), "<p>from dir</p>").unwrap();
    std::fs::write(dir.path().join("readme.txt"), "ignored").unwrap();

    let mut config = AppConfig::default();
    config
        .panels
        .templates
        .insert("notes".to_string(), "<p>inline</p>".to_string());
    config.panels.dir = Some(dir.path().to_path_buf());

    let registry = config.build_registry();

    assert_eq!(registry.template(&PanelType::from("notes")), Some("<p>from dir</p>"));
    assert!(!registry.contains(&PanelType::from("readme")));
}

#[test]
fn test_unknown_initial_tab_is_skipped() {
    let mut config = AppConfig::default();
    config.panels.initial_tabs = vec!["chat".to_string(), "missing".to_string()];
    let registry = config.build_registry();

    let model = splitdeck::AppModel::new(config, registry);

    let labels: Vec<_> = model
        .workspace
        .primary()
        .pairs
        .iter()
        .map(|p| p.tab.label.clone())
        .collect();
    assert_eq!(labels, vec!["Chat"]);
}

#[test]
fn test_debug_log_limit_applies() {
    let mut config = AppConfig::default();
    config.debug_log_limit = 2;
    let registry = config.build_registry();
    let mut model = splitdeck::AppModel::new(config, registry);
    for i in 0..5 {
        model.ui.set_status(format!("line {}", i));
    }
    let lines: Vec<_> = model.ui.debug_log.lines().collect();
    assert_eq!(lines, vec!["line 3", "line 4"]);
}
