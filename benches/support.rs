//! Shared helpers for benchmarks

use splitdeck::config::AppConfig;
use splitdeck::model::{AppModel, PanelRegistry, PanelType, WindowId};

/// Create a split AppModel with `tabs` notes tabs in each window
#[allow(dead_code)]
pub fn make_model(tabs: usize) -> AppModel {
    let mut config = AppConfig::default();
    config.panels.initial_tabs.clear();
    config.viewport.width = 1920;
    config.viewport.height = 1080;

    let mut model = AppModel::new(config, PanelRegistry::with_builtins());
    let notes = PanelType::from("notes");
    let second = model.workspace.split();
    for window in [Some(WindowId(1)), second].into_iter().flatten() {
        for _ in 0..tabs {
            model.workspace.add_pair(window, &notes, &model.registry);
        }
    }
    model.relayout();
    model
}
