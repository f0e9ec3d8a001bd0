use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;

use splitdeck::chat::backend_from_config;
use splitdeck::cli::CliArgs;
use splitdeck::dump::StateDump;
use splitdeck::script::Script;
use splitdeck::view::html;
use splitdeck::{AppModel, Runtime};

fn main() -> Result<()> {
    let args = CliArgs::parse();
    let startup = args.into_config().map_err(anyhow::Error::msg)?;

    splitdeck::tracing::init();

    let config = startup.load_app_config()?;
    let registry = config.build_registry();
    let chat = backend_from_config(&config.chat)?;
    let wait = Duration::from_secs(startup.wait_secs);

    let model = AppModel::new(config, registry);
    let mut runtime = Runtime::new(model, chat);
    runtime.start();

    if let Some(path) = &startup.script {
        let script = Script::load(path)?;
        tracing::info!("Replaying {} steps from {}", script.steps.len(), path.display());
        script.run(&mut runtime, wait);
    }
    runtime.wait_idle(wait);

    let page = html::render_document(&runtime.model);
    if let Some(path) = &startup.html_out {
        std::fs::write(path, &page)
            .with_context(|| format!("Failed to write {}", path.display()))?;
    } else if startup.prints_html() {
        print!("{}", page);
    }

    if startup.json {
        println!("{}", StateDump::from_model(&runtime.model).to_json());
    }

    Ok(())
}
