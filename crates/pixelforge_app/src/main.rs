use std::path::PathBuf;

use pixelforge_app::{App, AppConfig, DEFAULT_CONFIG_PATH};

fn main() -> anyhow::Result<()> {
    let path = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_PATH));
    let config = AppConfig::load_or_default(&path)?;
    pixelforge_app::logging::init(&config.log_level)?;
    log::info!("config: {}", path.display());

    let world = config.initial_world()?;
    App::new(world).with_config(config).run()
}
