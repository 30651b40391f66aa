use std::path::PathBuf;

use tessera_app::{logging, App, AppConfig};

const DEFAULT_CONFIG: &str = "tessera.toml";

fn main() -> anyhow::Result<()> {
    let path = std::env::args_os()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG));

    let loaded = AppConfig::load(&path)?;
    let from_file = loaded.is_some();
    let config = loaded.unwrap_or_default();
    logging::init(config.log_filter()?)?;

    if !from_file {
        log::warn!("{} not found, using default settings", path.display());
    }

    App::from_config(config).run()
}
