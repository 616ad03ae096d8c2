use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::info;

use hallboard_core::AppConfig;

pub fn run(config: &AppConfig, path: Option<&Path>, init: bool) -> Result<()> {
    let path: PathBuf = path.map(Path::to_path_buf).unwrap_or_else(AppConfig::config_path);

    if init {
        if path.exists() {
            println!("Config file already exists: {}", path.display());
        } else {
            AppConfig::default()
                .save_to(&path)
                .with_context(|| format!("writing {}", path.display()))?;
            info!("Wrote default config to {}", path.display());
            println!("Wrote default config to {}", path.display());
        }
        return Ok(());
    }

    let state = if path.exists() { "" } else { " (not found, using defaults)" };
    println!("Config file: {}{}", path.display(), state);
    println!("Data dir:    {}", config.data_dir().display());
    println!("Log file:    {}", config.log_path().display());
    println!();
    println!("{}", toml::to_string_pretty(config).context("serializing config")?);

    Ok(())
}
