//! CLI subcommands.

pub mod config;
pub mod extract;

use std::path::Path;

use cachet_core::CachetConfig;

/// Load configuration: explicit path first, then the user config file,
/// then defaults.
pub fn load_config(path: Option<&str>) -> anyhow::Result<CachetConfig> {
    if let Some(path) = path {
        return Ok(CachetConfig::from_file(Path::new(path))?);
    }

    let default_path = config::default_config_path();
    if default_path.exists() {
        return Ok(CachetConfig::from_file(&default_path)?);
    }

    Ok(CachetConfig::default())
}
