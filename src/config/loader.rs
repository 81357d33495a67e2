//! Top-level config loading pipeline.

use std::path::{Path, PathBuf};

use tracing::info;

use crate::error::ConfigError;

use super::env::apply_env_overrides;
use super::resolve::resolve_config;
use super::sources::{config_root_dir, read_config_text_with_sources};
use super::{FileConfig, LoadedConfig};

/// Load configuration from disk and environment.
pub fn load_config() -> Result<LoadedConfig, ConfigError> {
    load_config_from_sources(
        |path| std::fs::read_to_string(path),
        |name| std::env::var(name).ok(),
        config_root_dir,
    )
}

/// Same as `load_config` with injectable file, env and config-root lookups.
pub fn load_config_from_sources<FRead, FEnv, FRoot>(
    read_file: FRead,
    env_lookup: FEnv,
    config_root: FRoot,
) -> Result<LoadedConfig, ConfigError>
where
    FRead: Fn(&Path) -> Result<String, std::io::Error>,
    FEnv: Fn(&str) -> Option<String>,
    FRoot: Fn() -> Option<PathBuf>,
{
    let (config_text, source) = read_config_text_with_sources(&read_file, &config_root)?;
    let parsed: FileConfig = toml::from_str(&config_text)?;
    let mut config = resolve_config(parsed)?;
    apply_env_overrides(&mut config, &env_lookup)?;
    info!(source = %source, "loaded config");
    Ok(LoadedConfig { config, source })
}
