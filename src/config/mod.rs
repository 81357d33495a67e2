//! Configuration loading from TOML files and environment variables.
//!
//! Precedence (highest wins):
//! 1. Environment variables (`ITERMWARP_DETAILS`, `ITERMWARP_STRICT`,
//!    `ITERMWARP_OVERWRITE`, `NO_COLOR`)
//! 2. `./itermwarp.toml` in the current directory
//! 3. `$XDG_CONFIG_HOME/itermwarp/itermwarp.toml` (or
//!    `~/.config/itermwarp/itermwarp.toml`)
//! 4. Built-in defaults
//!
//! ```toml
//! [theme]
//! details = "darker"
//! accent = "#6ba4f8"
//! background = "#131418"
//! foreground = "#e6e6e6"
//!
//! [mapping]
//! strict = false
//! [mapping.representation]
//! "terminal_colors.bright.black" = "hex-alpha"
//!
//! [output]
//! overwrite = true
//!
//! [display]
//! color = true
//! ```

mod env;
mod loader;
mod resolve;
mod sources;

use std::collections::BTreeMap;
use std::fmt;
use std::path::PathBuf;

use serde::Deserialize;

use crate::color::{Representation, Rgba};
use crate::mapping::{Fallbacks, MapOptions};
use crate::writer::{Details, WriteOptions};

pub use loader::{load_config, load_config_from_sources};
pub use sources::{config_root_dir, CONFIG_FILE_NAME};

pub const DEFAULT_ACCENT: &str = "#6ba4f8";
pub const DEFAULT_BACKGROUND: &str = "#131418";
pub const DEFAULT_FOREGROUND: &str = "#e6e6e6";

// ---------------------------------------------------------------------------
// Resolved config
// ---------------------------------------------------------------------------

/// Fully resolved runtime configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub theme: ThemeConfig,
    pub mapping: MappingConfig,
    pub output: OutputConfig,
    pub display: DisplayConfig,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ThemeConfig {
    pub details: Details,
    /// Colors used when a required source slot is absent.
    pub fallbacks: Fallbacks,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct MappingConfig {
    /// Fail on absent source slots instead of defaulting or dropping.
    pub strict: bool,
    /// Per-field representation overrides keyed by dotted field path.
    pub representation: BTreeMap<String, Representation>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct OutputConfig {
    /// Replace an existing `<name>.yaml`.
    pub overwrite: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DisplayConfig {
    pub color: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            theme: ThemeConfig {
                details: Details::default(),
                fallbacks: default_fallbacks(),
            },
            mapping: MappingConfig::default(),
            output: OutputConfig { overwrite: true },
            display: DisplayConfig { color: true },
        }
    }
}

fn default_fallbacks() -> Fallbacks {
    let parse = |hex: &str| Rgba::from_hex(hex).unwrap_or(Rgba::opaque(0.0, 0.0, 0.0));
    Fallbacks {
        accent: parse(DEFAULT_ACCENT),
        background: parse(DEFAULT_BACKGROUND),
        foreground: parse(DEFAULT_FOREGROUND),
    }
}

impl Config {
    pub fn map_options(&self) -> MapOptions {
        MapOptions {
            strict: self.mapping.strict,
            fallbacks: self.theme.fallbacks,
            representation: self.mapping.representation.clone(),
        }
    }

    pub fn write_options(&self) -> WriteOptions {
        WriteOptions {
            overwrite: self.output.overwrite,
            details: self.theme.details,
        }
    }
}

/// Where the effective config file came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    /// `./itermwarp.toml`
    Local(PathBuf),
    /// Per-user config under the XDG config root.
    Global(PathBuf),
    /// No file found.
    BuiltInDefaults,
}

impl fmt::Display for ConfigSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Local(path) | Self::Global(path) => write!(f, "{}", path.display()),
            Self::BuiltInDefaults => f.write_str("built-in defaults"),
        }
    }
}

/// Config plus the file it was read from.
#[derive(Debug, Clone, PartialEq)]
pub struct LoadedConfig {
    pub config: Config,
    pub source: ConfigSource,
}

// ---------------------------------------------------------------------------
// File schema
// ---------------------------------------------------------------------------

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct FileConfig {
    theme: FileThemeConfig,
    mapping: FileMappingConfig,
    output: FileOutputConfig,
    display: FileDisplayConfig,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct FileThemeConfig {
    details: Option<Details>,
    accent: Option<String>,
    background: Option<String>,
    foreground: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct FileMappingConfig {
    strict: Option<bool>,
    representation: BTreeMap<String, Representation>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct FileOutputConfig {
    overwrite: Option<bool>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct FileDisplayConfig {
    color: Option<bool>,
}
