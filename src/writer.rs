//! Warp theme rendering and the atomic file write.
//!
//! Document layout:
//!
//! ```yaml
//! name: mytheme
//! accent: '#6ba4f8'
//! background: '#000000'
//! foreground: '#ffffff'
//! details: darker
//! terminal_colors:
//!   normal:
//!     black: '#000000'
//!     ...
//!   bright:
//!     ...
//! ```
//!
//! Top-level fields appear in mapping-table order. `terminal_colors` always
//! carries both `normal` and `bright`, even when empty.

use std::fs::{self, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use serde_yaml::{Mapping, Value};
use tracing::{debug, info};

use crate::error::WriteError;
use crate::mapping::{FieldPath, MappedTheme, Tone};
use crate::prompt::ThemeName;

/// Warp's hint for deriving UI surface colors from the background.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Details {
    #[default]
    Darker,
    Lighter,
}

impl Details {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Darker => "darker",
            Self::Lighter => "lighter",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WriteOptions {
    pub overwrite: bool,
    pub details: Details,
}

/// Build the YAML text for one theme. Pure; touches no files.
pub fn render_theme_yaml(
    name: &ThemeName,
    theme: &MappedTheme,
    details: Details,
) -> Result<String, WriteError> {
    let mut doc = Mapping::new();
    doc.insert(key("name"), Value::String(name.display().to_string()));

    let mut normal = Mapping::new();
    let mut bright = Mapping::new();
    for field in &theme.fields {
        let value = serde_yaml::to_value(&field.value)?;
        match field.target {
            FieldPath::Top(top) => {
                doc.insert(key(top), value);
            }
            FieldPath::Terminal { tone, color } => {
                let palette = match tone {
                    Tone::Normal => &mut normal,
                    Tone::Bright => &mut bright,
                };
                palette.insert(key(color), value);
            }
        }
    }

    doc.insert(key("details"), serde_yaml::to_value(details)?);

    let mut terminal = Mapping::new();
    terminal.insert(key(Tone::Normal.as_str()), Value::Mapping(normal));
    terminal.insert(key(Tone::Bright.as_str()), Value::Mapping(bright));
    doc.insert(key("terminal_colors"), Value::Mapping(terminal));

    Ok(serde_yaml::to_string(&Value::Mapping(doc))?)
}

fn key(text: &str) -> Value {
    Value::String(text.to_string())
}

/// Render and write `<dir>/<stem>.yaml`, returning the written path.
pub fn write_theme(
    dir: &Path,
    name: &ThemeName,
    theme: &MappedTheme,
    options: &WriteOptions,
) -> Result<PathBuf, WriteError> {
    let yaml = render_theme_yaml(name, theme, options.details)?;
    let path = dir.join(name.file_name());
    write_atomically(&path, yaml.as_bytes(), options.overwrite)?;
    info!(path = %path.display(), bytes = yaml.len(), "wrote theme");
    Ok(path)
}

/// Removes the staging file unless the write was committed.
struct StagedFile {
    path: PathBuf,
    committed: bool,
}

impl Drop for StagedFile {
    fn drop(&mut self) {
        if !self.committed {
            let _ = fs::remove_file(&self.path);
        }
    }
}

/// Write to a hidden sibling, then move it to `path`.
///
/// Readers see either the previous file or the complete new one. With
/// `overwrite` off an existing `path` is never replaced.
fn write_atomically(path: &Path, contents: &[u8], overwrite: bool) -> Result<(), WriteError> {
    if !overwrite && path.exists() {
        return Err(WriteError::AlreadyExists(path.to_path_buf()));
    }

    let io_err = |source: std::io::Error| WriteError::Io {
        path: path.to_path_buf(),
        source,
    };
    let file_name = path
        .file_name()
        .map(|value| value.to_string_lossy().into_owned())
        .unwrap_or_default();
    let staging = path.with_file_name(format!(".{file_name}.{}.tmp", std::process::id()));

    // create_new keeps us from reusing a stale or foreign staging file.
    let mut file = OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(&staging)
        .map_err(io_err)?;
    let mut staged = StagedFile {
        path: staging,
        committed: false,
    };
    debug!(staging = %staged.path.display(), "staging theme");

    file.write_all(contents).map_err(io_err)?;
    file.sync_all().map_err(io_err)?;
    drop(file);

    if overwrite {
        fs::rename(&staged.path, path).map_err(io_err)?;
        staged.committed = true;
    } else {
        // The staging file is left for the guard to remove.
        commit_without_replacing(&staged.path, path)?;
    }
    Ok(())
}

/// Link `staging` into place, failing if `path` already exists.
///
/// `hard_link` refuses an existing destination atomically, so a file that
/// appears after the early `exists` check is still never replaced.
fn commit_without_replacing(staging: &Path, path: &Path) -> Result<(), WriteError> {
    match fs::hard_link(staging, path) {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == ErrorKind::AlreadyExists => {
            Err(WriteError::AlreadyExists(path.to_path_buf()))
        }
        Err(source) => Err(WriteError::Io {
            path: path.to_path_buf(),
            source,
        }),
    }
}
