//! Config-file source discovery.
//!
//! Order: `./itermwarp.toml`, then the per-user file, then built-in defaults.
//! A file that exists but cannot be read is an error, not a fallthrough.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::error::ConfigError;

use super::ConfigSource;

pub const CONFIG_FILE_NAME: &str = "itermwarp.toml";
const CONFIG_DIR_NAME: &str = "itermwarp";

/// Read config text from the highest-precedence available source.
pub(super) fn read_config_text_with_sources<FRead, FRoot>(
    read_file: &FRead,
    config_root: &FRoot,
) -> Result<(String, ConfigSource), ConfigError>
where
    FRead: Fn(&Path) -> Result<String, std::io::Error>,
    FRoot: Fn() -> Option<PathBuf>,
{
    let local = PathBuf::from(CONFIG_FILE_NAME);
    if let Some(text) = read_optional(read_file, &local)? {
        return Ok((text, ConfigSource::Local(local)));
    }

    if let Some(dir) = config_root() {
        let global = dir.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME);
        if let Some(text) = read_optional(read_file, &global)? {
            return Ok((text, ConfigSource::Global(global)));
        }
    }

    // Nothing found; an empty document parses into defaults.
    Ok((String::new(), ConfigSource::BuiltInDefaults))
}

fn read_optional<FRead>(read_file: &FRead, path: &Path) -> Result<Option<String>, ConfigError>
where
    FRead: Fn(&Path) -> Result<String, std::io::Error>,
{
    match read_file(path) {
        Ok(text) => Ok(Some(text)),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
        Err(e) => Err(ConfigError::Invalid(format!(
            "failed to read config `{}`: {e}",
            path.display()
        ))),
    }
}

/// Resolve the base config directory from env/home conventions.
pub fn config_root_dir() -> Option<PathBuf> {
    if let Ok(path) = std::env::var("XDG_CONFIG_HOME") {
        let trimmed = path.trim();
        if !trimmed.is_empty() {
            return Some(PathBuf::from(trimmed));
        }
    }
    dirs::home_dir()
        .map(|home| home.join(".config"))
        .or_else(dirs::config_dir)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn reader(files: HashMap<PathBuf, String>) -> impl Fn(&Path) -> Result<String, std::io::Error> {
        move |path: &Path| {
            files
                .get(path)
                .cloned()
                .ok_or_else(|| std::io::Error::new(ErrorKind::NotFound, "missing"))
        }
    }

    #[test]
    fn local_file_wins_over_global() {
        let mut files = HashMap::new();
        files.insert(PathBuf::from(CONFIG_FILE_NAME), "local".to_string());
        files.insert(
            PathBuf::from("/cfg/itermwarp/itermwarp.toml"),
            "global".to_string(),
        );
        let (text, source) =
            read_config_text_with_sources(&reader(files), &|| Some(PathBuf::from("/cfg")))
                .expect("read");
        assert_eq!(text, "local");
        assert_eq!(source, ConfigSource::Local(PathBuf::from(CONFIG_FILE_NAME)));
    }

    #[test]
    fn global_file_used_when_no_local() {
        let mut files = HashMap::new();
        files.insert(
            PathBuf::from("/cfg/itermwarp/itermwarp.toml"),
            "global".to_string(),
        );
        let (text, source) =
            read_config_text_with_sources(&reader(files), &|| Some(PathBuf::from("/cfg")))
                .expect("read");
        assert_eq!(text, "global");
        assert_eq!(
            source,
            ConfigSource::Global(PathBuf::from("/cfg/itermwarp/itermwarp.toml"))
        );
    }

    #[test]
    fn nothing_found_yields_defaults() {
        let (text, source) =
            read_config_text_with_sources(&reader(HashMap::new()), &|| None).expect("read");
        assert!(text.is_empty());
        assert_eq!(source, ConfigSource::BuiltInDefaults);
    }

    #[test]
    fn unreadable_file_is_an_error() {
        let denied = |_: &Path| -> Result<String, std::io::Error> {
            Err(std::io::Error::new(ErrorKind::PermissionDenied, "denied"))
        };
        let err = read_config_text_with_sources(&denied, &|| None).unwrap_err();
        assert!(err.to_string().contains("itermwarp.toml"), "got: {err}");
    }
}
