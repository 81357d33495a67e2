//! Error types for each conversion stage.
//!
//! Every error is terminal for a run. Messages name the offending slot, field
//! or path so the CLI can print them as-is.

use std::fmt;
use std::path::PathBuf;

// ---------------------------------------------------------------------------
// ParseError
// ---------------------------------------------------------------------------

/// Errors reading or decoding the source `.itermcolors` file.
#[derive(Debug)]
pub enum ParseError {
    /// Source file is missing or unreadable.
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    /// Not a well-formed plist.
    Plist(plist::Error),
    /// The plist root is not a dictionary.
    RootNotDictionary,
    /// A top-level entry is not a color dictionary.
    EntryNotDictionary { slot: String },
    /// A color dictionary lacks one of the RGB components.
    MissingComponent {
        slot: String,
        component: &'static str,
    },
    /// A component holds something other than a number.
    NonNumericComponent {
        slot: String,
        component: &'static str,
    },
    /// A component is NaN or infinite.
    NonFiniteComponent {
        slot: String,
        component: &'static str,
        value: f64,
    },
}

impl ParseError {
    /// True when the source file itself could not be found.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::Read { source, .. } if source.kind() == std::io::ErrorKind::NotFound)
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Read { path, source } => {
                write!(f, "cannot read theme file `{}`: {source}", path.display())
            }
            Self::Plist(e) => write!(f, "malformed plist: {e}"),
            Self::RootNotDictionary => write!(f, "plist root is not a dictionary"),
            Self::EntryNotDictionary { slot } => {
                write!(f, "slot `{slot}` is not a color dictionary")
            }
            Self::MissingComponent { slot, component } => {
                write!(f, "slot `{slot}` is missing `{component}`")
            }
            Self::NonNumericComponent { slot, component } => {
                write!(f, "slot `{slot}` has non-numeric `{component}`")
            }
            Self::NonFiniteComponent {
                slot,
                component,
                value,
            } => write!(f, "slot `{slot}` has non-finite `{component}` ({value})"),
        }
    }
}

impl std::error::Error for ParseError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Read { source, .. } => Some(source),
            Self::Plist(e) => Some(e),
            _ => None,
        }
    }
}

impl From<plist::Error> for ParseError {
    fn from(e: plist::Error) -> Self {
        Self::Plist(e)
    }
}

// ---------------------------------------------------------------------------
// MapError
// ---------------------------------------------------------------------------

/// A destination field whose source slot was absent under strict mapping.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MissingSlot {
    pub field: String,
    pub slot: &'static str,
}

/// Errors translating a parsed theme into destination fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MapError {
    /// Strict mapping found destination fields without a source slot.
    MappingGap(Vec<MissingSlot>),
}

impl fmt::Display for MapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MappingGap(missing) => {
                let listed = missing
                    .iter()
                    .map(|gap| format!("{} <- `{}`", gap.field, gap.slot))
                    .collect::<Vec<_>>()
                    .join(", ");
                write!(f, "missing source slots for required fields: {listed}")
            }
        }
    }
}

impl std::error::Error for MapError {}

// ---------------------------------------------------------------------------
// PromptError
// ---------------------------------------------------------------------------

/// Errors reading the theme name from the user.
#[derive(Debug)]
pub enum PromptError {
    Io(std::io::Error),
    /// Input closed before a line was entered.
    NoInput,
    /// The name is blank or has no filesystem-safe characters.
    InvalidName(String),
}

impl fmt::Display for PromptError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "failed to read theme name: {e}"),
            Self::NoInput => write!(f, "no theme name entered"),
            Self::InvalidName(name) => write!(
                f,
                "theme name `{name}` has no characters usable in a file name"
            ),
        }
    }
}

impl std::error::Error for PromptError {}

impl From<std::io::Error> for PromptError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

// ---------------------------------------------------------------------------
// WriteError
// ---------------------------------------------------------------------------

/// Errors rendering or writing the destination theme.
#[derive(Debug)]
pub enum WriteError {
    Yaml(serde_yaml::Error),
    /// Destination exists and overwriting is disabled.
    AlreadyExists(PathBuf),
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
}

impl fmt::Display for WriteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Yaml(e) => write!(f, "yaml: {e}"),
            Self::AlreadyExists(path) => write!(
                f,
                "`{}` already exists and output.overwrite is false",
                path.display()
            ),
            Self::Io { path, source } => {
                write!(f, "cannot write `{}`: {source}", path.display())
            }
        }
    }
}

impl std::error::Error for WriteError {}

impl From<serde_yaml::Error> for WriteError {
    fn from(e: serde_yaml::Error) -> Self {
        Self::Yaml(e)
    }
}

// ---------------------------------------------------------------------------
// ConfigError
// ---------------------------------------------------------------------------

/// Errors when loading or validating configuration.
#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Toml(toml::de::Error),
    Invalid(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "io: {e}"),
            Self::Toml(e) => write!(f, "toml: {e}"),
            Self::Invalid(msg) => write!(f, "invalid config: {msg}"),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<toml::de::Error> for ConfigError {
    fn from(e: toml::de::Error) -> Self {
        Self::Toml(e)
    }
}

// ---------------------------------------------------------------------------
// ConvertError — top-level
// ---------------------------------------------------------------------------

/// Top-level error for one conversion run.
#[derive(Debug)]
pub enum ConvertError {
    Parse(ParseError),
    Map(MapError),
    Prompt(PromptError),
    Write(WriteError),
    Config(ConfigError),
}

impl fmt::Display for ConvertError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Parse(e) if e.is_not_found() => write!(f, "file not found: {e}"),
            Self::Parse(e) => write!(f, "parse: {e}"),
            Self::Map(e) => write!(f, "mapping: {e}"),
            Self::Prompt(e) => write!(f, "prompt: {e}"),
            Self::Write(e) => write!(f, "write: {e}"),
            Self::Config(e) => write!(f, "config: {e}"),
        }
    }
}

impl std::error::Error for ConvertError {}

impl From<ParseError> for ConvertError {
    fn from(e: ParseError) -> Self {
        Self::Parse(e)
    }
}

impl From<MapError> for ConvertError {
    fn from(e: MapError) -> Self {
        Self::Map(e)
    }
}

impl From<PromptError> for ConvertError {
    fn from(e: PromptError) -> Self {
        Self::Prompt(e)
    }
}

impl From<WriteError> for ConvertError {
    fn from(e: WriteError) -> Self {
        Self::Write(e)
    }
}

impl From<ConfigError> for ConvertError {
    fn from(e: ConfigError) -> Self {
        Self::Config(e)
    }
}
