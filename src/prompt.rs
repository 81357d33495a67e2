//! Interactive theme-name prompt and file-name sanitization.

use std::io::{BufRead, Write};

use crate::error::PromptError;

pub const PROMPT_TEXT: &str = "Enter the theme name: ";

/// Extension of every written theme.
pub const OUTPUT_EXTENSION: &str = "yaml";

/// Characters that are unsafe in file names on at least one common platform.
const UNSAFE_FILE_CHARS: &[char] = &['/', '\\', ':', '*', '?', '"', '<', '>', '|'];

/// A user-chosen theme name and the file stem derived from it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThemeName {
    display: String,
    file_stem: String,
}

impl ThemeName {
    /// Validate a raw line. Surrounding whitespace is trimmed from the
    /// display name; the file stem is sanitized separately.
    pub fn parse(raw: &str) -> Result<Self, PromptError> {
        let display = raw.trim();
        if display.is_empty() {
            return Err(PromptError::InvalidName(raw.to_string()));
        }
        let file_stem = sanitize_file_stem(display);
        if file_stem.is_empty() {
            return Err(PromptError::InvalidName(display.to_string()));
        }
        Ok(Self {
            display: display.to_string(),
            file_stem,
        })
    }

    /// Name embedded in the theme document.
    pub fn display(&self) -> &str {
        &self.display
    }

    pub fn file_stem(&self) -> &str {
        &self.file_stem
    }

    /// `<stem>.yaml`
    pub fn file_name(&self) -> String {
        format!("{}.{OUTPUT_EXTENSION}", self.file_stem)
    }
}

/// Lowercase, collapse whitespace runs to `_`, drop unsafe and control
/// characters, and strip leading dots.
pub fn sanitize_file_stem(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut pending_space = false;
    for ch in name.trim().chars() {
        if ch.is_whitespace() {
            pending_space = true;
            continue;
        }
        if ch.is_control() || UNSAFE_FILE_CHARS.contains(&ch) {
            continue;
        }
        if pending_space && !out.is_empty() {
            out.push('_');
        }
        pending_space = false;
        out.extend(ch.to_lowercase());
    }
    out.trim_start_matches('.').to_string()
}

/// Ask for a theme name on `output` and read one line from `input`.
///
/// Blocks until a line arrives. End of input before any text is an error.
pub fn prompt_theme_name<R, W>(input: &mut R, output: &mut W) -> Result<ThemeName, PromptError>
where
    R: BufRead,
    W: Write,
{
    write!(output, "\n{PROMPT_TEXT}")?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Err(PromptError::NoInput);
    }
    ThemeName::parse(line.trim_end_matches(['\r', '\n']))
}
