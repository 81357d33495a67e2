//! Terminal renderer for status, warning and error lines (stderr).

use crossterm::style::{Color, Stylize};

use crate::color::Rgba;
use crate::tui::settings;

/// Writes styled status lines to stderr.
#[derive(Debug, Clone, Copy)]
pub struct Renderer {
    /// Whether ANSI color/style output is enabled.
    color: bool,
}

impl Renderer {
    pub fn new(color: bool) -> Self {
        Self { color }
    }

    /// Print a titled section header.
    pub fn section(&self, title: &str) {
        eprintln!("{}", self.format_section(title));
    }

    /// Print one key/value row.
    pub fn field(&self, key: &str, value: &str) {
        eprintln!("{}", self.format_field(key, value));
    }

    /// Print a key/value row prefixed with a swatch of `color`.
    pub fn swatch(&self, key: &str, value: &str, color: Rgba) {
        eprintln!("{}", self.format_swatch(key, value, color));
    }

    /// Print indented secondary text.
    pub fn detail(&self, text: &str) {
        eprintln!("{}", self.format_detail(text));
    }

    pub fn warn(&self, msg: &str) {
        eprintln!("{}", self.format_warning(msg));
    }

    pub fn error(&self, msg: &str) {
        eprintln!("{}", self.format_error(msg));
    }

    fn format_section(&self, title: &str) -> String {
        if self.color {
            format!(
                "{} {}",
                settings::GLYPH_SECTION_BULLET.with(settings::COLOR_SECTION_BULLET),
                title.with(settings::COLOR_SECTION_TITLE).bold()
            )
        } else {
            format!("{title}:")
        }
    }

    fn format_field(&self, key: &str, value: &str) -> String {
        if self.color {
            format!(
                "{}{} {}",
                settings::INDENT_1,
                format!("{key}:").with(settings::COLOR_FIELD_KEY),
                value.with(settings::COLOR_FIELD_VALUE),
            )
        } else {
            format!("{}{key}: {value}", settings::INDENT_1)
        }
    }

    fn format_swatch(&self, key: &str, value: &str, color: Rgba) -> String {
        if self.color {
            let (r, g, b) = color.to_rgb8();
            format!(
                "{}{} {} {}",
                settings::INDENT_1,
                settings::GLYPH_SWATCH.with(Color::Rgb { r, g, b }),
                format!("{key}:").with(settings::COLOR_FIELD_KEY),
                value.with(settings::COLOR_FIELD_VALUE),
            )
        } else {
            format!(
                "{}{} {key}: {value}",
                settings::INDENT_1,
                settings::GLYPH_SWATCH_PLAIN
            )
        }
    }

    fn format_detail(&self, text: &str) -> String {
        if self.color {
            format!(
                "{}{}",
                settings::INDENT_1,
                text.with(settings::COLOR_DETAIL_TEXT)
            )
        } else {
            format!("{}{text}", settings::INDENT_1)
        }
    }

    fn format_warning(&self, msg: &str) -> String {
        if self.color {
            format!(
                "{} {msg}",
                settings::LABEL_WARNING.with(settings::COLOR_WARNING).bold()
            )
        } else {
            format!("{} {msg}", settings::LABEL_WARNING)
        }
    }

    fn format_error(&self, msg: &str) -> String {
        if self.color {
            format!(
                "{} {msg}",
                settings::LABEL_ERROR.with(settings::COLOR_ERROR).bold()
            )
        } else {
            format!("{} {msg}", settings::LABEL_ERROR)
        }
    }
}
