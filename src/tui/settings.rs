//! Centralized labels, glyphs and colors for terminal status output.

use crossterm::style::Color;

pub const INDENT_1: &str = "  ";

pub const LABEL_WARNING: &str = "warning:";
pub const LABEL_ERROR: &str = "error:";

pub const GLYPH_SECTION_BULLET: &str = "•";
pub const GLYPH_SWATCH: &str = "██";
pub const GLYPH_SWATCH_PLAIN: &str = "-";

pub const COLOR_WARNING: Color = Color::Yellow;
pub const COLOR_ERROR: Color = Color::Red;

pub const COLOR_SECTION_BULLET: Color = Color::DarkGrey;
pub const COLOR_SECTION_TITLE: Color = Color::Cyan;
pub const COLOR_FIELD_KEY: Color = Color::DarkGrey;
pub const COLOR_FIELD_VALUE: Color = Color::White;
pub const COLOR_DETAIL_TEXT: Color = Color::DarkGrey;
