//! `.itermcolors` reader.
//!
//! An iTerm2 color preset is a plist (XML or binary) whose root dictionary
//! maps slot names such as `Background Color` or `Ansi 4 Color` to color
//! dictionaries:
//!
//! ```text
//! <key>Background Color</key>
//! <dict>
//!     <key>Alpha Component</key> <real>1</real>
//!     <key>Blue Component</key>  <real>0.1</real>
//!     <key>Color Space</key>     <string>sRGB</string>
//!     <key>Green Component</key> <real>0.1</real>
//!     <key>Red Component</key>   <real>0.1</real>
//! </dict>
//! ```
//!
//! Every entry must carry the three RGB components. Alpha defaults to `1.0`.
//! Out-of-range values are clamped into `[0.0, 1.0]` with a warning.

use std::collections::BTreeMap;
use std::io::Cursor;
use std::path::Path;

use plist::{Dictionary, Value};
use tracing::{debug, warn};

use crate::color::{clamp_unit, Rgba};
use crate::error::ParseError;

pub const RED_COMPONENT: &str = "Red Component";
pub const GREEN_COMPONENT: &str = "Green Component";
pub const BLUE_COMPONENT: &str = "Blue Component";
pub const ALPHA_COMPONENT: &str = "Alpha Component";

const DEFAULT_ALPHA: f64 = 1.0;

/// One named color from the source theme.
#[derive(Debug, Clone, PartialEq)]
pub struct ColorSlot {
    pub name: String,
    pub color: Rgba,
}

/// All color slots of one source theme, keyed by slot name.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ThemeDocument {
    slots: BTreeMap<String, ColorSlot>,
}

impl ThemeDocument {
    pub fn get(&self, name: &str) -> Option<&ColorSlot> {
        self.slots.get(name)
    }

    /// Slots in name order.
    pub fn iter(&self) -> impl Iterator<Item = &ColorSlot> {
        self.slots.values()
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    fn insert(&mut self, slot: ColorSlot) {
        self.slots.insert(slot.name.clone(), slot);
    }
}

impl FromIterator<ColorSlot> for ThemeDocument {
    fn from_iter<I: IntoIterator<Item = ColorSlot>>(iter: I) -> Self {
        let mut doc = Self::default();
        for slot in iter {
            doc.insert(slot);
        }
        doc
    }
}

/// Read and parse a theme file from disk.
pub fn parse_theme_file(path: &Path) -> Result<ThemeDocument, ParseError> {
    let bytes = std::fs::read(path).map_err(|source| ParseError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(path = %path.display(), bytes = bytes.len(), "read source theme");
    parse_theme_bytes(&bytes)
}

/// Parse an in-memory XML or binary plist.
pub fn parse_theme_bytes(bytes: &[u8]) -> Result<ThemeDocument, ParseError> {
    let root = Value::from_reader(Cursor::new(bytes))?;
    let Some(entries) = root.as_dictionary() else {
        return Err(ParseError::RootNotDictionary);
    };

    let mut doc = ThemeDocument::default();
    for (name, value) in entries.iter() {
        let Some(color_dict) = value.as_dictionary() else {
            return Err(ParseError::EntryNotDictionary { slot: name.clone() });
        };
        let color = parse_color(name, color_dict)?;
        debug!(slot = %name, color = %color, "parsed color slot");
        doc.insert(ColorSlot {
            name: name.clone(),
            color,
        });
    }
    Ok(doc)
}

fn parse_color(slot: &str, dict: &Dictionary) -> Result<Rgba, ParseError> {
    let red = required_component(slot, dict, RED_COMPONENT)?;
    let green = required_component(slot, dict, GREEN_COMPONENT)?;
    let blue = required_component(slot, dict, BLUE_COMPONENT)?;
    let alpha = component(slot, dict, ALPHA_COMPONENT)?.unwrap_or(DEFAULT_ALPHA);
    Ok(Rgba::new(red, green, blue, alpha))
}

fn required_component(
    slot: &str,
    dict: &Dictionary,
    name: &'static str,
) -> Result<f64, ParseError> {
    component(slot, dict, name)?.ok_or_else(|| ParseError::MissingComponent {
        slot: slot.to_string(),
        component: name,
    })
}

/// Look up one component, validate it, and clamp it into `[0.0, 1.0]`.
fn component(
    slot: &str,
    dict: &Dictionary,
    name: &'static str,
) -> Result<Option<f64>, ParseError> {
    let Some(value) = dict.get(name) else {
        return Ok(None);
    };
    let raw = numeric(value).ok_or_else(|| ParseError::NonNumericComponent {
        slot: slot.to_string(),
        component: name,
    })?;
    if !raw.is_finite() {
        return Err(ParseError::NonFiniteComponent {
            slot: slot.to_string(),
            component: name,
            value: raw,
        });
    }
    let (clamped, changed) = clamp_unit(raw);
    if changed {
        warn!(slot, component = name, raw, clamped, "component out of range; clamped");
    }
    Ok(Some(clamped))
}

fn numeric(value: &Value) -> Option<f64> {
    match value {
        Value::Real(v) => Some(*v),
        Value::Integer(i) => i
            .as_signed()
            .map(|v| v as f64)
            .or_else(|| i.as_unsigned().map(|v| v as f64)),
        _ => None,
    }
}
