//! Source-slot to Warp-field translation.
//!
//! `FIELD_MAPPING` is the single, ordered table driving the conversion. Its
//! order is the output order. Source slots that no rule names are ignored
//! (logged at debug level); rules whose slot is absent either fall back to a
//! configured default, are dropped, or fail under strict mapping.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use tracing::debug;

use crate::color::{ColorValue, Representation, Rgba};
use crate::error::{MapError, MissingSlot};
use crate::parser::ThemeDocument;

/// Which half of the sixteen-color ANSI palette a field belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Tone {
    Normal,
    Bright,
}

impl Tone {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Normal => "normal",
            Self::Bright => "bright",
        }
    }
}

/// Location of a field in the Warp theme document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldPath {
    /// A top-level key such as `background`.
    Top(&'static str),
    /// `terminal_colors.<tone>.<color>`
    Terminal { tone: Tone, color: &'static str },
}

impl FieldPath {
    /// Dotted path, as used in configuration overrides and messages.
    pub fn dotted(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Top(key) => f.write_str(key),
            Self::Terminal { tone, color } => {
                write!(f, "terminal_colors.{}.{color}", tone.as_str())
            }
        }
    }
}

/// Configured fallback colors for the required top-level fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fallback {
    Accent,
    Background,
    Foreground,
}

/// What to do when a rule's source slot is missing (lenient mode).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WhenAbsent {
    UseDefault(Fallback),
    Drop,
}

/// One row of the mapping table.
#[derive(Debug, Clone, Copy)]
pub struct FieldRule {
    pub source: &'static str,
    pub target: FieldPath,
    pub representation: Representation,
    pub when_absent: WhenAbsent,
}

const fn required(source: &'static str, key: &'static str, fallback: Fallback) -> FieldRule {
    FieldRule {
        source,
        target: FieldPath::Top(key),
        representation: Representation::Hex,
        when_absent: WhenAbsent::UseDefault(fallback),
    }
}

const fn ansi(source: &'static str, tone: Tone, color: &'static str) -> FieldRule {
    FieldRule {
        source,
        target: FieldPath::Terminal { tone, color },
        representation: Representation::Hex,
        when_absent: WhenAbsent::Drop,
    }
}

pub static FIELD_MAPPING: &[FieldRule] = &[
    required("Link Color", "accent", Fallback::Accent),
    required("Background Color", "background", Fallback::Background),
    required("Foreground Color", "foreground", Fallback::Foreground),
    ansi("Ansi 0 Color", Tone::Normal, "black"),
    ansi("Ansi 1 Color", Tone::Normal, "red"),
    ansi("Ansi 2 Color", Tone::Normal, "green"),
    ansi("Ansi 3 Color", Tone::Normal, "yellow"),
    ansi("Ansi 4 Color", Tone::Normal, "blue"),
    ansi("Ansi 5 Color", Tone::Normal, "magenta"),
    ansi("Ansi 6 Color", Tone::Normal, "cyan"),
    ansi("Ansi 7 Color", Tone::Normal, "white"),
    ansi("Ansi 8 Color", Tone::Bright, "black"),
    ansi("Ansi 9 Color", Tone::Bright, "red"),
    ansi("Ansi 10 Color", Tone::Bright, "green"),
    ansi("Ansi 11 Color", Tone::Bright, "yellow"),
    ansi("Ansi 12 Color", Tone::Bright, "blue"),
    ansi("Ansi 13 Color", Tone::Bright, "magenta"),
    ansi("Ansi 14 Color", Tone::Bright, "cyan"),
    ansi("Ansi 15 Color", Tone::Bright, "white"),
];

/// Find the rule for a dotted destination path.
pub fn rule_for_field(dotted: &str) -> Option<&'static FieldRule> {
    FIELD_MAPPING
        .iter()
        .find(|rule| rule.target.dotted() == dotted)
}

/// Colors substituted for absent required slots.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Fallbacks {
    pub accent: Rgba,
    pub background: Rgba,
    pub foreground: Rgba,
}

impl Fallbacks {
    pub fn color(&self, which: Fallback) -> Rgba {
        match which {
            Fallback::Accent => self.accent,
            Fallback::Background => self.background,
            Fallback::Foreground => self.foreground,
        }
    }
}

/// Knobs for `map_theme`, usually derived from `Config`.
#[derive(Debug, Clone, PartialEq)]
pub struct MapOptions {
    pub strict: bool,
    pub fallbacks: Fallbacks,
    /// Representation overrides keyed by dotted field path.
    pub representation: BTreeMap<String, Representation>,
}

/// Where a mapped value came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldOrigin {
    Slot(&'static str),
    Default,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MappedField {
    pub target: FieldPath,
    pub value: ColorValue,
    /// The color before rendering, kept for swatches.
    pub color: Rgba,
    pub origin: FieldOrigin,
}

/// Mapper output: fields in table order plus the source slots nobody used.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct MappedTheme {
    pub fields: Vec<MappedField>,
    pub ignored_slots: Vec<String>,
}

impl MappedTheme {
    /// Destination fields that were filled from configured defaults.
    pub fn defaulted_fields(&self) -> Vec<String> {
        self.fields
            .iter()
            .filter(|field| field.origin == FieldOrigin::Default)
            .map(|field| field.target.dotted())
            .collect()
    }
}

/// Translate a parsed theme through `FIELD_MAPPING`.
pub fn map_theme(doc: &ThemeDocument, options: &MapOptions) -> Result<MappedTheme, MapError> {
    let mut fields = Vec::with_capacity(FIELD_MAPPING.len());
    let mut missing = Vec::new();

    for rule in FIELD_MAPPING {
        let dotted = rule.target.dotted();
        let representation = options
            .representation
            .get(&dotted)
            .copied()
            .unwrap_or(rule.representation);

        let (color, origin) = match doc.get(rule.source) {
            Some(slot) => (slot.color, FieldOrigin::Slot(rule.source)),
            None if options.strict => {
                missing.push(MissingSlot {
                    field: dotted,
                    slot: rule.source,
                });
                continue;
            }
            None => match rule.when_absent {
                WhenAbsent::UseDefault(which) => {
                    debug!(
                        field = %dotted,
                        slot = rule.source,
                        "source slot absent; using default"
                    );
                    (options.fallbacks.color(which), FieldOrigin::Default)
                }
                WhenAbsent::Drop => {
                    debug!(
                        field = %dotted,
                        slot = rule.source,
                        "source slot absent; field dropped"
                    );
                    continue;
                }
            },
        };

        fields.push(MappedField {
            target: rule.target,
            value: representation.render(color),
            color,
            origin,
        });
    }

    if !missing.is_empty() {
        return Err(MapError::MappingGap(missing));
    }

    let known: BTreeSet<&str> = FIELD_MAPPING.iter().map(|rule| rule.source).collect();
    let ignored_slots = doc
        .iter()
        .filter(|slot| !known.contains(slot.name.as_str()))
        .map(|slot| {
            debug!(slot = %slot.name, "no destination field; ignored");
            slot.name.clone()
        })
        .collect();

    Ok(MappedTheme {
        fields,
        ignored_slots,
    })
}
