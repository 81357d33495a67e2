//! Normalized RGBA colors and their destination representations.
//!
//! Source themes store each channel as a float in `[0.0, 1.0]`. Warp wants
//! `#rrggbb` strings. Conversion rounds half-up (`0.5 * 255 = 127.5 -> 128`),
//! so mid-grey lands on `#808080` rather than `#7f7f7f`.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A color with four normalized float channels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgba {
    pub red: f64,
    pub green: f64,
    pub blue: f64,
    pub alpha: f64,
}

impl Rgba {
    pub const fn new(red: f64, green: f64, blue: f64, alpha: f64) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }

    /// Fully opaque color.
    pub const fn opaque(red: f64, green: f64, blue: f64) -> Self {
        Self::new(red, green, blue, 1.0)
    }

    /// Parse `#rrggbb` or `#rrggbbaa` (leading `#` optional, case-insensitive).
    pub fn from_hex(text: &str) -> Option<Self> {
        let digits = text.trim().strip_prefix('#').unwrap_or(text.trim());
        if !(digits.len() == 6 || digits.len() == 8) || !digits.is_ascii() {
            return None;
        }
        let channel = |idx: usize| -> Option<f64> {
            u8::from_str_radix(&digits[idx..idx + 2], 16)
                .ok()
                .map(|value| f64::from(value) / 255.0)
        };
        let alpha = if digits.len() == 8 { channel(6)? } else { 1.0 };
        Some(Self::new(channel(0)?, channel(2)?, channel(4)?, alpha))
    }

    /// Channel values as `[red, green, blue, alpha]`.
    pub fn components(&self) -> [f64; 4] {
        [self.red, self.green, self.blue, self.alpha]
    }

    /// `#rrggbb`, alpha omitted.
    pub fn to_hex(&self) -> String {
        format!(
            "#{:02x}{:02x}{:02x}",
            channel_to_u8(self.red),
            channel_to_u8(self.green),
            channel_to_u8(self.blue)
        )
    }

    /// `#rrggbbaa`, alpha appended as the fourth pair.
    pub fn to_hex_alpha(&self) -> String {
        format!("{}{:02x}", self.to_hex(), channel_to_u8(self.alpha))
    }

    /// 8-bit RGB triple, used for terminal swatches.
    pub fn to_rgb8(&self) -> (u8, u8, u8) {
        (
            channel_to_u8(self.red),
            channel_to_u8(self.green),
            channel_to_u8(self.blue),
        )
    }
}

impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex_alpha())
    }
}

/// Convert one normalized channel to 8 bits: `round(c * 255)` clamped to `[0, 255]`.
pub fn channel_to_u8(component: f64) -> u8 {
    if component.is_nan() {
        return 0;
    }
    (component * 255.0).round().clamp(0.0, 255.0) as u8
}

/// Clamp one channel into `[0.0, 1.0]`. Returns the clamped value and whether
/// it changed.
pub fn clamp_unit(component: f64) -> (f64, bool) {
    let clamped = component.clamp(0.0, 1.0);
    (clamped, clamped != component)
}

// ---------------------------------------------------------------------------
// Destination representations
// ---------------------------------------------------------------------------

/// How a destination field encodes its color.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Representation {
    /// `#rrggbb`
    #[default]
    Hex,
    /// `#rrggbbaa`
    HexAlpha,
    /// `[r, g, b, a]` floats, unchanged.
    Components,
}

impl Representation {
    pub fn render(self, color: Rgba) -> ColorValue {
        match self {
            Self::Hex => ColorValue::Hex(color.to_hex()),
            Self::HexAlpha => ColorValue::Hex(color.to_hex_alpha()),
            Self::Components => ColorValue::Components(color.components()),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Hex => "hex",
            Self::HexAlpha => "hex-alpha",
            Self::Components => "components",
        }
    }
}

/// A rendered destination value.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ColorValue {
    Hex(String),
    Components([f64; 4]),
}

impl fmt::Display for ColorValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Hex(hex) => f.write_str(hex),
            Self::Components([r, g, b, a]) => write!(f, "[{r}, {g}, {b}, {a}]"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_for_primary_and_extreme_colors() {
        assert_eq!(Rgba::opaque(1.0, 0.0, 0.0).to_hex(), "#ff0000");
        assert_eq!(Rgba::opaque(0.0, 0.0, 0.0).to_hex(), "#000000");
        assert_eq!(Rgba::opaque(1.0, 1.0, 1.0).to_hex(), "#ffffff");
    }

    #[test]
    fn mid_grey_rounds_half_up() {
        // 0.5 * 255 = 127.5, which must land on 0x80.
        assert_eq!(Rgba::opaque(0.5, 0.5, 0.5).to_hex(), "#808080");
    }

    #[test]
    fn out_of_range_channels_saturate() {
        assert_eq!(channel_to_u8(1.5), 255);
        assert_eq!(channel_to_u8(-0.25), 0);
        assert_eq!(channel_to_u8(f64::NAN), 0);
    }

    #[test]
    fn clamp_unit_reports_changes() {
        assert_eq!(clamp_unit(1.5), (1.0, true));
        assert_eq!(clamp_unit(-0.1), (0.0, true));
        assert_eq!(clamp_unit(0.25), (0.25, false));
    }

    #[test]
    fn hex_alpha_appends_fourth_pair() {
        let color = Rgba::new(0.0, 0.0, 1.0, 0.5);
        assert_eq!(color.to_hex_alpha(), "#0000ff80");
    }

    #[test]
    fn from_hex_accepts_both_lengths() {
        let rgb = Rgba::from_hex("#6BA4F8").expect("rgb");
        assert_eq!(rgb.to_hex(), "#6ba4f8");
        assert_eq!(rgb.alpha, 1.0);

        let rgba = Rgba::from_hex("13141880").expect("rgba");
        assert_eq!(rgba.to_hex_alpha(), "#13141880");
    }

    #[test]
    fn from_hex_rejects_garbage() {
        assert!(Rgba::from_hex("").is_none());
        assert!(Rgba::from_hex("#12345").is_none());
        assert!(Rgba::from_hex("#gg0000").is_none());
        assert!(Rgba::from_hex("#ééé").is_none());
    }

    #[test]
    fn representation_renders_each_form() {
        let color = Rgba::new(1.0, 0.5, 0.0, 0.25);
        assert_eq!(
            Representation::Hex.render(color),
            ColorValue::Hex("#ff8000".into())
        );
        assert_eq!(
            Representation::HexAlpha.render(color),
            ColorValue::Hex("#ff800040".into())
        );
        assert_eq!(
            Representation::Components.render(color),
            ColorValue::Components([1.0, 0.5, 0.0, 0.25])
        );
    }

    #[test]
    fn representation_parses_kebab_case_names() {
        #[derive(Deserialize)]
        struct Probe {
            repr: Representation,
        }
        let probe: Probe = toml::from_str("repr = \"hex-alpha\"").expect("parse");
        assert_eq!(probe.repr, Representation::HexAlpha);
        assert!(toml::from_str::<Probe>("repr = \"rgb\"").is_err());
    }

    #[cfg(feature = "fuzz-tests")]
    mod fuzz {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn hex_is_always_seven_lowercase_chars(
                r in -2.0f64..3.0,
                g in -2.0f64..3.0,
                b in -2.0f64..3.0,
            ) {
                let hex = Rgba::opaque(r, g, b).to_hex();
                prop_assert_eq!(hex.len(), 7);
                prop_assert!(hex.starts_with('#'));
                prop_assert!(hex[1..]
                    .chars()
                    .all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
            }

            #[test]
            fn hex_matches_rounding_rule(r in 0.0f64..=1.0) {
                let expected = (r * 255.0).round() as u8;
                let hex = Rgba::opaque(r, 0.0, 0.0).to_hex();
                prop_assert_eq!(u8::from_str_radix(&hex[1..3], 16).unwrap(), expected);
            }
        }
    }
}
