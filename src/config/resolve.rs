//! Validate the parsed file schema and resolve it into a runtime `Config`.

use crate::color::Rgba;
use crate::error::ConfigError;
use crate::mapping::rule_for_field;

use super::{Config, FileConfig};

pub(super) fn resolve_config(file: FileConfig) -> Result<Config, ConfigError> {
    let mut config = Config::default();

    if let Some(details) = file.theme.details {
        config.theme.details = details;
    }
    let fallbacks = &mut config.theme.fallbacks;
    if let Some(hex) = file.theme.accent.as_deref() {
        fallbacks.accent = parse_fallback("theme.accent", hex)?;
    }
    if let Some(hex) = file.theme.background.as_deref() {
        fallbacks.background = parse_fallback("theme.background", hex)?;
    }
    if let Some(hex) = file.theme.foreground.as_deref() {
        fallbacks.foreground = parse_fallback("theme.foreground", hex)?;
    }

    if let Some(strict) = file.mapping.strict {
        config.mapping.strict = strict;
    }
    for field in file.mapping.representation.keys() {
        if rule_for_field(field).is_none() {
            return Err(ConfigError::Invalid(format!(
                "mapping.representation names unknown field `{field}`"
            )));
        }
    }
    config.mapping.representation = file.mapping.representation;

    if let Some(overwrite) = file.output.overwrite {
        config.output.overwrite = overwrite;
    }
    if let Some(color) = file.display.color {
        config.display.color = color;
    }
    Ok(config)
}

fn parse_fallback(key: &str, hex: &str) -> Result<Rgba, ConfigError> {
    Rgba::from_hex(hex).ok_or_else(|| {
        ConfigError::Invalid(format!(
            "{key} must be a `#rrggbb` or `#rrggbbaa` color, got `{hex}`"
        ))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Representation;
    use crate::writer::Details;

    fn resolve_str(text: &str) -> Result<Config, ConfigError> {
        let file: FileConfig = toml::from_str(text)?;
        resolve_config(file)
    }

    #[test]
    fn empty_file_resolves_to_defaults() {
        assert_eq!(resolve_str("").expect("resolve"), Config::default());
    }

    #[test]
    fn every_section_is_applied() {
        let config = resolve_str(
            r##"
[theme]
details = "lighter"
accent = "#112233"
background = "#445566"
foreground = "#778899"

[mapping]
strict = true
[mapping.representation]
"terminal_colors.bright.black" = "hex-alpha"
background = "components"

[output]
overwrite = false

[display]
color = false
"##,
        )
        .expect("resolve");

        assert_eq!(config.theme.details, Details::Lighter);
        assert_eq!(config.theme.fallbacks.accent.to_hex(), "#112233");
        assert_eq!(config.theme.fallbacks.background.to_hex(), "#445566");
        assert_eq!(config.theme.fallbacks.foreground.to_hex(), "#778899");
        assert!(config.mapping.strict);
        assert_eq!(
            config
                .mapping
                .representation
                .get("terminal_colors.bright.black"),
            Some(&Representation::HexAlpha)
        );
        assert_eq!(
            config.mapping.representation.get("background"),
            Some(&Representation::Components)
        );
        assert!(!config.output.overwrite);
        assert!(!config.display.color);
    }

    #[test]
    fn invalid_fallback_color_is_rejected() {
        let err = resolve_str("[theme]\naccent = \"blue\"\n").unwrap_err();
        assert!(err.to_string().contains("theme.accent"), "got: {err}");
    }

    #[test]
    fn unknown_representation_field_is_rejected() {
        let err = resolve_str("[mapping.representation]\ncursor = \"hex\"\n").unwrap_err();
        assert!(err.to_string().contains("`cursor`"), "got: {err}");
    }

    #[test]
    fn unknown_keys_and_values_are_rejected() {
        assert!(matches!(
            resolve_str("[output]\ndirectory = \"/tmp\"\n"),
            Err(ConfigError::Toml(_))
        ));
        assert!(matches!(
            resolve_str("[theme]\ndetails = \"darkest\"\n"),
            Err(ConfigError::Toml(_))
        ));
    }
}
