//! Environment overrides applied on top of the file config.

use crate::error::ConfigError;
use crate::writer::Details;

use super::Config;

pub(super) const ENV_DETAILS: &str = "ITERMWARP_DETAILS";
pub(super) const ENV_STRICT: &str = "ITERMWARP_STRICT";
pub(super) const ENV_OVERWRITE: &str = "ITERMWARP_OVERWRITE";
pub(super) const ENV_NO_COLOR: &str = "NO_COLOR";

pub(super) fn apply_env_overrides<FEnv>(
    config: &mut Config,
    env_lookup: &FEnv,
) -> Result<(), ConfigError>
where
    FEnv: Fn(&str) -> Option<String>,
{
    if let Some(details) = non_empty(env_lookup, ENV_DETAILS) {
        config.theme.details = match details.to_ascii_lowercase().as_str() {
            "darker" => Details::Darker,
            "lighter" => Details::Lighter,
            _ => {
                return Err(ConfigError::Invalid(format!(
                    "invalid {ENV_DETAILS} value `{details}`: expected `darker` or `lighter`"
                )))
            }
        };
    }
    if let Some(strict) = non_empty(env_lookup, ENV_STRICT) {
        config.mapping.strict = parse_bool(ENV_STRICT, &strict)?;
    }
    if let Some(overwrite) = non_empty(env_lookup, ENV_OVERWRITE) {
        config.output.overwrite = parse_bool(ENV_OVERWRITE, &overwrite)?;
    }
    // https://no-color.org: any non-empty value disables color.
    if non_empty(env_lookup, ENV_NO_COLOR).is_some() {
        config.display.color = false;
    }
    Ok(())
}

fn non_empty<FEnv>(env_lookup: &FEnv, name: &str) -> Option<String>
where
    FEnv: Fn(&str) -> Option<String>,
{
    env_lookup(name)
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

fn parse_bool(name: &str, value: &str) -> Result<bool, ConfigError> {
    match value.to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::Invalid(format!(
            "invalid {name} value `{value}`: expected a boolean"
        ))),
    }
}
