//! One conversion run: parse, map, prompt, write.
//!
//! The prompt happens only after mapping succeeds, so a broken source never
//! asks the user for a name. Nothing touches the output directory until the
//! YAML is fully rendered.

use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};

use tracing::info;

use crate::config::Config;
use crate::error::ConvertError;
use crate::mapping::{map_theme, MappedField};
use crate::parser::parse_theme_file;
use crate::prompt::prompt_theme_name;
use crate::writer::write_theme;

/// Input file and destination directory for one run.
#[derive(Debug, Clone, Copy)]
pub struct ConversionRequest<'a> {
    pub input: &'a Path,
    pub output_dir: &'a Path,
}

/// Summary of a successful run.
#[derive(Debug, Clone, PartialEq)]
pub struct ConversionReport {
    pub output_path: PathBuf,
    pub theme_name: String,
    pub fields: Vec<MappedField>,
    /// Destination fields filled from configured defaults.
    pub defaulted: Vec<String>,
    /// Source slots with no destination field.
    pub ignored_slots: Vec<String>,
}

/// Run the full pipeline, reading the theme name from `input` and writing the
/// prompt to `prompt_out`.
pub fn convert<R, W>(
    request: ConversionRequest<'_>,
    config: &Config,
    input: &mut R,
    prompt_out: &mut W,
) -> Result<ConversionReport, ConvertError>
where
    R: BufRead,
    W: Write,
{
    let doc = parse_theme_file(request.input)?;
    info!(slots = doc.len(), input = %request.input.display(), "parsed source theme");

    let mapped = map_theme(&doc, &config.map_options())?;
    let name = prompt_theme_name(input, prompt_out)?;
    let output_path = write_theme(
        request.output_dir,
        &name,
        &mapped,
        &config.write_options(),
    )?;

    Ok(ConversionReport {
        output_path,
        theme_name: name.display().to_string(),
        defaulted: mapped.defaulted_fields(),
        fields: mapped.fields,
        ignored_slots: mapped.ignored_slots,
    })
}
