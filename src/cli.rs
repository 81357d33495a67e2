//! CLI argument parsing via clap.

use std::path::PathBuf;

use clap::Parser;

use itermwarp::build_info;

/// Convert an iTerm2 `.itermcolors` theme into a Warp YAML theme.
///
/// Prompts for a theme name and writes `<name>.yaml` to the current directory.
#[derive(Debug, Parser)]
#[command(name = "itermwarp", version, long_version = build_info::LONG_VERSION)]
pub struct Args {
    /// Path to the source `.itermcolors` file.
    pub input: PathBuf,
}
