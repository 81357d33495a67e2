//! itermwarp converts iTerm2 `.itermcolors` presets into Warp YAML themes.
//!
//! The pipeline has three stages, each usable on its own:
//!
//! 1. [`parser`] reads the plist into a [`parser::ThemeDocument`].
//! 2. [`mapping`] translates slots through the static
//!    [`mapping::FIELD_MAPPING`] table.
//! 3. [`writer`] renders YAML and writes `<name>.yaml` atomically.
//!
//! [`convert::convert`] runs all three plus the interactive name prompt.
//!
//! ```no_run
//! use std::io::Cursor;
//! use std::path::Path;
//! use itermwarp::config::Config;
//! use itermwarp::convert::{convert, ConversionRequest};
//!
//! let request = ConversionRequest {
//!     input: Path::new("Dracula.itermcolors"),
//!     output_dir: Path::new("."),
//! };
//! let mut answer = Cursor::new(b"Dracula\n".to_vec());
//! let report = convert(request, &Config::default(), &mut answer, &mut std::io::sink()).unwrap();
//! println!("{}", report.output_path.display());
//! ```

pub mod build_info;
pub mod color;
pub mod config;
pub mod convert;
pub mod error;
pub mod mapping;
pub mod parser;
pub mod prompt;
#[cfg(test)]
pub mod testsupport;
pub mod tui;
pub mod writer;
