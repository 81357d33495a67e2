//! Compile-time build metadata surfaced by `itermwarp --version`.

/// Semver package version from `Cargo.toml`.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// `git describe` of the checkout, `unknown` when built outside git.
pub const COMMIT: &str = env!("ITERMWARP_COMMIT");

/// `SOURCE_DATE_EPOCH` seconds at build time, or `unset`.
pub const SOURCE_DATE: &str = env!("ITERMWARP_SOURCE_DATE");

/// Version block handed to clap's `long_version`.
pub const LONG_VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (",
    env!("ITERMWARP_COMMIT"),
    ")\nsource date: ",
    env!("ITERMWARP_SOURCE_DATE")
);
