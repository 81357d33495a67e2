//! Stamps the binary with the source revision it was built from.
//!
//! `--version` output depends only on the checkout, so two builds of the
//! same commit print the same text. A `SOURCE_DATE_EPOCH` set by a
//! packager is passed through as the source date.

use std::env;
use std::process::Command;

const COMMIT_ENV: &str = "ITERMWARP_COMMIT";
const SOURCE_DATE_ENV: &str = "ITERMWARP_SOURCE_DATE";

fn main() {
    println!("cargo:rerun-if-changed=.git/HEAD");
    println!("cargo:rerun-if-changed=.git/index");
    println!("cargo:rerun-if-env-changed={COMMIT_ENV}");
    println!("cargo:rerun-if-env-changed=SOURCE_DATE_EPOCH");

    let commit = env::var(COMMIT_ENV)
        .ok()
        .filter(|value| !value.trim().is_empty())
        .or_else(describe_checkout)
        .unwrap_or_else(|| "unknown".to_string());
    let source_date = env::var("SOURCE_DATE_EPOCH")
        .ok()
        .and_then(|value| value.trim().parse::<u64>().ok())
        .map(|secs| secs.to_string())
        .unwrap_or_else(|| "unset".to_string());

    println!("cargo:rustc-env={COMMIT_ENV}={commit}");
    println!("cargo:rustc-env={SOURCE_DATE_ENV}={source_date}");
}

/// `git describe` output such as `a1b2c3d4e5f6-dirty`, or `None` outside a checkout.
fn describe_checkout() -> Option<String> {
    let output = Command::new("git")
        .args(["describe", "--always", "--dirty", "--abbrev=12"])
        .output()
        .ok()?;
    if !output.status.success() {
        return None;
    }
    let text = String::from_utf8(output.stdout).ok()?;
    let text = text.trim();
    (!text.is_empty()).then(|| text.to_string())
}
