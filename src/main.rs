//! CLI entry point for itermwarp.

mod cli;

use std::io::{self, IsTerminal};
use std::path::Path;
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use itermwarp::config::load_config;
use itermwarp::convert::{convert, ConversionReport, ConversionRequest};
use itermwarp::error::ConvertError;
use itermwarp::tui::Renderer;

const LOG_ENV: &str = "ITERMWARP_LOG";
const DEFAULT_LOG_FILTER: &str = "warn";

fn main() -> ExitCode {
    let args = cli::Args::parse();
    init_tracing();

    let loaded = match load_config().map_err(ConvertError::from) {
        Ok(loaded) => loaded,
        Err(e) => {
            Renderer::new(io::stderr().is_terminal()).error(&e.to_string());
            return ExitCode::FAILURE;
        }
    };
    let config = loaded.config;
    let renderer = Renderer::new(config.display.color && io::stderr().is_terminal());

    let request = ConversionRequest {
        input: &args.input,
        output_dir: Path::new("."),
    };
    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut prompt_out = io::stderr();

    match convert(request, &config, &mut input, &mut prompt_out) {
        Ok(report) => {
            render_report(&renderer, &report);
            ExitCode::SUCCESS
        }
        Err(e) => {
            renderer.error(&e.to_string());
            ExitCode::FAILURE
        }
    }
}

fn init_tracing() {
    let filter =
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    // Ignore double-init; only happens if a subscriber was installed elsewhere.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .without_time()
        .try_init();
}

fn render_report(renderer: &Renderer, report: &ConversionReport) {
    eprintln!();
    renderer.section("Theme converted");
    renderer.field("name", &report.theme_name);
    renderer.field("saved as", &report.output_path.display().to_string());
    for field in &report.fields {
        renderer.swatch(&field.target.dotted(), &field.value.to_string(), field.color);
    }
    if !report.defaulted.is_empty() {
        renderer.warn(&format!(
            "defaults used for: {}",
            report.defaulted.join(", ")
        ));
    }
    if !report.ignored_slots.is_empty() {
        renderer.detail(&format!(
            "{} source slot(s) without a Warp field were ignored: {}",
            report.ignored_slots.len(),
            report.ignored_slots.join(", ")
        ));
    }
}
