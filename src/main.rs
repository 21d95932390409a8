//! protogate CLI entry point.

use std::io::Write;
use std::process::ExitCode;

use clap::Parser;
use console::style;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use protogate::baseline::BaselineClient;
use protogate::cli::Cli;
use protogate::diff::DiffEngine;
use protogate::error::{ProtogateError, Result};
use protogate::metrics::ValidationMetrics;
use protogate::protocol::Protocol;
use protogate::report::{Renderer, Report};
use protogate::rules::RuleSet;

/// Initialize the tracing subscriber for logging.
///
/// Log level is controlled by:
/// 1. `--debug` flag sets level to DEBUG
/// 2. `RUST_LOG` environment variable (if set)
/// 3. Default is INFO
fn init_tracing(debug: bool) {
    let filter = if debug {
        EnvFilter::new("protogate=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("protogate=info"))
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .init();
}

/// Decode candidate, run rules and diff, render, persist metrics.
fn run(cli: &Cli) -> Result<Report> {
    let stdin = std::io::stdin();
    let candidate =
        Protocol::from_reader(stdin.lock()).map_err(ProtogateError::CandidateParse)?;
    tracing::debug!(
        versions = candidate.types.len(),
        "candidate document decoded"
    );

    let rules = RuleSet::with_builtins();
    let mut report = Report::new();
    report.extend(rules.check_document(&candidate));

    let baseline = BaselineClient::new().fetch(&cli.baseline_url)?;
    let delta = DiffEngine::new(&rules).diff(&candidate, &baseline);
    report.extend(delta.diagnostics);
    report.extend_notes(delta.notes);

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    Renderer::new().render(&report, &mut out)?;
    out.flush()?;

    let metrics = ValidationMetrics::new();
    metrics.record(&candidate, &report);
    if let Err(e) = metrics.write_to_file(&cli.metrics_path) {
        tracing::warn!("failed to persist metrics: {e}");
    }

    Ok(report)
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.debug);

    if cli.no_color {
        console::set_colors_enabled(false);
    }

    match run(&cli) {
        Ok(report) => ExitCode::from(report.exit_code()),
        Err(e) => {
            eprintln!("{}", style(format!("error: {e}")).red().bold());
            ExitCode::from(2)
        }
    }
}
