//! CLI argument definitions.
//!
//! protogate is a single-purpose gate: the candidate document always arrives
//! on stdin, so there are no subcommands, only switches for the baseline
//! location and output behavior.

use clap::Parser;
use std::path::PathBuf;

use crate::baseline::DEFAULT_BASELINE_URL;

/// protogate - compatibility quality gate for versioned protocol definitions.
///
/// Reads a candidate protocol document (JSON) from stdin, validates it, and
/// diffs it against the last published baseline. Exits non-zero when a
/// breaking change or contract violation is found.
#[derive(Debug, Parser)]
#[command(name = "protogate")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// URL of the published baseline protocol document
    #[arg(
        long,
        env = "PROTOGATE_BASELINE_URL",
        default_value = DEFAULT_BASELINE_URL
    )]
    pub baseline_url: String,

    /// File to write Prometheus text-format metrics to
    #[arg(long, default_value = "metrics.txt")]
    pub metrics_path: PathBuf,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_apply_without_args() {
        let cli = Cli::parse_from(["protogate"]);

        assert_eq!(cli.baseline_url, DEFAULT_BASELINE_URL);
        assert_eq!(cli.metrics_path, PathBuf::from("metrics.txt"));
        assert!(!cli.no_color);
        assert!(!cli.debug);
    }

    #[test]
    fn baseline_url_is_overridable() {
        let cli = Cli::parse_from([
            "protogate",
            "--baseline-url",
            "http://localhost:8080/protocol.json",
        ]);
        assert_eq!(cli.baseline_url, "http://localhost:8080/protocol.json");
    }

    #[test]
    fn flags_parse() {
        let cli = Cli::parse_from(["protogate", "--no-color", "--debug"]);
        assert!(cli.no_color);
        assert!(cli.debug);
    }
}
