//! Scan command implementation

use anyhow::Result;
use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};
use std::io::{self, Write};

use crate::cli::Cli;
use crate::config::Config;
use crate::scanner::{format_json, format_report, inspect, ScanOptions, ScanProgress};

const PROGRESS_TEMPLATE: &str = "Scanned {pos}/{len} directories...";

/// Combine config file settings with command-line overrides.
pub fn scan_options(cli: &Cli, config: &Config) -> ScanOptions {
    let mut options = config.scan_options();
    if cli.all {
        options = options.with_hidden(true);
    }
    if let Some(jobs) = cli.jobs {
        options = options.with_threads(jobs.max(1));
    }
    options
}

/// Whether the transient progress line should be drawn.
fn wants_progress(cli: &Cli, config: &Config, json: bool) -> bool {
    config.output.progress && !cli.no_progress && !cli.quiet && !json
}

/// Progress line drawn on stdout; indicatif hides it when stdout is not a
/// terminal.
fn progress_bar(enabled: bool) -> ProgressBar {
    if !enabled {
        return ProgressBar::hidden();
    }

    let pb = ProgressBar::with_draw_target(None, ProgressDrawTarget::stdout());
    if let Ok(style) = ProgressStyle::default_spinner().template(PROGRESS_TEMPLATE) {
        pb.set_style(style);
    }
    pb
}

/// Run the scan command
pub fn run(cli: &Cli, config: &Config) -> Result<()> {
    let options = scan_options(cli, config);
    let json = cli.json || config.output.json;

    tracing::debug!(?options, "Resolved scan options");

    let pb = progress_bar(wants_progress(cli, config, json));
    let report = inspect(cli.target(), &options, |progress: ScanProgress| {
        pb.set_length(progress.total as u64);
        pb.set_position(progress.scanned as u64);
    });

    // The progress line must be gone before anything else is printed
    pb.finish_and_clear();
    let report = report?;

    tracing::info!(path = %report.path().display(), "Scan complete");

    let output = if json {
        format_json(&report, true)?
    } else {
        format_report(&report)
    };

    let mut stdout = io::stdout().lock();
    if json {
        writeln!(stdout, "{}", output)?;
    } else {
        write!(stdout, "{}", output)?;
    }
    stdout.flush()?;

    Ok(())
}
