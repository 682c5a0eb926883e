//! `scan` command: report matches per source without printing redacted text.

use anyhow::{bail, Context, Result};
use is_terminal::IsTerminal;
use log::info;
use std::io::{self, Write};

use profanity_core::ProfanityEngine;

use crate::cli::ScanCommand;
use crate::commands::{build_pipeline, load_additional_sources, read_input};
use crate::ui::summary::print_scan_summary;

/// Runs the `scan` command.
///
/// Fails when `--fail-over-threshold` is set and more words matched than allowed.
pub fn run_scan(cmd: &ScanCommand, quiet: bool) -> Result<()> {
    info!("Starting scan operation.");

    let input = read_input(cmd.input_file.as_deref())?;
    let (additional_sources, cache) = load_additional_sources(&cmd.source_args)?;
    let pipeline = build_pipeline(&cache);

    let summary = pipeline
        .analyze_for_stats(&input, &additional_sources)
        .context("Scan failed")?;
    let total: usize = summary.iter().map(|s| s.occurrences).sum();

    if cmd.json_stdout {
        let json = serde_json::to_string_pretty(&summary).context("Failed to serialize scan summary")?;
        writeln!(io::stdout().lock(), "{}", json)?;
    } else if !quiet {
        let supports_color = io::stderr().is_terminal();
        print_scan_summary(&summary, &mut io::stderr(), supports_color)?;
    }

    if let Some(threshold) = cmd.fail_over_threshold {
        if total > threshold {
            bail!(
                "Found {} profane word(s), exceeding the threshold of {}.",
                total,
                threshold
            );
        }
    }

    info!("Scan operation completed with {} match(es).", total);
    Ok(())
}
