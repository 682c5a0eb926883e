//! `filter` command: redact profanity and write the result.

use anyhow::{Context, Result};
use is_terminal::IsTerminal;
use log::{debug, info};
use std::fs;
use std::io::{self, Write};

use profanity_core::{FilterOptions, FilterResult, ProfanityEngine};

use crate::cli::FilterCommand;
use crate::commands::{build_pipeline, load_additional_sources, read_input};
use crate::ui::output_format::{info_msg, warn_msg};
use crate::ui::summary::print_steps_summary;

/// Runs the `filter` command.
pub async fn run_filter(cmd: &FilterCommand, quiet: bool) -> Result<()> {
    info!("Starting filter operation.");

    let input = read_input(cmd.input_file.as_deref())?;
    if input.is_empty() && !quiet {
        warn_msg("Input is empty; nothing to filter.");
    }
    let (additional_sources, cache) = load_additional_sources(&cmd.source_args)?;
    let pipeline = build_pipeline(&cache);

    let options = FilterOptions::new(cmd.strategy.into(), cmd.target.into())
        .with_additional_sources(additional_sources);

    let result = pipeline
        .filter_profanity(Some(input.as_str()), &options)
        .await
        .context("Filtering failed")?;

    debug!(
        "Input filtered. Original length: {}, Filtered length: {}",
        input.len(),
        result.output().len()
    );

    write_output(cmd, &result, quiet)?;

    if !cmd.no_summary && !quiet && !cmd.json {
        let supports_color = io::stderr().is_terminal();
        print_steps_summary(&result, &mut io::stderr(), supports_color)?;
    }

    info!("Filter operation completed.");
    Ok(())
}

/// Filtered text is written byte for byte; JSON gets a trailing newline.
fn render(cmd: &FilterCommand, result: &FilterResult) -> Result<String> {
    if cmd.json {
        let json =
            serde_json::to_string_pretty(result).context("Failed to serialize filter result")?;
        Ok(format!("{}\n", json))
    } else {
        Ok(result.output().to_string())
    }
}

fn write_output(cmd: &FilterCommand, result: &FilterResult, quiet: bool) -> Result<()> {
    let rendered = render(cmd, result)?;
    match &cmd.output {
        Some(path) => {
            if !quiet {
                info_msg(format!("Writing filtered content to file: {}", path.display()));
            }
            let mut file = fs::File::create(path)
                .with_context(|| format!("Failed to create output file: {}", path.display()))?;
            file.write_all(rendered.as_bytes())?;
        }
        None => {
            let stdout = io::stdout();
            let mut writer = stdout.lock();
            writer.write_all(rendered.as_bytes())?;
            writer.flush()?;
        }
    }
    Ok(())
}
