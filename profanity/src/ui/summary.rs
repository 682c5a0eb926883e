//! Per-step and per-source summary tables.

use comfy_table::{presets::UTF8_FULL, Cell, ContentArrangement, Table};
use owo_colors::OwoColorize;
use std::io::{self, Write};

use profanity_core::{FilterResult, SourceSummary};

/// Builds a table with one row per step: source, whether it filtered, match count.
pub fn steps_table(result: &FilterResult) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec!["#", "Source", "Filtered", "Matches"]);

    for (index, step) in result.steps.iter().enumerate() {
        table.add_row(vec![
            Cell::new(index + 1),
            Cell::new(&step.profane_source_data),
            Cell::new(if step.is_filtered { "yes" } else { "no" }),
            Cell::new(step.matches.len()),
        ]);
    }
    table
}

/// Builds a table of sources that matched and how often.
pub fn sources_table(summary: &[SourceSummary]) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec!["Source", "Occurrences"]);

    for item in summary {
        table.add_row(vec![Cell::new(&item.source_name), Cell::new(item.occurrences)]);
    }
    table
}

pub fn print_steps_summary<W: Write>(
    result: &FilterResult,
    writer: &mut W,
    supports_color: bool,
) -> io::Result<()> {
    let header = "--- Filter Summary ---";
    if supports_color {
        writeln!(writer, "{}", header.bold())?;
    } else {
        writeln!(writer, "{}", header)?;
    }
    writeln!(writer, "{}", steps_table(result))?;

    let total = result.match_count();
    if total == 0 {
        writeln!(writer, "No profanity found.")
    } else if supports_color {
        writeln!(writer, "{} word(s) redacted.", total.to_string().red().bold())
    } else {
        writeln!(writer, "{} word(s) redacted.", total)
    }
}

pub fn print_scan_summary<W: Write>(
    summary: &[SourceSummary],
    writer: &mut W,
    supports_color: bool,
) -> io::Result<()> {
    if summary.is_empty() {
        return writeln!(writer, "No profanity found.");
    }
    let header = "--- Scan Summary ---";
    if supports_color {
        writeln!(writer, "{}", header.bold())?;
    } else {
        writeln!(writer, "{}", header)?;
    }
    writeln!(writer, "{}", sources_table(summary))?;
    let total: usize = summary.iter().map(|s| s.occurrences).sum();
    writeln!(writer, "Total matches: {}", total)
}

#[cfg(test)]
mod tests {
    use super::*;
    use profanity_core::FilterStep;

    #[test]
    fn test_steps_table_lists_every_step() {
        let result = FilterResult {
            steps: vec![
                FilterStep {
                    profane_source_data: "First".to_string(),
                    is_filtered: false,
                    matches: Vec::new(),
                    output_after_step: "clean".to_string(),
                },
                FilterStep {
                    profane_source_data: "Second".to_string(),
                    is_filtered: false,
                    matches: Vec::new(),
                    output_after_step: "clean".to_string(),
                },
            ],
            ..FilterResult::default()
        };
        let rendered = steps_table(&result).to_string();
        assert!(rendered.contains("First"));
        assert!(rendered.contains("Second"));

        let mut out = Vec::new();
        print_steps_summary(&result, &mut out, false).unwrap();
        assert!(String::from_utf8(out).unwrap().contains("No profanity found."));
    }

    #[test]
    fn test_scan_summary_totals() {
        let summary = vec![
            SourceSummary { source_name: "A".into(), occurrences: 2, matched_words: vec![] },
            SourceSummary { source_name: "B".into(), occurrences: 1, matched_words: vec![] },
        ];
        let mut out = Vec::new();
        print_scan_summary(&summary, &mut out, false).unwrap();
        assert!(String::from_utf8(out).unwrap().contains("Total matches: 3"));
    }
}
