//! `sources` command: list the built-in word sources.

use anyhow::Result;
use comfy_table::{presets::UTF8_FULL, Table};
use std::io::{self, Write};

use profanity_core::SourceRegistry;

pub fn run_sources() -> Result<()> {
    let registry = SourceRegistry::with_builtin_sources();
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_header(vec!["#", "Source", "Words"]);

    for (index, source) in registry.builtin_sources().iter().enumerate() {
        table.add_row(vec![
            (index + 1).to_string(),
            source.name.clone(),
            source.words.len().to_string(),
        ]);
    }

    writeln!(io::stdout().lock(), "{}", table)?;
    Ok(())
}
