use std::path::PathBuf;

use anyhow::{Context, Result};
use racecal_core::{Assembler, Series, generator};

use crate::config::Config;

use super::write_calendar;

pub fn run(
    cfg: &Config,
    series: Series,
    input: Option<PathBuf>,
    output: Option<PathBuf>,
    sessions: Vec<String>,
) -> Result<()> {
    let input = input.unwrap_or_else(|| cfg.schedule_path(series));
    let output = output.unwrap_or_else(|| cfg.output_path(&series.calendar_file_name()));

    let assembler = Assembler::for_series(series).with_sessions(&sessions);
    let artifact = generator::generate_series(series, &input, &assembler)
        .with_context(|| format!("Failed to generate {} calendar", series))?;

    write_calendar(&output, &artifact)?;
    println!(
        "Calendar generated: {} ({} events)",
        output.display(),
        artifact.len()
    );

    Ok(())
}
