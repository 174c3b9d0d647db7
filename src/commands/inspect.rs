use std::path::Path;

use anyhow::{Context, Result};
use owo_colors::OwoColorize;
use racecal_core::ics::parse_events;

pub fn run(file: &Path) -> Result<()> {
    let content = std::fs::read_to_string(file)
        .with_context(|| format!("Failed to read {}", file.display()))?;
    let events = parse_events(&content)
        .with_context(|| format!("Failed to parse {}", file.display()))?;

    if events.is_empty() {
        println!("{}", "No events found".dimmed());
        return Ok(());
    }

    for event in &events {
        println!(
            "{}  {}  {}",
            event.start.format("%Y-%m-%d %H:%M").bold(),
            format!("{:>4}m", (event.end - event.start).num_minutes()).dimmed(),
            event.summary
        );
    }
    println!("\n{} events", events.len());

    Ok(())
}
