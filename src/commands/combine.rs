use std::path::PathBuf;

use anyhow::Result;
use chrono::Utc;
use owo_colors::OwoColorize;
use racecal_core::{Assembler, Series, generator};

use crate::config::Config;

use super::write_calendar;

pub fn run(
    cfg: &Config,
    series: Vec<Series>,
    sessions: Vec<String>,
    output: Option<PathBuf>,
    name: String,
) -> Result<()> {
    // Nothing selected means nothing to generate, not an error
    if series.is_empty() || sessions.is_empty() {
        println!(
            "{}",
            "Select at least one series and one session type to generate a calendar".dimmed()
        );
        return Ok(());
    }

    let sources: Vec<(Series, PathBuf)> = series
        .iter()
        .map(|s| (*s, cfg.schedule_path(*s)))
        .collect();

    let assembler = Assembler::combined(name)
        .with_series(series.iter().copied())
        .with_sessions(&sessions);
    let combined = generator::generate_combined(&sources, &assembler);

    for (series, err) in &combined.failed {
        println!("{} {}: {}", "Skipped".yellow(), series, err);
    }

    let output = output.unwrap_or_else(|| {
        let timestamp = Utc::now().format("%Y%m%d%H%M%S");
        cfg.output_path(&format!("racing_calendar_{}.ics", timestamp))
    });

    write_calendar(&output, &combined.artifact)?;
    println!(
        "Calendar generated: {} ({} events)",
        output.display(),
        combined.artifact.len()
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config_in(dir: &std::path::Path) -> Config {
        Config {
            data_dir: format!("{}/_data", env!("CARGO_MANIFEST_DIR")),
            output_dir: dir.display().to_string(),
            ..Config::default()
        }
    }

    #[test]
    fn test_no_sessions_selected_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("racing.ics");

        run(
            &config_in(dir.path()),
            vec![Series::F1, Series::F2],
            Vec::new(),
            Some(output.clone()),
            "Racing Calendar".to_string(),
        )
        .unwrap();

        assert!(!output.exists());
    }

    #[test]
    fn test_no_series_selected_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("racing.ics");

        run(
            &config_in(dir.path()),
            Vec::new(),
            vec!["race".to_string()],
            Some(output.clone()),
            "Racing Calendar".to_string(),
        )
        .unwrap();

        assert!(!output.exists());
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
    }

    #[test]
    fn test_combined_calendar_from_bundled_schedules() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("racing.ics");

        run(
            &config_in(dir.path()),
            vec![Series::F1],
            vec!["race".to_string()],
            Some(output.clone()),
            "Racing Calendar".to_string(),
        )
        .unwrap();

        let content = std::fs::read_to_string(&output).unwrap();
        assert!(content.contains("SUMMARY:[F1] "));
    }
}
