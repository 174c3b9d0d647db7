use anyhow::Result;
use owo_colors::OwoColorize;
use racecal_core::generator::{self, DatedRace};
use racecal_core::{SeriesSchedule, Series};

use crate::config::Config;

pub fn run(cfg: &Config, series: &[Series]) -> Result<()> {
    let mut schedules: Vec<SeriesSchedule> = Vec::new();

    // A missing or broken schedule hides that series, the rest still list
    for s in series {
        match generator::load_schedule(*s, &cfg.schedule_path(*s)) {
            Ok(schedule) => schedules.push(schedule),
            Err(e) => log::error!("Error loading {} data: {}", s, e),
        }
    }

    let races = generator::races_by_date(&schedules);
    if races.is_empty() {
        println!("{}", "No races found".dimmed());
        return Ok(());
    }

    for dated in &races {
        println!(
            "{}  {}  Round {:<2} {} ({})",
            dated.date.format("%a %b %-d").bold(),
            series_tag(dated),
            dated.race.round,
            dated.race.name,
            dated.race.location.dimmed()
        );
    }

    Ok(())
}

/// "[F1]" in the series' color (F1 red, F2 blue, F3 gray)
fn series_tag(dated: &DatedRace<'_>) -> String {
    let tag = format!("[{}]", dated.series);
    match dated.series {
        Series::F1 => tag.red().to_string(),
        Series::F2 => tag.blue().to_string(),
        Series::F3 => tag.dimmed().to_string(),
    }
}
