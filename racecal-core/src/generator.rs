//! Per-request calendar generation: load schedules, then assemble.

use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};

use crate::assembler::{Assembler, SeriesSchedule};
use crate::error::{RaceCalError, RaceCalResult};
use crate::event::CalendarArtifact;
use crate::schedule::{Race, load_races};
use crate::series::Series;

/// Load a series' schedule file.
pub fn load_schedule(series: Series, path: &Path) -> RaceCalResult<SeriesSchedule> {
    let races = load_races(path)?;
    log::debug!("Loaded {} {} races from {}", races.len(), series, path.display());
    Ok(SeriesSchedule::new(series, races))
}

/// Build the calendar of a single series. Any loading error is fatal.
pub fn generate_series(
    series: Series,
    path: &Path,
    assembler: &Assembler,
) -> RaceCalResult<CalendarArtifact> {
    let schedule = load_schedule(series, path)?;
    Ok(assembler.assemble(&[schedule]))
}

/// Result of a multi-series request.
#[derive(Debug)]
pub struct CombinedCalendar {
    pub artifact: CalendarArtifact,
    /// Series left out because their schedule could not be loaded
    pub failed: Vec<(Series, RaceCalError)>,
}

/// Load every requested series and build one calendar from them.
///
/// A series whose schedule fails to load is logged and left out; the
/// others are still assembled, in the order given.
pub fn generate_combined(sources: &[(Series, PathBuf)], assembler: &Assembler) -> CombinedCalendar {
    let mut schedules = Vec::with_capacity(sources.len());
    let mut failed = Vec::new();

    for (series, path) in sources {
        match load_schedule(*series, path) {
            Ok(schedule) => schedules.push(schedule),
            Err(e) => {
                log::error!("Error loading {} data: {}", series, e);
                failed.push((*series, e));
            }
        }
    }

    CombinedCalendar {
        artifact: assembler.assemble(&schedules),
        failed,
    }
}

/// A race dated by its series' headline session (race or feature race).
#[derive(Debug, Clone, PartialEq)]
pub struct DatedRace<'a> {
    pub series: Series,
    pub race: &'a Race,
    pub date: DateTime<Utc>,
}

/// All races across schedules, sorted by headline session start.
///
/// Races without a headline session are left out.
pub fn races_by_date(schedules: &[SeriesSchedule]) -> Vec<DatedRace<'_>> {
    let mut races: Vec<DatedRace<'_>> = schedules
        .iter()
        .flat_map(|schedule| {
            schedule.races.iter().filter_map(move |race| {
                race.session(schedule.series.headline_session())
                    .map(|session| DatedRace {
                        series: schedule.series,
                        race,
                        date: session.start,
                    })
            })
        })
        .collect();

    races.sort_by_key(|r| r.date);
    races
}
