//! Turns loaded race schedules into calendar events.
//!
//! One [`Assembler`] covers single-series calendars, combined calendars and
//! filtered calendars: the differences are expressed through its optional
//! allow-lists and the series title tag.

use std::collections::HashSet;

use chrono::{DateTime, Utc};

use crate::event::{CalendarArtifact, CalendarEvent, DOMAIN_CATEGORY, Reminder};
use crate::fantasy;
use crate::schedule::{Race, Session};
use crate::series::Series;
use crate::session::{self, FANTASY_KEY};

/// Reminders attached to every session event.
const SESSION_REMINDERS: [Reminder; 2] = [Reminder::minutes_before(60), Reminder::minutes_before(15)];

/// The races of one series, in file order.
#[derive(Debug, Clone)]
pub struct SeriesSchedule {
    pub series: Series,
    pub races: Vec<Race>,
}

impl SeriesSchedule {
    pub fn new(series: Series, races: Vec<Race>) -> Self {
        SeriesSchedule { series, races }
    }
}

/// Builds a [`CalendarArtifact`] from one or more series schedules.
#[derive(Debug, Clone)]
pub struct Assembler {
    name: String,
    /// Normalized session keys to keep; `None` keeps everything
    sessions: Option<HashSet<String>>,
    series: Option<HashSet<Series>>,
    /// Prefix titles with "[F1] " etc. so combined calendars stay readable
    tag_series: bool,
    generated_at: DateTime<Utc>,
}

impl Assembler {
    pub fn new(name: impl Into<String>) -> Self {
        Assembler {
            name: name.into(),
            sessions: None,
            series: None,
            tag_series: false,
            generated_at: Utc::now(),
        }
    }

    /// Assembler for a single-series calendar named after the series.
    pub fn for_series(series: Series) -> Self {
        Self::new(series.display_name())
    }

    /// Assembler for a calendar mixing several series.
    pub fn combined(name: impl Into<String>) -> Self {
        Assembler {
            tag_series: true,
            ..Self::new(name)
        }
    }

    /// Keep only these session keys (case-insensitive). The pseudo key
    /// `fantasy` keeps fantasy deadlines. An empty list disables filtering.
    pub fn with_sessions<I, S>(mut self, keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let keys: HashSet<String> = keys
            .into_iter()
            .map(|k| session::normalize(k.as_ref()))
            .filter(|k| !k.is_empty())
            .collect();
        self.sessions = (!keys.is_empty()).then_some(keys);
        self
    }

    /// Keep only schedules of these series. An empty list disables filtering.
    pub fn with_series<I>(mut self, series: I) -> Self
    where
        I: IntoIterator<Item = Series>,
    {
        let series: HashSet<Series> = series.into_iter().collect();
        self.series = (!series.is_empty()).then_some(series);
        self
    }

    /// Pin the generation timestamp (DTSTAMP) instead of using the current time.
    pub fn generated_at(mut self, at: DateTime<Utc>) -> Self {
        self.generated_at = at;
        self
    }

    /// Build the calendar. Schedules are processed in the order given.
    pub fn assemble(&self, schedules: &[SeriesSchedule]) -> CalendarArtifact {
        let mut artifact = CalendarArtifact::new(&self.name, self.generated_at);

        for schedule in schedules {
            if !self.includes_series(schedule.series) {
                log::debug!("Skipping {}: not selected", schedule.series);
                continue;
            }

            let before = artifact.events.len();
            for race in &schedule.races {
                self.push_race_events(schedule.series, race, &mut artifact.events);
            }
            log::debug!(
                "{}: {} events from {} races",
                schedule.series,
                artifact.events.len() - before,
                schedule.races.len()
            );
        }

        artifact
    }

    fn push_race_events(&self, series: Series, race: &Race, events: &mut Vec<CalendarEvent>) {
        for session in &race.sessions {
            if self.includes_session(series, &session.normalized_key()) {
                events.push(self.tagged(series, session_event(series, race, session)));
            }
        }

        if self.includes_fantasy(series) {
            if let Some(event) = fantasy::deadline_event(series, race) {
                events.push(self.tagged(series, event));
            }
        }
    }

    fn includes_series(&self, series: Series) -> bool {
        self.series.as_ref().is_none_or(|allowed| allowed.contains(&series))
    }

    /// In combined calendars the allow-list only matches keys the series schedules.
    fn includes_session(&self, series: Series, key: &str) -> bool {
        match &self.sessions {
            None => true,
            Some(allowed) => {
                allowed.contains(key) && (!self.tag_series || series.is_valid_session(key))
            }
        }
    }

    fn includes_fantasy(&self, series: Series) -> bool {
        series.has_fantasy_deadline()
            && self
                .sessions
                .as_ref()
                .is_none_or(|allowed| allowed.contains(FANTASY_KEY))
    }

    fn tagged(&self, series: Series, mut event: CalendarEvent) -> CalendarEvent {
        if self.tag_series {
            event.title = format!("[{}] {}", series.id(), event.title);
        }
        event
    }
}

/// Build the calendar event for one session of a race.
pub fn session_event(series: Series, race: &Race, session: &Session) -> CalendarEvent {
    let key = session.normalized_key();
    let display = session::display_name(&session.key);

    let title = match session::icon(&key) {
        Some(icon) => format!("{} {} - {}", icon, race.name, display),
        None => format!("{} - {}", race.name, display),
    };

    CalendarEvent {
        uid: format!("{}-r{}-{}@racecal", series.id().to_lowercase(), race.round, key),
        title,
        description: format!("Round {} - {} - {}", race.round, race.location, display),
        location: Some(race.location.clone()),
        geo: race.geo(),
        start: session.start,
        end: session.start + session::resolve_duration(series, &key),
        categories: vec![DOMAIN_CATEGORY.to_string(), series.id().to_string(), display],
        reminders: SESSION_REMINDERS.to_vec(),
    }
}
