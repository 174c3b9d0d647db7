//! ICS file parsing using the icalendar crate's parser.

use chrono::{DateTime, Utc};
use icalendar::{
    CalendarDateTime, DatePerhapsTime,
    parser::{Component, read_calendar, unfold},
};

use crate::error::{RaceCalError, RaceCalResult};

/// The parts of a VEVENT needed to check or list a generated calendar.
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedEvent {
    pub uid: Option<String>,
    pub summary: String,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
    /// Minutes before start of each VALARM
    pub reminders: Vec<i64>,
}

/// Parse every VEVENT of an ICS document.
///
/// Events whose DTSTART/DTEND are not UTC date-times are skipped, since
/// racecal only ever writes UTC instants.
pub fn parse_events(content: &str) -> RaceCalResult<Vec<ParsedEvent>> {
    let unfolded = unfold(content);
    let calendar = read_calendar(&unfolded).map_err(|e| RaceCalError::Parse(e.to_string()))?;

    Ok(calendar
        .components
        .iter()
        .filter(|c| c.name == "VEVENT")
        .filter_map(parse_vevent)
        .collect())
}

fn parse_vevent(vevent: &Component) -> Option<ParsedEvent> {
    let summary = vevent
        .find_prop("SUMMARY")
        .map(|p| p.val.to_string())
        .unwrap_or_else(|| "(No title)".to_string());
    let start = to_utc(DatePerhapsTime::try_from(vevent.find_prop("DTSTART")?).ok()?)?;
    let end = to_utc(DatePerhapsTime::try_from(vevent.find_prop("DTEND")?).ok()?)?;
    let uid = vevent.find_prop("UID").map(|p| p.val.to_string());

    let reminders = vevent
        .components
        .iter()
        .filter(|c| c.name == "VALARM")
        .filter_map(|alarm| reminder_minutes(alarm.find_prop("TRIGGER")?.val.as_ref()))
        .collect();

    Some(ParsedEvent {
        uid,
        summary,
        start,
        end,
        reminders,
    })
}

fn to_utc(dpt: DatePerhapsTime) -> Option<DateTime<Utc>> {
    match dpt {
        DatePerhapsTime::DateTime(CalendarDateTime::Utc(dt)) => Some(dt),
        _ => None,
    }
}

/// Minutes before start for a relative TRIGGER; negative when it fires after
fn reminder_minutes(trigger: &str) -> Option<i64> {
    let (sign, offset) = match trigger.strip_prefix('-') {
        Some(offset) => (1, offset),
        None => (-1, trigger.strip_prefix('+').unwrap_or(trigger)),
    };
    let offset: std::time::Duration = iso8601::duration(offset).ok()?.into();
    i64::try_from(offset.as_secs() / 60).ok().map(|minutes| sign * minutes)
}
