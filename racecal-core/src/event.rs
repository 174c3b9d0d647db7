//! Calendar events derived from race schedules.
//!
//! Nothing here is stored: events are rebuilt from the schedule files on
//! every generation request.

use chrono::{DateTime, Utc};

/// Category tag carried by every generated event.
pub const DOMAIN_CATEGORY: &str = "Motorsport";

/// A calendar event ready for serialization
#[derive(Debug, Clone, PartialEq)]
pub struct CalendarEvent {
    /// Stable identifier, e.g. `f1-r1-qualifying@racecal`
    pub uid: String,
    pub title: String,
    pub description: String,
    pub location: Option<String>,
    /// (latitude, longitude)
    pub geo: Option<(f64, f64)>,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
    pub categories: Vec<String>,
    pub reminders: Vec<Reminder>,
}

/// A reminder/alarm for an event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Reminder {
    /// Minutes before the event to trigger
    pub minutes: i64,
}

impl Reminder {
    pub const fn minutes_before(minutes: i64) -> Self {
        Reminder { minutes }
    }
}

/// The complete output of one generation request.
#[derive(Debug, Clone, PartialEq)]
pub struct CalendarArtifact {
    /// Calendar display name (X-WR-CALNAME)
    pub name: String,
    /// Written as DTSTAMP on every event
    pub generated_at: DateTime<Utc>,
    pub events: Vec<CalendarEvent>,
}

impl CalendarArtifact {
    pub fn new(name: impl Into<String>, generated_at: DateTime<Utc>) -> Self {
        CalendarArtifact {
            name: name.into(),
            generated_at,
            events: Vec::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }
}
