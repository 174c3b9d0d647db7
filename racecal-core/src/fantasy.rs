//! Fantasy game deadlines.
//!
//! Team changes lock when the first competitive session of the weekend
//! starts: the sprint on sprint weekends, qualifying otherwise.

use chrono::{DateTime, Utc};

use crate::event::{CalendarEvent, DOMAIN_CATEGORY, Reminder};
use crate::schedule::Race;
use crate::series::Series;

const FANTASY_CATEGORY: &str = "Fantasy";
const FANTASY_REMINDER: Reminder = Reminder::minutes_before(60);

/// Sessions that lock fantasy teams, in order of precedence.
const DEADLINE_SESSIONS: &[&str] = &["sprint", "qualifying"];

/// The instant fantasy teams lock for a race, if it has a locking session.
pub fn deadline(race: &Race) -> Option<DateTime<Utc>> {
    DEADLINE_SESSIONS
        .iter()
        .find_map(|key| race.session(key))
        .map(|session| session.start)
}

/// Build the zero-length deadline event for a race.
pub fn deadline_event(series: Series, race: &Race) -> Option<CalendarEvent> {
    let at = deadline(race)?;

    Some(CalendarEvent {
        uid: format!("{}-r{}-fantasy@racecal", series.id().to_lowercase(), race.round),
        title: format!("{} Fantasy Deadline - Round {}", series.id(), race.round),
        description: format!(
            "Last chance to update your {} Fantasy team for the {} (Round {})",
            series.id(),
            race.name,
            race.round
        ),
        location: None,
        geo: None,
        start: at,
        end: at,
        categories: vec![
            DOMAIN_CATEGORY.to_string(),
            series.id().to_string(),
            FANTASY_CATEGORY.to_string(),
        ],
        reminders: vec![FANTASY_REMINDER],
    })
}
