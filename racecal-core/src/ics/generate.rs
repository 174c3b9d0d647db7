//! ICS file generation.

use chrono::{DateTime, Utc};
use icalendar::{Alarm, Calendar, Component, EventLike, Property, Trigger};

use crate::event::{CalendarArtifact, CalendarEvent};

const PRODID: &str = "-//racecal//Race Calendar Generator//EN";

/// Generate .ics content for a whole calendar.
///
/// Output only depends on the artifact: the generation timestamp is used
/// for every DTSTAMP, so equal artifacts give byte-identical text.
pub fn generate_ics(artifact: &CalendarArtifact) -> String {
    let mut cal = Calendar::new();
    cal.append_property(Property::new("X-WR-CALNAME", &artifact.name));
    cal.append_property(Property::new("X-WR-TIMEZONE", "UTC"));

    let dtstamp = format_utc(&artifact.generated_at);
    for event in &artifact.events {
        cal.push(build_event(event, &dtstamp));
    }
    let cal = cal.done();

    finish_output(&cal.to_string())
}

fn build_event(event: &CalendarEvent, dtstamp: &str) -> icalendar::Event {
    let mut ics_event = icalendar::Event::new();
    ics_event.uid(&event.uid);
    ics_event.summary(&event.title);
    ics_event.description(&event.description);
    ics_event.add_property("DTSTAMP", dtstamp);
    ics_event.add_property("DTSTART", format_utc(&event.start));
    ics_event.add_property("DTEND", format_utc(&event.end));

    if let Some(ref loc) = event.location {
        ics_event.location(loc);
    }

    if let Some((lat, lon)) = event.geo {
        ics_event.add_property("GEO", format!("{};{}", lat, lon));
    }

    // One CATEGORIES line per tag keeps values free of comma escaping
    for category in &event.categories {
        ics_event.append_multi_property(Property::new("CATEGORIES", category));
    }

    // Add alarms (VALARM components) - minimal per RFC 5545
    for reminder in &event.reminders {
        let trigger = Trigger::before_start(chrono::Duration::minutes(reminder.minutes));
        ics_event.alarm(Alarm::display("Reminder", trigger));
    }

    ics_event.done()
}

fn format_utc(dt: &DateTime<Utc>) -> String {
    dt.format("%Y%m%dT%H%M%SZ").to_string()
}

/// Rewrite the crate's output into our final form.
///
/// VALARMs get a fresh UID and DTSTAMP on every run; dropping them keeps the
/// output stable across runs.
fn finish_output(raw: &str) -> String {
    let mut in_alarm = false;
    let mut out = String::with_capacity(raw.len());

    for line in raw.lines() {
        match line {
            "BEGIN:VALARM" => in_alarm = true,
            "END:VALARM" => in_alarm = false,
            "CALSCALE:GREGORIAN" => continue,
            _ if in_alarm && is_alarm_noise(line) => continue,
            _ => {}
        }

        let line = if line.starts_with("PRODID:") {
            format!("PRODID:{}", PRODID)
        } else {
            line.to_string()
        };
        out.push_str(&line);
        out.push_str("\r\n");
    }

    out
}

fn is_alarm_noise(line: &str) -> bool {
    line.starts_with("UID:") || line.starts_with("DTSTAMP:")
}
