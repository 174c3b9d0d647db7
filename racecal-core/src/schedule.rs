//! Schedule loading from the per-series JSON files.
//!
//! The expected shape is:
//!
//! ```json
//! { "races": [ { "name": "...", "round": 1, "location": "...",
//!                "latitude": -37.8, "longitude": 144.9,
//!                "sessions": { "qualifying": "2025-03-15T05:00:00Z" } } ] }
//! ```

use std::collections::HashSet;
use std::io::ErrorKind;
use std::path::Path;

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::Deserialize;
use serde_json::{Map, Value};

use crate::error::{RaceCalError, RaceCalResult};
use crate::session::normalize;

/// The only timestamp layout accepted for session starts.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%SZ";

/// A single timed activity of a race weekend.
#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    /// Key as written in the source file (e.g. "sprintQualifying")
    pub key: String,
    pub start: DateTime<Utc>,
}

impl Session {
    /// Lowercase key used for every table lookup.
    pub fn normalized_key(&self) -> String {
        normalize(&self.key)
    }
}

/// A race weekend with its sessions in file order.
#[derive(Debug, Clone, PartialEq)]
pub struct Race {
    pub name: String,
    pub round: u32,
    pub location: String,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub sessions: Vec<Session>,
}

impl Race {
    /// Coordinates, only when both are present.
    pub fn geo(&self) -> Option<(f64, f64)> {
        match (self.latitude, self.longitude) {
            (Some(lat), Some(lon)) => Some((lat, lon)),
            _ => None,
        }
    }

    /// Find a session by key, ignoring case.
    pub fn session(&self, key: &str) -> Option<&Session> {
        let key = normalize(key);
        self.sessions.iter().find(|s| s.normalized_key() == key)
    }
}

#[derive(Deserialize)]
struct ScheduleFile {
    races: Vec<RawRace>,
}

#[derive(Deserialize)]
struct RawRace {
    name: String,
    round: u32,
    location: String,
    #[serde(default)]
    latitude: Option<f64>,
    #[serde(default)]
    longitude: Option<f64>,
    #[serde(default)]
    sessions: Option<Map<String, Value>>,
}

/// Load races from a schedule file.
pub fn load_races(path: &Path) -> RaceCalResult<Vec<Race>> {
    let content = match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            return Err(RaceCalError::NotFound(path.to_path_buf()));
        }
        Err(e) => return Err(e.into()),
    };

    parse_races(&content).map_err(|e| match e {
        RaceCalError::Parse(msg) => RaceCalError::Parse(format!("{}: {}", path.display(), msg)),
        other => other,
    })
}

/// Parse races from schedule JSON text.
///
/// Sessions with a malformed start time are skipped with a warning instead
/// of failing the race.
pub fn parse_races(content: &str) -> RaceCalResult<Vec<Race>> {
    let file: ScheduleFile = serde_json::from_str(content)?;
    Ok(file.races.into_iter().map(into_race).collect())
}

/// Parse a `YYYY-MM-DDTHH:MM:SSZ` timestamp as a UTC instant.
pub fn parse_timestamp(value: &str) -> Option<DateTime<Utc>> {
    NaiveDateTime::parse_from_str(value, TIMESTAMP_FORMAT)
        .ok()
        .map(|dt| dt.and_utc())
}

fn into_race(raw: RawRace) -> Race {
    let mut seen = HashSet::new();
    let mut sessions = Vec::new();

    for (key, value) in raw.sessions.unwrap_or_default() {
        let Some(start) = value.as_str().and_then(parse_timestamp) else {
            log::warn!(
                "Skipping session '{}' of '{}': invalid start time {}",
                key,
                raw.name,
                value
            );
            continue;
        };

        if !seen.insert(normalize(&key)) {
            log::warn!("Skipping duplicate session '{}' of '{}'", key, raw.name);
            continue;
        }

        sessions.push(Session { key, start });
    }

    Race {
        name: raw.name,
        round: raw.round,
        location: raw.location,
        latitude: raw.latitude,
        longitude: raw.longitude,
        sessions,
    }
}
