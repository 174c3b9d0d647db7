//! Session type rules: durations, display names and icons.
//!
//! Session keys are matched case-insensitively. Every lookup in this module
//! expects the normalized (lowercase) key unless stated otherwise.

use chrono::Duration;

use crate::series::Series;

/// Pseudo session key that selects fantasy deadline events in allow-lists.
pub const FANTASY_KEY: &str = "fantasy";

/// Length used for sessions nobody has a duration for.
pub const FALLBACK_DURATION_MINUTES: i64 = 60;

/// Approximate session lengths in minutes, shared by every series.
const DEFAULT_DURATIONS: &[(&str, i64)] = &[
    ("practice", 45),
    ("qualifying", 30),
    ("sprint", 45),
    ("feature", 60),
    ("fp1", 60),
    ("fp2", 60),
    ("fp3", 60),
    ("race", 120),
    ("sprintqualifying", 30),
];

const ICONS: &[(&str, &str)] = &[
    ("practice", "🔧"),
    ("fp1", "🔧"),
    ("fp2", "🔧"),
    ("fp3", "🔧"),
    ("qualifying", "⏱️"),
    ("sprintqualifying", "⏱️"),
    ("sprint", "⚡"),
    ("race", "🏁"),
    ("feature", "🏁"),
];

pub fn normalize(key: &str) -> String {
    key.trim().to_lowercase()
}

/// Global default length for a session, if the key is known.
pub fn default_duration_minutes(key: &str) -> Option<i64> {
    DEFAULT_DURATIONS
        .iter()
        .find(|(session, _)| *session == key)
        .map(|(_, minutes)| *minutes)
}

/// Resolve a session's length: series override, then global default, then
/// the one hour fallback.
pub fn resolve_duration(series: Series, key: &str) -> Duration {
    let minutes = series
        .duration_override(key)
        .or_else(|| default_duration_minutes(key))
        .unwrap_or(FALLBACK_DURATION_MINUTES);
    Duration::minutes(minutes)
}

/// Human-readable session name.
///
/// Takes the key as written in the source data: unknown keys keep their
/// original casing after the first letter.
pub fn display_name(original_key: &str) -> String {
    let original_key = original_key.trim();
    match normalize(original_key).as_str() {
        "fp1" => "FP1".to_string(),
        "fp2" => "FP2".to_string(),
        "fp3" => "FP3".to_string(),
        "sprintqualifying" => "Sprint Qualifying".to_string(),
        _ => capitalize_first(original_key),
    }
}

pub fn icon(key: &str) -> Option<&'static str> {
    ICONS
        .iter()
        .find(|(session, _)| *session == key)
        .map(|(_, icon)| *icon)
}

fn capitalize_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duration_series_override_wins() {
        assert_eq!(resolve_duration(Series::F1, "qualifying"), Duration::hours(1));
    }

    #[test]
    fn test_duration_global_default_without_override() {
        assert_eq!(resolve_duration(Series::F2, "qualifying"), Duration::minutes(30));
        assert_eq!(resolve_duration(Series::F1, "race"), Duration::hours(2));
    }

    #[test]
    fn test_duration_unknown_key_falls_back_to_one_hour() {
        assert_eq!(resolve_duration(Series::F3, "xyz"), Duration::hours(1));
    }

    #[test]
    fn test_display_name_rules() {
        assert_eq!(display_name("fp1"), "FP1");
        assert_eq!(display_name("Fp3"), "FP3");
        assert_eq!(display_name("sprintQualifying"), "Sprint Qualifying");
        assert_eq!(display_name("qualifying"), "Qualifying");
        assert_eq!(display_name("race"), "Race");
        // Only the first letter changes for keys without a fixed name
        assert_eq!(display_name("shootOut"), "ShootOut");
    }

    #[test]
    fn test_icons() {
        assert_eq!(icon("race"), Some("🏁"));
        assert_eq!(icon("fp2"), Some("🔧"));
        assert_eq!(icon("xyz"), None);
    }
}
