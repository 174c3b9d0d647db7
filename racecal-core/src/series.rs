//! The racing series racecal knows about.

use std::fmt;
use std::str::FromStr;

use crate::error::{RaceCalError, RaceCalResult};

/// Season covered by the bundled file name conventions.
pub const SEASON: u16 = 2025;

/// A supported racing series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Series {
    F1,
    F2,
    F3,
}

const F1_SESSIONS: &[&str] = &[
    "fp1",
    "fp2",
    "fp3",
    "sprintqualifying",
    "sprint",
    "qualifying",
    "race",
];

const FEEDER_SESSIONS: &[&str] = &["practice", "sprint", "qualifying", "feature"];

/// Session lengths (in minutes) that differ from the global defaults.
const F1_DURATION_OVERRIDES: &[(&str, i64)] = &[
    ("qualifying", 60),
    ("sprintqualifying", 45),
    ("sprint", 60),
];

impl Series {
    pub const ALL: [Series; 3] = [Series::F1, Series::F2, Series::F3];

    /// Short identifier used in titles, categories and file names ("F1").
    pub fn id(&self) -> &'static str {
        match self {
            Series::F1 => "F1",
            Series::F2 => "F2",
            Series::F3 => "F3",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Series::F1 => "Formula 1",
            Series::F2 => "Formula 2",
            Series::F3 => "Formula 3",
        }
    }

    /// Lowercase session keys this series schedules.
    pub fn valid_sessions(&self) -> &'static [&'static str] {
        match self {
            Series::F1 => F1_SESSIONS,
            Series::F2 | Series::F3 => FEEDER_SESSIONS,
        }
    }

    pub fn is_valid_session(&self, key: &str) -> bool {
        self.valid_sessions().contains(&key)
    }

    /// Series-specific duration in minutes for a normalized session key, if any.
    pub fn duration_override(&self, key: &str) -> Option<i64> {
        let table: &[(&str, i64)] = match self {
            Series::F1 => F1_DURATION_OVERRIDES,
            Series::F2 | Series::F3 => &[],
        };
        table
            .iter()
            .find(|(session, _)| *session == key)
            .map(|(_, minutes)| *minutes)
    }

    /// Whether races of this series get a fantasy deadline event.
    pub fn has_fantasy_deadline(&self) -> bool {
        matches!(self, Series::F1)
    }

    /// The session that dates a race weekend when listing races.
    pub fn headline_session(&self) -> &'static str {
        match self {
            Series::F1 => "race",
            Series::F2 | Series::F3 => "feature",
        }
    }

    /// Default schedule file, e.g. `f1_schedule_2025.json`.
    pub fn schedule_file_name(&self) -> String {
        format!("{}_schedule_{}.json", self.id().to_lowercase(), SEASON)
    }

    /// Single-series calendar file, e.g. `f1_calendar_2025.ics`.
    pub fn calendar_file_name(&self) -> String {
        format!("{}_calendar_{}.ics", self.id().to_lowercase(), SEASON)
    }
}

impl fmt::Display for Series {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Series {
    type Err = RaceCalError;

    fn from_str(s: &str) -> RaceCalResult<Self> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(RaceCalError::Validation("series name is empty".into()));
        }

        Series::ALL
            .into_iter()
            .find(|series| series.id().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| {
                RaceCalError::Validation(format!(
                    "unknown series '{}' (expected one of F1, F2, F3)",
                    trimmed
                ))
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_series_is_case_insensitive() {
        assert_eq!("f2".parse::<Series>().unwrap(), Series::F2);
        assert_eq!(" F3 ".parse::<Series>().unwrap(), Series::F3);
    }

    #[test]
    fn test_parse_empty_series_is_validation_error() {
        let err = "  ".parse::<Series>().unwrap_err();
        assert!(matches!(err, RaceCalError::Validation(_)), "got {:?}", err);
    }

    #[test]
    fn test_parse_unknown_series_is_validation_error() {
        let err = "indycar".parse::<Series>().unwrap_err();
        assert!(matches!(err, RaceCalError::Validation(_)), "got {:?}", err);
    }

    #[test]
    fn test_file_names_follow_season_convention() {
        assert_eq!(Series::F1.calendar_file_name(), "f1_calendar_2025.ics");
        assert_eq!(Series::F3.schedule_file_name(), "f3_schedule_2025.json");
    }

    #[test]
    fn test_only_f1_overrides_durations() {
        assert_eq!(Series::F1.duration_override("qualifying"), Some(60));
        assert_eq!(Series::F2.duration_override("qualifying"), None);
        assert_eq!(Series::F1.duration_override("race"), None);
    }

    #[test]
    fn test_valid_sessions_differ_per_series() {
        assert!(Series::F1.is_valid_session("fp2"));
        assert!(!Series::F1.is_valid_session("feature"));
        assert!(Series::F3.is_valid_session("feature"));
        assert!(!Series::F2.is_valid_session("race"));
    }
}
