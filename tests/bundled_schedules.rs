use std::path::PathBuf;

use racecal_core::generator::generate_series;
use racecal_core::ics::{generate_ics, parse_events};
use racecal_core::{Assembler, Series};

fn bundled(series: Series) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("_data")
        .join(series.schedule_file_name())
}

#[test]
fn test_bundled_schedules_generate_valid_calendars() {
    for series in Series::ALL {
        let artifact = generate_series(series, &bundled(series), &Assembler::for_series(series))
            .unwrap_or_else(|e| panic!("{} failed: {}", series, e));
        assert!(!artifact.is_empty(), "{} calendar is empty", series);

        let parsed = parse_events(&generate_ics(&artifact)).unwrap();
        assert_eq!(parsed.len(), artifact.len(), "{} lost events", series);
    }
}

#[test]
fn test_bundled_f1_has_one_deadline_per_race() {
    let artifact =
        generate_series(Series::F1, &bundled(Series::F1), &Assembler::for_series(Series::F1)).unwrap();

    let deadlines = artifact
        .events
        .iter()
        .filter(|e| e.title.contains("Fantasy Deadline"))
        .count();
    assert_eq!(deadlines, 2);
}
