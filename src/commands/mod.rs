pub mod combine;
pub mod generate;
pub mod inspect;
pub mod publish;
pub mod races;

use std::path::Path;

use anyhow::{Context, Result};
use racecal_core::CalendarArtifact;
use racecal_core::ics::generate_ics;

/// Serialize a calendar and write it to `path`, creating parent directories.
pub fn write_calendar(path: &Path, artifact: &CalendarArtifact) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory {}", parent.display()))?;
    }

    std::fs::write(path, generate_ics(artifact))
        .with_context(|| format!("Failed to write calendar to {}", path.display()))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[test]
    fn test_write_calendar_creates_parent_dirs() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out").join("f1_calendar_2025.ics");

        write_calendar(&path, &CalendarArtifact::new("Formula 1", Utc::now())).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.contains("X-WR-CALNAME:Formula 1"));
    }
}
