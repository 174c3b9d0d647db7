use anyhow::{Context, Result};
use racecal_core::Series;
use serde::Deserialize;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Environment variable holding the GitHub token used for publishing
pub const GITHUB_TOKEN_VAR: &str = "GITHUB_TOKEN";

#[derive(Debug, Deserialize)]
pub struct Config {
    /// Directory containing the `<series>_schedule_2025.json` files
    #[serde(default = "default_data_dir")]
    pub data_dir: String,

    /// Directory generated calendars are written to
    #[serde(default = "default_output_dir")]
    pub output_dir: String,

    /// Gist IDs per series, e.g. `F1 = "abc123"`
    #[serde(default)]
    pub gists: HashMap<String, String>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            data_dir: default_data_dir(),
            output_dir: default_output_dir(),
            gists: HashMap::new(),
        }
    }
}

fn default_data_dir() -> String {
    "_data".to_string()
}

fn default_output_dir() -> String {
    ".".to_string()
}

impl Config {
    /// Schedule file for a series inside the data directory
    pub fn schedule_path(&self, series: Series) -> PathBuf {
        expand_path(&self.data_dir).join(series.schedule_file_name())
    }

    /// Where a calendar file with this name is written
    pub fn output_path(&self, file_name: &str) -> PathBuf {
        expand_path(&self.output_dir).join(file_name)
    }

    /// Gist ID for a series: `<SERIES>_GIST_ID` env var first, then config
    pub fn gist_id(&self, series: Series) -> Option<String> {
        std::env::var(format!("{}_GIST_ID", series.id()))
            .ok()
            .filter(|id| !id.is_empty())
            .or_else(|| self.configured_gist(series))
    }

    /// `[gists]` entry for a series; keys match regardless of case
    fn configured_gist(&self, series: Series) -> Option<String> {
        self.gists
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(series.id()))
            .map(|(_, id)| id.clone())
    }
}

/// Get the config directory path (~/.config/racecal)
pub fn config_dir() -> Result<PathBuf> {
    let config_dir = dirs::config_dir()
        .context("Could not determine config directory")?
        .join("racecal");
    Ok(config_dir)
}

/// Get the config file path (~/.config/racecal/config.toml)
pub fn config_path() -> Result<PathBuf> {
    Ok(config_dir()?.join("config.toml"))
}

/// Load config from ~/.config/racecal/config.toml, or defaults if it doesn't exist
pub fn load_config() -> Result<Config> {
    let path = config_path()?;

    if !path.exists() {
        log::debug!("No config file at {}, using defaults", path.display());
        return Ok(Config::default());
    }

    load_config_from(&path)
}

pub fn load_config_from(path: &Path) -> Result<Config> {
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file at {}", path.display()))?;

    let config: Config = toml::from_str(&contents)
        .with_context(|| format!("Failed to parse config file at {}", path.display()))?;

    Ok(config)
}

/// Read the GitHub token from the environment
pub fn github_token() -> Option<String> {
    std::env::var(GITHUB_TOKEN_VAR).ok().filter(|t| !t.is_empty())
}

/// Expand ~ in paths to the home directory
pub fn expand_path(path: &str) -> PathBuf {
    if let Some(rest) = path.strip_prefix("~/") {
        if let Some(home) = dirs::home_dir() {
            return home.join(rest);
        }
    }
    PathBuf::from(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_config_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(
            &path,
            "data_dir = \"/srv/racing\"\n\n[gists]\nF1 = \"abc123\"\n",
        )
        .unwrap();

        let config = load_config_from(&path).unwrap();
        assert_eq!(
            config.schedule_path(Series::F1),
            PathBuf::from("/srv/racing/f1_schedule_2025.json")
        );
        assert_eq!(config.output_dir, ".");
        assert_eq!(config.gists.get("F1").map(String::as_str), Some("abc123"));
    }

    #[test]
    fn test_gists_table_keys_ignore_case() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[gists]\nf1 = \"abc123\"\nF2 = \"def456\"\n").unwrap();

        let config = load_config_from(&path).unwrap();
        assert_eq!(config.configured_gist(Series::F1).as_deref(), Some("abc123"));
        assert_eq!(config.configured_gist(Series::F2).as_deref(), Some("def456"));
        assert_eq!(config.configured_gist(Series::F3), None);
    }

    #[test]
    fn test_invalid_config_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "data_dir = [").unwrap();

        assert!(load_config_from(&path).is_err());
    }

    #[test]
    fn test_default_paths() {
        let config = Config::default();
        assert_eq!(
            config.schedule_path(Series::F3),
            PathBuf::from("_data/f3_schedule_2025.json")
        );
        assert_eq!(
            config.output_path("f3_calendar_2025.ics"),
            PathBuf::from("./f3_calendar_2025.ics")
        );
    }

    #[test]
    fn test_expand_path_leaves_plain_paths() {
        assert_eq!(expand_path("/tmp/data"), PathBuf::from("/tmp/data"));
        assert_eq!(expand_path("relative"), PathBuf::from("relative"));
    }
}
