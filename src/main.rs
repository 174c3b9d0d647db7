mod commands;
mod config;
mod publish;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use racecal_core::Series;

#[derive(Parser)]
#[command(name = "racecal")]
#[command(about = "Generate ICS calendars from F1, F2 and F3 race schedules")]
struct Cli {
    /// Show debug output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate the calendar of a single series
    Generate {
        /// Series to generate (F1, F2 or F3)
        series: String,

        /// Schedule JSON file (defaults to <data_dir>/<series>_schedule_2025.json)
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Output file (defaults to <output_dir>/<series>_calendar_2025.ics)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Only include these session types (e.g. "qualifying,race,fantasy")
        #[arg(short, long, value_delimiter = ',')]
        sessions: Vec<String>,
    },
    /// Generate one calendar combining several series
    Combine {
        /// Series to include (e.g. "F1,F2")
        #[arg(long, value_delimiter = ',')]
        series: Vec<String>,

        /// Session types to include (e.g. "race,feature,fantasy")
        #[arg(short, long, value_delimiter = ',')]
        sessions: Vec<String>,

        /// Output file (defaults to racing_calendar_<timestamp>.ics)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Calendar display name
        #[arg(long, default_value = "Racing Calendar")]
        name: String,
    },
    /// Generate a series calendar and upload it to its GitHub Gist
    Publish {
        /// Series to publish (F1, F2 or F3)
        series: String,

        /// Schedule JSON file (defaults to <data_dir>/<series>_schedule_2025.json)
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Gist to update (defaults to <SERIES>_GIST_ID or the config file)
        #[arg(long)]
        gist_id: Option<String>,
    },
    /// List the events of an ICS file
    Inspect { file: PathBuf },
    /// List races of all series by date
    Races {
        /// Only these series (e.g. "F2,F3")
        #[arg(long, value_delimiter = ',')]
        series: Vec<String>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let cfg = config::load_config()?;

    match cli.command {
        Commands::Generate {
            series,
            input,
            output,
            sessions,
        } => commands::generate::run(&cfg, series.parse()?, input, output, sessions),
        Commands::Combine {
            series,
            sessions,
            output,
            name,
        } => commands::combine::run(&cfg, parse_series_list(&series)?, sessions, output, name),
        Commands::Publish {
            series,
            input,
            gist_id,
        } => commands::publish::run(&cfg, series.parse()?, input, gist_id).await,
        Commands::Inspect { file } => commands::inspect::run(&file),
        Commands::Races { series } => {
            let series = if series.is_empty() {
                Series::ALL.to_vec()
            } else {
                parse_series_list(&series)?
            };
            commands::races::run(&cfg, &series)
        }
    }
}

fn init_logging(verbose: bool) {
    let mut builder = colog::default_builder();
    if verbose {
        builder.filter_level(log::LevelFilter::Debug);
    }
    builder.init();
}

/// Parse series names, dropping duplicates but keeping the order given
fn parse_series_list(names: &[String]) -> Result<Vec<Series>> {
    let mut series: Vec<Series> = Vec::with_capacity(names.len());
    for name in names {
        let parsed: Series = name.parse()?;
        if !series.contains(&parsed) {
            series.push(parsed);
        }
    }
    Ok(series)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_series_list_keeps_order_and_dedups() {
        let names = vec!["f3".to_string(), "F1".to_string(), "f3".to_string()];
        assert_eq!(parse_series_list(&names).unwrap(), vec![Series::F3, Series::F1]);
    }

    #[test]
    fn test_parse_series_list_rejects_unknown() {
        let names = vec!["F1".to_string(), "nascar".to_string()];
        assert!(parse_series_list(&names).is_err());
    }

    #[test]
    fn test_cli_splits_comma_separated_sessions() {
        let cli = Cli::try_parse_from(["racecal", "generate", "f1", "--sessions", "race,fantasy"]).unwrap();
        match cli.command {
            Commands::Generate { series, sessions, .. } => {
                assert_eq!(series, "f1");
                assert_eq!(sessions, vec!["race", "fantasy"]);
            }
            _ => panic!("Expected generate command"),
        }
    }
}
