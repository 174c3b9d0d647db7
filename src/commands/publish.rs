use std::path::PathBuf;

use anyhow::{Context, Result};
use racecal_core::ics::generate_ics;
use racecal_core::{Assembler, Series, generator};

use crate::config::{self, Config, GITHUB_TOKEN_VAR};
use crate::publish::{GistPublisher, PublishOutcome};

pub async fn run(
    cfg: &Config,
    series: Series,
    input: Option<PathBuf>,
    gist_id: Option<String>,
) -> Result<()> {
    let (token, gist_id) = credentials(
        series,
        config::github_token(),
        gist_id.or_else(|| cfg.gist_id(series)),
    )?;

    let input = input.unwrap_or_else(|| cfg.schedule_path(series));
    let artifact = generator::generate_series(series, &input, &Assembler::for_series(series))
        .with_context(|| format!("Failed to generate {} calendar", series))?;
    let content = generate_ics(&artifact);

    let publisher = GistPublisher::new(token);
    match publisher
        .publish(&gist_id, &series.calendar_file_name(), &content)
        .await?
    {
        PublishOutcome::Published => {
            println!("{} calendar updated successfully!", series);
            Ok(())
        }
        PublishOutcome::Rejected { status, body } => {
            anyhow::bail!("Error updating Gist: {}\n{}", status, body)
        }
    }
}

/// Token and target gist, or the setup hint for whichever is missing
fn credentials(
    series: Series,
    token: Option<String>,
    gist_id: Option<String>,
) -> Result<(String, String)> {
    let Some(token) = token else {
        anyhow::bail!("Missing {} environment variable", GITHUB_TOKEN_VAR);
    };
    let Some(gist_id) = gist_id else {
        anyhow::bail!(
            "No gist configured for {}.\n\n\
            Set {}_GIST_ID, pass --gist-id, or add it to config.toml:\n\n\
            [gists]\n\
            {} = \"<gist id>\"",
            series,
            series.id(),
            series.id()
        );
    };
    Ok((token, gist_id))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_credentials_require_token() {
        let err = credentials(Series::F1, None, Some("abc".to_string())).unwrap_err();
        assert!(err.to_string().contains(GITHUB_TOKEN_VAR));
    }

    #[test]
    fn test_credentials_require_gist_id() {
        let err = credentials(Series::F2, Some("secret".to_string()), None).unwrap_err();
        let message = err.to_string();
        assert!(message.contains("No gist configured for"));
        assert!(message.contains("F2_GIST_ID"));
    }

    #[test]
    fn test_credentials_pass_through() {
        let (token, gist_id) =
            credentials(Series::F3, Some("secret".to_string()), Some("abc".to_string())).unwrap();
        assert_eq!(token, "secret");
        assert_eq!(gist_id, "abc");
    }
}
