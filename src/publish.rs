//! Publishing generated calendars to a GitHub Gist.
//!
//! Subscribers point their calendar app at the gist's raw URL, so updating
//! the gist file updates every subscription.

use anyhow::{Context, Result};
use serde_json::{Value, json};

const GIST_API: &str = "https://api.github.com/gists";

/// What GitHub answered to a gist update
#[derive(Debug, PartialEq)]
pub enum PublishOutcome {
    Published,
    Rejected { status: u16, body: String },
}

pub struct GistPublisher {
    client: reqwest::Client,
    base_url: String,
    token: String,
}

impl GistPublisher {
    pub fn new(token: impl Into<String>) -> Self {
        Self::with_base_url(token, GIST_API)
    }

    /// Publisher talking to a gists endpoint other than api.github.com
    pub fn with_base_url(token: impl Into<String>, base_url: impl Into<String>) -> Self {
        GistPublisher {
            client: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            token: token.into(),
        }
    }

    /// Replace `file_name` in the gist with `content`.
    ///
    /// Transport failures are errors; any HTTP answer other than 200 is a
    /// rejection carrying the status and response body.
    pub async fn publish(&self, gist_id: &str, file_name: &str, content: &str) -> Result<PublishOutcome> {
        let url = format!("{}/{}", self.base_url, gist_id);

        let response = self
            .client
            .patch(&url)
            .header("Authorization", format!("token {}", self.token))
            .header("Accept", "application/vnd.github.v3+json")
            .header("User-Agent", "racecal")
            .json(&gist_payload(file_name, content))
            .send()
            .await
            .with_context(|| format!("Failed to reach {}", url))?;

        let status = response.status();
        if status.as_u16() == 200 {
            return Ok(PublishOutcome::Published);
        }

        let body = match response.text().await {
            Ok(body) => body,
            Err(e) => format!("<failed to read response body: {}>", e),
        };
        Ok(PublishOutcome::Rejected {
            status: status.as_u16(),
            body,
        })
    }
}

/// Request body updating a single gist file
pub fn gist_payload(file_name: &str, content: &str) -> Value {
    json!({
        "files": {
            file_name: { "content": content }
        }
    })
}
