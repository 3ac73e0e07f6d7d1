use std::time::Duration;

use anyhow::{bail, Context, Result};
use reqwest::Client;
use serde::Serialize;

use crate::config::GithubConfig;

/// Labels attached to every notification issue.
const ISSUE_LABELS: [&str; 2] = ["license-expiration", "alert"];

const USER_AGENT: &str = "license-expiry-notifier/0.1.0";

/// Request body for the issue-creation endpoint.
#[derive(Debug, Serialize)]
struct NewIssue<'a> {
    title: &'a str,
    body: &'a str,
    labels: [&'a str; 2],
}

/// Build the HTTP client used for the single issue-creation call.
///
/// The timeout bounds the whole run; without it a hung connection would
/// stall the scheduler slot indefinitely.
pub fn build_client() -> Result<Client> {
    Client::builder()
        .timeout(Duration::from_secs(10))
        .build()
        .context("failed to build HTTP client")
}

/// Create one issue in the configured repository and return its web URL.
///
/// Anything other than HTTP 201 is an error carrying the status code and the
/// raw response body. No retries; the external scheduler re-runs the whole
/// binary on its next cycle.
pub async fn create_issue(
    client: &Client,
    config: &GithubConfig,
    title: &str,
    body: &str,
) -> Result<String> {
    let url = format!(
        "https://api.github.com/repos/{}/{}/issues",
        config.owner, config.repo
    );

    let response = client
        .post(&url)
        .header("Authorization", format!("token {}", config.token))
        .header("Accept", "application/vnd.github.v3+json")
        .header("User-Agent", USER_AGENT)
        .json(&NewIssue {
            title,
            body,
            labels: ISSUE_LABELS,
        })
        .send()
        .await
        .context("issue-creation request failed")?;

    let status = response.status();
    if status != reqwest::StatusCode::CREATED {
        let text = response.text().await.unwrap_or_default();
        bail!("failed to create GitHub issue: {} - {}", status.as_u16(), text);
    }

    let data: serde_json::Value = response
        .json()
        .await
        .context("failed to parse issue-creation response")?;

    Ok(data
        .get("html_url")
        .and_then(|u| u.as_str())
        .unwrap_or(url.as_str())
        .to_string())
}
