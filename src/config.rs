use std::env;

use anyhow::{bail, Result};

/// Repository coordinates and credential for the issue-creation call.
///
/// Read from the environment once at startup and passed explicitly to the
/// notifier; nothing downstream touches `std::env`.
#[derive(Debug, Clone)]
pub struct GithubConfig {
    /// Repository owner or organisation.
    pub owner: String,
    /// Repository name (the segment after the last `/` of `GITHUB_REPOSITORY`).
    pub repo: String,
    /// Bearer credential sent as `Authorization: token {token}`.
    pub token: String,
}

impl GithubConfig {
    /// Build the config from `GITHUB_REPOSITORY_OWNER`, `GITHUB_REPOSITORY`
    /// and `GITHUB_TOKEN`. Any missing or empty variable is a configuration
    /// error naming the offending variables.
    pub fn from_env() -> Result<Self> {
        Self::from_vars(
            env::var("GITHUB_REPOSITORY_OWNER").ok(),
            env::var("GITHUB_REPOSITORY").ok(),
            env::var("GITHUB_TOKEN").ok(),
        )
    }

    fn from_vars(
        owner: Option<String>,
        repository: Option<String>,
        token: Option<String>,
    ) -> Result<Self> {
        let mut missing = Vec::new();

        let owner = non_empty(owner).unwrap_or_else(|| {
            missing.push("GITHUB_REPOSITORY_OWNER");
            String::new()
        });
        let repository = non_empty(repository).unwrap_or_else(|| {
            missing.push("GITHUB_REPOSITORY");
            String::new()
        });
        let token = non_empty(token).unwrap_or_else(|| {
            missing.push("GITHUB_TOKEN");
            String::new()
        });

        if !missing.is_empty() {
            bail!("missing required environment variables: {}", missing.join(", "));
        }

        // GITHUB_REPOSITORY is "owner/name"; only the name segment is used.
        let repo = repository
            .rsplit('/')
            .next()
            .unwrap_or(repository.as_str())
            .to_string();

        Ok(GithubConfig { owner, repo, token })
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}
