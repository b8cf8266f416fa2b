//! Remote repository source
//!
//! One read per gallery build: up to 100 repositories for a user, ordered
//! most-recently-updated by the remote end. The trait exists so gallery
//! logic can be tested without the network.

use super::repo::Repository;
use async_trait::async_trait;

/// Default API base for the hosted source
const DEFAULT_API_BASE: &str = "https://api.github.com";

/// Page size requested from the remote source
const PER_PAGE: u32 = 100;

/// Failure to obtain or decode the repository list
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("repository request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("repository source returned status {0}")]
    Status(reqwest::StatusCode),
}

/// Trait for fetching a user's repositories, enabling mocking in tests
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RepoSource: Send + Sync {
    /// Fetch up to one page of repositories for `username`, in the
    /// source's most-recently-updated order.
    async fn list_repos(&self, username: &str) -> Result<Vec<Repository>, FetchError>;
}

/// GitHub-backed repository source
pub struct GithubRepoSource {
    client: reqwest::Client,
    api_base: String,
}

impl GithubRepoSource {
    pub fn new() -> Self {
        Self::with_api_base(DEFAULT_API_BASE)
    }

    /// Point the source at a different base URL (local stub in tests)
    pub fn with_api_base(api_base: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_base: api_base.into(),
        }
    }

    pub(crate) fn repos_url(&self, username: &str) -> String {
        format!(
            "{}/users/{}/repos?per_page={}&sort=updated",
            self.api_base, username, PER_PAGE
        )
    }
}

impl Default for GithubRepoSource {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl RepoSource for GithubRepoSource {
    async fn list_repos(&self, username: &str) -> Result<Vec<Repository>, FetchError> {
        let url = self.repos_url(username);
        tracing::debug!(%url, "fetching repository list");

        let response = self
            .client
            .get(&url)
            .header(reqwest::header::USER_AGENT, "folio-engine")
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(FetchError::Status(response.status()));
        }

        let repos = response.json::<Vec<Repository>>().await?;
        Ok(repos)
    }
}
