//! Configuration handling for the page engine

use crate::form::{HttpTransport, SimulatedTransport, SubmissionTransport};
use crate::gallery::GithubRepoSource;
use anyhow::Result;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

/// Simulated submission latency when none is configured
const DEFAULT_SUBMIT_LATENCY_MS: u64 = 1500;

/// Success notice lifetime when none is configured
const DEFAULT_DISMISS_DELAY_MS: u64 = 5000;

/// User configuration for the page engine
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct PageConfig {
    /// GitHub account whose repositories fill the gallery; falls back to
    /// the grid element's `data-github-username` attribute
    pub github_username: Option<String>,
    /// Form backend endpoint; when unset, submissions run through the
    /// simulated transport
    pub submit_endpoint: Option<String>,
    /// Simulated submission latency in milliseconds
    pub submit_latency_ms: Option<u64>,
    /// Success notice auto-dismiss delay in milliseconds
    pub success_dismiss_ms: Option<u64>,
    /// Repository API base override (tests point this at a local stub)
    pub github_api_base: Option<String>,
}

impl PageConfig {
    /// Get the config file path
    fn config_path() -> Option<PathBuf> {
        ProjectDirs::from("dev", "folio", "folio-engine")
            .map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Load configuration from file
    pub fn load() -> Result<Self> {
        let path = Self::config_path();

        if let Some(path) = path {
            if path.exists() {
                let content = fs::read_to_string(&path)?;
                let config: PageConfig = serde_json::from_str(&content)?;
                return Ok(config);
            }
        }

        Ok(Self::default())
    }

    /// Save configuration to file
    pub fn save(&self) -> Result<()> {
        if let Some(path) = Self::config_path() {
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent)?;
            }
            let content = serde_json::to_string_pretty(self)?;
            fs::write(&path, content)?;
        }
        Ok(())
    }

    pub fn submit_latency(&self) -> Duration {
        Duration::from_millis(self.submit_latency_ms.unwrap_or(DEFAULT_SUBMIT_LATENCY_MS))
    }

    pub fn success_dismiss(&self) -> Duration {
        Duration::from_millis(self.success_dismiss_ms.unwrap_or(DEFAULT_DISMISS_DELAY_MS))
    }

    /// Build the submission transport this configuration selects: the real
    /// HTTP transport when an endpoint is set, the simulated one otherwise.
    pub fn transport(&self) -> Box<dyn SubmissionTransport> {
        match &self.submit_endpoint {
            Some(endpoint) => Box::new(HttpTransport::new(endpoint.clone())),
            None => Box::new(SimulatedTransport::new(self.submit_latency())),
        }
    }

    /// Build the gallery's repository source, honoring any API base override
    pub fn repo_source(&self) -> GithubRepoSource {
        match &self.github_api_base {
            Some(base) => GithubRepoSource::with_api_base(base.clone()),
            None => GithubRepoSource::new(),
        }
    }
}
