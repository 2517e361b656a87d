//! Configuration domain models.

use serde::Deserialize;
use url::Url;

use super::{AppError, RepoRef};

/// Configuration loaded from `config.toml`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AppConfig {
    /// GitHub API configuration.
    #[serde(default)]
    pub github: GitHubApiConfig,
    /// Repository selection defaults.
    #[serde(default)]
    pub repository: RepositoryConfig,
}

impl AppConfig {
    pub fn validate(&self) -> Result<(), AppError> {
        self.github.validate()?;
        self.repository.validate()?;
        Ok(())
    }
}

/// GitHub GraphQL API configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GitHubApiConfig {
    /// GraphQL endpoint URL.
    #[serde(default = "default_api_url")]
    pub api_url: Url,
    /// Request timeout in seconds.
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

impl Default for GitHubApiConfig {
    fn default() -> Self {
        Self { api_url: default_api_url(), timeout_secs: default_timeout() }
    }
}

impl GitHubApiConfig {
    pub fn validate(&self) -> Result<(), AppError> {
        if self.timeout_secs == 0 {
            return Err(AppError::InvalidConfig("timeout_secs must be greater than 0".to_string()));
        }
        if !matches!(self.api_url.scheme(), "http" | "https") {
            return Err(AppError::InvalidConfig(format!(
                "api_url must use http or https: {}",
                self.api_url
            )));
        }
        Ok(())
    }
}

fn default_api_url() -> Url {
    Url::parse("https://api.github.com/graphql").expect("Default API URL must be valid")
}

fn default_timeout() -> u64 {
    30
}

/// Repository selection configuration.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RepositoryConfig {
    /// Base repository in `OWNER/REPO` form used when no other source applies.
    #[serde(default)]
    pub default: Option<String>,
}

impl RepositoryConfig {
    pub fn validate(&self) -> Result<(), AppError> {
        if let Some(default) = &self.default {
            default.parse::<RepoRef>().map_err(|_| {
                AppError::InvalidConfig(format!(
                    "repository.default must be OWNER/REPO, got '{}'",
                    default
                ))
            })?;
        }
        Ok(())
    }

    pub fn default_repo(&self) -> Option<RepoRef> {
        self.default.as_deref().and_then(|d| d.parse().ok())
    }
}
