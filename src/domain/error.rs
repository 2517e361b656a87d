use std::io;

use thiserror::Error;

/// Library-wide error type for prready operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Required environment variable is not set.
    #[error("Environment variable {0} is not set")]
    EnvironmentVariableMissing(String),

    /// Configuration value failed validation.
    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    TomlParseError(#[from] toml::de::Error),

    /// Pull request argument could not be interpreted.
    #[error("Invalid pull request argument '{0}': expected a number, URL, or branch name")]
    InvalidSelector(String),

    /// Repository reference is malformed.
    #[error("Invalid repository '{0}': expected OWNER/REPO")]
    InvalidRepository(String),

    /// No base repository could be determined.
    #[error("Could not determine the base repository. Pass --repo OWNER/REPO or set GH_REPO.")]
    RepositoryNotResolved,

    /// Git execution failed.
    #[error("Git error running '{command}': {details}")]
    GitError { command: String, details: String },

    /// GitHub API transport or protocol failure.
    #[error("GitHub API error: {message}")]
    GitHubApi { message: String, status: Option<u16> },

    /// Parse error.
    #[error("Failed to parse {what}: {details}")]
    ParseError { what: String, details: String },

    /// No pull request matched the selector.
    #[error("No pull requests found for {selector} in {repo}")]
    PullRequestNotFound { selector: String, repo: String },

    /// Closed pull requests cannot leave the draft state.
    #[error(
        "Pull request #{number} is closed. Only draft pull requests can be marked as \"ready for review\""
    )]
    PullRequestClosed { number: u64 },
}

impl AppError {
    pub fn config_error<S: Into<String>>(message: S) -> Self {
        AppError::InvalidConfig(message.into())
    }

    pub fn api_error<S: Into<String>>(message: S, status: Option<u16>) -> Self {
        AppError::GitHubApi { message: message.into(), status }
    }
}
