pub mod config;
pub mod error;
pub mod pull_request;
pub mod repo_ref;
pub mod selector;

pub use config::{AppConfig, GitHubApiConfig, RepositoryConfig};
pub use error::AppError;
pub use pull_request::{PullRequest, ReadinessDecision};
pub use repo_ref::RepoRef;
pub use selector::PullRequestSelector;
