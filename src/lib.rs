//! prready: mark draft GitHub pull requests as ready for review.

pub mod adapters;
pub mod app;
pub mod domain;
pub mod ports;


pub use app::api::{PrReadyOptions, ReadyOptions, ReadyOutcome, pr_ready, pr_ready_with};
pub use app::{AppContext, commands::pr_ready::execute};
pub use domain::{
    AppConfig, AppError, PullRequest, PullRequestSelector, ReadinessDecision, RepoRef,
};
pub use ports::{GitHubPort, GitPort};
