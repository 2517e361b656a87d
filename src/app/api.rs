//! API Facade for the application.
//!
//! This module exposes high-level functions that glue together context creation
//! and command execution.

use crate::adapters::git_repository::GitRepositoryAdapter;
use crate::adapters::github_graphql::GraphQlGitHubClient;
use crate::app::{AppContext, commands, config, target};
use crate::ports::{GitHubPort, GitPort};

pub use crate::app::commands::pr_ready::{ReadyOptions, ReadyOutcome};
pub use crate::domain::AppError;

/// Caller-facing options for `pr ready`, before any resolution.
#[derive(Debug, Clone, Default)]
pub struct PrReadyOptions {
    /// Pull request number, URL, or branch. `None` means the current branch.
    pub selector: Option<String>,
    /// Base repository override in `OWNER/REPO` form.
    pub repo: Option<String>,
}

/// Mark a draft pull request as ready for review.
///
/// Loads configuration and credentials from the environment, resolves the pull request
/// against the base repository, and applies the readiness rule.
pub fn pr_ready(options: PrReadyOptions) -> Result<ReadyOutcome, AppError> {
    let config = config::load_config()?;
    let token = config::read_token()?;
    let github = GraphQlGitHubClient::new(token, &config.github)?;
    let git = GitRepositoryAdapter::current()?;
    let ctx = AppContext::new(config, github, git);

    pr_ready_with(&ctx, &options, config::env_repo().as_deref())
}

/// Run `pr ready` against an existing context.
pub fn pr_ready_with<G: GitHubPort, R: GitPort>(
    ctx: &AppContext<G, R>,
    options: &PrReadyOptions,
    env_repo: Option<&str>,
) -> Result<ReadyOutcome, AppError> {
    let selector = target::resolve_selector(options.selector.as_deref(), ctx.git())?;
    let repo = target::resolve_repo(
        &selector,
        options.repo.as_deref(),
        env_repo,
        ctx.config(),
        ctx.git(),
    )?;
    tracing::debug!(%repo, %selector, "resolved pull request target");

    commands::pr_ready::execute(ctx.github(), &ReadyOptions { repo, selector })
}
