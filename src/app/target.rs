//! Resolution of the pull request selector and the base repository.

use crate::domain::{AppConfig, AppError, PullRequestSelector, RepoRef};
use crate::ports::GitPort;

const DEFAULT_REMOTE: &str = "origin";

/// Parse the positional argument, or fall back to the current branch when it is absent.
pub fn resolve_selector(
    argument: Option<&str>,
    git: &impl GitPort,
) -> Result<PullRequestSelector, AppError> {
    match argument {
        Some(raw) => raw.parse(),
        None => {
            let branch = git.get_current_branch()?;
            tracing::debug!(%branch, "no pull request argument; using current branch");
            PullRequestSelector::for_branch(&branch)
        }
    }
}

/// Determine the base repository.
///
/// Precedence: URL selector, `--repo`, `GH_REPO`, `repository.default`, then the `origin` remote.
pub fn resolve_repo(
    selector: &PullRequestSelector,
    flag: Option<&str>,
    env_repo: Option<&str>,
    config: &AppConfig,
    git: &impl GitPort,
) -> Result<RepoRef, AppError> {
    if let Some(repo) = selector.repo_override() {
        return Ok(repo.clone());
    }
    if let Some(raw) = flag {
        return raw.parse();
    }
    if let Some(raw) = env_repo.filter(|r| !r.trim().is_empty()) {
        return raw.parse();
    }
    if let Some(repo) = config.repository.default_repo() {
        return Ok(repo);
    }

    match git.remote_url(DEFAULT_REMOTE) {
        Ok(Some(url)) => {
            tracing::debug!(%url, "base repository taken from git remote");
            RepoRef::from_remote_url(&url)
        }
        Ok(None) => Err(AppError::RepositoryNotResolved),
        Err(e) => {
            tracing::debug!(error = %e, "git remote lookup failed");
            Err(AppError::RepositoryNotResolved)
        }
    }
}
