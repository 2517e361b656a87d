use crate::domain::{AppError, PullRequest, PullRequestSelector, RepoRef};

pub trait GitHubPort {
    /// Fetch the current state of the pull request named by `selector` in `repo`.
    fn find_pull_request(
        &self,
        repo: &RepoRef,
        selector: &PullRequestSelector,
    ) -> Result<PullRequest, AppError>;

    /// Take a pull request out of draft, addressed by its node ID.
    fn mark_ready_for_review(&self, pull_request_id: &str) -> Result<(), AppError>;
}
