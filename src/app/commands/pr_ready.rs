//! `pr ready` command implementation.
//!
//! Looks up a pull request, applies the readiness rule and, for open drafts only,
//! issues the ready-for-review mutation.

use crate::domain::{AppError, PullRequestSelector, ReadinessDecision, RepoRef};
use crate::ports::GitHubPort;

/// Options for `pr ready`.
#[derive(Debug, Clone)]
pub struct ReadyOptions {
    /// Base repository the selector is resolved against.
    pub repo: RepoRef,
    pub selector: PullRequestSelector,
}

/// Successful result of `pr ready`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReadyOutcome {
    /// The draft flag was removed.
    Marked { number: u64 },
    /// Nothing to do; the pull request was not a draft.
    AlreadyReady { number: u64 },
}

impl ReadyOutcome {
    pub fn number(&self) -> u64 {
        match self {
            ReadyOutcome::Marked { number } | ReadyOutcome::AlreadyReady { number } => *number,
        }
    }

    /// Human-readable status line for this outcome.
    pub fn status_line(&self) -> String {
        match self {
            ReadyOutcome::Marked { number } => {
                format!("Pull request #{} is marked as \"ready for review\"", number)
            }
            ReadyOutcome::AlreadyReady { number } => {
                format!("Pull request #{} is already \"ready for review\"", number)
            }
        }
    }
}

/// Execute `pr ready`.
pub fn execute(github: &impl GitHubPort, options: &ReadyOptions) -> Result<ReadyOutcome, AppError> {
    let pr = github.find_pull_request(&options.repo, &options.selector)?;
    tracing::debug!(
        number = pr.number,
        closed = pr.closed,
        is_draft = pr.is_draft,
        head_ref_name = pr.head_ref_name.as_deref().unwrap_or_default(),
        "fetched pull request"
    );

    match ReadinessDecision::evaluate(&pr) {
        ReadinessDecision::Closed => {
            tracing::debug!(number = pr.number, "refusing to mark closed pull request ready");
            Err(AppError::PullRequestClosed { number: pr.number })
        }
        ReadinessDecision::AlreadyReady => Ok(ReadyOutcome::AlreadyReady { number: pr.number }),
        ReadinessDecision::MarkReady => {
            github.mark_ready_for_review(&pr.id)?;
            tracing::info!(
                number = pr.number,
                url = pr.url.as_deref().unwrap_or_default(),
                "pull request marked ready for review"
            );
            Ok(ReadyOutcome::Marked { number: pr.number })
        }
    }
}
