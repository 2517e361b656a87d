//! Pull request selector parsing.
//!
//! A selector is the positional argument naming a pull request: a number (`444` or `#444`),
//! a pull request URL, or a head branch name.

use std::fmt;
use std::str::FromStr;

use url::Url;

use super::{AppError, RepoRef};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PullRequestSelector {
    Number(u64),
    /// A pull request URL; its repository overrides the base repository.
    Url { repo: RepoRef, number: u64 },
    Branch(String),
}

impl PullRequestSelector {
    /// Repository carried by the selector itself, if any.
    pub fn repo_override(&self) -> Option<&RepoRef> {
        match self {
            PullRequestSelector::Url { repo, .. } => Some(repo),
            _ => None,
        }
    }

    /// Selector for the pull request whose head is the given branch.
    pub fn for_branch(branch: &str) -> Result<Self, AppError> {
        // `owner:branch` refers to a fork head; the query matches on the branch only.
        let name = branch.rsplit_once(':').map(|(_, b)| b).unwrap_or(branch).trim();
        if name.is_empty() || name.chars().any(char::is_whitespace) {
            return Err(AppError::InvalidSelector(branch.to_string()));
        }
        Ok(PullRequestSelector::Branch(name.to_string()))
    }
}

impl FromStr for PullRequestSelector {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(AppError::InvalidSelector(s.to_string()));
        }

        let digits = trimmed.strip_prefix('#').unwrap_or(trimmed);
        if !digits.is_empty() && digits.chars().all(|c| c.is_ascii_digit()) {
            return digits
                .parse::<u64>()
                .ok()
                .filter(|n| *n > 0)
                .map(PullRequestSelector::Number)
                .ok_or_else(|| AppError::InvalidSelector(s.to_string()));
        }

        if trimmed.starts_with("http://") || trimmed.starts_with("https://") {
            return parse_pull_request_url(trimmed);
        }

        PullRequestSelector::for_branch(trimmed)
    }
}

impl fmt::Display for PullRequestSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PullRequestSelector::Number(n) => write!(f, "#{}", n),
            PullRequestSelector::Url { number, .. } => write!(f, "#{}", number),
            PullRequestSelector::Branch(name) => write!(f, "branch '{}'", name),
        }
    }
}

/// Parse `https://HOST/OWNER/REPO/pull/NUMBER[/...]`.
fn parse_pull_request_url(raw: &str) -> Result<PullRequestSelector, AppError> {
    let invalid = || AppError::InvalidSelector(raw.to_string());
    let url = Url::parse(raw).map_err(|_| invalid())?;
    let segments: Vec<&str> =
        url.path_segments().ok_or_else(invalid)?.filter(|s| !s.is_empty()).collect();

    match segments.as_slice() {
        [owner, name, "pull", number, ..] => {
            let number = number.parse::<u64>().ok().filter(|n| *n > 0).ok_or_else(invalid)?;
            let repo = RepoRef::new(owner, name)?;
            Ok(PullRequestSelector::Url { repo, number })
        }
        _ => Err(invalid()),
    }
}
