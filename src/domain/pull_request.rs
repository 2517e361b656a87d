//! Pull request snapshot and the draft-to-ready transition rule.

/// Pull request state as returned by a single lookup.
///
/// Fetched fresh for every invocation and never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PullRequest {
    /// Opaque node ID consumed by the ready-for-review mutation.
    pub id: String,
    pub number: u64,
    pub closed: bool,
    pub is_draft: bool,
    pub url: Option<String>,
    pub head_ref_name: Option<String>,
}

/// Outcome of applying the readiness rule to a snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReadinessDecision {
    /// The pull request is closed; nothing may be changed.
    Closed,
    /// The pull request is open and already out of draft.
    AlreadyReady,
    /// The pull request is an open draft and should be marked ready.
    MarkReady,
}

impl ReadinessDecision {
    /// Decide what to do with a pull request.
    ///
    /// `closed` is checked before `is_draft`: a closed draft reports `Closed`.
    pub fn evaluate(pr: &PullRequest) -> Self {
        if pr.closed {
            ReadinessDecision::Closed
        } else if !pr.is_draft {
            ReadinessDecision::AlreadyReady
        } else {
            ReadinessDecision::MarkReady
        }
    }
}
