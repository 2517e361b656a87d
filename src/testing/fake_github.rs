use std::sync::Mutex;

use crate::domain::{AppError, PullRequest, PullRequestSelector, RepoRef};
use crate::ports::GitHubPort;

/// In-memory GitHub that serves one pull request and records every call.
pub struct FakeGitHub {
    pub pull_request: Mutex<PullRequest>,
    pub lookups: Mutex<Vec<(String, PullRequestSelector)>>,
    pub ready_calls: Mutex<Vec<String>>,
    pub fail_mutation: bool,
}

impl FakeGitHub {
    pub fn new(number: u64, closed: bool, is_draft: bool) -> Self {
        Self {
            pull_request: Mutex::new(PullRequest {
                id: format!("PR_node_{}", number),
                number,
                closed,
                is_draft,
                url: Some(format!("https://github.com/OWNER/REPO/pull/{}", number)),
                head_ref_name: Some("feature".to_string()),
            }),
            lookups: Mutex::new(Vec::new()),
            ready_calls: Mutex::new(Vec::new()),
            fail_mutation: false,
        }
    }

    pub fn ready_call_count(&self) -> usize {
        self.ready_calls.lock().unwrap().len()
    }

    pub fn lookup_count(&self) -> usize {
        self.lookups.lock().unwrap().len()
    }
}

impl GitHubPort for FakeGitHub {
    fn find_pull_request(
        &self,
        repo: &RepoRef,
        selector: &PullRequestSelector,
    ) -> Result<PullRequest, AppError> {
        self.lookups.lock().unwrap().push((repo.to_string(), selector.clone()));
        Ok(self.pull_request.lock().unwrap().clone())
    }

    fn mark_ready_for_review(&self, pull_request_id: &str) -> Result<(), AppError> {
        self.ready_calls.lock().unwrap().push(pull_request_id.to_string());
        if self.fail_mutation {
            return Err(AppError::api_error("Something went wrong", Some(502)));
        }
        self.pull_request.lock().unwrap().is_draft = false;
        Ok(())
    }
}
