//! GitHub GraphQL client implementation using reqwest.

use std::time::Duration;

use reqwest::blocking::Client;
use reqwest::header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE, USER_AGENT};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use url::Url;

use crate::domain::{AppError, GitHubApiConfig, PullRequest, PullRequestSelector, RepoRef};
use crate::ports::GitHubPort;

const DEFAULT_STATUS_MESSAGE: &str = "GitHub API request failed";

const PULL_REQUEST_FIELDS: &str = "id number closed isDraft url headRefName";

const QUERY_PR_FOR_NUMBER: &str = r#"
    query PullRequestForNumber($owner: String!, $repo: String!, $number: Int!) {
      repository(owner: $owner, name: $repo) {
        pullRequest(number: $number) {
          __FIELDS__
        }
      }
    }
    "#;

const QUERY_PR_FOR_BRANCH: &str = r#"
    query PullRequestForBranch($owner: String!, $repo: String!, $headRefName: String!) {
      repository(owner: $owner, name: $repo) {
        pullRequests(headRefName: $headRefName, states: [OPEN, CLOSED, MERGED], first: 30, orderBy: { field: CREATED_AT, direction: DESC }) {
          nodes {
            __FIELDS__
          }
        }
      }
    }
    "#;

const MUTATION_MARK_READY: &str = r#"
    mutation PullRequestReadyForReview($pullRequestId: ID!) {
      markPullRequestReadyForReview(input: { pullRequestId: $pullRequestId }) {
        pullRequest {
          id
        }
      }
    }
    "#;

/// HTTP transport for the GitHub GraphQL API.
///
/// Performs a single request per call. No retries.
#[derive(Clone)]
pub struct GraphQlGitHubClient {
    token: String,
    api_url: Url,
    client: Client,
}

impl std::fmt::Debug for GraphQlGitHubClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GraphQlGitHubClient")
            .field("api_url", &self.api_url)
            .field("token", &"[REDACTED]")
            .finish()
    }
}

impl GraphQlGitHubClient {
    /// Create a new client with the given token and configuration.
    pub fn new(token: String, config: &GitHubApiConfig) -> Result<Self, AppError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| AppError::api_error(format!("Failed to create HTTP client: {}", e), None))?;

        Ok(Self { token, api_url: config.api_url.clone(), client })
    }

    fn send_request<T: DeserializeOwned>(
        &self,
        query: &str,
        variables: Value,
    ) -> Result<Option<T>, AppError> {
        let request = GraphQlRequest { query, variables };

        let response = self
            .client
            .post(self.api_url.clone())
            .header(AUTHORIZATION, format!("bearer {}", self.token))
            .header(CONTENT_TYPE, "application/json")
            .header(ACCEPT, "application/vnd.github+json")
            .header(USER_AGENT, concat!("prready/", env!("CARGO_PKG_VERSION")))
            .json(&request)
            .send()
            .map_err(|e| AppError::api_error(format!("HTTP request failed: {}", e), None))?;

        let status = response.status();
        let body_text = response.text().map_err(|e| {
            AppError::api_error(
                format!("Failed to read response body: {}", e),
                Some(status.as_u16()),
            )
        })?;
        tracing::debug!(status = status.as_u16(), bytes = body_text.len(), "GraphQL response");

        if !status.is_success() {
            let message = extract_error_message(&body_text).unwrap_or_else(|| {
                if !body_text.trim().is_empty() {
                    body_text.clone()
                } else if status.as_u16() == 401 {
                    "Bad credentials".to_string()
                } else if status.is_server_error() {
                    "Server error".to_string()
                } else {
                    DEFAULT_STATUS_MESSAGE.to_string()
                }
            });
            return Err(AppError::api_error(message, Some(status.as_u16())));
        }

        let parsed: GraphQlResponse<T> = serde_json::from_str(&body_text).map_err(|e| {
            AppError::api_error(format!("Failed to parse response: {}", e), Some(status.as_u16()))
        })?;

        if let Some(error) = parsed.errors.unwrap_or_default().into_iter().next() {
            return Err(AppError::api_error(error.message, Some(status.as_u16())));
        }

        Ok(parsed.data)
    }

    fn pull_request_for_number(&self, repo: &RepoRef, number: u64) -> Result<PullRequest, AppError> {
        let data: RepositoryData<NumberLookup> = self
            .send_request(
                &QUERY_PR_FOR_NUMBER.replace("__FIELDS__", PULL_REQUEST_FIELDS),
                json!({ "owner": repo.owner(), "repo": repo.name(), "number": number }),
            )?
            .ok_or_else(|| missing_data("pull request lookup"))?;

        data.repository
            .and_then(|r| r.pull_request)
            .map(PullRequest::from)
            .ok_or_else(|| AppError::PullRequestNotFound {
                selector: format!("#{}", number),
                repo: repo.to_string(),
            })
    }

    fn pull_request_for_branch(
        &self,
        repo: &RepoRef,
        branch: &str,
    ) -> Result<PullRequest, AppError> {
        let data: RepositoryData<BranchLookup> = self
            .send_request(
                &QUERY_PR_FOR_BRANCH.replace("__FIELDS__", PULL_REQUEST_FIELDS),
                json!({ "owner": repo.owner(), "repo": repo.name(), "headRefName": branch }),
            )?
            .ok_or_else(|| missing_data("pull request lookup"))?;

        let nodes = data
            .repository
            .and_then(|r| r.pull_requests)
            .map(|connection| connection.nodes)
            .unwrap_or_default();

        select_branch_pull_request(nodes).map(PullRequest::from).ok_or_else(|| {
            AppError::PullRequestNotFound {
                selector: format!("branch '{}'", branch),
                repo: repo.to_string(),
            }
        })
    }
}

/// Prefer the newest open pull request, falling back to the newest of any state.
fn select_branch_pull_request(nodes: Vec<PullRequestNode>) -> Option<PullRequestNode> {
    let open = nodes.iter().position(|n| !n.closed);
    match open {
        Some(index) => nodes.into_iter().nth(index),
        None => nodes.into_iter().next(),
    }
}

fn missing_data(what: &str) -> AppError {
    AppError::ParseError { what: what.to_string(), details: "response has no data".to_string() }
}

#[derive(Debug, Serialize)]
struct GraphQlRequest<'a> {
    query: &'a str,
    variables: Value,
}

#[derive(Debug, Deserialize)]
struct GraphQlResponse<T> {
    data: Option<T>,
    errors: Option<Vec<GraphQlError>>,
}

#[derive(Debug, Deserialize)]
struct GraphQlError {
    message: String,
}

#[derive(Debug, Deserialize)]
struct RepositoryData<T> {
    repository: Option<T>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct NumberLookup {
    pull_request: Option<PullRequestNode>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct BranchLookup {
    pull_requests: Option<PullRequestConnection>,
}

#[derive(Debug, Deserialize)]
struct PullRequestConnection {
    #[serde(default)]
    nodes: Vec<PullRequestNode>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PullRequestNode {
    #[serde(default)]
    id: String,
    number: u64,
    closed: bool,
    is_draft: bool,
    #[serde(default)]
    url: Option<String>,
    #[serde(default)]
    head_ref_name: Option<String>,
}

impl From<PullRequestNode> for PullRequest {
    fn from(node: PullRequestNode) -> Self {
        PullRequest {
            id: node.id,
            number: node.number,
            closed: node.closed,
            is_draft: node.is_draft,
            url: node.url,
            head_ref_name: node.head_ref_name,
        }
    }
}

fn extract_error_message(body: &str) -> Option<String> {
    if body.trim().is_empty() {
        return None;
    }

    let parsed = serde_json::from_str::<Value>(body).ok()?;

    if let Some(msg) = parsed
        .get("errors")
        .and_then(|errors| errors.get(0))
        .and_then(|error| error.get("message"))
        .and_then(|message| message.as_str())
    {
        return Some(msg.to_string());
    }

    parsed.get("message").and_then(|message| message.as_str()).map(ToOwned::to_owned)
}

impl GitHubPort for GraphQlGitHubClient {
    fn find_pull_request(
        &self,
        repo: &RepoRef,
        selector: &PullRequestSelector,
    ) -> Result<PullRequest, AppError> {
        tracing::debug!(%repo, %selector, "looking up pull request");
        match selector {
            PullRequestSelector::Number(number) => self.pull_request_for_number(repo, *number),
            PullRequestSelector::Url { repo: url_repo, number } => {
                self.pull_request_for_number(url_repo, *number)
            }
            PullRequestSelector::Branch(branch) => self.pull_request_for_branch(repo, branch),
        }
    }

    fn mark_ready_for_review(&self, pull_request_id: &str) -> Result<(), AppError> {
        tracing::debug!(pull_request_id, "marking pull request ready for review");
        // The mutation payload carries nothing beyond the acknowledged node ID.
        let _ack: Option<Value> =
            self.send_request(MUTATION_MARK_READY, json!({ "pullRequestId": pull_request_id }))?;
        Ok(())
    }
}
