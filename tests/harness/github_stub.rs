//! GraphQL response stubs for the GitHub endpoint.

use mockito::{Matcher, Mock, ServerGuard};
use serde_json::json;

/// Stub the number lookup for `OWNER/REPO#number`, expected exactly once.
pub(crate) fn stub_pull_request(
    server: &mut ServerGuard,
    number: u64,
    closed: bool,
    is_draft: bool,
) -> Mock {
    stub_pull_request_in(server, "OWNER", "REPO", number, closed, is_draft, 1)
}

pub(crate) fn stub_pull_request_in(
    server: &mut ServerGuard,
    owner: &str,
    repo: &str,
    number: u64,
    closed: bool,
    is_draft: bool,
    hits: usize,
) -> Mock {
    let body = json!({
        "data": { "repository": {
            "pullRequest": {
                "id": format!("PR_node_{}", number),
                "number": number,
                "closed": closed,
                "isDraft": is_draft
            }
        } }
    });

    server
        .mock("POST", "/graphql")
        .match_header("authorization", "bearer test-token")
        .match_body(Matcher::AllOf(vec![
            Matcher::Regex("PullRequestForNumber".to_string()),
            Matcher::PartialJson(json!({
                "variables": { "owner": owner, "repo": repo, "number": number }
            })),
        ]))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(body.to_string())
        .expect(hits)
        .create()
}

/// Stub the head-branch lookup for `OWNER/REPO`, answering with `(number, closed, is_draft)`
/// nodes newest first.
pub(crate) fn stub_branch_pull_requests(
    server: &mut ServerGuard,
    branch: &str,
    nodes: &[(u64, bool, bool)],
) -> Mock {
    let nodes: Vec<_> = nodes
        .iter()
        .map(|&(number, closed, is_draft)| {
            json!({
                "id": format!("PR_node_{}", number),
                "number": number,
                "closed": closed,
                "isDraft": is_draft,
                "headRefName": branch
            })
        })
        .collect();
    let body = json!({ "data": { "repository": { "pullRequests": { "nodes": nodes } } } });

    server
        .mock("POST", "/graphql")
        .match_header("authorization", "bearer test-token")
        .match_body(Matcher::AllOf(vec![
            Matcher::Regex("PullRequestForBranch".to_string()),
            Matcher::PartialJson(json!({
                "variables": { "owner": "OWNER", "repo": "REPO", "headRefName": branch }
            })),
        ]))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(body.to_string())
        .expect(1)
        .create()
}

/// Stub the ready-for-review mutation, expected `hits` times.
pub(crate) fn stub_mark_ready(server: &mut ServerGuard, hits: usize) -> Mock {
    server
        .mock("POST", "/graphql")
        .match_body(Matcher::Regex("markPullRequestReadyForReview".to_string()))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"data":{"markPullRequestReadyForReview":{"pullRequest":{"id":"THE-ID"}}}}"#)
        .expect(hits)
        .create()
}
