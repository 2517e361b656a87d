use crate::harness::TestContext;
use crate::harness::github_stub::{stub_branch_pull_requests, stub_mark_ready};
use git2::Repository;
use predicates::prelude::*;

/// Initialise a repository in the work dir with HEAD on `branch` and an scp-style `origin`.
fn init_repo_on(ctx: &TestContext, branch: &str) {
    let repo = Repository::init(ctx.work_dir()).expect("Failed to init git repository");
    repo.set_head(&format!("refs/heads/{}", branch)).expect("Failed to set HEAD");
    repo.remote("origin", "git@github-work:OWNER/REPO.git").expect("Failed to add origin");
}

#[test]
fn ready_without_argument_uses_current_branch() {
    let mut ctx = TestContext::new();
    init_repo_on(&ctx, "topic");
    let lookup = stub_branch_pull_requests(ctx.server(), "topic", &[(31, false, true)]);
    let mutation = stub_mark_ready(ctx.server(), 1);

    ctx.bare_cli()
        .env("GH_TOKEN", "test-token")
        .args(["pr", "ready"])
        .assert()
        .success()
        .stderr(predicate::str::contains("Pull request #31 is marked as \"ready for review\""));

    lookup.assert();
    mutation.assert();
}

#[test]
fn ready_on_branch_with_only_closed_pull_requests_reports_closed() {
    let mut ctx = TestContext::new();
    init_repo_on(&ctx, "topic");
    let lookup =
        stub_branch_pull_requests(ctx.server(), "topic", &[(40, true, true), (38, true, false)]);
    let mutation = stub_mark_ready(ctx.server(), 0);

    ctx.bare_cli()
        .env("GH_TOKEN", "test-token")
        .args(["pr", "ready"])
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "Pull request #40 is closed. Only draft pull requests can be marked as \"ready for review\"",
        ));

    lookup.assert();
    mutation.assert();
}
