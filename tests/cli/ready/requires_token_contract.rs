use crate::harness::TestContext;
use crate::harness::github_stub::stub_pull_request_in;
use predicates::prelude::*;

#[test]
fn ready_fails_without_token_before_any_request() {
    let mut ctx = TestContext::new();
    let lookup = stub_pull_request_in(ctx.server(), "OWNER", "REPO", 1, false, true, 0);

    ctx.bare_cli()
        .env("GH_REPO", "OWNER/REPO")
        .args(["pr", "ready", "1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("GH_TOKEN or GITHUB_TOKEN"));

    lookup.assert();
}

#[test]
fn ready_accepts_github_token_variable() {
    let mut ctx = TestContext::new();
    let lookup = stub_pull_request_in(ctx.server(), "OWNER", "REPO", 2, false, false, 1);

    ctx.bare_cli()
        .env("GITHUB_TOKEN", "test-token")
        .env("GH_REPO", "OWNER/REPO")
        .args(["pr", "ready", "2"])
        .assert()
        .success();

    lookup.assert();
}
