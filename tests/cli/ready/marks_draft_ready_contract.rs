use crate::harness::TestContext;
use crate::harness::github_stub::{stub_mark_ready, stub_pull_request};
use predicates::prelude::*;

#[test]
fn ready_marks_open_draft_pull_request() {
    let mut ctx = TestContext::new();
    let lookup = stub_pull_request(ctx.server(), 444, false, true);
    let mutation = stub_mark_ready(ctx.server(), 1);

    ctx.cli()
        .args(["pr", "ready", "444"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Pull request #444 is marked as \"ready for review\""));

    lookup.assert();
    mutation.assert();
}

#[test]
fn ready_accepts_hash_prefixed_number() {
    let mut ctx = TestContext::new();
    let lookup = stub_pull_request(ctx.server(), 12, false, true);
    let mutation = stub_mark_ready(ctx.server(), 1);

    ctx.cli()
        .args(["pr", "ready", "#12"])
        .assert()
        .success()
        .stderr(predicate::str::contains("Pull request #12 is marked as \"ready for review\""));

    lookup.assert();
    mutation.assert();
}
