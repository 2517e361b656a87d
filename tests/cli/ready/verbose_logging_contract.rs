use crate::harness::TestContext;
use crate::harness::github_stub::stub_pull_request;
use predicates::prelude::*;

#[test]
fn default_run_emits_no_diagnostics() {
    let mut ctx = TestContext::new();
    let _lookup = stub_pull_request(ctx.server(), 445, false, false);

    ctx.cli()
        .args(["pr", "ready", "445"])
        .assert()
        .success()
        .stderr(predicate::str::contains("resolved pull request target").not())
        .stderr(predicate::str::contains("Pull request #445 is already \"ready for review\""));
}

#[test]
fn verbose_flag_emits_debug_diagnostics() {
    let mut ctx = TestContext::new();
    let lookup = stub_pull_request(ctx.server(), 445, false, false);

    ctx.cli()
        .args(["-v", "pr", "ready", "445"])
        .assert()
        .success()
        .stderr(predicate::str::contains("resolved pull request target"))
        .stderr(predicate::str::contains("fetched pull request"))
        .stderr(predicate::str::contains("Pull request #445 is already \"ready for review\""));

    lookup.assert();
}

#[test]
fn rust_log_overrides_default_level() {
    let mut ctx = TestContext::new();
    let lookup = stub_pull_request(ctx.server(), 445, false, false);

    ctx.cli()
        .env("RUST_LOG", "prready=debug")
        .args(["pr", "ready", "445"])
        .assert()
        .success()
        .stderr(predicate::str::contains("resolved pull request target"));

    lookup.assert();
}
