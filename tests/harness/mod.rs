#![allow(dead_code, unused_imports)]

pub(crate) mod github_stub;

pub(crate) use test_context::TestContext;
