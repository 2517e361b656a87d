pub mod git_repository;
pub mod github_graphql;
