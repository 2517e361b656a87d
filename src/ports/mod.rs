mod git;
mod github;

pub use git::GitPort;
pub use github::GitHubPort;
