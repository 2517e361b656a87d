use crate::domain::AppConfig;
use crate::ports::{GitHubPort, GitPort};

/// Application context holding dependencies for command execution.
pub struct AppContext<G: GitHubPort, R: GitPort> {
    config: AppConfig,
    github: G,
    git: R,
}

impl<G: GitHubPort, R: GitPort> AppContext<G, R> {
    /// Create a new application context.
    pub fn new(config: AppConfig, github: G, git: R) -> Self {
        Self { config, github, git }
    }

    /// Get the loaded configuration.
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Get a reference to the GitHub API port.
    pub fn github(&self) -> &G {
        &self.github
    }

    /// Get a reference to the local git repository port.
    pub fn git(&self) -> &R {
        &self.git
    }
}
