use std::path::PathBuf;

use git2::{ErrorCode, Repository};

use crate::domain::AppError;
use crate::ports::GitPort;

/// Read-only access to the local git repository via libgit2.
#[derive(Debug, Clone)]
pub struct GitRepositoryAdapter {
    root: PathBuf,
}

impl GitRepositoryAdapter {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    /// Adapter rooted at the current working directory.
    pub fn current() -> Result<Self, AppError> {
        Ok(Self::new(std::env::current_dir()?))
    }

    fn repo(&self) -> Result<Repository, AppError> {
        Repository::discover(&self.root).map_err(|e| AppError::GitError {
            command: "git2::Repository::discover".to_string(),
            details: e.message().to_string(),
        })
    }
}

impl GitPort for GitRepositoryAdapter {
    fn get_current_branch(&self) -> Result<String, AppError> {
        let repo = self.repo()?;

        match repo.head() {
            Ok(head) => {
                if !head.is_branch() {
                    return Err(AppError::GitError {
                        command: "get_current_branch".to_string(),
                        details: "HEAD is detached".to_string(),
                    });
                }
                let shorthand = head.shorthand().ok_or_else(|| AppError::GitError {
                    command: "git2::Reference::shorthand".to_string(),
                    details: "HEAD has no shorthand".to_string(),
                })?;
                Ok(shorthand.to_string())
            }
            Err(e) if e.code() == ErrorCode::UnbornBranch => {
                let head_ref = repo.find_reference("HEAD").map_err(|e| AppError::GitError {
                    command: "git2::Repository::find_reference(HEAD)".to_string(),
                    details: e.to_string(),
                })?;

                if let Some(target) = head_ref.symbolic_target() {
                    Ok(target.strip_prefix("refs/heads/").unwrap_or(target).to_string())
                } else {
                    Err(AppError::GitError {
                        command: "get_current_branch".to_string(),
                        details: "HEAD is detached and unborn".to_string(),
                    })
                }
            }
            Err(e) => Err(AppError::GitError {
                command: "git2::Repository::head".to_string(),
                details: e.to_string(),
            }),
        }
    }

    fn remote_url(&self, remote: &str) -> Result<Option<String>, AppError> {
        let repo = self.repo()?;

        match repo.find_remote(remote) {
            Ok(found) => Ok(found.url().map(ToOwned::to_owned)),
            Err(e) if e.code() == ErrorCode::NotFound => Ok(None),
            Err(e) => Err(AppError::GitError {
                command: format!("git2::Repository::find_remote({})", remote),
                details: e.to_string(),
            }),
        }
    }
}
