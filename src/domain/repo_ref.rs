use std::fmt;
use std::str::FromStr;

use url::Url;

use super::AppError;

/// A GitHub repository identified by owner and name.
///
/// Guarantees:
/// - Owner and name are non-empty
/// - Neither contains `/` or whitespace
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RepoRef {
    owner: String,
    name: String,
}

impl RepoRef {
    pub fn new(owner: &str, name: &str) -> Result<Self, AppError> {
        let name = name.strip_suffix(".git").unwrap_or(name);
        if !is_valid_segment(owner) || !is_valid_segment(name) {
            return Err(AppError::InvalidRepository(format!("{}/{}", owner, name)));
        }
        Ok(Self { owner: owner.to_string(), name: name.to_string() })
    }

    pub fn owner(&self) -> &str {
        &self.owner
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Parse a git remote URL into a repository reference.
    ///
    /// Accepts `https://host/owner/repo(.git)`, `ssh://git@host/owner/repo(.git)`, and the
    /// scp-like `[user@]host:owner/repo(.git)` form. Only remotes with a `scheme://` prefix are
    /// parsed as URLs.
    pub fn from_remote_url(remote: &str) -> Result<Self, AppError> {
        let remote = remote.trim();

        if remote.contains("://") {
            let url =
                Url::parse(remote).map_err(|_| AppError::InvalidRepository(remote.to_string()))?;
            let mut segments = url
                .path_segments()
                .map(|s| s.filter(|seg| !seg.is_empty()).collect::<Vec<_>>())
                .unwrap_or_default();
            if segments.len() >= 2 {
                let name = segments.remove(1);
                let owner = segments.remove(0);
                return RepoRef::new(owner, name);
            }
            return Err(AppError::InvalidRepository(remote.to_string()));
        }

        // scp-like syntax: [user@]host:owner/repo.git, host may be an ssh alias
        if let Some((_, path)) = remote.split_once(':') {
            return path.trim_start_matches('/').parse();
        }

        Err(AppError::InvalidRepository(remote.to_string()))
    }
}

impl FromStr for RepoRef {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim().trim_end_matches('/');
        match trimmed.split('/').collect::<Vec<_>>().as_slice() {
            [owner, name] => RepoRef::new(owner, name),
            // HOST/OWNER/REPO
            [_host, owner, name] if trimmed.contains('.') => RepoRef::new(owner, name),
            _ => Err(AppError::InvalidRepository(s.to_string())),
        }
    }
}

impl fmt::Display for RepoRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.owner, self.name)
    }
}

fn is_valid_segment(segment: &str) -> bool {
    !segment.is_empty()
        && segment != "."
        && segment != ".."
        && !segment.chars().any(|c| c == '/' || c == '\\' || c.is_whitespace())
}
