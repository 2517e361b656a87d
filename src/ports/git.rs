use crate::domain::AppError;

pub trait GitPort {
    /// Get the current branch name.
    fn get_current_branch(&self) -> Result<String, AppError>;

    /// Get the fetch URL of a named remote, if the remote exists.
    fn remote_url(&self, remote: &str) -> Result<Option<String>, AppError>;
}
