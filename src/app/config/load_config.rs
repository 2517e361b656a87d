//! Configuration loading from `config.toml` and the environment.

use std::env;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use url::Url;

use crate::domain::{AppConfig, AppError};

/// Overrides the config file location.
pub const CONFIG_PATH_ENV: &str = "PRREADY_CONFIG";
/// Overrides `github.api_url`.
pub const API_URL_ENV: &str = "PRREADY_API_URL";
/// Base repository in `OWNER/REPO` form.
pub const REPO_ENV: &str = "GH_REPO";
/// Token variables, in lookup order.
pub const TOKEN_ENVS: [&str; 2] = ["GH_TOKEN", "GITHUB_TOKEN"];

/// Location of the config file: `$PRREADY_CONFIG`, else `$HOME/.config/prready/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    if let Some(path) = non_empty_var(CONFIG_PATH_ENV) {
        return Some(PathBuf::from(path));
    }
    non_empty_var("HOME")
        .map(|home| PathBuf::from(home).join(".config").join("prready").join("config.toml"))
}

/// Load configuration from the default location and apply environment overrides.
pub fn load_config() -> Result<AppConfig, AppError> {
    load_config_from(config_path().as_deref())
}

/// Load configuration from `path` (defaults when the file is absent) and apply
/// environment overrides.
pub fn load_config_from(path: Option<&Path>) -> Result<AppConfig, AppError> {
    let mut config = match path {
        Some(path) => match fs::read_to_string(path) {
            Ok(content) => {
                tracing::debug!(path = %path.display(), "loaded config file");
                parse_config_content(&content)?
            }
            Err(e) if e.kind() == ErrorKind::NotFound => AppConfig::default(),
            Err(e) => return Err(AppError::Io(e)),
        },
        None => AppConfig::default(),
    };

    if let Some(raw) = non_empty_var(API_URL_ENV) {
        config.github.api_url = Url::parse(&raw).map_err(|e| {
            AppError::config_error(format!("{} is not a valid URL: {}", API_URL_ENV, e))
        })?;
    }

    config.validate()?;
    Ok(config)
}

/// Parse and validate configuration from TOML content.
pub fn parse_config_content(content: &str) -> Result<AppConfig, AppError> {
    let config: AppConfig = toml::from_str(content)?;
    config.validate()?;
    Ok(config)
}

/// Read the API token from `GH_TOKEN`, then `GITHUB_TOKEN`.
pub fn read_token() -> Result<String, AppError> {
    TOKEN_ENVS
        .iter()
        .find_map(|name| non_empty_var(name))
        .ok_or_else(|| AppError::EnvironmentVariableMissing(TOKEN_ENVS.join(" or ")))
}

/// Base repository named by `GH_REPO`, if set.
pub fn env_repo() -> Option<String> {
    non_empty_var(REPO_ENV)
}

fn non_empty_var(name: &str) -> Option<String> {
    env::var(name).ok().map(|v| v.trim().to_string()).filter(|v| !v.is_empty())
}
