//! Environment- and file-backed configuration loading.
//!
//! Pure schema parsing and validation lives in `domain::config`.

mod load_config;

pub use load_config::{
    API_URL_ENV, CONFIG_PATH_ENV, REPO_ENV, TOKEN_ENVS, config_path, env_repo, load_config,
    load_config_from, parse_config_content, read_token,
};
