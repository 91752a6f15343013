use std::env;
use thiserror::Error;

/// Environment-driven settings. The remote base URL points at the REST root
/// of the table store (the part before `/adjustments` and `/patients`).
#[derive(Debug, Clone)]
pub struct Config {
    pub remote_url: String,
    pub api_key: String,
    pub port: u16,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("BOARD_REMOTE_URL is not set")]
    MissingRemoteUrl,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        let remote_url = env::var("BOARD_REMOTE_URL")
            .ok()
            .filter(|value| !value.trim().is_empty())
            .ok_or(ConfigError::MissingRemoteUrl)?;

        let api_key = env::var("BOARD_API_KEY").unwrap_or_default();

        let port = env::var("PORT")
            .ok()
            .and_then(|value| value.parse::<u16>().ok())
            .unwrap_or(8080);

        Ok(Self {
            remote_url: remote_url.trim_end_matches('/').to_string(),
            api_key,
            port,
        })
    }
}
