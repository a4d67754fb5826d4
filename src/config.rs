// config.rs
use std::env;
use std::net::SocketAddr;
use std::time::Duration;
use thiserror::Error;

const DEFAULT_OPENAI_MODEL: &str = "gpt-4";
const DEFAULT_OPENAI_BASE: &str = "https://api.openai.com/v1";
const DEFAULT_BIND_ADDR: &str = "127.0.0.1:5000";
const DEFAULT_MAX_WORKERS: usize = 8;
const DEFAULT_HTTP_TIMEOUT_SECS: u64 = 60;

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),
    #[error("{key} has an invalid value: {value}")]
    Invalid { key: &'static str, value: String },
}

/// Process-wide settings, read once at startup and handed to each component.
#[derive(Debug, Clone)]
pub struct Config {
    /// WordPress posts endpoint, e.g. `https://example.com/wp-json/wp/v2/posts`.
    pub wp_api_url: String,
    pub wp_username: String,
    pub wp_app_password: String,

    pub openai_api_key: String,
    pub openai_model: String,
    pub openai_base_url: String,

    pub bind_addr: SocketAddr,
    pub max_workers: usize,
    pub http_timeout: Duration,
}

impl Config {
    /// Load from the process environment, reading `.env` first if present.
    pub fn from_env() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |key: &'static str| {
            lookup(key)
                .filter(|v| !v.trim().is_empty())
                .ok_or(ConfigError::Missing(key))
        };

        let bind_raw = lookup("BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
        let bind_addr = bind_raw.parse().map_err(|_| ConfigError::Invalid {
            key: "BIND_ADDR",
            value: bind_raw.clone(),
        })?;

        let max_workers = match lookup("MAX_WORKERS") {
            Some(raw) => match raw.parse::<usize>() {
                Ok(n) if n > 0 => n,
                _ => {
                    return Err(ConfigError::Invalid {
                        key: "MAX_WORKERS",
                        value: raw,
                    })
                }
            },
            None => DEFAULT_MAX_WORKERS,
        };

        let timeout_secs = match lookup("HTTP_TIMEOUT_SECS") {
            Some(raw) => raw.parse::<u64>().map_err(|_| ConfigError::Invalid {
                key: "HTTP_TIMEOUT_SECS",
                value: raw,
            })?,
            None => DEFAULT_HTTP_TIMEOUT_SECS,
        };

        Ok(Self {
            wp_api_url: required("WP_API_URL")?,
            wp_username: required("WP_USERNAME")?,
            wp_app_password: required("WP_APP_PASSWORD")?,
            openai_api_key: required("OPENAI_API_KEY")?,
            openai_model: lookup("OPENAI_MODEL")
                .unwrap_or_else(|| DEFAULT_OPENAI_MODEL.to_string()),
            openai_base_url: lookup("OPENAI_API_BASE")
                .unwrap_or_else(|| DEFAULT_OPENAI_BASE.to_string()),
            bind_addr,
            max_workers,
            http_timeout: Duration::from_secs(timeout_secs),
        })
    }

    /// The media library lives next to the posts collection.
    pub fn media_url(&self) -> String {
        self.wp_api_url.replace("/posts", "/media")
    }
}
