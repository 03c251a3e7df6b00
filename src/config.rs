use crate::constants::{DEFAULT_BASE_URL, DEFAULT_POLL_INTERVAL_SECS, DEFAULT_REST_TIMEOUT};
use crate::utils::config::get_env_or_default;
use dotenv::dotenv;
use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::debug;

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone)]
/// Login credentials for a Nightrader account
pub struct Credentials {
    /// Username of the account
    pub user_name: String,
    /// Password of the account
    pub password: String,
}

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone)]
/// Configuration for the REST API
pub struct RestApiConfig {
    /// Base URL of the Nightrader backend gateway
    pub base_url: String,
    /// Timeout in seconds for REST API requests
    pub timeout: u64,
}

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone)]
/// Main configuration for the Nightrader client
pub struct Config {
    /// Login credentials
    pub credentials: Credentials,
    /// REST API configuration
    pub rest_api: RestApiConfig,
    /// Delay in seconds between polls while an order is in progress
    pub poll_interval_secs: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

impl Config {
    /// Creates a configuration from environment variables, loading `.env` first.
    ///
    /// Recognized variables: `NT_USERNAME`, `NT_PASSWORD`, `NT_REST_BASE_URL`,
    /// `NT_REST_TIMEOUT`, `NT_POLL_INTERVAL_SECS`.
    pub fn new() -> Self {
        match dotenv() {
            Ok(_) => debug!("Successfully loaded .env file"),
            Err(e) => debug!("Failed to load .env file: {e}"),
        }

        Config {
            credentials: Credentials {
                user_name: get_env_or_default("NT_USERNAME", String::new()),
                password: get_env_or_default("NT_PASSWORD", String::new()),
            },
            rest_api: RestApiConfig {
                base_url: get_env_or_default("NT_REST_BASE_URL", String::from(DEFAULT_BASE_URL)),
                timeout: get_env_or_default("NT_REST_TIMEOUT", DEFAULT_REST_TIMEOUT),
            },
            poll_interval_secs: get_env_or_default(
                "NT_POLL_INTERVAL_SECS",
                DEFAULT_POLL_INTERVAL_SECS,
            ),
        }
    }

    /// Creates a configuration pointing at an explicit base URL, with defaults
    /// for everything else. Used by tests against a stub backend.
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Config {
            credentials: Credentials {
                user_name: String::new(),
                password: String::new(),
            },
            rest_api: RestApiConfig {
                base_url: base_url.into(),
                timeout: DEFAULT_REST_TIMEOUT,
            },
            poll_interval_secs: DEFAULT_POLL_INTERVAL_SECS,
        }
    }

    /// Poll delay as a [`Duration`]
    pub fn poll_interval(&self) -> Duration {
        Duration::from_secs(self.poll_interval_secs)
    }
}
