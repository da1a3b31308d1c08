//! Client configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! All optional:
//! - `CAFENET_API_URL` - Backend base URL (default: `http://localhost:8000`)
//! - `CAFENET_TIMEOUT_SECS` - Per-request timeout in seconds (default: 10)
//! - `CAFENET_SESSION_FILE` - Session record path
//!   (default: `$HOME/.config/cafenet/session.json`)

use std::path::PathBuf;
use std::time::Duration;

use thiserror::Error;

/// Default backend URL, matching the front-end's fallback.
const DEFAULT_API_URL: &str = "http://localhost:8000";

/// Default per-request timeout in seconds.
const DEFAULT_TIMEOUT_SECS: &str = "10";

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(String),
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Cafenet client configuration.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Backend base URL, without a trailing slash.
    pub api_url: String,
    /// Per-request timeout.
    pub timeout: Duration,
    /// Path of the persisted session record.
    pub session_file: PathBuf,
}

impl ClientConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is present but invalid, or if
    /// no session path can be resolved (no `CAFENET_SESSION_FILE` and no
    /// `HOME`).
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let api_url = get_env_or_default("CAFENET_API_URL", DEFAULT_API_URL)
            .trim_end_matches('/')
            .to_string();

        let timeout_secs = get_env_or_default("CAFENET_TIMEOUT_SECS", DEFAULT_TIMEOUT_SECS)
            .parse::<u64>()
            .map_err(|e| {
                ConfigError::InvalidEnvVar("CAFENET_TIMEOUT_SECS".to_string(), e.to_string())
            })?;
        if timeout_secs == 0 {
            return Err(ConfigError::InvalidEnvVar(
                "CAFENET_TIMEOUT_SECS".to_string(),
                "timeout must be at least 1 second".to_string(),
            ));
        }

        let session_file = match get_optional_env("CAFENET_SESSION_FILE") {
            Some(path) => PathBuf::from(path),
            None => default_session_file()?,
        };

        Ok(Self {
            api_url,
            timeout: Duration::from_secs(timeout_secs),
            session_file,
        })
    }
}

/// `$HOME/.config/cafenet/session.json`, the CLI analogue of the
/// front-end's single well-known storage key.
fn default_session_file() -> Result<PathBuf, ConfigError> {
    let home =
        std::env::var("HOME").map_err(|_| ConfigError::MissingEnvVar("HOME".to_string()))?;
    Ok(PathBuf::from(home)
        .join(".config")
        .join("cafenet")
        .join("session.json"))
}

fn get_env_or_default(name: &str, default: &str) -> String {
    get_optional_env(name).unwrap_or_else(|| default.to_string())
}

fn get_optional_env(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|value| !value.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unset_var_falls_back_to_default() {
        assert_eq!(get_optional_env("CAFENET_TEST_NEVER_SET"), None);
        assert_eq!(
            get_env_or_default("CAFENET_TEST_NEVER_SET", DEFAULT_API_URL),
            DEFAULT_API_URL
        );
    }

    #[test]
    fn test_default_session_file_lives_under_home() {
        // HOME may legitimately be absent in minimal build environments.
        if std::env::var("HOME").is_ok() {
            let path = default_session_file().unwrap();
            assert!(path.ends_with(".config/cafenet/session.json"));
        }
    }
}
