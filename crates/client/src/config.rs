use std::time::Duration;

use crate::error::ClientError;

/// Default API base URL for local development.
pub const DEFAULT_API_URL: &str = "http://localhost:3000";

/// Default per-request timeout.
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Connection settings for [`crate::api::NotesClient`].
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL of the notes API, without a trailing slash.
    pub base_url: String,
    /// Upper bound on a single request, connect through body.
    pub timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_URL.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl ClientConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                  | Default                 |
    /// |--------------------------|-------------------------|
    /// | `NOTES_API_URL`          | `http://localhost:3000` |
    /// | `NOTES_API_TIMEOUT_SECS` | `10`                    |
    pub fn from_env() -> Result<Self, ClientError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ClientError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let base_url = lookup("NOTES_API_URL")
            .unwrap_or_else(|| DEFAULT_API_URL.to_string())
            .trim_end_matches('/')
            .to_string();

        let timeout_secs = match lookup("NOTES_API_TIMEOUT_SECS") {
            None => DEFAULT_TIMEOUT_SECS,
            Some(raw) => raw.trim().parse().map_err(|_| {
                ClientError::Config(format!(
                    "NOTES_API_TIMEOUT_SECS must be a valid u64, got '{raw}'"
                ))
            })?,
        };

        Ok(Self {
            base_url,
            timeout: Duration::from_secs(timeout_secs),
        })
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    #[test]
    fn defaults_when_unset() {
        let config = ClientConfig::from_lookup(|_| None).unwrap();
        assert_eq!(config.base_url, "http://localhost:3000");
        assert_eq!(config.timeout, Duration::from_secs(10));
    }

    #[test]
    fn trailing_slash_is_trimmed() {
        let config = ClientConfig::from_lookup(|key| {
            (key == "NOTES_API_URL").then(|| "http://notes.test/".to_string())
        })
        .unwrap();
        assert_eq!(config.base_url, "http://notes.test");
    }

    #[test]
    fn invalid_timeout_is_rejected() {
        let result = ClientConfig::from_lookup(|key| {
            (key == "NOTES_API_TIMEOUT_SECS").then(|| "soon".to_string())
        });
        assert_matches!(result, Err(ClientError::Config(_)));
    }
}
