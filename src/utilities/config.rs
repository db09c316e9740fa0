//! Server and delegate configuration.
//!
//! Everything is read from the environment once at startup and passed into
//! the components that need it; nothing reads the environment afterwards.

use std::time::Duration;

use crate::utilities::errors::API_KEY_VAR;

/// Default chat-completion API base URL.
pub const DEFAULT_BASE_URL: &str = "https://ai.hackclub.com/proxy/v1";
/// Default model for the slang delegate.
pub const DEFAULT_MODEL: &str = "qwen/qwen3-32b";
/// Default request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
/// Default listening port.
pub const DEFAULT_PORT: u16 = 3000;

/// Settings for the remote slang delegate.
#[derive(Debug, Clone)]
pub struct DelegateConfig {
    /// API credential. `None` makes every delegate call a configuration error.
    pub api_key: Option<String>,
    /// API base URL, without the `/chat/completions` suffix.
    pub base_url: String,
    /// Model name sent with each request.
    pub model: String,
    /// Per-request timeout.
    pub timeout: Duration,
}

impl Default for DelegateConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: DEFAULT_BASE_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl DelegateConfig {
    /// Load from environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        Self {
            api_key: lookup(API_KEY_VAR).filter(|key| !key.is_empty()),
            base_url: lookup("SLANG_AI_BASE_URL")
                .map(|url| url.trim_end_matches('/').to_string())
                .unwrap_or(defaults.base_url),
            model: lookup("SLANG_AI_MODEL").unwrap_or(defaults.model),
            timeout: lookup("SLANG_AI_TIMEOUT_SECS")
                .and_then(|secs| secs.parse().ok())
                .filter(|&secs: &u64| secs > 0)
                .map(Duration::from_secs)
                .unwrap_or(defaults.timeout),
        }
    }
}

/// Top-level server configuration.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub delegate: DelegateConfig,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: DEFAULT_PORT,
            delegate: DelegateConfig::default(),
        }
    }
}

impl ServerConfig {
    /// Load from environment variables.
    ///
    /// - `HOST` (default `0.0.0.0`)
    /// - `PORT` (default `3000`)
    /// - `HACKCLUB_API_KEY`, `SLANG_AI_BASE_URL`, `SLANG_AI_MODEL`,
    ///   `SLANG_AI_TIMEOUT_SECS` (see [`DelegateConfig`])
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let port = match lookup("PORT") {
            Some(raw) => raw.parse().unwrap_or_else(|_| {
                tracing::warn!("Invalid PORT '{}', using {}", raw, DEFAULT_PORT);
                DEFAULT_PORT
            }),
            None => DEFAULT_PORT,
        };

        Self {
            host: lookup("HOST").unwrap_or_else(|| "0.0.0.0".to_string()),
            port,
            delegate: DelegateConfig::from_lookup(&lookup),
        }
    }

    /// `host:port` for binding the listener.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| vars.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = ServerConfig::from_lookup(lookup_from(&[]));
        assert_eq!(config.bind_addr(), "0.0.0.0:3000");
        assert!(config.delegate.api_key.is_none());
        assert_eq!(config.delegate.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.delegate.model, "qwen/qwen3-32b");
        assert_eq!(config.delegate.timeout, Duration::from_secs(30));
    }

    #[test]
    fn test_overrides() {
        let config = ServerConfig::from_lookup(lookup_from(&[
            ("HOST", "127.0.0.1"),
            ("PORT", "8081"),
            ("HACKCLUB_API_KEY", "secret"),
            ("SLANG_AI_BASE_URL", "http://localhost:9000/v1/"),
            ("SLANG_AI_MODEL", "tiny"),
            ("SLANG_AI_TIMEOUT_SECS", "5"),
        ]));
        assert_eq!(config.bind_addr(), "127.0.0.1:8081");
        assert_eq!(config.delegate.api_key.as_deref(), Some("secret"));
        assert_eq!(config.delegate.base_url, "http://localhost:9000/v1");
        assert_eq!(config.delegate.model, "tiny");
        assert_eq!(config.delegate.timeout, Duration::from_secs(5));
    }

    #[test]
    fn test_empty_api_key_is_unset() {
        let config = DelegateConfig::from_lookup(lookup_from(&[("HACKCLUB_API_KEY", "")]));
        assert!(config.api_key.is_none());
    }

    #[test]
    fn test_invalid_numbers_fall_back() {
        let config = ServerConfig::from_lookup(lookup_from(&[
            ("PORT", "not-a-port"),
            ("SLANG_AI_TIMEOUT_SECS", "soon"),
        ]));
        assert_eq!(config.port, DEFAULT_PORT);
        assert_eq!(config.delegate.timeout, Duration::from_secs(DEFAULT_TIMEOUT_SECS));
    }

    #[test]
    fn test_zero_timeout_falls_back() {
        let config = DelegateConfig::from_lookup(lookup_from(&[("SLANG_AI_TIMEOUT_SECS", "0")]));
        assert_eq!(config.timeout, Duration::from_secs(DEFAULT_TIMEOUT_SECS));
    }
}
