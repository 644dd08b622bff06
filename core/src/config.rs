//! Backend address resolution.
//!
//! # Design
//! The deployment environment hands the client a single value: either a
//! full URL (local development, `http://localhost:8000`) or the bare
//! service name of a hosted instance, whose public domain follows the
//! `https://{host}.onrender.com` template. `resolve_base_url` maps that
//! value to a base URL; `Config` reads it from the environment exactly
//! once at startup and is then passed to whoever issues HTTP calls, so
//! tests can substitute an address without touching the environment.

use std::env;

use thiserror::Error;

/// Environment variable naming the backend host or URL.
pub const HOST_ENV_VAR: &str = "POSTS_API_HOST";

/// Startup failures while resolving the backend address.
///
/// Resolution fails fast: a client with no backend address cannot do
/// anything useful, and a silently nonsensical URL is harder to diagnose
/// than an error at launch.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("POSTS_API_HOST is not set")]
    MissingHost,

    #[error("POSTS_API_HOST is empty")]
    EmptyHost,
}

/// Map the configured host value to the backend base URL.
///
/// Values that already carry a scheme pass through unchanged; anything
/// else is treated as a hosted service name. The prefix check is
/// case-sensitive, matching what deployments actually provide.
pub fn resolve_base_url(host: &str) -> String {
    if host.starts_with("http") {
        // Already a full URL, e.g. http://localhost:8000
        return host.to_string();
    }
    format!("https://{host}.onrender.com")
}

/// Resolved client configuration. Immutable after construction.
#[derive(Debug, Clone)]
pub struct Config {
    base_url: String,
}

impl Config {
    /// Derive a configuration from an explicit host value.
    pub fn new(host: &str) -> Self {
        Self {
            base_url: resolve_base_url(host),
        }
    }

    /// Read `POSTS_API_HOST` and derive the base URL from it.
    pub fn from_env() -> Result<Self, ConfigError> {
        let host = env::var(HOST_ENV_VAR).map_err(|_| ConfigError::MissingHost)?;
        if host.trim().is_empty() {
            return Err(ConfigError::EmptyHost);
        }
        Ok(Self::new(&host))
    }

    /// The scheme+host(+port) prefix prepended to every request path.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_url_passes_through_unchanged() {
        assert_eq!(
            resolve_base_url("http://localhost:8000"),
            "http://localhost:8000"
        );
        assert_eq!(
            resolve_base_url("https://api.example.com"),
            "https://api.example.com"
        );
    }

    #[test]
    fn bare_host_is_templated() {
        assert_eq!(resolve_base_url("my-api"), "https://my-api.onrender.com");
        assert_eq!(
            resolve_base_url("fastapi-ddddd"),
            "https://fastapi-ddddd.onrender.com"
        );
    }

    #[test]
    fn prefix_check_is_case_sensitive() {
        assert_eq!(resolve_base_url("HTTP-host"), "https://HTTP-host.onrender.com");
    }

    #[test]
    fn config_new_derives_base_url() {
        assert_eq!(Config::new("my-api").base_url(), "https://my-api.onrender.com");
        assert_eq!(
            Config::new("http://localhost:8000").base_url(),
            "http://localhost:8000"
        );
    }

    // Single test covering both env states so parallel tests in this crate
    // never observe a half-mutated variable.
    #[test]
    fn from_env_fails_fast_on_missing_or_empty() {
        env::remove_var(HOST_ENV_VAR);
        assert!(matches!(Config::from_env(), Err(ConfigError::MissingHost)));

        env::set_var(HOST_ENV_VAR, "  ");
        assert!(matches!(Config::from_env(), Err(ConfigError::EmptyHost)));

        env::set_var(HOST_ENV_VAR, "my-api");
        let config = Config::from_env().unwrap();
        assert_eq!(config.base_url(), "https://my-api.onrender.com");

        env::remove_var(HOST_ENV_VAR);
    }
}
