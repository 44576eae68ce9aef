//! Client configuration.
//!
//! The engine host is resolved explicitly at construction time, never from
//! ambient global state: environment override first, then any statically
//! configured host, then a local default.

use std::env;

/// Environment variable overriding the engine host.
pub const HOST_ENV_VAR: &str = "ELASTICSEARCH_HOST";

/// Host used when neither the environment nor static configuration names one.
pub const DEFAULT_HOST: &str = "127.0.0.1:9200";

/// Resolved connection configuration for the search engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Engine host, `host:port` or a full URL.
    pub host: String,
}

impl ClientConfig {
    /// Resolve the engine host: `ELASTICSEARCH_HOST` environment variable,
    /// falling back to `static_host`, falling back to [`DEFAULT_HOST`].
    /// Blank values are skipped.
    pub fn resolve(static_host: Option<&str>) -> Self {
        let host = env::var(HOST_ENV_VAR)
            .ok()
            .filter(|h| !h.trim().is_empty())
            .or_else(|| {
                static_host
                    .filter(|h| !h.trim().is_empty())
                    .map(str::to_string)
            })
            .unwrap_or_else(|| DEFAULT_HOST.to_string());
        Self { host }
    }

    /// Base URL for requests: adds an `http://` scheme when the host has
    /// none and trims any trailing slash.
    pub(crate) fn base_url(&self) -> String {
        let host = self.host.trim().trim_end_matches('/');
        if host.starts_with("http://") || host.starts_with("https://") {
            host.to_string()
        } else {
            format!("http://{host}")
        }
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::resolve(None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Single test so the process-wide environment variable is not mutated
    // from concurrently running tests.
    #[test]
    fn resolution_order_is_env_then_static_then_default() {
        env::remove_var(HOST_ENV_VAR);
        assert_eq!(ClientConfig::resolve(None).host, DEFAULT_HOST);
        assert_eq!(
            ClientConfig::resolve(Some("es.internal:9200")).host,
            "es.internal:9200"
        );
        // Blank static config falls through to the default.
        assert_eq!(ClientConfig::resolve(Some("  ")).host, DEFAULT_HOST);

        env::set_var(HOST_ENV_VAR, "env-host:9200");
        assert_eq!(
            ClientConfig::resolve(Some("es.internal:9200")).host,
            "env-host:9200"
        );

        // Blank environment value falls through to static config.
        env::set_var(HOST_ENV_VAR, "");
        assert_eq!(
            ClientConfig::resolve(Some("es.internal:9200")).host,
            "es.internal:9200"
        );
        env::remove_var(HOST_ENV_VAR);
    }

    #[test]
    fn base_url_normalizes_scheme_and_trailing_slash() {
        let config = |host: &str| ClientConfig {
            host: host.to_string(),
        };
        assert_eq!(config("127.0.0.1:9200").base_url(), "http://127.0.0.1:9200");
        assert_eq!(
            config("https://es.example.org/").base_url(),
            "https://es.example.org"
        );
        assert_eq!(
            config("http://es.example.org").base_url(),
            "http://es.example.org"
        );
    }
}
