use std::{env, time::Duration};

pub const DEFAULT_BACKEND_API: &str = "https://api.autotrain.huggingface.co";
pub const DEFAULT_HUB_API: &str = "https://huggingface.co";

/// How long the identity lookup may take before the hub counts as unreachable.
pub const DEFAULT_HUB_TIMEOUT: Duration = Duration::from_secs(3);

/// Where the client sends its requests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    backend_api: String,
    hub_api: String,
    hub_timeout: Duration,
}

impl Config {
    /// Creates a configuration with explicit domains and the default identity timeout.
    pub fn new(backend_api: impl Into<String>, hub_api: impl Into<String>) -> Self {
        Self {
            backend_api: backend_api.into(),
            hub_api: hub_api.into(),
            hub_timeout: DEFAULT_HUB_TIMEOUT,
        }
    }

    /// Reads `AUTOTRAIN_BACKEND_API` and `HF_API`, falling back to the
    /// public endpoints.
    pub fn from_env() -> Self {
        let backend_api = env::var("AUTOTRAIN_BACKEND_API")
            .unwrap_or_else(|_| DEFAULT_BACKEND_API.to_string());
        let hub_api = env::var("HF_API")
            .unwrap_or_else(|_| DEFAULT_HUB_API.to_string());
        Self::new(backend_api, hub_api)
    }

    pub fn with_hub_timeout(mut self, timeout: Duration) -> Self {
        self.hub_timeout = timeout;
        self
    }

    /// Base URL of the training backend, without a trailing path.
    pub fn backend_api(&self) -> &str {
        &self.backend_api
    }

    /// Base URL of the hub.
    pub fn hub_api(&self) -> &str {
        &self.hub_api
    }

    pub fn hub_timeout(&self) -> Duration {
        self.hub_timeout
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new(DEFAULT_BACKEND_API, DEFAULT_HUB_API)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_point_at_public_endpoints() {
        let config = Config::default();
        assert_eq!(config.backend_api(), "https://api.autotrain.huggingface.co");
        assert_eq!(config.hub_api(), "https://huggingface.co");
        assert_eq!(config.hub_timeout(), Duration::from_secs(3));
    }

    #[test]
    fn hub_timeout_override() {
        let config = Config::new("http://a", "http://b").with_hub_timeout(Duration::from_millis(5));
        assert_eq!(config.hub_timeout(), Duration::from_millis(5));
        assert_eq!(config.backend_api(), "http://a");
    }
}
