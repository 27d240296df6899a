//! Configuration for the question generation API.

use std::time::Duration;

/// Where the generation API lives and how long to wait for it.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ApiConfig {
    /// Base URL of the service (e.g., "https://app.example.com")
    pub base_url: String,
    /// Timeout applied to the whole request
    pub timeout: Duration,
}

impl ApiConfig {
    /// Generation can take a while; the service calls an LLM before saving.
    pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(60);

    /// Create a configuration with the default timeout.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout: Self::DEFAULT_TIMEOUT,
        }
    }

    /// Set the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// The `/api` root of the service.
    pub fn api_url(&self) -> String {
        format!("{}/api", self.base_url.trim_end_matches('/'))
    }

    /// Full URL of the generation endpoint.
    pub fn generate_url(&self) -> String {
        format!("{}/generate-question", self.api_url())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn urls_are_built_from_base() {
        let config = ApiConfig::new("https://svc.example.com/");
        assert_eq!(config.api_url(), "https://svc.example.com/api");
        assert_eq!(
            config.generate_url(),
            "https://svc.example.com/api/generate-question"
        );
        assert_eq!(config.timeout, Duration::from_secs(60));
    }
}
