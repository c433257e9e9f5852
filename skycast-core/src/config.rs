//! Gateway configuration

use std::time::Duration;

/// Default OpenWeatherMap host
pub const DEFAULT_BASE_URL: &str = "https://api.openweathermap.org";

/// Default per-request timeout
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Settings needed to talk to the weather provider
#[derive(Clone, PartialEq, Eq)]
pub struct GatewayConfig {
    /// Shared API key, appended to every request as `appid`
    pub api_key: String,
    /// Scheme + host, without trailing slash
    pub base_url: String,
    /// Upper bound for a single request, including the body read
    pub timeout: Duration,
}

impl GatewayConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

// Keep the key out of logs and panic messages.
impl std::fmt::Debug for GatewayConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GatewayConfig")
            .field("api_key", &"<redacted>")
            .field("base_url", &self.base_url)
            .field("timeout", &self.timeout)
            .finish()
    }
}
