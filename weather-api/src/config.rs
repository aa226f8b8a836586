//! Client configuration

use std::fmt;

/// Provider root used when no override is given.
pub const DEFAULT_BASE_URL: &str = "https://api.openweathermap.org";

/// Environment variable the binary reads the API key from.
pub const API_KEY_ENV: &str = "OPENWEATHER_API_KEY";

/// Process-wide client settings.
///
/// The API key is the only secret. An empty key is accepted: every request
/// is then rejected by the provider and shows up as `None` to callers.
#[derive(Clone, PartialEq, Eq)]
pub struct ApiConfig {
    pub base_url: String,
    pub api_key: String,
}

impl ApiConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            api_key: api_key.into(),
        }
    }

    /// Point the client at a different host (mock servers, proxies).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        self.base_url = base_url.trim_end_matches('/').to_string();
        self
    }

    pub fn has_api_key(&self) -> bool {
        !self.api_key.trim().is_empty()
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::new(String::new())
    }
}

// Keeps the key out of logs and panic messages
impl fmt::Debug for ApiConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let key = if self.has_api_key() { "<redacted>" } else { "<missing>" };
        f.debug_struct("ApiConfig")
            .field("base_url", &self.base_url)
            .field("api_key", &key)
            .finish()
    }
}
