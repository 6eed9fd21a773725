use serde::{Deserialize, Serialize};
use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "https://api.dataforseo.com/v3";
pub const ORGANIC_LIVE_ENDPOINT: &str = "/serp/google/organic/live/advanced";

/// Provider connection settings. Request geography, language and device
/// are fixed for now and only overridable here, not per request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SerpConfig {
    pub base_url: String,
    pub login: String,
    #[serde(skip_serializing)]
    pub password: String,
    pub timeout_ms: u64,
    pub min_delay_ms: u64,
    pub location_code: u32,
    pub language_code: String,
    pub device: String,
    pub depth: u32,
}

impl SerpConfig {
    pub fn new(login: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            login: login.into(),
            password: password.into(),
            ..Self::default()
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout_ms = timeout.as_millis() as u64;
        self
    }

    pub fn with_min_delay(mut self, min_delay: Duration) -> Self {
        self.min_delay_ms = min_delay.as_millis() as u64;
        self
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }

    pub fn min_delay(&self) -> Duration {
        Duration::from_millis(self.min_delay_ms)
    }

    pub fn has_credentials(&self) -> bool {
        !self.login.trim().is_empty() && !self.password.trim().is_empty()
    }
}

impl Default for SerpConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            login: String::new(),
            password: String::new(),
            timeout_ms: 30_000,
            min_delay_ms: 3_000,
            location_code: 2840,
            language_code: "en".to_string(),
            device: "desktop".to_string(),
            depth: 100,
        }
    }
}
