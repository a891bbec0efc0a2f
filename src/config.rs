use std::time::Duration;

/// Default Edamam API host.
pub const DEFAULT_API_BASE: &str = "https://api.edamam.com";

/// Default upper bound for a single lookup request.
pub const DEFAULT_LOOKUP_TIMEOUT_SECS: u64 = 10;

/// Default directory holding persisted blobs.
pub const DEFAULT_DATA_DIR: &str = ".nutri";

/// Settings for the nutrition lookup client.
#[derive(Debug, Clone)]
pub struct LookupConfig {
    pub app_id: String,
    pub app_key: String,
    pub base_url: String,
    pub timeout: Duration,
}

impl LookupConfig {
    pub fn new(app_id: impl Into<String>, app_key: impl Into<String>) -> Self {
        Self {
            app_id: app_id.into(),
            app_key: app_key.into(),
            base_url: DEFAULT_API_BASE.to_string(),
            timeout: Duration::from_secs(DEFAULT_LOOKUP_TIMEOUT_SECS),
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}
