pub struct Config {
    pub base_url: String,
    pub request_timeout_secs: u64,
}

impl Config {
    pub fn new() -> Self {
        Self {
            base_url: "http://127.0.0.1:8000".to_string(),
            request_timeout_secs: 30,
        }
    }

    pub fn with_base_url(mut self, url: &str) -> Self {
        self.base_url = url.trim_end_matches('/').to_string();
        self
    }

    pub fn with_request_timeout_secs(mut self, secs: u64) -> Self {
        self.request_timeout_secs = secs;
        self
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}
