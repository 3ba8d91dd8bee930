use std::time::Duration;

/// Backend root. The page never changes it at runtime.
pub const API_URL: &str = "https://fund-backend.onrender.com/api";

/// Payment initialization goes through the provider and can be slow.
pub const SUBMIT_TIMEOUT: Duration = Duration::from_secs(30);

/// Pause between a successful submission and leaving the page.
pub const REDIRECT_DELAY: Duration = Duration::from_millis(500);

pub const PRESET_AMOUNTS: [u32; 4] = [50, 100, 200, 500];

pub const CURRENCY: &str = "GHS";

pub const PLACEHOLDER_EVENT_NAME: &str = "Memorial Fund for Samuel's Mother";
pub const PLACEHOLDER_EVENT_DESCRIPTION: &str = "We are deeply saddened by the loss of our \
classmate's mother, Mr. Samuel Asante. As a class, we are coming together to support our \
friend during this difficult time.";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    pub base_url: String,
    pub submit_timeout: Duration,
    pub redirect_delay: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: API_URL.to_string(),
            submit_timeout: SUBMIT_TIMEOUT,
            redirect_delay: REDIRECT_DELAY,
        }
    }
}

impl Config {
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn with_submit_timeout(mut self, timeout: Duration) -> Self {
        self.submit_timeout = timeout;
        self
    }

    pub fn with_redirect_delay(mut self, delay: Duration) -> Self {
        self.redirect_delay = delay;
        self
    }
}
