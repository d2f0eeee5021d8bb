use std::time::Duration;

/// Production API host.
pub const DEFAULT_BASE_URL: &str = "https://api.gotinder.com";

/// Configures endpoint host, timeout and retry behavior.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ClientOptions {
    /// Host every request path is appended to.
    pub base_url: String,
    /// Per-attempt timeout in milliseconds.
    pub timeout_ms: u64,
    /// Maximum number of retries after the initial attempt.
    pub max_retries: usize,
    /// Base retry backoff in milliseconds (exponential strategy).
    pub retry_backoff_ms: u64,
    /// Optional proxy URL applied to every outgoing request.
    pub proxy: Option<String>,
}

impl Default for ClientOptions {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_owned(),
            timeout_ms: 30_000,
            max_retries: 3,
            retry_backoff_ms: 1_000,
            proxy: None,
        }
    }
}

impl ClientOptions {
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }

    /// Delay inserted after failed attempt `attempt` (0-indexed).
    ///
    /// Doubles every attempt starting at `retry_backoff_ms`; the exponent is
    /// capped at 16 and the multiplication saturates.
    pub fn backoff_delay(&self, attempt: usize) -> Duration {
        let exp = attempt.min(16) as u32;
        let multiplier = 1u64 << exp;
        Duration::from_millis(self.retry_backoff_ms.saturating_mul(multiplier))
    }
}
