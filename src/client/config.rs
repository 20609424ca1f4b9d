use std::env;
use std::str::FromStr;
use std::time::Duration;

use bon::Builder;

/// Polling interval used when none is configured.
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_millis(5000);

/// Lower bound applied to the poll period and the request timeout.
const MIN_PERIOD: Duration = Duration::from_millis(1);

/// Configuration for the location sync client.
#[derive(Debug, Clone, Builder)]
pub struct SyncClientConfig {
    /// Delay between the start of consecutive poll cycles.
    #[builder(default = DEFAULT_POLL_INTERVAL)]
    pub poll_interval: Duration,

    /// Upper bound on any single store request.
    /// If not set, requests are bounded by the poll interval.
    pub request_timeout: Option<Duration>,
}

impl SyncClientConfig {
    /// The period the polling task ticks at. Never zero.
    pub fn poll_period(&self) -> Duration {
        self.poll_interval.max(MIN_PERIOD)
    }

    /// The effective per-request timeout. Never zero.
    pub fn request_timeout(&self) -> Duration {
        self.request_timeout
            .unwrap_or(self.poll_interval)
            .max(MIN_PERIOD)
    }

    /// Read overrides from `POLL_INTERVAL_MS` and `REQUEST_TIMEOUT_MS`, falling back to the
    /// defaults for anything unset or unparsable.
    pub fn from_env() -> Self {
        Self::builder()
            .maybe_poll_interval(env_parse("POLL_INTERVAL_MS").map(Duration::from_millis))
            .maybe_request_timeout(env_parse("REQUEST_TIMEOUT_MS").map(Duration::from_millis))
            .build()
    }
}

fn env_parse<T: FromStr>(name: &str) -> Option<T> {
    env::var(name).ok().and_then(|v| v.trim().parse().ok())
}

impl Default for SyncClientConfig {
    fn default() -> Self {
        Self::builder().build()
    }
}
