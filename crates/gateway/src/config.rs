//! Gateway configuration loader.

use std::env;
use std::time::Duration;

/// Connection settings for the HTTP gateway.
#[derive(Clone, Debug)]
pub struct GatewayConfig {
    /// Server origin, without the `/api` suffix.
    pub base_url: String,

    /// Per-request timeout. The server never streams, so a stuck request is
    /// a dead request.
    pub timeout: Duration,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            base_url: "http://127.0.0.1:5000".to_owned(),
            timeout: Duration::from_secs(10),
        }
    }
}

impl GatewayConfig {
    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `GREYCITY_API_URL` - Server origin (default: `http://127.0.0.1:5000`)
    /// - `GREYCITY_API_TIMEOUT_SECS` - Request timeout in seconds (default: 10)
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(url) = env::var("GREYCITY_API_URL") {
            let trimmed = url.trim();
            if !trimmed.is_empty() {
                config.base_url = trimmed.to_owned();
            }
        }

        if let Some(secs) = read_env::<u64>("GREYCITY_API_TIMEOUT_SECS") {
            config.timeout = Duration::from_secs(secs.max(1));
        }

        config
    }
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.parse().ok()
}
