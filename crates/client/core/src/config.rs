//! Engine configuration loader.

use std::env;

/// Channel and log sizing for the reconciliation engine.
#[derive(Clone, Debug)]
pub struct EngineConfig {
    /// Intent queue depth. The UI holds dispatches while one is in flight,
    /// so this only needs headroom, not depth.
    pub intent_buffer: usize,

    /// Client-side notice log capacity.
    pub notice_capacity: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            intent_buffer: 10,
            notice_capacity: 64,
        }
    }
}

impl EngineConfig {
    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `GREYCITY_INTENT_BUFFER` - Intent queue size (default: 10)
    /// - `GREYCITY_NOTICE_CAPACITY` - Notice log capacity (default: 64)
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Some(capacity) = read_env::<usize>("GREYCITY_INTENT_BUFFER") {
            config.intent_buffer = capacity.max(1);
        }
        if let Some(capacity) = read_env::<usize>("GREYCITY_NOTICE_CAPACITY") {
            config.notice_capacity = capacity.max(1);
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
