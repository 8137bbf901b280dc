use crate::{ConfigError, ConfigErrorResult};

use serde::Deserialize;

// Poll interval constraints
pub const MIN_POLL_INTERVAL_SECS: u64 = 1;
pub const MAX_POLL_INTERVAL_SECS: u64 = 3600;
pub const DEFAULT_POLL_INTERVAL_SECS: u64 = 5;

/// Revalidation of the order list while watching the board.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct FeedConfig {
    pub poll_interval_secs: u64,
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self {
            poll_interval_secs: DEFAULT_POLL_INTERVAL_SECS,
        }
    }
}

impl FeedConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.poll_interval_secs < MIN_POLL_INTERVAL_SECS
            || self.poll_interval_secs > MAX_POLL_INTERVAL_SECS
        {
            return Err(ConfigError::config(format!(
                "feed.poll_interval_secs must be {}-{}, got {}",
                MIN_POLL_INTERVAL_SECS, MAX_POLL_INTERVAL_SECS, self.poll_interval_secs
            )));
        }

        Ok(())
    }
}
