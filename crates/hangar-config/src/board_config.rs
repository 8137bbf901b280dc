use crate::{ConfigError, ConfigErrorResult};

use serde::Deserialize;

pub const MIN_LEAD_DAYS: i64 = 1;
pub const MAX_LEAD_DAYS: i64 = 365;
pub const DEFAULT_LEAD_DAYS: i64 = 60;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct BoardConfig {
    /// Days between order creation and its estimated due date
    pub lead_days: i64,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            lead_days: DEFAULT_LEAD_DAYS,
        }
    }
}

impl BoardConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.lead_days < MIN_LEAD_DAYS || self.lead_days > MAX_LEAD_DAYS {
            return Err(ConfigError::config(format!(
                "board.lead_days must be {}-{}, got {}",
                MIN_LEAD_DAYS, MAX_LEAD_DAYS, self.lead_days
            )));
        }

        Ok(())
    }
}
