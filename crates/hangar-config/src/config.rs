use crate::{
    BoardConfig, CONFIG_DIR_ENV, CONFIG_DIR_NAME, CONFIG_FILE_NAME, ConfigError,
    ConfigErrorResult, FeedConfig, LoggingConfig, ServerConfig,
};

use std::path::{Path, PathBuf};
use std::str::FromStr;

use log::info;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub feed: FeedConfig,
    pub board: BoardConfig,
    pub logging: LoggingConfig,
}

impl Config {
    /// Load config from the default directory.
    ///
    /// Loading order:
    /// 1. Check for HANGAR_CONFIG_DIR env var, else use ./.hangar/
    /// 2. Load config.toml if it exists, else use defaults
    /// 3. Apply HANGAR_* environment variable overrides
    ///
    /// Does NOT validate - call validate() after load().
    pub fn load() -> ConfigErrorResult<Self> {
        Self::load_from(&Self::config_dir()?)
    }

    /// Load config from an explicit directory. A missing directory or file
    /// yields the defaults; nothing is created.
    pub fn load_from(config_dir: &Path) -> ConfigErrorResult<Self> {
        let config_path = config_dir.join(CONFIG_FILE_NAME);

        let mut config = if config_path.exists() {
            Self::load_toml(&config_path)?
        } else {
            Config::default()
        };

        config.apply_env_overrides();

        Ok(config)
    }

    /// Load and parse TOML file with detailed error context.
    fn load_toml(path: &Path) -> ConfigErrorResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        toml::from_str(&contents).map_err(|e| ConfigError::Toml {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// Get the config directory.
    /// Priority: HANGAR_CONFIG_DIR env var > ./.hangar/ (relative to cwd)
    pub fn config_dir() -> ConfigErrorResult<PathBuf> {
        if let Ok(dir) = std::env::var(CONFIG_DIR_ENV) {
            return Ok(PathBuf::from(dir));
        }

        let cwd = std::env::current_dir()
            .map_err(|_| ConfigError::config("Cannot determine current working directory"))?;
        Ok(cwd.join(CONFIG_DIR_NAME))
    }

    /// Validate all configuration.
    /// Call after load() to catch all errors before the first request.
    pub fn validate(&self) -> ConfigErrorResult<()> {
        self.server.validate()?;
        self.feed.validate()?;
        self.board.validate()?;

        if let Some(ref file) = self.logging.file
            && file.trim().is_empty()
        {
            return Err(ConfigError::logging("logging.file must not be empty"));
        }

        Ok(())
    }

    /// Log configuration summary.
    pub fn log_summary(&self) {
        info!("Configuration loaded:");
        info!(
            "  server: {} (timeout {}s)",
            self.server.url, self.server.timeout_secs
        );
        info!("  feed: poll every {}s", self.feed.poll_interval_secs);
        info!("  board: due after {} days", self.board.lead_days);
        info!(
            "  logging: {} (colored: {}, file: {})",
            *self.logging.level,
            self.logging.colored,
            self.logging.file.as_deref().unwrap_or("stderr")
        );
    }

    fn apply_env_overrides(&mut self) {
        // Server
        Self::apply_env_string("HANGAR_SERVER_URL", &mut self.server.url);
        Self::apply_env_parse("HANGAR_SERVER_TIMEOUT_SECS", &mut self.server.timeout_secs);

        // Feed
        Self::apply_env_parse(
            "HANGAR_FEED_POLL_INTERVAL_SECS",
            &mut self.feed.poll_interval_secs,
        );

        // Board
        Self::apply_env_parse("HANGAR_BOARD_LEAD_DAYS", &mut self.board.lead_days);

        // Logging
        Self::apply_env_parse("HANGAR_LOG_LEVEL", &mut self.logging.level);
        Self::apply_env_bool("HANGAR_LOG_COLORED", &mut self.logging.colored);
        Self::apply_env_option_string("HANGAR_LOG_FILE", &mut self.logging.file);
    }

    fn apply_env_string(key: &str, target: &mut String) {
        if let Ok(val) = std::env::var(key) {
            *target = val;
        }
    }

    fn apply_env_option_string(key: &str, target: &mut Option<String>) {
        if let Ok(val) = std::env::var(key) {
            *target = Some(val);
        }
    }

    fn apply_env_parse<T: FromStr>(key: &str, target: &mut T) {
        if let Ok(val) = std::env::var(key)
            && let Ok(parsed) = val.parse()
        {
            *target = parsed;
        }
    }

    fn apply_env_bool(key: &str, target: &mut bool) {
        if let Ok(val) = std::env::var(key) {
            *target = val.eq_ignore_ascii_case("true") || val == "1";
        }
    }
}
