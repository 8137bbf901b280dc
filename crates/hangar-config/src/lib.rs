mod board_config;
mod config;
mod error;
mod feed_config;
mod log_level;
mod logging_config;
mod server_config;

#[cfg(test)]
mod tests;

pub use board_config::BoardConfig;
pub use config::Config;
pub use error::{ConfigError, ConfigErrorResult};
pub use feed_config::FeedConfig;
pub use log_level::LogLevel;
pub use logging_config::LoggingConfig;
pub use server_config::ServerConfig;

const DEFAULT_SERVER_URL: &str = "http://127.0.0.1:5000";
const DEFAULT_LOG_LEVEL_STRING: &str = "warn";
const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Warn;
const CONFIG_DIR_ENV: &str = "HANGAR_CONFIG_DIR";
const CONFIG_DIR_NAME: &str = ".hangar";
const CONFIG_FILE_NAME: &str = "config.toml";
