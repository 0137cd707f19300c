mod config;
mod error;
mod log_level;
mod logging_config;
mod service_config;
mod storage_config;

#[cfg(test)]
mod tests;

pub use config::Config;
pub use error::{ConfigError, ConfigErrorResult};
pub use log_level::LogLevel;
pub use logging_config::LoggingConfig;
pub use service_config::ServiceConfig;
pub use storage_config::StorageConfig;

pub const DEFAULT_SERVICE_URL: &str = "https://support.lsdsoftware.com";
pub const DEFAULT_STORE_FILENAME: &str = "store.json";
pub const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Info;
pub const DEFAULT_LOG_COLORED: bool = true;

pub(crate) const CONFIG_DIR_ENV: &str = "RA_CONFIG_DIR";
pub(crate) const DEFAULT_CONFIG_DIR: &str = ".read-aloud";
pub(crate) const CONFIG_FILENAME: &str = "config.toml";
