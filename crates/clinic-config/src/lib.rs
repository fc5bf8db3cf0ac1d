mod api_config;
mod config;
mod error;
mod log_level;
mod logging_config;
mod session_config;

#[cfg(test)]
mod tests;

pub use api_config::ApiConfig;
pub use config::Config;
pub use error::{ConfigError, ConfigErrorResult};
pub use log_level::LogLevel;
pub use logging_config::LoggingConfig;
pub use session_config::SessionConfig;

/// Backend origin the front end was built against
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8080";
pub const DEFAULT_API_TIMEOUT_SECS: u64 = 30;
pub const MAX_API_TIMEOUT_SECS: u64 = 300;
pub const DEFAULT_SESSION_FILENAME: &str = "session.json";
pub const DEFAULT_LOG_LEVEL_STRING: &str = "warn";
pub const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Warn;

const CONFIG_DIR_ENV: &str = "CLINIC_CONFIG_DIR";
const CONFIG_DIR_NAME: &str = ".clinic";
const CONFIG_FILENAME: &str = "config.toml";
