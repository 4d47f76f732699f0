use std::env;

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

/// Default values for configuration
const DEFAULT_LOG_LEVEL: &str = "info";
const DEFAULT_ENV: &str = "development";
const DEFAULT_PAGE_SIZE: usize = 25;
const DEFAULT_ALERT_WINDOW_DAYS: i64 = 7;
const CONFIG_DIR: &str = "config";

/// Application configuration.
#[derive(Clone, Debug, Deserialize)]
pub struct AppConfig {
    /// Deployment environment name (selects the config file layer).
    #[serde(default = "default_environment")]
    pub environment: String,

    /// Log level filter when RUST_LOG is unset.
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Emit logs as JSON lines instead of human-readable text.
    #[serde(default)]
    pub log_json: bool,

    /// Items per page when the caller does not specify one.
    #[serde(default = "default_page_size")]
    pub default_page_size: usize,

    /// Look-ahead window (days) for the category aggregations.
    #[serde(default = "default_alert_window_days")]
    pub alert_window_days: i64,
}

fn default_environment() -> String {
    DEFAULT_ENV.to_string()
}

fn default_log_level() -> String {
    DEFAULT_LOG_LEVEL.to_string()
}

fn default_page_size() -> usize {
    DEFAULT_PAGE_SIZE
}

fn default_alert_window_days() -> i64 {
    DEFAULT_ALERT_WINDOW_DAYS
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            environment: default_environment(),
            log_level: default_log_level(),
            log_json: false,
            default_page_size: default_page_size(),
            alert_window_days: default_alert_window_days(),
        }
    }
}

impl AppConfig {
    pub fn log_level(&self) -> &str {
        &self.log_level
    }
}

/// Loads application configuration.
///
/// Layers configuration sources in this order:
/// 1. Default config (config/default.toml)
/// 2. Environment-specific config (config/{env}.toml)
/// 3. Environment variables (APP_*)
pub fn load_config() -> Result<AppConfig, ConfigError> {
    let run_env = env::var("RUN_ENV").unwrap_or_else(|_| DEFAULT_ENV.to_string());

    let config = Config::builder()
        .add_source(File::with_name(&format!("{}/default", CONFIG_DIR)).required(false))
        .add_source(File::with_name(&format!("{}/{}", CONFIG_DIR, run_env)).required(false))
        .add_source(Environment::with_prefix("APP"))
        .build()?;

    config.try_deserialize()
}

/// Initializes tracing using the provided log level as the default filter.
pub fn init_tracing(level: &str, json: bool) {
    use tracing_subscriber::{fmt, EnvFilter};

    let default_directive = format!("datacerta={}", level);
    let filter_directive = env::var("RUST_LOG")
        .ok()
        .filter(|s| !s.trim().is_empty())
        .unwrap_or(default_directive);

    if json {
        let _ = fmt()
            .with_env_filter(EnvFilter::new(filter_directive))
            .json()
            .try_init();
    } else {
        let _ = fmt()
            .with_env_filter(EnvFilter::new(filter_directive))
            .try_init();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_sane() {
        let cfg = AppConfig::default();
        assert_eq!(cfg.environment, "development");
        assert_eq!(cfg.default_page_size, 25);
        assert_eq!(cfg.alert_window_days, 7);
        assert!(!cfg.log_json);
    }
}
