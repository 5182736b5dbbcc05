//! Configuration management for the Custom TMS server

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::env;
use std::time::Duration;

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    pub level: String,
    /// `pretty` or `json`
    pub format: String,
}

/// Values shown on the settings page
#[derive(Debug, Deserialize, Clone)]
pub struct UiConfig {
    pub company_name: String,
    pub default_checkout_days: u32,
    pub overdue_email_notifications: bool,
    pub maintenance_reminders: bool,
    pub session_timeout_minutes: u32,
    pub require_two_factor: bool,
}

/// Toast lifecycle timings
#[derive(Debug, Deserialize, Clone)]
pub struct NotificationConfig {
    pub show_delay_ms: u64,
    pub display_ms: u64,
    pub hide_ms: u64,
    pub max_visible: usize,
    pub tick_ms: u64,
}

impl NotificationConfig {
    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_ms.max(1))
    }
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub notifications: NotificationConfig,
}

impl AppConfig {
    /// Load configuration from files and environment variables
    pub fn load() -> Result<Self, ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

        let config = Config::builder()
            // Start with default configuration
            .add_source(File::with_name("config/default").required(false))
            // Layer on the environment-specific file
            .add_source(File::with_name(&format!("config/{}", run_mode)).required(false))
            // Add environment variables (with prefix TMS_)
            .add_source(
                Environment::with_prefix("TMS")
                    .separator("__")
                    .try_parsing(true),
            )
            // Platform-provided port wins over files
            .set_override_option("server.port", env::var("PORT").ok())?
            .build()?;

        config.try_deserialize()
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "pretty".to_string(),
        }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            company_name: "Custom TMS Company".to_string(),
            default_checkout_days: 7,
            overdue_email_notifications: true,
            maintenance_reminders: true,
            session_timeout_minutes: 60,
            require_two_factor: true,
        }
    }
}

impl Default for NotificationConfig {
    fn default() -> Self {
        Self {
            show_delay_ms: 100,
            display_ms: 3000,
            hide_ms: 300,
            max_visible: 3,
            tick_ms: 50,
        }
    }
}
