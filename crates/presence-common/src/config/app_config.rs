//! Application configuration structs
//!
//! Loads configuration from environment variables.

use serde::Deserialize;
use std::env;

/// Main application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub app: AppSettings,
    pub features: FeatureConfig,
    pub presence: PresenceConfig,
}

/// General application settings
#[derive(Debug, Clone, Deserialize)]
pub struct AppSettings {
    #[serde(default = "default_app_name")]
    pub name: String,
    #[serde(default = "default_env")]
    pub env: Environment,
}

/// Environment type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    #[default]
    Development,
    Staging,
    Production,
}

impl Environment {
    #[must_use]
    pub fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }

    #[must_use]
    pub fn is_development(&self) -> bool {
        matches!(self, Self::Development)
    }
}

/// Deployment feature toggles
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct FeatureConfig {
    /// Whether users may set custom statuses
    #[serde(default = "default_true")]
    pub enable_custom_statuses: bool,
    /// Whether DND requests may carry an end instant
    #[serde(default)]
    pub timed_dnd: bool,
}

impl Default for FeatureConfig {
    fn default() -> Self {
        Self {
            enable_custom_statuses: true,
            timed_dnd: false,
        }
    }
}

/// Presence engine tuning
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct PresenceConfig {
    /// Bound on each registry/responder call, in milliseconds
    #[serde(default = "default_op_timeout_ms")]
    pub op_timeout_ms: u64,
    /// Capacity of the recent custom status history
    #[serde(default = "default_recent_status_cap")]
    pub recent_status_cap: usize,
}

impl Default for PresenceConfig {
    fn default() -> Self {
        Self {
            op_timeout_ms: default_op_timeout_ms(),
            recent_status_cap: default_recent_status_cap(),
        }
    }
}

// Default value functions
fn default_app_name() -> String {
    "presence-server".to_string()
}

fn default_env() -> Environment {
    Environment::Development
}

fn default_true() -> bool {
    true
}

fn default_op_timeout_ms() -> u64 {
    5000
}

fn default_recent_status_cap() -> usize {
    5
}

/// Configuration loading errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for environment variable: {0}")]
    InvalidVar(&'static str),
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    /// Returns an error if a set variable carries an unparseable value.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        Ok(Self {
            app: AppSettings {
                name: env::var("APP_NAME").unwrap_or_else(|_| default_app_name()),
                env: match env::var("APP_ENV") {
                    Ok(s) => match s.to_lowercase().as_str() {
                        "production" => Environment::Production,
                        "staging" => Environment::Staging,
                        "development" => Environment::Development,
                        _ => return Err(ConfigError::InvalidVar("APP_ENV")),
                    },
                    Err(_) => default_env(),
                },
            },
            features: FeatureConfig {
                enable_custom_statuses: parse_var(
                    "ENABLE_CUSTOM_STATUSES",
                    default_true(),
                )?,
                timed_dnd: parse_var("TIMED_DND", false)?,
            },
            presence: PresenceConfig {
                op_timeout_ms: parse_var("PRESENCE_OP_TIMEOUT_MS", default_op_timeout_ms())?,
                recent_status_cap: parse_var(
                    "RECENT_STATUS_CAP",
                    default_recent_status_cap(),
                )?,
            },
        })
    }
}

/// Parse an optional environment variable, defaulting when unset and erroring
/// when set to an unparseable value.
fn parse_var<T: std::str::FromStr>(
    name: &'static str,
    default: T,
) -> Result<T, ConfigError> {
    match env::var(name) {
        Ok(raw) => raw.parse().map_err(|_| ConfigError::InvalidVar(name)),
        Err(_) => Ok(default),
    }
}
