//! Configuration structs

mod app_config;
mod features;

pub use app_config::{
    AppConfig, AppSettings, ConfigError, Environment, FeatureConfig, PresenceConfig,
};
pub use features::SharedFeatures;
