//! Live feature gate backed by configuration
//!
//! Services read toggles through the `FeatureGate` trait at call time;
//! flipping a toggle here takes effect on the next call, with no restart.

use std::sync::Arc;

use parking_lot::RwLock;
use presence_core::FeatureGate;

use super::app_config::FeatureConfig;

/// Shareable, mutable feature toggles
#[derive(Debug, Clone)]
pub struct SharedFeatures {
    inner: Arc<RwLock<FeatureConfig>>,
}

impl SharedFeatures {
    #[must_use]
    pub fn new(config: FeatureConfig) -> Self {
        Self {
            inner: Arc::new(RwLock::new(config)),
        }
    }

    /// Replace the current toggles
    pub fn update(&self, config: FeatureConfig) {
        *self.inner.write() = config;
    }

    /// Snapshot the current toggles
    #[must_use]
    pub fn snapshot(&self) -> FeatureConfig {
        *self.inner.read()
    }
}

impl Default for SharedFeatures {
    fn default() -> Self {
        Self::new(FeatureConfig::default())
    }
}

impl FeatureGate for SharedFeatures {
    fn custom_statuses_enabled(&self) -> bool {
        self.inner.read().enable_custom_statuses
    }

    fn timed_dnd_enabled(&self) -> bool {
        self.inner.read().timed_dnd
    }
}
