//! Service context - dependency container for services
//!
//! Holds the registry, stores, collaborators, feature gate, and the per-user
//! lock arena shared by all services.

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use presence_common::PresenceConfig;
use presence_core::{AutoResponder, CustomStatusStore, FeatureGate, RegistryResult, StatusRegistry};
use presence_store::KeyedLocks;

use super::error::{ServiceError, ServiceResult};

/// Default bound on collaborator calls
const DEFAULT_OP_TIMEOUT: Duration = Duration::from_secs(5);

/// Service context containing all dependencies
///
/// Cloneable container passed to every service. Provides access to:
/// - The authoritative status registry
/// - The custom status store
/// - The auto-responder collaborator
/// - Deployment feature toggles
/// - The per-user lock arena
#[derive(Clone)]
pub struct ServiceContext {
    registry: Arc<dyn StatusRegistry>,
    custom_status_store: Arc<dyn CustomStatusStore>,
    auto_responder: Arc<dyn AutoResponder>,
    features: Arc<dyn FeatureGate>,
    locks: KeyedLocks,
    op_timeout: Duration,
}

impl ServiceContext {
    /// Create a new service context with all dependencies
    pub fn new(
        registry: Arc<dyn StatusRegistry>,
        custom_status_store: Arc<dyn CustomStatusStore>,
        auto_responder: Arc<dyn AutoResponder>,
        features: Arc<dyn FeatureGate>,
    ) -> Self {
        Self {
            registry,
            custom_status_store,
            auto_responder,
            features,
            locks: KeyedLocks::new(),
            op_timeout: DEFAULT_OP_TIMEOUT,
        }
    }

    /// Create a context with the tuning values from configuration
    pub fn from_config(
        config: &PresenceConfig,
        registry: Arc<dyn StatusRegistry>,
        custom_status_store: Arc<dyn CustomStatusStore>,
        auto_responder: Arc<dyn AutoResponder>,
        features: Arc<dyn FeatureGate>,
    ) -> Self {
        Self::new(registry, custom_status_store, auto_responder, features)
            .with_op_timeout(Duration::from_millis(config.op_timeout_ms))
    }

    /// Override the collaborator call timeout
    #[must_use]
    pub fn with_op_timeout(mut self, timeout: Duration) -> Self {
        self.op_timeout = timeout;
        self
    }

    /// Get the status registry
    pub fn registry(&self) -> &dyn StatusRegistry {
        self.registry.as_ref()
    }

    /// Get the custom status store
    pub fn custom_status_store(&self) -> &dyn CustomStatusStore {
        self.custom_status_store.as_ref()
    }

    /// Get the auto responder
    pub fn auto_responder(&self) -> &dyn AutoResponder {
        self.auto_responder.as_ref()
    }

    /// Get the feature gate (read at call time, never cached)
    pub fn features(&self) -> &dyn FeatureGate {
        self.features.as_ref()
    }

    /// Get the per-user lock arena
    pub fn locks(&self) -> &KeyedLocks {
        &self.locks
    }

    /// Get the collaborator call timeout
    pub fn op_timeout(&self) -> Duration {
        self.op_timeout
    }

    /// Run a collaborator call under the operation timeout.
    ///
    /// A call that exceeds the bound fails with `Unavailable` rather than
    /// waiting indefinitely.
    pub async fn bounded<T>(
        &self,
        what: &'static str,
        fut: impl Future<Output = RegistryResult<T>>,
    ) -> ServiceResult<T> {
        match tokio::time::timeout(self.op_timeout, fut).await {
            Ok(result) => result.map_err(ServiceError::from),
            Err(_) => Err(ServiceError::unavailable(format!("{what} timed out"))),
        }
    }
}
