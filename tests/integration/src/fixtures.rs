//! Test fixtures and mock collaborators
//!
//! Provides a reusable harness wiring the services to in-memory stores and a
//! call-recording auto responder.

use std::sync::atomic::{AtomicBool, AtomicU64, AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use presence_common::{FeatureConfig, SharedFeatures};
use presence_core::{
    AutoResponder, DomainError, RegistryResult, Status, StatusKind, StatusRegistry, UserId,
};
use presence_service::{
    BatchStatusResolver, CustomStatusService, ServiceContext, StatusTransitionEngine,
};
use presence_store::{MemoryCustomStatusStore, MemoryStatusRegistry};

/// Counter for unique test user ids
static COUNTER: AtomicU64 = AtomicU64::new(1);

/// Generate a unique, well-formed 26-character user id
pub fn unique_user_id() -> UserId {
    let suffix = COUNTER.fetch_add(1, Ordering::SeqCst);
    let raw = format!("{:0>26}", format!("testuser{suffix}"));
    UserId::parse(&raw).expect("generated id must be well-formed")
}

/// Auto responder that records calls and can be told to fail
#[derive(Default)]
pub struct RecordingResponder {
    enables: AtomicUsize,
    disables: AtomicUsize,
    fail_disable: AtomicBool,
}

impl RecordingResponder {
    pub fn enable_count(&self) -> usize {
        self.enables.load(Ordering::SeqCst)
    }

    pub fn disable_count(&self) -> usize {
        self.disables.load(Ordering::SeqCst)
    }

    pub fn fail_next_disables(&self, fail: bool) {
        self.fail_disable.store(fail, Ordering::SeqCst);
    }
}

#[async_trait]
impl AutoResponder for RecordingResponder {
    async fn enable(&self, _user_id: &UserId) -> RegistryResult<()> {
        self.enables.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }

    async fn disable(&self, _user_id: &UserId) -> RegistryResult<()> {
        if self.fail_disable.load(Ordering::SeqCst) {
            return Err(DomainError::ResponderUnavailable(
                "injected failure".into(),
            ));
        }
        self.disables.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}

/// Fully wired in-process presence stack
pub struct TestHarness {
    pub engine: StatusTransitionEngine,
    pub custom_statuses: CustomStatusService,
    pub resolver: BatchStatusResolver,
    pub registry: Arc<MemoryStatusRegistry>,
    pub responder: Arc<RecordingResponder>,
    pub features: Arc<SharedFeatures>,
}

impl TestHarness {
    /// Build a harness with the default feature toggles
    pub fn new() -> Self {
        Self::with_features(FeatureConfig::default())
    }

    /// Build a harness with explicit feature toggles
    pub fn with_features(features: FeatureConfig) -> Self {
        let registry = Arc::new(MemoryStatusRegistry::new());
        let responder = Arc::new(RecordingResponder::default());
        let gate = Arc::new(SharedFeatures::new(features));
        let ctx = ServiceContext::new(
            registry.clone(),
            Arc::new(MemoryCustomStatusStore::default()),
            responder.clone(),
            gate.clone(),
        );

        Self {
            engine: StatusTransitionEngine::new(ctx.clone()),
            custom_statuses: CustomStatusService::new(ctx.clone()),
            resolver: BatchStatusResolver::new(ctx),
            registry,
            responder,
            features: gate,
        }
    }

    /// Seed a user directly into the registry with the given status
    pub async fn seed_status(&self, user_id: &UserId, kind: StatusKind) {
        self.registry
            .set(Status::new(user_id.clone(), kind))
            .await
            .expect("in-memory registry never fails");
    }

    /// Read the committed status straight from the registry
    pub async fn committed_status(&self, user_id: &UserId) -> Option<Status> {
        self.registry
            .get(user_id)
            .await
            .expect("in-memory registry never fails")
    }
}

impl Default for TestHarness {
    fn default() -> Self {
        Self::new()
    }
}
