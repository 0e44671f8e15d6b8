//! Presence engine integration tests
//!
//! End-to-end scenarios over the fully wired in-process stack: transition
//! engine, custom status service, and batch resolver sharing one registry.
//!
//! Run with: cargo test -p integration-tests --test presence_tests

use std::sync::Arc;
use std::time::Duration;

use integration_tests::{unique_user_id, RecordingResponder, TestHarness};
use presence_common::{AppConfig, FeatureConfig, SharedFeatures};
use presence_core::{CustomStatus, StatusDuration, StatusKind};
use presence_service::{CustomStatusService, ServiceContext, ServiceError, StatusChangeRequest};
use presence_store::{MemoryCustomStatusStore, MemoryStatusRegistry};

fn timed_dnd_features() -> FeatureConfig {
    FeatureConfig {
        enable_custom_statuses: true,
        timed_dnd: true,
    }
}

// ============================================================================
// Out-of-office exit
// ============================================================================

#[tokio::test]
async fn test_leaving_ooo_disables_responder_and_commits_online() {
    let harness = TestHarness::new();
    let user = unique_user_id();
    harness.seed_status(&user, StatusKind::OutOfOffice).await;

    let status = harness
        .engine
        .set_status(&user, &StatusChangeRequest::new("online"))
        .await
        .unwrap();

    assert_eq!(status.status, StatusKind::Online);
    assert_eq!(harness.responder.disable_count(), 1);
    assert_eq!(
        harness.committed_status(&user).await.unwrap().status,
        StatusKind::Online
    );
}

#[tokio::test]
async fn test_activation_then_exit_round_trip() {
    let harness = TestHarness::new();
    let user = unique_user_id();

    harness.engine.activate_out_of_office(&user).await.unwrap();
    assert_eq!(harness.responder.enable_count(), 1);

    harness
        .engine
        .set_status(&user, &StatusChangeRequest::new("away"))
        .await
        .unwrap();
    assert_eq!(harness.responder.disable_count(), 1);
    assert_eq!(
        harness.committed_status(&user).await.unwrap().status,
        StatusKind::Away
    );
}

#[tokio::test]
async fn test_failed_disable_keeps_ooo_and_responder_consistent() {
    let harness = TestHarness::new();
    let user = unique_user_id();
    harness.seed_status(&user, StatusKind::OutOfOffice).await;
    harness.responder.fail_next_disables(true);

    let result = harness
        .engine
        .set_status(&user, &StatusChangeRequest::new("online"))
        .await;

    assert!(matches!(result, Err(ServiceError::Unavailable(_))));
    // Still out of office: the responder was never confirmed off
    assert_eq!(
        harness.committed_status(&user).await.unwrap().status,
        StatusKind::OutOfOffice
    );

    // Once the responder recovers, the exit goes through exactly once
    harness.responder.fail_next_disables(false);
    harness
        .engine
        .set_status(&user, &StatusChangeRequest::new("online"))
        .await
        .unwrap();
    assert_eq!(harness.responder.disable_count(), 1);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_ooo_exits_disable_exactly_once() {
    let harness = Arc::new(TestHarness::new());
    let user = unique_user_id();
    harness.seed_status(&user, StatusKind::OutOfOffice).await;

    let first = {
        let harness = harness.clone();
        let user = user.clone();
        tokio::spawn(async move {
            harness
                .engine
                .set_status(&user, &StatusChangeRequest::new("online"))
                .await
        })
    };
    let second = {
        let harness = harness.clone();
        let user = user.clone();
        tokio::spawn(async move {
            harness
                .engine
                .set_status(&user, &StatusChangeRequest::new("away"))
                .await
        })
    };

    first.await.unwrap().unwrap();
    second.await.unwrap().unwrap();

    // Exactly one disable, never two and never zero
    assert_eq!(harness.responder.disable_count(), 1);

    let final_status = harness.committed_status(&user).await.unwrap().status;
    assert!(
        final_status == StatusKind::Online || final_status == StatusKind::Away,
        "unexpected final status: {final_status}"
    );
}

// ============================================================================
// Invalid input
// ============================================================================

#[tokio::test]
async fn test_bogus_literal_is_rejected_without_side_effects() {
    let harness = TestHarness::new();
    let user = unique_user_id();
    harness.seed_status(&user, StatusKind::OutOfOffice).await;

    let result = harness
        .engine
        .set_status(&user, &StatusChangeRequest::new("bogus"))
        .await;

    assert!(matches!(result, Err(ServiceError::InvalidArgument(_))));
    assert_eq!(harness.responder.disable_count(), 0);
    assert_eq!(
        harness.committed_status(&user).await.unwrap().status,
        StatusKind::OutOfOffice
    );
}

// ============================================================================
// Timed DND
// ============================================================================

#[tokio::test]
async fn test_timed_dnd_reverts_to_online_after_expiry() {
    let harness = TestHarness::with_features(timed_dnd_features());
    let user = unique_user_id();
    let end = chrono::Utc::now() + chrono::Duration::milliseconds(50);

    let status = harness
        .engine
        .set_status(&user, &StatusChangeRequest::dnd_until(end))
        .await
        .unwrap();
    assert_eq!(status.status, StatusKind::Dnd);
    assert_eq!(status.dnd_end_time, Some(end));

    tokio::time::sleep(Duration::from_millis(400)).await;

    assert_eq!(
        harness.committed_status(&user).await.unwrap().status,
        StatusKind::Online
    );
}

#[tokio::test]
async fn test_explicit_change_supersedes_pending_expiry() {
    let harness = TestHarness::with_features(timed_dnd_features());
    let user = unique_user_id();
    let end = chrono::Utc::now() + chrono::Duration::milliseconds(50);

    harness
        .engine
        .set_status(&user, &StatusChangeRequest::dnd_until(end))
        .await
        .unwrap();
    harness
        .engine
        .set_status(&user, &StatusChangeRequest::new("away"))
        .await
        .unwrap();

    tokio::time::sleep(Duration::from_millis(400)).await;

    // The stale expiry must not have reverted the explicit change
    assert_eq!(
        harness.committed_status(&user).await.unwrap().status,
        StatusKind::Away
    );
}

#[tokio::test]
async fn test_plain_dnd_when_timed_dnd_disabled() {
    let harness = TestHarness::new();
    let user = unique_user_id();
    let end = chrono::Utc::now() + chrono::Duration::minutes(30);

    let status = harness
        .engine
        .set_status(&user, &StatusChangeRequest::dnd_until(end))
        .await
        .unwrap();

    assert_eq!(status.status, StatusKind::Dnd);
    assert!(status.dnd_end_time.is_none());
}

// ============================================================================
// Custom status lifecycle
// ============================================================================

#[tokio::test]
async fn test_set_then_remove_leaves_no_trace() {
    let harness = TestHarness::new();
    let user = unique_user_id();
    let vacation = CustomStatus::new("🌴", "Vacation").with_duration(StatusDuration::Today);

    // The "today" preset needs its implied expiry attached
    let now = chrono::Utc::now();
    let vacation = vacation.with_expiry(
        StatusDuration::Today
            .implied_expiry(now)
            .expect("today implies an expiry"),
    );

    harness
        .custom_statuses
        .set_custom_status(&user, vacation)
        .await
        .unwrap();
    harness
        .custom_statuses
        .remove_custom_status(&user)
        .await
        .unwrap();

    assert!(harness
        .custom_statuses
        .get_custom_status(&user)
        .await
        .unwrap()
        .is_none());
    assert!(harness
        .custom_statuses
        .recent_custom_statuses(&user)
        .await
        .unwrap()
        .is_empty());
}

#[tokio::test]
async fn test_remove_recent_forgets_suggestion_only() {
    let harness = TestHarness::new();
    let user = unique_user_id();
    let lunch = CustomStatus::new("🍕", "Lunch");

    harness
        .custom_statuses
        .set_custom_status(&user, lunch.clone())
        .await
        .unwrap();
    harness
        .custom_statuses
        .add_recent_custom_status(&user, lunch.clone())
        .await
        .unwrap();

    harness
        .custom_statuses
        .remove_recent_custom_status(&user, &lunch)
        .await
        .unwrap();

    assert!(harness
        .custom_statuses
        .recent_custom_statuses(&user)
        .await
        .unwrap()
        .is_empty());
    assert!(harness
        .custom_statuses
        .get_custom_status(&user)
        .await
        .unwrap()
        .is_some());
}

#[tokio::test]
async fn test_custom_statuses_disabled_short_circuits() {
    let harness = TestHarness::with_features(FeatureConfig {
        enable_custom_statuses: false,
        timed_dnd: false,
    });
    let user = unique_user_id();

    let result = harness
        .custom_statuses
        .set_custom_status(&user, CustomStatus::new("🌴", "Vacation"))
        .await;
    assert!(matches!(result, Err(ServiceError::FeatureDisabled(_))));

    // Flipping the toggle takes effect on the next call
    harness.features.update(FeatureConfig::default());
    harness
        .custom_statuses
        .set_custom_status(&user, CustomStatus::new("🌴", "Vacation"))
        .await
        .unwrap();
}

// ============================================================================
// Configuration wiring
// ============================================================================

#[tokio::test]
async fn test_env_tuning_reaches_the_wired_stack() {
    std::env::set_var("PRESENCE_OP_TIMEOUT_MS", "250");
    std::env::set_var("RECENT_STATUS_CAP", "2");
    let config = AppConfig::from_env().unwrap();
    std::env::remove_var("PRESENCE_OP_TIMEOUT_MS");
    std::env::remove_var("RECENT_STATUS_CAP");

    let ctx = ServiceContext::from_config(
        &config.presence,
        Arc::new(MemoryStatusRegistry::new()),
        Arc::new(MemoryCustomStatusStore::from_config(&config.presence)),
        Arc::new(RecordingResponder::default()),
        Arc::new(SharedFeatures::new(config.features)),
    );
    assert_eq!(ctx.op_timeout(), Duration::from_millis(250));

    // The history capacity from the environment governs eviction
    let service = CustomStatusService::new(ctx);
    let user = unique_user_id();
    for text in ["a", "b", "c"] {
        service
            .add_recent_custom_status(&user, CustomStatus::new("📌", text))
            .await
            .unwrap();
    }
    let recent = service.recent_custom_statuses(&user).await.unwrap();
    assert_eq!(recent.len(), 2);
    assert_eq!(recent.entries()[0].text, "c");
}

// ============================================================================
// Batch resolution
// ============================================================================

#[tokio::test]
async fn test_batch_orders_results_and_omits_unknown() {
    let harness = TestHarness::new();
    let alice = unique_user_id();
    let bob = unique_user_id();
    let ghost = unique_user_id();
    harness.seed_status(&alice, StatusKind::Online).await;
    harness.seed_status(&bob, StatusKind::Dnd).await;

    let statuses = harness
        .resolver
        .get_statuses_by_ids(&[bob.to_string(), ghost.to_string(), alice.to_string()])
        .await
        .unwrap();

    assert_eq!(statuses.len(), 2);
    assert_eq!(statuses[0].user_id, bob);
    assert_eq!(statuses[1].user_id, alice);
}

#[tokio::test]
async fn test_batch_fails_whole_call_on_malformed_id() {
    let harness = TestHarness::new();
    let alice = unique_user_id();
    harness.seed_status(&alice, StatusKind::Online).await;

    let result = harness
        .resolver
        .get_statuses_by_ids(&[alice.to_string(), "malformed!".to_string()])
        .await;
    assert!(matches!(result, Err(ServiceError::InvalidArgument(_))));

    let result = harness.resolver.get_statuses_by_ids(&[]).await;
    assert!(matches!(result, Err(ServiceError::InvalidArgument(_))));
}

#[tokio::test]
async fn test_single_lookup_not_found_vs_batch_omission() {
    let harness = TestHarness::new();
    let ghost = unique_user_id();
    let alice = unique_user_id();
    harness.seed_status(&alice, StatusKind::Away).await;

    // Single path: explicit not-found
    let result = harness.resolver.get_status(&ghost.to_string()).await;
    assert!(matches!(result, Err(ServiceError::NotFound { .. })));

    // Batch path: silently omitted
    let statuses = harness
        .resolver
        .get_statuses_by_ids(&[alice.to_string(), ghost.to_string()])
        .await
        .unwrap();
    assert_eq!(statuses.len(), 1);
}

#[tokio::test]
async fn test_resolver_sees_engine_commits() {
    let harness = TestHarness::new();
    let user = unique_user_id();

    harness
        .engine
        .set_status(&user, &StatusChangeRequest::new("dnd"))
        .await
        .unwrap();

    let status = harness.resolver.get_status(&user.to_string()).await.unwrap();
    assert_eq!(status.status, StatusKind::Dnd);
}
