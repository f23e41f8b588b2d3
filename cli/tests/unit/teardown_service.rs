//! Tests for the `teardown_lease` application service.

use lease_action::application::services::teardown::{NO_LEASE_WARNING, teardown_lease};
use lease_action::domain::Outcome;

use crate::mocks::{Event, FakeRunner, MemoryActions, RecordingReporter, script};

fn recorded_lease() -> MemoryActions {
    MemoryActions::with_state(&[
        ("lease-id", "abc123"),
        ("client-ip", "10.0.0.5"),
        ("peer-issuer-url", "https://peers.example"),
        ("authentik-url", "https://auth.example"),
        ("authentik-client-id", "ci-runner"),
    ])
}

#[tokio::test]
async fn missing_lease_skips_cleanup() {
    let runner = FakeRunner::exiting(0);
    let reporter = RecordingReporter::default();

    let outcome = teardown_lease(
        &script("scripts/teardown-lease.sh"),
        &runner,
        &MemoryActions::default(),
        &reporter,
    )
    .await;

    assert_eq!(outcome, Outcome::Warned(NO_LEASE_WARNING.into()));
    assert!(runner.calls().is_empty());
    assert!(reporter.warnings().is_empty(), "the command layer emits the warning");
}

#[tokio::test]
async fn empty_lease_id_skips_cleanup() {
    let runner = FakeRunner::exiting(0);
    let state = MemoryActions::with_state(&[("lease-id", "")]);

    let outcome = teardown_lease(
        &script("scripts/teardown-lease.sh"),
        &runner,
        &state,
        &RecordingReporter::default(),
    )
    .await;

    assert!(matches!(outcome, Outcome::Warned(_)));
    assert!(runner.calls().is_empty());
}

#[tokio::test]
async fn cleanup_receives_persisted_values() {
    let runner = FakeRunner::exiting(0);
    let reporter = RecordingReporter::default();

    let outcome = teardown_lease(
        &script("scripts/teardown-lease.sh"),
        &runner,
        &recorded_lease(),
        &reporter,
    )
    .await;

    assert_eq!(outcome, Outcome::Ok);
    let calls = runner.calls();
    assert_eq!(calls.len(), 1);
    let call = &calls[0];
    assert_eq!(call.args, vec!["scripts/teardown-lease.sh".to_string()]);
    assert_eq!(call.env_var("LEASE_ID"), Some("abc123"));
    assert_eq!(call.env_var("PEER_ISSUER_URL"), Some("https://peers.example"));
    assert_eq!(call.env_var("AUTHENTIK_URL"), Some("https://auth.example"));
    assert_eq!(call.env_var("AUTHENTIK_CLIENT_ID"), Some("ci-runner"));
    assert_eq!(call.env_var("CLIENT_IP"), None);
    assert!(
        reporter
            .events()
            .contains(&Event::Success("Released peer lease abc123".into()))
    );
}

#[tokio::test]
async fn cleanup_failure_is_downgraded_to_warning() {
    let runner = FakeRunner::exiting(1);

    let outcome = teardown_lease(
        &script("scripts/teardown-lease.sh"),
        &runner,
        &recorded_lease(),
        &RecordingReporter::default(),
    )
    .await;

    assert_eq!(
        outcome,
        Outcome::Warned("Lease teardown failed: Lease teardown script failed with exit code 1".into())
    );
    assert_eq!(runner.calls().len(), 1, "no retries");
}

#[tokio::test]
async fn spawn_error_is_downgraded_to_warning() {
    let runner = FakeRunner::failing_to_spawn("failed to spawn bash");

    let outcome = teardown_lease(
        &script("scripts/teardown-lease.sh"),
        &runner,
        &recorded_lease(),
        &RecordingReporter::default(),
    )
    .await;

    assert_eq!(
        outcome,
        Outcome::Warned("Lease teardown failed: failed to spawn bash".into())
    );
}
