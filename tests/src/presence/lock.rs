use leash_common::device::DiscoveredDevice;
use leash_common::error::RadioError;
use leash_common::radio::ConnectOutcome;
use leash_core::presence::PresenceService;
use leash_core::verdict::{LockAction, Verdict};

use crate::utils::{address, addresses, CountingLock, MockRadio};

#[tokio::test]
async fn everyone_present_leaves_the_session_alone() {
    let radio = MockRadio::new()
        .hears(DiscoveredDevice::new(address("AA:BB")).with_connected(true))
        .hears(DiscoveredDevice::new(address("CC:DD")).with_service("svc"))
        .reachable("CC:DD", "svc");
    let service = PresenceService::new(Box::new(radio));
    let lock = CountingLock::working();

    let report = service
        .check(None, addresses(&["AA:BB", "CC:DD"]), &lock, false)
        .await
        .unwrap();

    assert_eq!(report.verdict, Verdict::AllPresent);
    assert_eq!(report.action, LockAction::NotNeeded);
    assert_eq!(lock.calls(), 0);
}

#[tokio::test]
async fn a_missing_device_locks_the_session() {
    let radio = MockRadio::new()
        .hears(DiscoveredDevice::new(address("AA:BB")).with_service("svc"))
        .failing_with("AA:BB", ConnectOutcome::Transport("page timeout".into()));
    let service = PresenceService::new(Box::new(radio));
    let lock = CountingLock::working();

    let report = service
        .check(Some(3), addresses(&["AA:BB"]), &lock, false)
        .await
        .unwrap();

    assert_eq!(report.verdict, Verdict::Missing(addresses(&["AA:BB"])));
    assert_eq!(report.action, LockAction::Locked);
    assert_eq!(lock.calls(), 1);
}

#[tokio::test]
async fn a_broken_radio_locks_the_session() {
    let radio =
        MockRadio::new().discovery_fails(RadioError::Discovery("org.bluez.Error.Failed".into()));
    let service = PresenceService::new(Box::new(radio));
    let lock = CountingLock::working();

    let report = service
        .check(None, addresses(&["AA:BB"]), &lock, false)
        .await
        .unwrap();

    assert!(report.verdict.should_lock());
    assert_eq!(report.action, LockAction::Locked);
}

#[tokio::test]
async fn dry_run_never_touches_the_lock() {
    let service = PresenceService::new(Box::new(MockRadio::new()));
    let lock = CountingLock::working();

    let report = service
        .check(None, addresses(&["AA:BB"]), &lock, true)
        .await
        .unwrap();

    assert_eq!(report.action, LockAction::DryRun);
    assert_eq!(lock.calls(), 0);
}

#[tokio::test]
async fn a_refused_lock_is_reported() {
    let service = PresenceService::new(Box::new(MockRadio::new()));
    let lock = CountingLock::refusing();

    let report = service
        .check(None, addresses(&["AA:BB"]), &lock, false)
        .await
        .unwrap();

    assert_eq!(report.action, LockAction::LockFailed);
    assert_eq!(lock.calls(), 1);
}

#[tokio::test]
async fn a_bad_cap_fails_before_any_lock() {
    let service = PresenceService::new(Box::new(MockRadio::new()));
    let lock = CountingLock::working();

    assert!(service
        .check(Some(0), addresses(&["AA:BB"]), &lock, false)
        .await
        .is_err());
    assert_eq!(lock.calls(), 0);
}

#[tokio::test]
async fn all_visible_checks_whatever_discovery_found() {
    let radio = MockRadio::new()
        .hears(DiscoveredDevice::new(address("AA:BB")).with_connected(true))
        .hears(DiscoveredDevice::new(address("CC:DD")).with_connected(true));
    let service = PresenceService::new(Box::new(radio));
    let lock = CountingLock::working();

    let report = service.check_all_visible(&lock, false).await.unwrap();

    assert_eq!(report.results.len(), 2);
    assert_eq!(report.action, LockAction::NotNeeded);
}
