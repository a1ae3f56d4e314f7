use leash_common::config::FileConfig;
use leash_common::device::{DeviceInfo, DiscoveredDevice};
use leash_common::trust::{TrustedDeviceStore, TrustedDevices};
use leash_core::presence::PresenceService;
use leash_core::system::SystemSessionLock;
use leash_core::trust::TomlTrustStore;
use leash_core::verdict::LockAction;

use crate::utils::{address, CountingLock, MockRadio, ScratchDir};

#[test]
fn trusted_devices_survive_a_round_trip_through_disk() {
    let scratch = ScratchDir::new("roundtrip");
    let store = TomlTrustStore::new(scratch.path().join("nested").join("trusted.toml"));

    let mut trusted = TrustedDevices::new();
    trusted.add(DeviceInfo::new("Phone", address("aa:bb:cc:dd:ee:ff")));
    trusted.add(DeviceInfo::new("", address("11:22:33:44:55:66")));
    store.save(&trusted).unwrap();

    let loaded = store.load().unwrap();
    assert_eq!(loaded, trusted);
    assert_eq!(
        loaded.get(&address("11:22:33:44:55:66")).unwrap().name(),
        "11:22:33:44:55:66"
    );
}

#[tokio::test]
async fn discovered_devices_can_be_trusted_and_checked_later() {
    let scratch = ScratchDir::new("discover-then-check");
    let store = TomlTrustStore::new(scratch.path().join("trusted.toml"));

    let radio = MockRadio::new()
        .hears(
            DiscoveredDevice::new(address("AA:BB:CC:DD:EE:FF"))
                .with_name("Phone")
                .with_connected(true),
        )
        .hears(DiscoveredDevice::new(address("11:22:33:44:55:66")).with_name("Watch"));
    let service = PresenceService::new(Box::new(radio));

    let mut trusted = store.load().unwrap();
    for device in service.discover_all().await.unwrap() {
        trusted.add(device);
    }
    store.save(&trusted).unwrap();

    let lock = CountingLock::working();
    let report = service
        .check(None, store.load().unwrap().addresses(), &lock, false)
        .await
        .unwrap();

    // The watch is visible but advertises no service to probe.
    assert_eq!(report.results.len(), 2);
    assert_eq!(report.action, LockAction::Locked);
}

#[test]
fn lock_command_comes_from_the_config_file() {
    let file = FileConfig::parse(
        r#"
        [scan]
        sweep_secs = 4

        [lock]
        command = ["xdg-screensaver", "lock"]
        "#,
    )
    .unwrap();

    assert_eq!(file.scan.sweep_secs, 4);
    assert_eq!(file.scan.probe_timeout_secs, 8);
    let lock = SystemSessionLock::new(file.lock.command);
    assert_eq!(lock.command(), ["xdg-screensaver", "lock"]);
}
