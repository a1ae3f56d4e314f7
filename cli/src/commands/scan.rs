use leash_common::config::Config;
use leash_common::device::{ConnectionResult, DeviceAddress};
use leash_common::trust::{TrustedDeviceStore, TrustedDevices};
use leash_core::presence::UNBOUNDED_DEVICES;
use leash_core::trust::TomlTrustStore;
use tracing::{Instrument, info_span, warn};
use tracing_indicatif::span_ext::IndicatifSpanExt;

use crate::commands;
use crate::terminal::{format, print};

pub async fn scan(
    addresses: Vec<DeviceAddress>,
    max_devices: Option<i64>,
    cfg: &Config,
) -> anyhow::Result<()> {
    print::header("starting scanner", cfg.quiet);

    let service = commands::presence_service(cfg).await;
    let max_devices: i64 = max_devices
        .or(cfg.scan.max_devices)
        .unwrap_or(UNBOUNDED_DEVICES);

    let span = info_span!("scan", indicatif.pb_show = true);
    span.pb_set_message(&format!("Looking for {} device(s)...", addresses.len()));

    let results: Vec<ConnectionResult> = service
        .try_scan(max_devices, addresses)
        .instrument(span)
        .await?;

    print::header("scan results", cfg.quiet);
    print_results(&results, &known_names(), cfg);
    Ok(())
}

/// Trusted devices, only used to put names on results. A broken store just means no names.
pub fn known_names() -> TrustedDevices {
    names_or_empty(TomlTrustStore::default_location().and_then(|store| store.load()))
}

pub fn names_or_empty(loaded: anyhow::Result<TrustedDevices>) -> TrustedDevices {
    loaded.unwrap_or_else(|e| {
        warn!("Could not read trusted devices: {e:#}");
        TrustedDevices::new()
    })
}

pub fn print_results(results: &[ConnectionResult], trusted: &TrustedDevices, cfg: &Config) {
    if cfg.quiet >= 2 {
        for result in results {
            let state: &str = if result.is_in_range() { "in" } else { "out" };
            print::print(&format!("{} {state}", result.address()));
        }
        return;
    }

    let rows: Vec<format::Detail> = results
        .iter()
        .map(|result| {
            (
                format::result_label(result, trusted),
                format::range_status(result.is_in_range()),
            )
        })
        .collect();
    print::result_table(&rows);
}
