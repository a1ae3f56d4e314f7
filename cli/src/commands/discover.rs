use std::time::{Duration, Instant};

use anyhow::Context;
use colored::*;
use leash_common::config::Config;
use leash_common::device::DeviceInfo;
use leash_common::success;
use leash_common::trust::{TrustedDeviceStore, TrustedDevices};
use leash_core::trust::TomlTrustStore;
use tracing::{Instrument, info_span};
use tracing_indicatif::span_ext::IndicatifSpanExt;

use crate::commands;
use crate::mprint;
use crate::terminal::{colors, format, print};

pub async fn discover(trust: bool, cfg: &Config) -> anyhow::Result<()> {
    print::header("discovering devices", cfg.quiet);

    let service = commands::presence_service(cfg).await;
    let store = TomlTrustStore::default_location()?;
    let mut trusted: TrustedDevices = store.load()?;

    let span = info_span!("discovery", indicatif.pb_show = true);
    span.pb_set_message("Sweeping for bluetooth devices...");

    let start_time: Instant = Instant::now();
    let devices: Vec<DeviceInfo> = service
        .discover_all()
        .instrument(span)
        .await
        .context("Device discovery failed")?;

    if devices.is_empty() {
        no_devices_found(cfg);
        return Ok(());
    }

    print::header("visible devices", cfg.quiet);
    print_devices(&devices, &trusted, cfg);

    if trust {
        let mut added: usize = 0;
        for device in &devices {
            if trusted.add(device.clone()) {
                added += 1;
            }
        }
        store.save(&trusted)?;
        success!(
            "Trusted {added} new device(s), {} in {}",
            trusted.len(),
            store.path().display()
        );
    }

    print_summary(devices.len(), start_time.elapsed(), cfg);
    Ok(())
}

fn no_devices_found(cfg: &Config) {
    print::header("zero devices detected", cfg.quiet);
    print::no_results(cfg.quiet);
    if cfg.quiet > 0 {
        success!("No devices visible");
    }
}

fn print_devices(devices: &[DeviceInfo], trusted: &TrustedDevices, cfg: &Config) {
    for (idx, device) in devices.iter().enumerate() {
        match cfg.quiet {
            2 => print::print(&format!(
                "{} {}",
                format::address(device.address()),
                device.name()
            )),
            _ => {
                print::device_tree(idx, device.name(), &format::device_details(device, trusted));
                if idx + 1 != devices.len() {
                    mprint!();
                }
            }
        }
    }
}

fn print_summary(count: usize, total_time: Duration, cfg: &Config) {
    let visible: ColoredString = format!("{count} devices").bold().green();
    let output: &ColoredString = &format!(
        "Discovery Complete: {visible} visible in {}",
        format::elapsed(total_time)
    )
    .color(colors::TEXT_DEFAULT);

    match cfg.quiet {
        0 => {
            print::fat_separator();
            print::centerln(&output.to_string());
        }
        1 => success!("{}", output),
        _ => {}
    }
}
