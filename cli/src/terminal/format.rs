use std::time::Duration;

use colored::*;
use leash_common::device::{ConnectionResult, DeviceAddress, DeviceInfo};
use leash_common::trust::TrustedDevices;

use crate::terminal::colors;

pub type Detail = (String, ColoredString);

pub fn address(address: &DeviceAddress) -> ColoredString {
    address.as_str().color(colors::DEVICE_ADDR)
}

pub fn range_status(in_range: bool) -> ColoredString {
    if in_range {
        "in range".color(colors::IN_RANGE).bold()
    } else {
        "out of range".color(colors::OUT_OF_RANGE).bold()
    }
}

pub fn elapsed(duration: Duration) -> ColoredString {
    format!("{:.2}s", duration.as_secs_f64()).bold().yellow()
}

pub fn device_details(device: &DeviceInfo, trusted: &TrustedDevices) -> Vec<Detail> {
    let trust: ColoredString = if trusted.contains(device.address()) {
        "yes".color(colors::IN_RANGE)
    } else {
        "no".color(colors::SEPARATOR)
    };

    vec![
        ("Address".to_string(), address(device.address())),
        ("Trusted".to_string(), trust),
    ]
}

/// The name a result is shown under: the trusted name when known, the address otherwise.
pub fn result_label(result: &ConnectionResult, trusted: &TrustedDevices) -> String {
    trusted
        .get(result.address())
        .map(|info| info.name().to_string())
        .unwrap_or_else(|| result.address().to_string())
}
