use leash_common::config::Config;
use leash_common::device::DeviceInfo;
use leash_common::success;
use leash_common::trust::{TrustedDeviceStore, TrustedDevices};
use leash_core::trust::TomlTrustStore;
use tracing::{info, warn};

use crate::commands::TrustAction;
use crate::mprint;
use crate::terminal::{format, print};

pub fn trust(action: TrustAction, cfg: &Config) -> anyhow::Result<()> {
    let store = TomlTrustStore::default_location()?;
    run(&store, action, cfg)
}

fn run(store: &dyn TrustedDeviceStore, action: TrustAction, cfg: &Config) -> anyhow::Result<()> {
    let mut trusted: TrustedDevices = store.load()?;

    match action {
        TrustAction::Add { address, name } => {
            let device = DeviceInfo::new(name.unwrap_or_default(), address);
            let label: String = format!("{} ({})", device.name(), device.address());
            let added: bool = trusted.add(device);
            store.save(&trusted)?;
            if added {
                success!("Trusting {label}");
            } else {
                info!("Already trusted, name set to {label}");
            }
        }
        TrustAction::Remove { address } => match trusted.remove(&address) {
            Some(device) => {
                store.save(&trusted)?;
                success!("No longer trusting {} ({address})", device.name());
            }
            None => warn!("{address} is not trusted"),
        },
        TrustAction::List => list(&trusted, cfg),
    }

    Ok(())
}

fn list(trusted: &TrustedDevices, cfg: &Config) {
    print::header("trusted devices", cfg.quiet);

    if trusted.is_empty() {
        print::no_results(cfg.quiet);
        return;
    }

    for (idx, device) in trusted.iter().enumerate() {
        match cfg.quiet {
            2 => print::print(&format!("{} {}", device.address(), device.name())),
            _ => {
                print::device_tree(idx, device.name(), &format::device_details(device, trusted));
                if idx + 1 != trusted.len() {
                    mprint!();
                }
            }
        }
    }
}
