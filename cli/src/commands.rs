pub mod check;
pub mod discover;
pub mod scan;
pub mod trust;

use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand};
use leash_common::config::Config;
use leash_common::device::DeviceAddress;
use leash_core::presence::PresenceService;
use leash_radio::RadioSettings;

#[derive(Parser)]
#[command(name = "leash", version)]
#[command(about = "Locks the session when your trusted bluetooth devices walk away.")]
pub struct CommandLine {
    #[command(subcommand)]
    pub command: Commands,

    /// Less output: -q drops decoration, -qq prints results only
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub quiet: u8,

    /// More logging: -v for debug, -vv for trace
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    /// Read configuration from FILE instead of the per-user config directory
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List the bluetooth devices visible right now
    #[command(alias = "d")]
    Discover {
        /// Add every visible device to the trusted list
        #[arg(long)]
        trust: bool,
    },
    /// Report which of the given devices are in range, without locking
    #[command(alias = "s")]
    Scan {
        #[arg(required = true, value_name = "ADDRESS")]
        addresses: Vec<DeviceAddress>,

        /// Stop discovery after this many devices
        #[arg(short, long, allow_negative_numbers = true)]
        max_devices: Option<i64>,
    },
    /// Check the trusted devices and lock the session if any is missing
    #[command(alias = "c")]
    Check {
        /// Check every device a full discovery finds instead of the trusted list
        #[arg(short, long, conflicts_with = "max_devices")]
        all_visible: bool,

        /// Report the verdict without locking
        #[arg(short = 'n', long)]
        dry_run: bool,

        /// Stop discovery after this many devices
        #[arg(short, long, allow_negative_numbers = true)]
        max_devices: Option<i64>,
    },
    /// Manage the trusted device list
    #[command(alias = "t")]
    Trust {
        #[command(subcommand)]
        action: TrustAction,
    },
}

#[derive(Subcommand)]
pub enum TrustAction {
    /// Trust a device
    #[command(alias = "a")]
    Add {
        address: DeviceAddress,
        /// Display name, defaults to the address
        #[arg(long)]
        name: Option<String>,
    },
    /// Stop trusting a device
    #[command(alias = "rm")]
    Remove { address: DeviceAddress },
    /// Show the trusted devices
    #[command(alias = "ls")]
    List,
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

/// Opens the radio described by `cfg`. An unusable adapter yields a service whose scans
/// report everything out of range.
pub async fn presence_service(cfg: &Config) -> PresenceService {
    let settings = RadioSettings {
        sweep: cfg.scan.sweep(),
        probe_timeout: cfg.scan.probe_timeout(),
    };
    PresenceService::new(leash_radio::open_or_offline(settings).await)
}
