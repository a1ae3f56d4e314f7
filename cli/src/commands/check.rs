use anyhow::bail;
use colored::*;
use leash_common::config::Config;
use leash_common::success;
use leash_common::trust::{TrustedDeviceStore, TrustedDevices};
use leash_core::presence::CheckReport;
use leash_core::system::SystemSessionLock;
use leash_core::trust::TomlTrustStore;
use leash_core::verdict::LockAction;
use tracing::{Instrument, info_span, warn};
use tracing_indicatif::span_ext::IndicatifSpanExt;

use crate::commands::{self, scan};
use crate::terminal::{colors, print};

pub async fn check(
    all_visible: bool,
    max_devices: Option<i64>,
    cfg: &Config,
) -> anyhow::Result<()> {
    print::header("presence check", cfg.quiet);

    let lock = SystemSessionLock::new(cfg.lock.command.clone());
    let loaded = TomlTrustStore::default_location().and_then(|store| store.load());
    let trusted: TrustedDevices = trust_list(loaded, all_visible)?;
    let service = commands::presence_service(cfg).await;

    let span = info_span!("check", indicatif.pb_show = true);
    let report: CheckReport = if all_visible {
        span.pb_set_message("Checking every visible device...");
        service
            .check_all_visible(&lock, cfg.dry_run)
            .instrument(span)
            .await?
    } else {
        if trusted.is_empty() {
            bail!(
                "No trusted devices. Add one with `leash trust add <ADDRESS>` or pass --all-visible"
            );
        }
        span.pb_set_message(&format!("Checking {} trusted device(s)...", trusted.len()));
        service
            .check(
                max_devices.or(cfg.scan.max_devices),
                trusted.addresses(),
                &lock,
                cfg.dry_run,
            )
            .instrument(span)
            .await?
    };

    print::header("check results", cfg.quiet);
    scan::print_results(&report.results, &trusted, cfg);
    report_outcome(&report, cfg)
}

/// With `--all-visible` the list only labels results, so a broken store is tolerated.
fn trust_list(
    loaded: anyhow::Result<TrustedDevices>,
    all_visible: bool,
) -> anyhow::Result<TrustedDevices> {
    if all_visible {
        Ok(scan::names_or_empty(loaded))
    } else {
        loaded
    }
}

fn report_outcome(report: &CheckReport, cfg: &Config) -> anyhow::Result<()> {
    if cfg.quiet == 0 {
        print::fat_separator();
    }

    let missing: usize = report.verdict.missing().len();

    match report.action {
        LockAction::NotNeeded => {
            success!("Every device is in range, session stays unlocked");
        }
        LockAction::Locked => {
            let count: ColoredString = format!("{missing} device(s)").color(colors::OUT_OF_RANGE);
            success!("{count} out of range, session locked");
        }
        LockAction::DryRun => {
            warn!("{missing} device(s) out of range, would lock the session");
        }
        LockAction::LockFailed => {
            bail!("{missing} device(s) out of range but the session could not be locked");
        }
    }

    Ok(())
}
