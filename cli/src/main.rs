mod commands;
mod terminal;

use commands::{CommandLine, Commands, check, discover, scan, trust};
use leash_common::config::{Config, FileConfig};
use terminal::{logging, print};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let commands = CommandLine::parse_args();

    logging::init_logging(commands.verbose, commands.quiet);

    let file: FileConfig = FileConfig::resolve(commands.config.as_deref())?;
    let dry_run: bool = matches!(commands.command, Commands::Check { dry_run: true, .. });
    let cfg = Config::from_file(file, commands.quiet, dry_run);

    print::banner(cfg.quiet);

    match commands.command {
        Commands::Discover { trust } => discover::discover(trust, &cfg).await,
        Commands::Scan {
            addresses,
            max_devices,
        } => scan::scan(addresses, max_devices, &cfg).await,
        Commands::Check {
            all_visible,
            max_devices,
            ..
        } => check::check(all_visible, max_devices, &cfg).await,
        Commands::Trust { action } => trust::trust(action, &cfg),
    }
}
