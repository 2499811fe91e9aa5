//! camp-cli - Command line tool for finding open recreation.gov campsites.

use clap::Parser;
use log::debug;

#[derive(Parser)]
#[command(
    name = "camp-cli",
    version,
    about = "Campsite availability filtering toolkit"
)]
struct Cli {
    #[command(subcommand)]
    command: camp_cmd::Command,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    debug!("Starting camp-cli");
    camp_cmd::run(cli.command).await
}
