//! HD CLI - Command line tool for headache day station statistics.

use clap::Parser;

#[derive(Parser)]
#[command(
    name = "hd-cli",
    version,
    about = "Headache days by US region: box-plot statistics and CSV export"
)]
struct Cli {
    #[command(subcommand)]
    command: hd_cmd::Command,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    log::debug!("hd-cli starting");
    hd_cmd::run(cli.command)
}
