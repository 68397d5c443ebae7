//! Heat CLI - summarize daily temperature tables as monthly heatmaps.

use clap::Parser;

#[derive(Parser)]
#[command(
    name = "heat-cli",
    version,
    about = "Monthly max/min temperature heatmaps from daily records"
)]
struct Cli {
    #[command(subcommand)]
    command: heat_cmd::Command,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    log::debug!("heat-cli {}", env!("CARGO_PKG_VERSION"));
    heat_cmd::run(cli.command).await
}
