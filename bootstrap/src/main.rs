mod args;
mod command;
mod config;
mod locator;
mod telemetry;

use crate::args::CommonArgs;
use crate::command::Command;
use clap::Parser;

#[derive(Parser)]
#[command(version, about = "Discord bot for verifying new members")]
struct Cli {
    #[command(flatten)]
    common: CommonArgs,
    #[command(subcommand)]
    command: Command,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();

    let Cli { common, command } = Cli::parse();
    let _sentry_guard = telemetry::init(&common);

    command.run(common).await
}
