pub mod check_config;
pub mod serve;

use crate::args::CommonArgs;
use crate::command::check_config::CheckConfigArgs;
use crate::command::serve::ServeArgs;
use clap::Subcommand;
use tracing::instrument;

#[derive(Subcommand)]
pub enum Command {
    #[command(name = "serve")]
    Serve(ServeArgs),
    #[command(name = "check-config")]
    CheckConfig(CheckConfigArgs),
}

impl Command {
    #[instrument(level = "trace", skip(self, common_args))]
    pub async fn run(self, common_args: CommonArgs) -> anyhow::Result<()> {
        match self {
            Command::Serve(args) => serve::run(common_args, args).await,
            Command::CheckConfig(args) => check_config::run(common_args, args),
        }
    }
}
