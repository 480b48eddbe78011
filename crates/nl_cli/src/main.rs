use clap::Parser;
use nl_fetch::init_logging;

mod cli;

use cli::{handle_command, Cli};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = cli.load_config()?;
    handle_command(cli.command, &config).await
}
