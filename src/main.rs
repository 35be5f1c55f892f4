mod cli;

use anyhow::Result;
use clap::Parser;

use cli::types::Cli;

fn main() -> Result<()> {
    let cli = Cli::parse();
    fieldobs::logging::init(cli.log_level.as_deref());
    cli::dispatch::dispatch(cli)
}
