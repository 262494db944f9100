mod app;
mod cli;
mod library;
mod logging;
mod paths;

use anyhow::Result;
use clap::Parser;

fn main() -> Result<()> {
    let cli = cli::Cli::parse();
    logging::init_logging(cli.log_level)?;
    app::run(cli)
}
