//! log-rewrite CLI entry point.

mod commands;

use anyhow::Result;
use clap::Parser;

use log_rewrite::cli::Cli;
use log_rewrite::logging;

fn main() -> Result<()> {
    let cli = Cli::parse();

    logging::init(cli.verbose)?;

    let succeeded = commands::rewrite::handle_rewrite(&cli.file, cli.options());

    if cli.strict && !succeeded {
        std::process::exit(1);
    }

    Ok(())
}
