use anyhow::Context;
use clap::Parser;

use tictactoe::{app, logging, Cli};

fn main() -> anyhow::Result<()> {
    let config = Cli::parse().into_config();
    logging::init(&config.log_file)
        .with_context(|| format!("cannot open log file {}", config.log_file.display()))?;
    app::run(&config)
}
