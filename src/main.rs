use anyhow::Result;
use clap::Parser;

use echo_progress::settings::init_logger;

fn main() -> Result<()> {
    init_logger()?;
    let cli = echo_progress::cli::Cli::parse();
    echo_progress::run(cli)?;
    Ok(())
}
