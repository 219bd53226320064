use std::{io::stdout, thread, time::Duration};

use anyhow::{Context, Result};
use tracing::debug;

pub mod cli;
pub mod settings;
pub mod ux;

use cli::Cli;
use ux::progress::TextProgressBar;

/// Bar width in terminal cells.
const BAR_WIDTH: usize = 20;

/// Pause after every update so a build tool firing steps back to back
/// does not flood the terminal.
const RENDER_THROTTLE: Duration = Duration::from_millis(50);

#[cfg(not(tarpaulin_include))]
pub fn run(cli: Cli) -> Result<()> {
    let label = cli.remainder.join(" ");
    debug!(
        stepno = cli.stepno,
        nsteps = cli.nsteps,
        label = %label,
        "rendering progress line"
    );

    let bar = TextProgressBar::new(BAR_WIDTH);
    bar.emit(&mut stdout(), cli.stepno, cli.nsteps, &label)
        .context("Failed to write progress line to stdout")?;

    thread::sleep(RENDER_THROTTLE);

    Ok(())
}
