use std::io;

use anyhow::Context;
use clap::Parser;

use figures::cli::Cli;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    figures::logging::init()?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    figures::run(cli.dispatch, &mut out)
        .with_context(|| format!("Unable to draw shapes with {:?} dispatch", cli.dispatch))?;
    Ok(())
}
