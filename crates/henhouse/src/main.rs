use clap::Parser;

use henhouse::cli::Cli;

fn main() -> anyhow::Result<()> {
    henhouse::logging::init();
    let cli = Cli::parse();
    henhouse::app::run(cli)?;
    Ok(())
}
