//! Wiring from parsed arguments to written output.

use tracing::{debug, warn};

use crate::cli::Cli;
use crate::config::Config;
use crate::context::AppContext;
use crate::error::Result;
use crate::handlers::dispatch;
use crate::output::{emit, OutputDestination};

/// Runs `cli` with configuration from the environment.
pub fn run(cli: Cli) -> Result<()> {
    let config = Config::load()?.with_overrides(cli.overrides())?;
    let ctx = AppContext::open(config)?;
    let output = dispatch(&ctx, &cli.command);

    // The store is closed even when the command failed
    if let Err(err) = ctx.close() {
        warn!(error = %err, "failed to close document store");
    }

    let dest = OutputDestination::from_option(cli.out.clone());
    emit(&output?, cli.output, &dest)?;
    Ok(())
}

/// Runs the command in `cli` and returns the formatted output.
pub fn execute(ctx: &AppContext, cli: &Cli) -> Result<String> {
    let output = dispatch(ctx, &cli.command)?;
    debug!(template = output.template, mode = ?cli.output, "command finished");
    Ok(output.format(cli.output)?)
}
