//! Command dispatch logic for wikiroute

use std::env;
use std::time::Instant;

use crate::cli::{Cli, Commands};
use tracing::debug;
use wikiroute_core::config::RunConfig;
use wikiroute_core::error::Result;

mod command;

pub use command::{Command, CommandContext, NoCommand};

pub fn run(cli: &Cli, start: Instant) -> Result<()> {
    let cwd = env::current_dir()?;
    let config = RunConfig::discover(cli.config.as_deref(), &cwd)?;

    debug!(elapsed = ?start.elapsed(), "load_config");

    let ctx = CommandContext::new(cli, config, start);

    match &cli.command {
        None => NoCommand.execute(&ctx),
        Some(cmd) => cmd.execute(&ctx),
    }
}

impl Command for Commands {
    fn execute(&self, ctx: &CommandContext) -> Result<()> {
        match self {
            Commands::Path(args) => crate::commands::path::execute(ctx, args),
            Commands::Stats(args) => crate::commands::stats::execute(ctx, args),
            Commands::Metrics(args) => crate::commands::metrics::execute(ctx, args),
        }
    }
}
