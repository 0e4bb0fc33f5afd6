//! Command trait and context for dispatching commands

use std::time::Instant;

use crate::cli::Cli;
use wikiroute_core::config::RunConfig;
use wikiroute_core::error::Result;

/// Shared context for command execution
pub struct CommandContext<'a> {
    pub cli: &'a Cli,
    pub config: RunConfig,
    pub start: Instant,
}

impl<'a> CommandContext<'a> {
    pub fn new(cli: &'a Cli, config: RunConfig, start: Instant) -> Self {
        Self { cli, config, start }
    }
}

/// Trait for commands that can be executed
pub trait Command {
    fn execute(&self, ctx: &CommandContext) -> Result<()>;
}

/// No-op command (when no subcommand is provided)
pub struct NoCommand;

impl Command for NoCommand {
    fn execute(&self, _ctx: &CommandContext) -> Result<()> {
        println!("wikiroute {}", env!("CARGO_PKG_VERSION"));
        println!();
        println!("Shortest paths over weighted edge-list graphs.");
        println!();
        println!("Run `wikiroute --help` for usage information.");
        Ok(())
    }
}
