//! Command dispatch logic.
//!
//! Responsibilities:
//! - Route parsed CLI arguments to appropriate command handlers.
//!
//! Does NOT handle:
//! - CLI structure definitions (see `args` module).
//! - Configuration loading (see `config_context`).

use anyhow::{Result, anyhow};

use crate::args::{Cli, Commands};
use crate::commands;
use crate::config_context::CommandContext;

pub(crate) async fn run_command(cli: Cli, context: CommandContext) -> Result<()> {
    match cli.command {
        Commands::Deploy { .. } => {
            let deploy_config = context
                .deploy
                .ok_or_else(|| anyhow!("deploy configuration was not built"))?;
            commands::deploy::run(context.config, deploy_config, cli.output).await?;
        }
        Commands::List => {
            commands::list::run(context.config, cli.output).await?;
        }
    }

    Ok(())
}
