//! azsearch-deploy - redeploy search service indexes from JSON definitions.
//!
//! Responsibilities:
//! - Parse command-line arguments and environment variables.
//! - Run the deployment or listing through the shared client library.
//! - Map failures to structured exit codes.
//!
//! Does NOT handle:
//! - REST API implementation or the deployment algorithm (see `crates/client`).
//!
//! Invariants:
//! - `load_dotenv()` is called BEFORE CLI parsing to allow `.env` to provide clap defaults.
//! - Logs go to stderr; results go to stdout.

mod args;
mod commands;
mod config_context;
mod dispatch;
mod error;
mod formatters;

use args::{Cli, LogFormat};
use azsearch_config::ConfigLoader;
use clap::Parser;
use config_context::CommandContext;
use dispatch::run_command;
use error::{ExitCode, ExitCodeExt};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

#[tokio::main]
async fn main() {
    // Load .env file BEFORE CLI parsing so clap env defaults can read .env values
    if let Err(e) = ConfigLoader::new().load_dotenv() {
        eprintln!("Failed to load environment: {}", e);
        std::process::exit(ExitCode::ConfigError.as_i32());
    }

    let cli = Cli::parse();

    init_logging(cli.log_format);

    let context = match CommandContext::from_cli(&cli) {
        Ok(context) => context,
        Err(e) => {
            eprintln!("Failed to build configuration: {:#}", e);
            std::process::exit(ExitCode::ConfigError.as_i32());
        }
    };

    let exit_code = match run_command(cli, context).await {
        Ok(()) => ExitCode::Success,
        Err(e) => {
            eprintln!("{:#}", e);
            e.exit_code()
        }
    };

    std::process::exit(exit_code.as_i32());
}

fn init_logging(format: LogFormat) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(filter);
    match format {
        LogFormat::Text => registry
            .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
            .init(),
        LogFormat::Json => registry
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .init(),
    }
}
