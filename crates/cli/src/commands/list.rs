//! List command implementation.

use anyhow::{Context, Result};
use tracing::info;

use azsearch_config::Config;

use crate::args::OutputFormat;
use crate::formatters::get_formatter;

pub async fn run(config: Config, output_format: OutputFormat) -> Result<()> {
    let client = crate::commands::connect(&config).await?;

    info!("Listing indexes");
    let names = client
        .list_indexes()
        .await
        .context("Failed to list indexes")?;

    let output = get_formatter(output_format).format_indexes(&names)?;
    print!("{}", output);
    Ok(())
}
