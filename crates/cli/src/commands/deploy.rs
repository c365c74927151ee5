//! Deploy command implementation.

use anyhow::{Context, Result};
use tracing::{info, warn};

use azsearch_client::deploy;
use azsearch_config::{Config, DeployConfig};

use crate::args::OutputFormat;
use crate::error::DeploymentFailed;
use crate::formatters::get_formatter;

pub async fn run(
    config: Config,
    deploy_config: DeployConfig,
    output_format: OutputFormat,
) -> Result<()> {
    let client = crate::commands::connect(&config).await?;

    info!(
        folder = %deploy_config.index_folder.display(),
        max_call_count = deploy_config.throttle.max_call_count,
        pause_secs = deploy_config.throttle.pause.as_secs(),
        policy = %deploy_config.failure_policy,
        "Starting deployment"
    );

    let report = deploy(&client, &deploy_config)
        .await
        .context("Deployment failed")?;

    let output = get_formatter(output_format).format_report(&report)?;
    print!("{}", output);

    if report.has_failures() {
        warn!(
            failures = report.failures.len(),
            "Deployment finished with failures"
        );
    } else {
        info!(
            deleted = report.deleted.len(),
            created = report.created.len(),
            "Deployment finished"
        );
    }

    if report.is_failure(deploy_config.failure_policy) {
        return Err(DeploymentFailed {
            failures: report.failures.len(),
            aborted: report.aborted,
        }
        .into());
    }
    Ok(())
}
