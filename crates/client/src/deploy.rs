//! Full index redeployment.
//!
//! A run lists the indexes on the service, deletes every one of them,
//! creates one index per definition file, and lists again so the caller can
//! see what the service ended up with. Every index call goes through a
//! single [`RateLimiter`].
//!
//! Item-level failures (one delete or one create) are logged and collected
//! in the [`DeploymentReport`]. They only stop the run early under
//! [`FailurePolicy::FailFast`]. Discovery failures and a failed initial list
//! are fatal and returned as `Err` before anything is deleted.

use std::fmt;
use std::path::PathBuf;

use tracing::{debug, error, info, warn};

use azsearch_config::{DeployConfig, FailurePolicy};

use crate::client::SearchClient;
use crate::discovery::{IndexFile, discover_index_files};
use crate::error::{ClientError, Result};
use crate::throttle::RateLimiter;

/// Phase in which an item failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Delete,
    Create,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Delete => write!(f, "delete"),
            Self::Create => write!(f, "create"),
        }
    }
}

/// A single delete or create that did not succeed.
#[derive(Debug)]
pub struct ItemFailure {
    pub stage: Stage,
    /// Index name for deletes, file path for creates.
    pub item: String,
    pub error: ClientError,
}

impl ItemFailure {
    pub fn detail(&self) -> String {
        self.error.detail()
    }
}

/// Outcome of a deployment run.
#[derive(Debug, Default)]
pub struct DeploymentReport {
    /// Index names found before deletion, in service order.
    pub initial_indexes: Vec<String>,
    pub deleted: Vec<String>,
    /// Display names of the definition files that were created.
    pub created: Vec<String>,
    pub failures: Vec<ItemFailure>,
    /// Result of the confirmation list; empty if that call failed.
    pub final_indexes: Vec<String>,
    pub confirmation_error: Option<String>,
    pub pauses: u32,
    /// Set when a failure stopped the run under `FailFast`.
    pub aborted: bool,
}

impl DeploymentReport {
    pub fn has_failures(&self) -> bool {
        !self.failures.is_empty()
    }

    /// Whether the run should be treated as failed under `policy`.
    pub fn is_failure(&self, policy: FailurePolicy) -> bool {
        policy.fails_run() && self.has_failures()
    }

    fn record(&mut self, stage: Stage, item: String, error: ClientError, policy: FailurePolicy) {
        error!(
            stage = %stage,
            item = %item,
            status = ?error.status(),
            transport = error.is_transport(),
            error = %error.detail(),
            "Index operation failed"
        );
        self.failures.push(ItemFailure { stage, item, error });
        if policy == FailurePolicy::FailFast {
            warn!("Stopping after first failure");
            self.aborted = true;
        }
    }
}

/// Redeploy every index definition under `config.index_folder`.
pub async fn deploy(client: &SearchClient, config: &DeployConfig) -> Result<DeploymentReport> {
    let files = discover_index_files(&config.index_folder)?;
    info!(
        folder = %config.index_folder.display(),
        files = files.len(),
        "Discovered index definitions"
    );

    let mut limiter = RateLimiter::from_config(&config.throttle);
    let policy = config.failure_policy;
    let mut report = DeploymentReport::default();

    limiter.acquire().await;
    report.initial_indexes = client.list_indexes().await?;
    info!(count = report.initial_indexes.len(), "Listed existing indexes");

    let existing = report.initial_indexes.clone();
    delete_all(client, &existing, &mut limiter, policy, &mut report).await;

    if !report.aborted {
        create_all(client, &files, &mut limiter, policy, &mut report).await;
    }

    limiter.acquire().await;
    match client.list_indexes().await {
        Ok(names) => {
            info!(count = names.len(), "Indexes on service after deployment");
            report.final_indexes = names;
        }
        Err(e) => {
            error!(error = %e.detail(), "Failed to list indexes after deployment");
            report.confirmation_error = Some(e.detail());
        }
    }

    report.pauses = limiter.pauses();
    Ok(report)
}

async fn delete_all(
    client: &SearchClient,
    names: &[String],
    limiter: &mut RateLimiter,
    policy: FailurePolicy,
    report: &mut DeploymentReport,
) {
    for name in names {
        limiter.acquire().await;
        match client.delete_index(name).await {
            Ok(()) => {
                info!(index = %name, "Deleted index");
                report.deleted.push(name.clone());
            }
            Err(e) => {
                report.record(Stage::Delete, name.clone(), e, policy);
                if report.aborted {
                    return;
                }
            }
        }
    }
}

async fn create_all(
    client: &SearchClient,
    files: &[PathBuf],
    limiter: &mut RateLimiter,
    policy: FailurePolicy,
    report: &mut DeploymentReport,
) {
    for path in files {
        limiter.acquire().await;

        let result = match IndexFile::load(path) {
            Ok(file) => {
                debug!(index = %file.name, path = %file.path.display(), "Creating index");
                client
                    .create_index(file.content)
                    .await
                    .map(|()| file.name)
            }
            Err(e) => Err(e),
        };

        match result {
            Ok(name) => {
                info!(index = %name, "Created index");
                report.created.push(name);
            }
            Err(e) => {
                report.record(Stage::Create, path.display().to_string(), e, policy);
                if report.aborted {
                    return;
                }
            }
        }
    }
}
