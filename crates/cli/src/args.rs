//! CLI argument definitions and parsing.
//!
//! Responsibilities:
//! - Define the CLI structure using clap derive macros.
//! - Parse command-line arguments and environment variables.
//!
//! Non-responsibilities:
//! - Does not execute commands (see `dispatch` module).
//! - Does not validate configuration (see `config_context` module).

use clap::{ArgGroup, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use azsearch_config::FailurePolicy;

#[derive(Parser)]
#[command(name = "azsearch-deploy")]
#[command(about = "Replace every index on a search service with the definitions in a folder", long_about = None)]
#[command(version)]
#[command(group(ArgGroup::new("credentials").args(["api_key", "resource_group"]).multiple(false)))]
#[command(
    after_help = "Examples:\n  azsearch-deploy --service-name my-svc --api-key $AZSEARCH_API_KEY deploy --index-folder ./indexes\n  azsearch-deploy --service-name my-svc --resource-group rg-search --subscription-id $AZURE_SUBSCRIPTION_ID deploy --index-folder ./indexes\n  azsearch-deploy --service-name my-svc --api-key $AZSEARCH_API_KEY list --output json\n"
)]
pub struct Cli {
    /// Name of the search service
    #[arg(short, long, global = true, env = "AZSEARCH_SERVICE_NAME")]
    pub service_name: Option<String>,

    /// Admin API key of the search service
    #[arg(short = 'k', long, global = true, env = "AZSEARCH_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    /// Resource group holding the service; the admin key is looked up through the management API
    #[arg(short, long, global = true, env = "AZSEARCH_RESOURCE_GROUP")]
    pub resource_group: Option<String>,

    /// Azure subscription id (required with --resource-group)
    #[arg(long, global = true, env = "AZURE_SUBSCRIPTION_ID")]
    pub subscription_id: Option<String>,

    /// Bearer token for the management API (required with --resource-group)
    #[arg(long, global = true, env = "AZURE_ACCESS_TOKEN", hide_env_values = true)]
    pub management_token: Option<String>,

    /// REST API version sent with every index request
    #[arg(long, global = true, env = "AZSEARCH_API_VERSION")]
    pub api_version: Option<String>,

    /// Override the search endpoint (default: https://<service>.search.windows.net)
    #[arg(long, global = true, env = "AZSEARCH_ENDPOINT", value_name = "URL")]
    pub search_endpoint: Option<String>,

    /// Override the management endpoint (default: https://management.azure.com)
    #[arg(long, global = true, env = "AZURE_MANAGEMENT_ENDPOINT", value_name = "URL")]
    pub management_endpoint: Option<String>,

    /// Per-request timeout in seconds
    #[arg(long, global = true, env = "AZSEARCH_TIMEOUT")]
    pub timeout: Option<u64>,

    /// Output format for results
    #[arg(short, long, global = true, value_enum, default_value_t = OutputFormat::Table)]
    pub output: OutputFormat,

    /// Log line format on stderr (filter with RUST_LOG)
    #[arg(long, global = true, value_enum, env = "AZSEARCH_LOG_FORMAT", default_value_t = LogFormat::Text)]
    pub log_format: LogFormat,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Delete every index on the service, then create one per JSON file in the folder
    Deploy {
        /// Folder containing index definition files (searched recursively for *.json)
        #[arg(short, long, env = "AZSEARCH_INDEX_FOLDER", value_name = "DIR")]
        index_folder: Option<PathBuf>,

        /// Number of calls allowed before pausing
        #[arg(long, env = "AZSEARCH_MAX_CALL_COUNT")]
        max_call_count: Option<u32>,

        /// Length of each pause in seconds
        #[arg(long, env = "AZSEARCH_PAUSE_SECONDS")]
        pause_seconds: Option<u64>,

        /// How failed deletes and creates affect the run
        #[arg(long, value_enum, env = "AZSEARCH_FAILURE_POLICY")]
        failure_policy: Option<FailurePolicyArg>,
    },

    /// List the indexes currently on the service
    List,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Table,
    Json,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    Text,
    Json,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum FailurePolicyArg {
    /// Log failures and keep going; exit 0
    Continue,
    /// Run every item, exit non-zero if any failed
    FailAtEnd,
    /// Stop at the first failure
    FailFast,
}

impl From<FailurePolicyArg> for FailurePolicy {
    fn from(arg: FailurePolicyArg) -> Self {
        match arg {
            FailurePolicyArg::Continue => FailurePolicy::Continue,
            FailurePolicyArg::FailAtEnd => FailurePolicy::FailAtEnd,
            FailurePolicyArg::FailFast => FailurePolicy::FailFast,
        }
    }
}
