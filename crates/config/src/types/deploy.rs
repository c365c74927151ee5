//! Deployment settings: index folder, throttling, and failure policy.

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use crate::constants::{DEFAULT_MAX_CALL_COUNT, DEFAULT_PAUSE_SECS};

/// Fixed-window throttling settings for index calls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThrottleConfig {
    /// Number of calls allowed before a pause. Always at least 1.
    pub max_call_count: u32,
    /// How long to sleep once the threshold is reached.
    pub pause: Duration,
}

impl Default for ThrottleConfig {
    fn default() -> Self {
        Self {
            max_call_count: DEFAULT_MAX_CALL_COUNT,
            pause: Duration::from_secs(DEFAULT_PAUSE_SECS),
        }
    }
}

/// What a deployment does when a single delete or create fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FailurePolicy {
    /// Log the failure and keep going; the run still succeeds.
    #[default]
    Continue,
    /// Keep going, but report the run as failed once every item was attempted.
    FailAtEnd,
    /// Stop at the first failed item.
    FailFast,
}

impl FailurePolicy {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Continue => "continue",
            Self::FailAtEnd => "fail-at-end",
            Self::FailFast => "fail-fast",
        }
    }

    /// Whether item failures make the overall run unsuccessful.
    pub fn fails_run(self) -> bool {
        !matches!(self, Self::Continue)
    }
}

impl fmt::Display for FailurePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FailurePolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "continue" => Ok(Self::Continue),
            "fail-at-end" | "fail_at_end" => Ok(Self::FailAtEnd),
            "fail-fast" | "fail_fast" => Ok(Self::FailFast),
            other => Err(format!(
                "unknown failure policy '{}' (expected continue, fail-at-end or fail-fast)",
                other
            )),
        }
    }
}

/// Settings that only the `deploy` command needs.
#[derive(Debug, Clone)]
pub struct DeployConfig {
    /// Folder scanned recursively for index definition files.
    pub index_folder: PathBuf,
    pub throttle: ThrottleConfig,
    pub failure_policy: FailurePolicy,
}
