//! Output formatters for CLI commands.
//!
//! Responsibilities:
//! - Render index lists and deployment reports as tables or JSON.
//!
//! Does NOT handle:
//! - Direct printing to stdout (returns formatted strings).
//! - Logging progress (that goes through `tracing` on stderr).
//!
//! Invariants:
//! - Tables use tab-separation for consistent alignment in standard terminals.
//! - JSON output is always valid, including for empty lists.

use anyhow::Result;
use serde::Serialize;

use azsearch_client::DeploymentReport;

use crate::args::OutputFormat;

/// Trait for formatting command output.
pub trait Formatter {
    fn format_indexes(&self, names: &[String]) -> Result<String>;

    fn format_report(&self, report: &DeploymentReport) -> Result<String>;
}

pub fn get_formatter(format: OutputFormat) -> Box<dyn Formatter> {
    match format {
        OutputFormat::Table => Box::new(TableFormatter),
        OutputFormat::Json => Box::new(JsonFormatter),
    }
}

/// Tab-separated human output.
pub struct TableFormatter;

impl Formatter for TableFormatter {
    fn format_indexes(&self, names: &[String]) -> Result<String> {
        if names.is_empty() {
            return Ok("No indexes found.\n".to_string());
        }

        let mut output = String::from("Name\n");
        for name in names {
            output.push_str(name);
            output.push('\n');
        }
        Ok(output)
    }

    fn format_report(&self, report: &DeploymentReport) -> Result<String> {
        let mut output = format!(
            "Deleted: {}/{}\tCreated: {}\tFailed: {}\tPauses: {}\n",
            report.deleted.len(),
            report.initial_indexes.len(),
            report.created.len(),
            report.failures.len(),
            report.pauses
        );

        if !report.failures.is_empty() {
            output.push_str("\nStage\tItem\tError\n");
            for failure in &report.failures {
                output.push_str(&format!(
                    "{}\t{}\t{}\n",
                    failure.stage,
                    failure.item,
                    failure.detail()
                ));
            }
        }
        if report.aborted {
            output.push_str("\nStopped after the first failure.\n");
        }

        output.push('\n');
        match &report.confirmation_error {
            Some(error) => output.push_str(&format!("Could not list indexes: {}\n", error)),
            None => output.push_str(&self.format_indexes(&report.final_indexes)?),
        }
        Ok(output)
    }
}

/// Pretty-printed JSON output.
pub struct JsonFormatter;

#[derive(Serialize)]
struct FailureView<'a> {
    stage: String,
    item: &'a str,
    error: String,
}

#[derive(Serialize)]
struct ReportView<'a> {
    initial_indexes: &'a [String],
    deleted: &'a [String],
    created: &'a [String],
    failures: Vec<FailureView<'a>>,
    final_indexes: &'a [String],
    confirmation_error: Option<&'a str>,
    pauses: u32,
    aborted: bool,
}

impl Formatter for JsonFormatter {
    fn format_indexes(&self, names: &[String]) -> Result<String> {
        Ok(serde_json::to_string_pretty(names)? + "\n")
    }

    fn format_report(&self, report: &DeploymentReport) -> Result<String> {
        let view = ReportView {
            initial_indexes: &report.initial_indexes,
            deleted: &report.deleted,
            created: &report.created,
            failures: report
                .failures
                .iter()
                .map(|f| FailureView {
                    stage: f.stage.to_string(),
                    item: &f.item,
                    error: f.detail(),
                })
                .collect(),
            final_indexes: &report.final_indexes,
            confirmation_error: report.confirmation_error.as_deref(),
            pauses: report.pauses,
            aborted: report.aborted,
        };
        Ok(serde_json::to_string_pretty(&view)? + "\n")
    }
}
