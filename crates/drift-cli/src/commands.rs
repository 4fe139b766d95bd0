use std::path::Path;

use anyhow::Context;
use colored::Colorize;
use drift_check::{run_check, CheckError, CheckOutcome, CheckRequest, ExecConfig, SourceSpec};
use serde::Serialize;
use tracing::debug;

use crate::cli::{Cli, OutputFormat};

/// Terminal failure report, mirroring the skip/compare wire shapes.
#[derive(Serialize)]
struct FailureReport {
    failed: bool,
    msg: String,
}

pub fn run_command(cli: Cli) -> anyhow::Result<()> {
    let exec = load_exec_config(cli.exec_config.as_deref())?;
    let request = CheckRequest {
        source: SourceSpec::new(cli.source, cli.source_kind.into()),
        target: SourceSpec::new(cli.target, cli.target_kind.into()),
        dry_run: cli.check,
    };

    match run_check(&request, &exec) {
        Ok(outcome) => report_outcome(&cli.format, &outcome),
        Err(err) => report_failure(&cli.format, err),
    }
}

fn load_exec_config(path: Option<&Path>) -> anyhow::Result<ExecConfig> {
    let Some(path) = path else {
        return Ok(ExecConfig::default());
    };
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("cannot read exec config {}", path.display()))?;
    let config: ExecConfig = toml::from_str(&raw)
        .with_context(|| format!("malformed exec config {}", path.display()))?;
    debug!(shell = %config.shell, "loaded exec config");
    Ok(config)
}

fn report_outcome(format: &OutputFormat, outcome: &CheckOutcome) -> anyhow::Result<()> {
    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(outcome)?);
        }
        OutputFormat::Text => match outcome {
            CheckOutcome::Compared {
                changed: true,
                diff,
            } => {
                println!("{} values differ", "✗".red().bold());
                println!("  source: {}", diff.source);
                println!("  target: {}", diff.target);
            }
            CheckOutcome::Compared { .. } => {
                println!("{} values match", "✓".green().bold());
            }
            CheckOutcome::Skipped { msg, .. } => {
                println!("{} {}", "skipped:".yellow().bold(), msg);
            }
        },
    }
    Ok(())
}

fn report_failure(format: &OutputFormat, err: CheckError) -> anyhow::Result<()> {
    match format {
        OutputFormat::Json => {
            let report = FailureReport {
                failed: true,
                msg: err.to_string(),
            };
            println!("{}", serde_json::to_string_pretty(&report)?);
            std::process::exit(1);
        }
        OutputFormat::Text => Err(err.into()),
    }
}
