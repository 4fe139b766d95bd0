//! Spec resolution: literal passthrough, file contents, or captured command
//! output.

use std::fs;

use drift_types::{Role, SourceKind, SourceSpec};
use tracing::debug;

use crate::error::{CheckError, CheckResult};
use crate::exec::{self, ExecConfig};

/// What resolving a single spec produced.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Resolution {
    /// The spec resolved to its final string value.
    Value(String),
    /// A command-kind spec was gated off by dry-run mode. The notice explains
    /// why; the caller must short-circuit the whole invocation without
    /// resolving anything further.
    Skipped(String),
}

/// Resolve a validated spec into its final string value.
///
/// Command-kind specs are the only side-effecting case and the only case
/// `dry_run` affects: under dry-run no process is spawned and a skip notice
/// comes back instead of a value.
pub fn resolve(
    spec: &SourceSpec,
    role: Role,
    dry_run: bool,
    config: &ExecConfig,
) -> CheckResult<Resolution> {
    match spec.kind {
        SourceKind::Literal => Ok(Resolution::Value(spec.value.clone())),
        SourceKind::File => resolve_file(&spec.value, role).map(Resolution::Value),
        SourceKind::Command => resolve_command(&spec.value, role, dry_run, config),
    }
}

fn resolve_file(path: &str, role: Role) -> CheckResult<String> {
    debug!(%role, path, "reading file spec");
    let bytes = fs::read(path).map_err(|source| CheckError::Io {
        role,
        path: path.to_string(),
        source,
    })?;
    String::from_utf8(bytes).map_err(|source| CheckError::Decode {
        role,
        path: path.to_string(),
        source,
    })
}

fn resolve_command(
    command: &str,
    role: Role,
    dry_run: bool,
    config: &ExecConfig,
) -> CheckResult<Resolution> {
    if dry_run {
        debug!(%role, "dry-run: refusing to execute command spec");
        return Ok(Resolution::Skipped(format!(
            "check mode is not supported when the {role} kind is 'command'"
        )));
    }

    let result = exec::run_shell(config, command).map_err(|source| CheckError::Exec { role, source })?;
    if !result.success() {
        return Err(CheckError::CommandFailed {
            role,
            exit_code: result.exit_code,
            output: result.output,
        });
    }
    Ok(Resolution::Value(result.output))
}
