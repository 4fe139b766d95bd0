//! The check pipeline: validate both specs, resolve both, compare.

use drift_types::{CheckOutcome, Role, SourceSpec};
use tracing::debug;

use crate::compare::compare;
use crate::error::CheckResult;
use crate::exec::ExecConfig;
use crate::resolve::{resolve, Resolution};
use crate::validate::validate;

/// One full comparison request: two specs plus the host's dry-run flag.
#[derive(Clone, Debug)]
pub struct CheckRequest {
    pub source: SourceSpec,
    pub target: SourceSpec,
    /// Supplied by the host orchestration runtime, not by the caller's
    /// explicit arguments. When set, command-kind specs must not execute.
    pub dry_run: bool,
}

impl CheckRequest {
    /// A request with dry-run off.
    pub fn new(source: SourceSpec, target: SourceSpec) -> Self {
        Self {
            source,
            target,
            dry_run: false,
        }
    }
}

/// Run the full pipeline for one invocation.
///
/// Both specs are validated before anything resolves, source first; the
/// source then resolves fully before the target is examined at all. A
/// command-kind spec under dry-run short-circuits to a skipped outcome at
/// whichever point it is reached, so a command source skips before the
/// target resolves, and a command target skips after the source resolved
/// (that resolution is discarded).
pub fn run_check(request: &CheckRequest, exec: &ExecConfig) -> CheckResult<CheckOutcome> {
    validate(&request.source, Role::Source)?;
    validate(&request.target, Role::Target)?;

    let source = match resolve(&request.source, Role::Source, request.dry_run, exec)? {
        Resolution::Value(value) => value,
        Resolution::Skipped(msg) => return Ok(CheckOutcome::skipped(msg)),
    };
    let target = match resolve(&request.target, Role::Target, request.dry_run, exec)? {
        Resolution::Value(value) => value,
        Resolution::Skipped(msg) => return Ok(CheckOutcome::skipped(msg)),
    };

    let outcome = compare(source, target);
    debug!(changed = outcome.is_changed(), "comparison complete");
    Ok(outcome)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CheckError;
    use drift_types::DiffPair;
    use std::fs;

    fn exec() -> ExecConfig {
        ExecConfig::default()
    }

    #[test]
    fn equal_literals_are_unchanged() {
        let request = CheckRequest::new(SourceSpec::literal("abc"), SourceSpec::literal("abc"));
        let outcome = run_check(&request, &exec()).unwrap();
        assert_eq!(
            outcome,
            CheckOutcome::Compared {
                changed: false,
                diff: DiffPair {
                    source: "abc".to_string(),
                    target: "abc".to_string(),
                },
            }
        );
    }

    #[test]
    fn differing_literals_are_changed() {
        let request = CheckRequest::new(SourceSpec::literal("abc"), SourceSpec::literal("xyz"));
        let outcome = run_check(&request, &exec()).unwrap();
        assert!(outcome.is_changed());
    }

    #[test]
    fn file_against_matching_literal_is_unchanged() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("value.txt");
        fs::write(&path, "foo\n").unwrap();

        let request = CheckRequest::new(
            SourceSpec::file(path.to_string_lossy()),
            SourceSpec::literal("foo\n"),
        );
        let outcome = run_check(&request, &exec()).unwrap();
        assert!(!outcome.is_changed());
    }

    #[test]
    fn command_against_literal() {
        let request = CheckRequest::new(
            SourceSpec::command("echo hello"),
            SourceSpec::literal("hello"),
        );
        let outcome = run_check(&request, &exec()).unwrap();
        assert!(!outcome.is_changed());
    }

    #[test]
    fn validation_runs_before_any_resolution() {
        // The source command would resolve fine; the target path must stop
        // the invocation before that happens.
        let request = CheckRequest::new(
            SourceSpec::command("echo hi"),
            SourceSpec::file("/no/such/path"),
        );
        let err = run_check(&request, &exec()).unwrap_err();
        assert!(matches!(err, CheckError::NotFound { role: Role::Target, .. }));
    }

    #[test]
    fn dry_run_command_source_skips_before_target() {
        let mut request = CheckRequest::new(
            SourceSpec::command("echo hi"),
            // A command target that would fail if it ever ran.
            SourceSpec::command("exit 9"),
        );
        request.dry_run = true;

        let outcome = run_check(&request, &exec()).unwrap();
        assert_eq!(
            outcome,
            CheckOutcome::skipped(
                "check mode is not supported when the source kind is 'command'"
            )
        );
    }

    #[test]
    fn dry_run_command_target_skips_after_source_resolves() {
        let mut request = CheckRequest::new(
            SourceSpec::literal("resolved but discarded"),
            SourceSpec::command("echo hi"),
        );
        request.dry_run = true;

        let outcome = run_check(&request, &exec()).unwrap();
        assert_eq!(
            outcome,
            CheckOutcome::skipped(
                "check mode is not supported when the target kind is 'command'"
            )
        );
    }

    #[test]
    fn dry_run_without_commands_compares_normally() {
        let mut request =
            CheckRequest::new(SourceSpec::literal("a"), SourceSpec::literal("b"));
        request.dry_run = true;

        let outcome = run_check(&request, &exec()).unwrap();
        assert!(outcome.is_changed());
    }

    #[test]
    fn failed_source_command_aborts_before_target() {
        let request = CheckRequest::new(
            SourceSpec::command("echo bad; exit 2"),
            SourceSpec::literal("never compared"),
        );
        let err = run_check(&request, &exec()).unwrap_err();
        match err {
            CheckError::CommandFailed {
                role,
                exit_code,
                output,
            } => {
                assert_eq!(role, Role::Source);
                assert_eq!(exit_code, 2);
                assert_eq!(output, "bad");
            }
            other => panic!("expected CommandFailed, got {other:?}"),
        }
    }

    #[test]
    fn command_output_comparison_ignores_trailing_newline_symmetrically() {
        // Both sides resolve through the same line-joining, so two commands
        // printing the same text always compare equal.
        let request = CheckRequest::new(
            SourceSpec::command("echo same"),
            SourceSpec::command("printf 'same\\n'"),
        );
        let outcome = run_check(&request, &exec()).unwrap();
        assert!(!outcome.is_changed());
    }
}
