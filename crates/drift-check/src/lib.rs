//! Sourced-value comparison pipeline for configuration drift checks.
//!
//! Resolves two independently sourced textual values -- literal strings,
//! file contents, or captured shell-command output -- and reports whether
//! they differ. The pipeline backs an idempotent "check" step in an
//! orchestration engine, so it supports a dry-run mode that refuses to
//! execute side-effecting command sources and short-circuits to a skipped
//! outcome instead.
//!
//! # Pipeline
//!
//! [`run_check`] wires the stages together, fail-fast and fully synchronous:
//!
//! 1. [`validate`] -- kind-appropriate preconditions for both specs, source
//!    first, before anything resolves
//! 2. [`resolve`] -- source fully, then target; command-kind specs are gated
//!    by the dry-run flag at whichever point they are reached
//! 3. [`compare`] -- exact string equality, no normalization
//!
//! # Design Rules
//!
//! 1. Every failure is terminal: no partial results, no aggregation, no retry.
//! 2. Errors name the role (`source`/`target`) that produced them.
//! 3. Command execution is the only side effect; file reads are read-only,
//!    literals are pure.
//! 4. There is no timeout around command execution: a hung child hangs the
//!    invocation until the host environment kills it.

pub mod check;
pub mod compare;
pub mod error;
pub mod exec;
pub mod resolve;
pub mod validate;

pub use check::{run_check, CheckRequest};
pub use compare::compare;
pub use error::{CheckError, CheckResult};
pub use exec::{run_shell, ExecConfig, ExecutionResult};
pub use resolve::{resolve, Resolution};
pub use validate::validate;

// Re-export foundation types at crate root for ergonomic imports.
pub use drift_types::{CheckOutcome, DiffPair, Role, SourceKind, SourceSpec};
