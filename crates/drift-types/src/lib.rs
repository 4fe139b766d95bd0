//! Foundation types for drift.
//!
//! This crate provides the types shared by every other drift crate: the
//! description of a comparison input and the structured outcome handed back
//! to the host runtime.
//!
//! # Key Types
//!
//! - [`SourceKind`] — Resolution strategy for a sourced value (literal, file, command)
//! - [`SourceSpec`] — One comparison input: raw value plus its kind
//! - [`Role`] — Which side of the comparison a spec belongs to
//! - [`CheckOutcome`] — Final artifact of a check invocation
//! - [`DiffPair`] — The two fully resolved values

pub mod error;
pub mod outcome;
pub mod spec;

pub use error::KindError;
pub use outcome::{CheckOutcome, DiffPair};
pub use spec::{Role, SourceKind, SourceSpec};
