use thiserror::Error;

/// Errors produced when parsing a source kind from its wire name.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum KindError {
    /// The kind name is not one of `string`, `file`, `command`.
    #[error("unknown source kind '{0}' (expected 'string', 'file', or 'command')")]
    Unknown(String),
}
