use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::KindError;

/// Resolution strategy for a sourced value.
///
/// The set is closed: anything other than the three wire names is a
/// configuration error caught before validation or resolution runs.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceKind {
    /// The value is used as-is, no transformation.
    #[serde(rename = "string")]
    Literal,
    /// The value is a path whose UTF-8 contents are read.
    File,
    /// The value is a shell command whose output is captured.
    Command,
}

impl SourceKind {
    /// Wire name of this kind (`string`, `file`, or `command`).
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Literal => "string",
            Self::File => "file",
            Self::Command => "command",
        }
    }
}

impl fmt::Display for SourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SourceKind {
    type Err = KindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "string" => Ok(Self::Literal),
            "file" => Ok(Self::File),
            "command" => Ok(Self::Command),
            other => Err(KindError::Unknown(other.to_string())),
        }
    }
}

/// One comparison input: the raw caller-supplied value plus how to resolve it.
///
/// Immutable once constructed. Two instances exist per invocation, one per
/// [`Role`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceSpec {
    /// Literal text, a filesystem path, or a shell command, per `kind`.
    pub value: String,
    /// How `value` is resolved into its final string form.
    pub kind: SourceKind,
}

impl SourceSpec {
    /// Create a spec from a value and kind.
    pub fn new(value: impl Into<String>, kind: SourceKind) -> Self {
        Self {
            value: value.into(),
            kind,
        }
    }

    /// A literal spec: resolves to the value unchanged.
    pub fn literal(value: impl Into<String>) -> Self {
        Self::new(value, SourceKind::Literal)
    }

    /// A file spec: resolves to the decoded contents at the path.
    pub fn file(path: impl Into<String>) -> Self {
        Self::new(path, SourceKind::File)
    }

    /// A command spec: resolves to the captured output of the command.
    pub fn command(command: impl Into<String>) -> Self {
        Self::new(command, SourceKind::Command)
    }
}

/// Which side of the comparison a spec belongs to.
///
/// Carried through validation and resolution purely for error-message
/// attribution; the rules are identical for both roles.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Role {
    Source,
    Target,
}

impl Role {
    /// Lowercase display name (`source` or `target`).
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Source => "source",
            Self::Target => "target",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
