use drift_types::Role;

/// Errors that can occur while validating or resolving a comparison spec.
///
/// Every variant is terminal for the invocation and names the role that
/// produced it.
#[derive(Debug, thiserror::Error)]
pub enum CheckError {
    /// A file-kind path does not exist.
    #[error("{role} {path} not found")]
    NotFound { role: Role, path: String },

    /// A file-kind path exists but the process lacks read permission.
    #[error("{role} {path} not readable")]
    NotReadable { role: Role, path: String },

    /// A file-kind path refers to a directory; recursive diff is unsupported.
    #[error("diff does not support recursive diff of directory: {path}")]
    IsDirectory { role: Role, path: String },

    /// File contents could not be decoded as UTF-8.
    #[error("{role} {path} is not valid UTF-8: {source}")]
    Decode {
        role: Role,
        path: String,
        source: std::string::FromUtf8Error,
    },

    /// A command-kind spec exited non-zero; the captured output is attached
    /// for diagnosis.
    #[error("{role} command failed: {output}")]
    CommandFailed {
        role: Role,
        exit_code: i32,
        output: String,
    },

    /// The child process could not be spawned or waited on.
    #[error("{role} command could not be executed: {source}")]
    Exec { role: Role, source: std::io::Error },

    /// Unexpected I/O failure while probing or reading a file-kind spec.
    #[error("{role} {path}: {source}")]
    Io {
        role: Role,
        path: String,
        source: std::io::Error,
    },
}

impl CheckError {
    /// The role whose spec produced this error.
    pub fn role(&self) -> Role {
        match self {
            Self::NotFound { role, .. }
            | Self::NotReadable { role, .. }
            | Self::IsDirectory { role, .. }
            | Self::Decode { role, .. }
            | Self::CommandFailed { role, .. }
            | Self::Exec { role, .. }
            | Self::Io { role, .. } => *role,
        }
    }
}

/// Result alias for check operations.
pub type CheckResult<T> = Result<T, CheckError>;
