//! Pre-resolution validation of comparison specs.

use std::fs::{self, File};
use std::io::ErrorKind;
use std::path::Path;

use drift_types::{Role, SourceKind, SourceSpec};

use crate::error::{CheckError, CheckResult};

/// Check kind-appropriate preconditions before any resolution happens.
///
/// Only file-kind specs carry preconditions: the path must exist, be
/// readable, and not be a directory, checked in that order (permissions and
/// type of a nonexistent path cannot be probed). Literal and command kinds
/// pass vacuously. The first failure aborts the whole invocation.
///
/// Validation and the actual read are separate syscalls, so a pass here can
/// still race a concurrent unlink or chmod; that gap is accepted.
pub fn validate(spec: &SourceSpec, role: Role) -> CheckResult<()> {
    match spec.kind {
        SourceKind::Literal | SourceKind::Command => Ok(()),
        SourceKind::File => validate_file(&spec.value, role),
    }
}

fn validate_file(raw: &str, role: Role) -> CheckResult<()> {
    let path = Path::new(raw);

    let metadata = match fs::metadata(path) {
        Ok(metadata) => metadata,
        Err(err) if err.kind() == ErrorKind::NotFound => {
            return Err(CheckError::NotFound {
                role,
                path: raw.to_string(),
            });
        }
        Err(err) => {
            return Err(CheckError::Io {
                role,
                path: raw.to_string(),
                source: err,
            });
        }
    };

    // Readability is probed with a plain open. Directories open fine on
    // Unix, so the directory check still runs after this one.
    if let Err(err) = File::open(path) {
        return match err.kind() {
            ErrorKind::PermissionDenied => Err(CheckError::NotReadable {
                role,
                path: raw.to_string(),
            }),
            _ => Err(CheckError::Io {
                role,
                path: raw.to_string(),
                source: err,
            }),
        };
    }

    if metadata.is_dir() {
        return Err(CheckError::IsDirectory {
            role,
            path: raw.to_string(),
        });
    }

    Ok(())
}
