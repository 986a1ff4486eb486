//! File system errors

use std::path::Path;

use super::PodstaticError;

/// Creates a file read failed error
pub fn read_failed(path: &Path, reason: impl ToString) -> PodstaticError {
    PodstaticError::FileReadFailed {
        path: path.display().to_string(),
        reason: reason.to_string(),
    }
}

/// Creates a file write failed error
pub fn write_failed(path: &Path, reason: impl ToString) -> PodstaticError {
    PodstaticError::FileWriteFailed {
        path: path.display().to_string(),
        reason: reason.to_string(),
    }
}
