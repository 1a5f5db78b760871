//! appforge.yaml lookup and validation errors

use super::AppForgeError;

/// `--config` (or `APPFORGE_CONFIG`) named a file that does not exist
pub fn not_found(path: impl Into<String>) -> AppForgeError {
    AppForgeError::ConfigNotFound { path: path.into() }
}

/// The file is not valid YAML or has fields appforge does not know
pub fn parse_failed(path: impl Into<String>, reason: impl Into<String>) -> AppForgeError {
    AppForgeError::ConfigParseFailed {
        path: path.into(),
        reason: reason.into(),
    }
}

/// Parsed fine but a value is unusable, e.g. a blank title
pub fn invalid(message: impl Into<String>) -> AppForgeError {
    AppForgeError::ConfigInvalid {
        message: message.into(),
    }
}

pub fn read_failed(path: impl Into<String>, reason: impl Into<String>) -> AppForgeError {
    AppForgeError::ConfigReadFailed {
        path: path.into(),
        reason: reason.into(),
    }
}
