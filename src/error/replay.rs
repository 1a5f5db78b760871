//! Event log errors

use super::AppForgeError;

/// Creates an event log parse failed error
pub fn parse_failed(path: impl Into<String>, reason: impl Into<String>) -> AppForgeError {
    AppForgeError::EventLogParseFailed {
        path: path.into(),
        reason: reason.into(),
    }
}
