//! Template lookup and generation errors

use super::AppForgeError;

/// Creates a template not found error
pub fn not_found(name: impl Into<String>) -> AppForgeError {
    AppForgeError::TemplateNotFound { name: name.into() }
}

/// Creates a template generation failed error
pub fn generation_failed(template: impl Into<String>, reason: impl Into<String>) -> AppForgeError {
    AppForgeError::TemplateGenerationFailed {
        template: template.into(),
        reason: reason.into(),
    }
}
