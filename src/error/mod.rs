//! Error types and handling for appforge
//!
//! Uses `thiserror` for error definitions and `miette` for pretty diagnostics.
//!
//! This module is organized into sub-modules by error domain:
//! - [`template`]: Template lookup and generation errors
//! - [`config`]: Configuration errors
//! - [`fs`]: File system errors
//! - [`replay`]: Event log errors

pub mod config;
pub mod fs;
pub mod replay;
pub mod template;

pub use config::{
    invalid as config_invalid, not_found as config_not_found, parse_failed as config_parse_failed,
    read_failed as config_read_failed,
};
pub use fs::{io_error, read_failed as file_read_failed, write_failed as file_write_failed};
pub use replay::parse_failed as event_log_parse_failed;
pub use template::{generation_failed as template_generation_failed, not_found as template_not_found};

use miette::Diagnostic;
use thiserror::Error;

/// Main error type for appforge operations
#[derive(Error, Diagnostic, Debug)]
pub enum AppForgeError {
    // Template errors
    #[error("Template '{name}' not found")]
    #[diagnostic(
        code(appforge::template::not_found),
        help("Run 'appforge list' to see the available templates")
    )]
    TemplateNotFound { name: String },

    #[error("Template '{template}' failed to generate: {reason}")]
    #[diagnostic(code(appforge::template::generation_failed))]
    TemplateGenerationFailed { template: String, reason: String },

    // Configuration errors
    #[error("Configuration file not found: {path}")]
    #[diagnostic(
        code(appforge::config::not_found),
        help("Pass an existing file with --config or remove the flag to use defaults")
    )]
    ConfigNotFound { path: String },

    #[error("Failed to parse configuration file: {path}: {reason}")]
    #[diagnostic(code(appforge::config::parse_failed))]
    ConfigParseFailed { path: String, reason: String },

    #[error("Failed to read configuration file: {path}")]
    #[diagnostic(code(appforge::config::read_failed))]
    ConfigReadFailed { path: String, reason: String },

    #[error("Invalid configuration: {message}")]
    #[diagnostic(code(appforge::config::invalid))]
    ConfigInvalid { message: String },

    // Event log errors
    #[error("Failed to parse event log: {path}: {reason}")]
    #[diagnostic(
        code(appforge::replay::parse_failed),
        help("An event log is a YAML list of events such as 'idea: todo list' or 'action: random'")
    )]
    EventLogParseFailed { path: String, reason: String },

    // File system errors
    #[error("Failed to read file: {path}")]
    #[diagnostic(code(appforge::fs::read_failed))]
    FileReadFailed { path: String, reason: String },

    #[error("Failed to write file: {path}: {reason}")]
    #[diagnostic(code(appforge::fs::write_failed))]
    FileWriteFailed { path: String, reason: String },

    #[error("IO error: {message}")]
    #[diagnostic(code(appforge::fs::io_error))]
    IoError { message: String },

    // CLI errors
    #[error("Unsupported shell: {shell}")]
    #[diagnostic(
        code(appforge::cli::unsupported_shell),
        help("Supported shells: bash, elvish, fish, powershell, zsh")
    )]
    UnsupportedShell { shell: String },

    // Interactive prompt errors
    #[error("Prompt failed: {message}")]
    #[diagnostic(code(appforge::ui::prompt_failed))]
    PromptFailed { message: String },
}

impl From<std::io::Error> for AppForgeError {
    fn from(err: std::io::Error) -> Self {
        AppForgeError::IoError {
            message: err.to_string(),
        }
    }
}

impl From<serde_yaml::Error> for AppForgeError {
    fn from(err: serde_yaml::Error) -> Self {
        AppForgeError::ConfigParseFailed {
            path: "unknown".to_string(),
            reason: err.to_string(),
        }
    }
}

impl From<serde_json::Error> for AppForgeError {
    fn from(err: serde_json::Error) -> Self {
        AppForgeError::IoError {
            message: format!("JSON serialization failed: {err}"),
        }
    }
}

impl From<inquire::InquireError> for AppForgeError {
    fn from(err: inquire::InquireError) -> Self {
        AppForgeError::PromptFailed {
            message: err.to_string(),
        }
    }
}

/// Result type alias using miette for error handling
pub type Result<T> = miette::Result<T, AppForgeError>;
