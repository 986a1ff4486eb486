//! Error types and handling for podstatic
//!
//! Uses `thiserror` for error definitions and `miette` for pretty diagnostics.
//!
//! The patching core never fails; every variant here belongs to the wrapper
//! that reads configuration and moves the Podfile to and from disk:
//! - [`config`]: Configuration errors
//! - [`fs`]: File system errors

pub mod config;
pub mod fs;


use miette::Diagnostic;
use thiserror::Error;

/// Main error type for podstatic operations
#[derive(Error, Diagnostic, Debug)]
pub enum PodstaticError {
    // Configuration errors
    #[error("Configuration file not found: {path}")]
    #[diagnostic(
        code(podstatic::config::not_found),
        help("Pass an existing file with --config, or omit it to use ./podstatic.yaml")
    )]
    ConfigNotFound { path: String },

    #[error("Failed to parse configuration file: {path}: {reason}")]
    #[diagnostic(code(podstatic::config::parse_failed))]
    ConfigParseFailed { path: String, reason: String },

    #[error("Invalid configuration: {message}")]
    #[diagnostic(code(podstatic::config::invalid))]
    ConfigInvalid { message: String },

    // File system errors
    #[error("Failed to read file: {path}: {reason}")]
    #[diagnostic(code(podstatic::fs::read_failed))]
    FileReadFailed { path: String, reason: String },

    #[error("Failed to write file: {path}: {reason}")]
    #[diagnostic(
        code(podstatic::fs::write_failed),
        help("The Podfile was left unchanged")
    )]
    FileWriteFailed { path: String, reason: String },

    #[error("IO error: {message}")]
    #[diagnostic(code(podstatic::fs::io_error))]
    IoError { message: String },
}

impl From<std::io::Error> for PodstaticError {
    fn from(err: std::io::Error) -> Self {
        PodstaticError::IoError {
            message: err.to_string(),
        }
    }
}

impl From<serde_yaml::Error> for PodstaticError {
    fn from(err: serde_yaml::Error) -> Self {
        PodstaticError::ConfigParseFailed {
            path: "unknown".to_string(),
            reason: err.to_string(),
        }
    }
}

impl From<serde_json::Error> for PodstaticError {
    fn from(err: serde_json::Error) -> Self {
        PodstaticError::ConfigParseFailed {
            path: "unknown".to_string(),
            reason: err.to_string(),
        }
    }
}

/// Result type alias using miette for error handling
pub type Result<T> = miette::Result<T, PodstaticError>;
