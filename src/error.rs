use std::io;
use thiserror::Error;

/// Error types for the configuration builder.
///
/// Form input never produces an error: bad or empty values fall back to
/// defaults. Errors only come from the edges of the system:
/// - IO: writing `config.json` or loading a previous one
/// - Json: encoding or decoding configuration documents
/// - Clipboard: the platform clipboard utility failing
/// - Lookup: unknown field or copy target names typed by the user

/// Represents all possible errors that can occur in the application.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Clipboard error: {0}")]
    Clipboard(String),

    #[error("Unknown field: {0}")]
    UnknownField(String),

    #[error("Unknown copy target: {0}")]
    UnknownTarget(String),

    #[error("{0}")]
    Custom(String),
}

impl From<&str> for AppError {
    fn from(error: &str) -> Self {
        AppError::Custom(error.to_string())
    }
}

impl From<String> for AppError {
    fn from(error: String) -> Self {
        AppError::Custom(error)
    }
}

impl From<tempfile::PersistError> for AppError {
    fn from(error: tempfile::PersistError) -> Self {
        AppError::Io(error.error)
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
